//! Shop location and contacts

use serde::Serialize;

pub const LATITUDE: f64 = 55.614831077219144;
pub const LONGITUDE: f64 = 37.48326799993517;

/// 店舗の所在地と連絡先
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopLocation {
    pub lat: f64,
    pub lon: f64,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub working_hours: &'static str,
}

impl ShopLocation {
    pub fn current() -> Self {
        Self {
            lat: LATITUDE,
            lon: LONGITUDE,
            address: "г. Москва, ул. Строителей, д. 1",
            phone: "+7 (999) 999-99-99",
            email: "info@stroystore.ru",
            working_hours: "Ежедневно с 9:00 до 21:00",
        }
    }
}

/// Deep links into the map services
#[derive(Debug, Clone, Serialize)]
pub struct MapLinks {
    #[serde(rename = "2gis")]
    pub two_gis: String,
    pub yandex: String,
    pub google: String,
}

impl MapLinks {
    pub fn for_coordinates(lat: f64, lon: f64) -> Self {
        Self {
            two_gis: format!("https://2gis.ru/moscow/firm/70000001032377759?m={lon}%2C{lat}%2F16"),
            yandex: format!("https://yandex.ru/maps/?pt={lon},{lat}&z=16&l=map"),
            google: format!("https://www.google.com/maps?q={lat},{lon}&z=16"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_put_coordinates_in_each_service_order() {
        let links = MapLinks::for_coordinates(55.5, 37.25);
        assert_eq!(
            links.two_gis,
            "https://2gis.ru/moscow/firm/70000001032377759?m=37.25%2C55.5%2F16"
        );
        assert_eq!(links.yandex, "https://yandex.ru/maps/?pt=37.25,55.5&z=16&l=map");
        assert_eq!(links.google, "https://www.google.com/maps?q=55.5,37.25&z=16");
    }

    #[test]
    fn test_location_serializes_camel_case() {
        let value = serde_json::to_value(ShopLocation::current()).unwrap();
        assert_eq!(value["workingHours"], "Ежедневно с 9:00 до 21:00");
        assert_eq!(value["lat"], LATITUDE);
    }
}
