//! Shop Router

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::info::{LATITUDE, LONGITUDE, MapLinks, ShopLocation};

/// `{success: true, data: ...}` envelope
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> Envelope<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

/// GET /api/shop/location
async fn location() -> Json<Envelope<ShopLocation>> {
    Envelope::ok(ShopLocation::current())
}

/// GET /api/shop/map-links
async fn map_links() -> Json<Envelope<MapLinks>> {
    Envelope::ok(MapLinks::for_coordinates(LATITUDE, LONGITUDE))
}

pub fn shop_router() -> Router {
    Router::new()
        .route("/location", get(location))
        .route("/map-links", get(map_links))
}
