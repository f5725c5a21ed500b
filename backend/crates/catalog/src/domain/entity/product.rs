//! Product Entity

use chrono::{DateTime, Utc};
use kernel::id::ProductId;
use kernel::validation::non_blank;
use rust_decimal::Decimal;

use crate::domain::value_object::Price;
use crate::error::{CatalogError, CatalogResult};

/// Image shown when a product is created without one
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-product.jpg";

// Column widths in the products table
const MAX_NAME_CHARS: usize = 100;
const MAX_CATEGORY_CHARS: usize = 50;
const MAX_IMAGE_CHARS: usize = 255;

/// Product entity
#[derive(Debug, Clone)]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// A validated product ready to insert
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: String,
    pub image_url: String,
}

impl NewProduct {
    /// Name, description, price and category are required; the image falls
    /// back to [`PLACEHOLDER_IMAGE`].
    pub fn new(
        name: Option<String>,
        description: Option<String>,
        price: Option<Decimal>,
        category: Option<String>,
        image_url: Option<String>,
    ) -> CatalogResult<Self> {
        let (Some(name), Some(description), Some(price), Some(category)) = (
            non_blank(name),
            non_blank(description),
            price,
            non_blank(category),
        ) else {
            return Err(CatalogError::MissingFields);
        };

        let image_url = non_blank(image_url).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned());

        check_length("name", &name, MAX_NAME_CHARS)?;
        check_length("category", &category, MAX_CATEGORY_CHARS)?;
        check_length("image", &image_url, MAX_IMAGE_CHARS)?;

        Ok(Self {
            name,
            description,
            price: Price::new(price)?,
            category,
            image_url,
        })
    }
}

/// Partial update; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

impl ProductChanges {
    pub fn new(
        name: Option<String>,
        description: Option<String>,
        price: Option<Decimal>,
        category: Option<String>,
        image_url: Option<String>,
    ) -> CatalogResult<Self> {
        let changes = Self {
            name: provided("name", name)?,
            description: provided("description", description)?,
            price: price.map(Price::new).transpose()?,
            category: provided("category", category)?,
            // An explicitly blank image resets to the placeholder.
            image_url: image_url.map(|url| {
                non_blank(Some(url)).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned())
            }),
        };

        if let Some(name) = &changes.name {
            check_length("name", name, MAX_NAME_CHARS)?;
        }
        if let Some(category) = &changes.category {
            check_length("category", category, MAX_CATEGORY_CHARS)?;
        }
        if let Some(image_url) = &changes.image_url {
            check_length("image", image_url, MAX_IMAGE_CHARS)?;
        }

        Ok(changes)
    }

    /// Apply to an in-memory product
    pub fn apply(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(image_url) = &self.image_url {
            product.image_url = image_url.clone();
        }
    }
}

/// A field that was sent must not be blank
fn provided(field: &str, value: Option<String>) -> CatalogResult<Option<String>> {
    match value {
        None => Ok(None),
        Some(v) => non_blank(Some(v))
            .map(Some)
            .ok_or_else(|| CatalogError::Validation(format!("{field} cannot be empty"))),
    }
}

fn check_length(field: &str, value: &str, max: usize) -> CatalogResult<()> {
    if value.chars().count() > max {
        return Err(CatalogError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}
