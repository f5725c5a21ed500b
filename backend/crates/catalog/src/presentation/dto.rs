//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entity::Product;
use crate::domain::value_object::Price;

/// POST /api/products and PUT /api/products/{id}
///
/// `price` accepts either a JSON number or a decimal string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, alias = "image_url")]
    pub image: Option<String>,
}

/// Product as returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.product_id,
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            image: product.image_url,
            created_at: product.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
