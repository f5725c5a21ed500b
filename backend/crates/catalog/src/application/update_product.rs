//! Update Product Use Case
//!
//! Partial update: omitted fields keep their stored value.

use std::sync::Arc;

use auth::{Identity, UserRole};
use kernel::id::ProductId;
use rust_decimal::Decimal;

use crate::domain::entity::{Product, ProductChanges};
use crate::domain::repository::ProductRepository;
use crate::error::{CatalogError, CatalogResult};

/// Update product input
pub struct UpdateProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

/// Update product use case (admin only)
pub struct UpdateProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        identity: &Identity,
        product_id: ProductId,
        input: UpdateProductInput,
    ) -> CatalogResult<Product> {
        identity.require_role(UserRole::Admin)?;

        let changes = ProductChanges::new(
            input.name,
            input.description,
            input.price,
            input.category,
            input.image_url,
        )?;

        let product = self
            .repo
            .update(product_id, &changes)
            .await?
            .ok_or(CatalogError::NotFound)?;

        tracing::info!(
            product_id = %product.product_id,
            admin_id = %identity.user_id,
            "Product updated"
        );

        Ok(product)
    }
}
