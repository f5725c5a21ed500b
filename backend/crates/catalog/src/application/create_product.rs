//! Create Product Use Case

use std::sync::Arc;

use auth::{Identity, UserRole};
use rust_decimal::Decimal;

use crate::domain::entity::{NewProduct, Product};
use crate::domain::repository::ProductRepository;
use crate::error::CatalogResult;

/// Create product input
pub struct CreateProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

/// Create product use case (admin only)
pub struct CreateProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> CreateProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        identity: &Identity,
        input: CreateProductInput,
    ) -> CatalogResult<Product> {
        identity.require_role(UserRole::Admin)?;

        let new_product = NewProduct::new(
            input.name,
            input.description,
            input.price,
            input.category,
            input.image_url,
        )?;

        let product = self.repo.create(&new_product).await?;

        tracing::info!(
            product_id = %product.product_id,
            admin_id = %identity.user_id,
            "Product created"
        );

        Ok(product)
    }
}
