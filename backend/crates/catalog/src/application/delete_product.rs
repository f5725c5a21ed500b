//! Delete Product Use Case

use std::sync::Arc;

use auth::{Identity, UserRole};
use kernel::id::ProductId;

use crate::domain::repository::ProductRepository;
use crate::error::{CatalogError, CatalogResult};

/// Delete product use case (admin only)
pub struct DeleteProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, identity: &Identity, product_id: ProductId) -> CatalogResult<()> {
        identity.require_role(UserRole::Admin)?;

        if !self.repo.delete(product_id).await? {
            return Err(CatalogError::NotFound);
        }

        tracing::info!(
            product_id = %product_id,
            admin_id = %identity.user_id,
            "Product deleted"
        );

        Ok(())
    }
}
