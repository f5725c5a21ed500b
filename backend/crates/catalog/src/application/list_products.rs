//! List Products Use Case

use std::sync::Arc;

use kernel::filter::ListFilter;

use crate::domain::entity::Product;
use crate::domain::repository::ProductRepository;
use crate::error::CatalogResult;

/// 公開カタログ一覧
pub struct ListProductsUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> ListProductsUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, filter: ListFilter) -> CatalogResult<Vec<Product>> {
        let products = self.repo.list(&filter).await?;

        tracing::debug!(
            search = ?filter.search(),
            category = ?filter.category(),
            count = products.len(),
            "Products listed"
        );

        Ok(products)
    }
}
