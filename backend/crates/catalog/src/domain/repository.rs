//! Repository Traits

use kernel::filter::ListFilter;
use kernel::id::ProductId;

use crate::domain::entity::{NewProduct, Product, ProductChanges};
use crate::error::CatalogResult;

/// Product repository trait
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    /// Newest first, filtered by name substring and category
    async fn list(&self, filter: &ListFilter) -> CatalogResult<Vec<Product>>;

    async fn create(&self, product: &NewProduct) -> CatalogResult<Product>;

    /// `None` if the product does not exist
    async fn update(
        &self,
        product_id: ProductId,
        changes: &ProductChanges,
    ) -> CatalogResult<Option<Product>>;

    /// `false` if nothing was deleted
    async fn delete(&self, product_id: ProductId) -> CatalogResult<bool>;
}
