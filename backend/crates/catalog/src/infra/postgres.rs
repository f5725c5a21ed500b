//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::filter::ListFilter;
use kernel::id::ProductId;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::entity::{NewProduct, Product, ProductChanges};
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::Price;
use crate::error::CatalogResult;

/// PostgreSQL-backed product repository
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for PgProductRepository {
    async fn list(&self, filter: &ListFilter) -> CatalogResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, category, image, created_at
            FROM products
            WHERE ($1::TEXT IS NULL OR name ILIKE $1)
              AND ($2::TEXT IS NULL OR category = $2)
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(filter.search_pattern())
        .bind(filter.category())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    async fn create(&self, product: &NewProduct) -> CatalogResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (name, description, price, category, image)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, price, category, image, created_at
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price.amount())
        .bind(&product.category)
        .bind(&product.image_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_product())
    }

    async fn update(
        &self,
        product_id: ProductId,
        changes: &ProductChanges,
    ) -> CatalogResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                category = COALESCE($5, category),
                image = COALESCE($6, image)
            WHERE id = $1
            RETURNING id, name, description, price, category, image, created_at
            "#,
        )
        .bind(product_id.value())
        .bind(changes.name.as_deref())
        .bind(changes.description.as_deref())
        .bind(changes.price.map(|p| p.amount()))
        .bind(changes.category.as_deref())
        .bind(changes.image_url.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProductRow::into_product))
    }

    async fn delete(&self, product_id: ProductId) -> CatalogResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(product_id.value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: Decimal,
    category: String,
    image: String,
    created_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_product(self) -> Product {
        Product {
            product_id: ProductId::new(self.id),
            name: self.name,
            description: self.description,
            price: Price::from_db(self.price),
            category: self.category,
            image_url: self.image,
            created_at: self.created_at,
        }
    }
}
