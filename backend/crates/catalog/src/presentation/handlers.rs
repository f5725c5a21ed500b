//! HTTP Handlers

use axum::Json;
use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use auth::{AdminUser, TokenService};
use kernel::extract::{AppJson, AppPath, AppQuery};
use kernel::filter::{ListFilter, ListQuery};
use kernel::id::ProductId;
use std::sync::Arc;

use crate::application::{
    CreateProductInput, CreateProductUseCase, DeleteProductUseCase, ListProductsUseCase,
    UpdateProductInput, UpdateProductUseCase,
};
use crate::domain::repository::ProductRepository;
use crate::error::CatalogResult;
use crate::presentation::dto::{MessageResponse, ProductRequest, ProductResponse};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
}

impl<R> FromRef<CatalogAppState<R>> for Arc<TokenService>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    fn from_ref(state: &CatalogAppState<R>) -> Self {
        state.tokens.clone()
    }
}

/// GET /api/products
pub async fn list_products<R>(
    State(state): State<CatalogAppState<R>>,
    AppQuery(query): AppQuery<ListQuery>,
) -> CatalogResult<Json<Vec<ProductResponse>>>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListProductsUseCase::new(state.repo.clone());
    let products = use_case.execute(ListFilter::from(query)).await?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// POST /api/products
pub async fn create_product<R>(
    State(state): State<CatalogAppState<R>>,
    AdminUser(identity): AdminUser,
    AppJson(req): AppJson<ProductRequest>,
) -> CatalogResult<(StatusCode, Json<ProductResponse>)>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateProductUseCase::new(state.repo.clone());

    let product = use_case
        .execute(
            &identity,
            CreateProductInput {
                name: req.name,
                description: req.description,
                price: req.price,
                category: req.category,
                image_url: req.image,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

/// PUT /api/products/{id}
pub async fn update_product<R>(
    State(state): State<CatalogAppState<R>>,
    AdminUser(identity): AdminUser,
    AppPath(id): AppPath<i64>,
    AppJson(req): AppJson<ProductRequest>,
) -> CatalogResult<Json<ProductResponse>>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateProductUseCase::new(state.repo.clone());

    let product = use_case
        .execute(
            &identity,
            ProductId::new(id),
            UpdateProductInput {
                name: req.name,
                description: req.description,
                price: req.price,
                category: req.category,
                image_url: req.image,
            },
        )
        .await?;

    Ok(Json(ProductResponse::from(product)))
}

/// DELETE /api/products/{id}
pub async fn delete_product<R>(
    State(state): State<CatalogAppState<R>>,
    AdminUser(identity): AdminUser,
    AppPath(id): AppPath<i64>,
) -> CatalogResult<Json<MessageResponse>>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteProductUseCase::new(state.repo.clone());
    use_case.execute(&identity, ProductId::new(id)).await?;

    Ok(Json(MessageResponse {
        message: "product deleted",
    }))
}
