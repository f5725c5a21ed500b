//! Catalog Router

use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;

use auth::TokenService;

use crate::domain::repository::ProductRepository;
use crate::infra::postgres::PgProductRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the Catalog router with PostgreSQL repository
pub fn catalog_router(repo: PgProductRepository, tokens: Arc<TokenService>) -> Router {
    catalog_router_generic(repo, tokens)
}

/// Create a generic Catalog router for any repository implementation
pub fn catalog_router_generic<R>(repo: R, tokens: Arc<TokenService>) -> Router
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
        tokens,
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_products::<R>).post(handlers::create_product::<R>),
        )
        .route(
            "/{id}",
            put(handlers::update_product::<R>).delete(handlers::delete_product::<R>),
        )
        .with_state(state)
}
