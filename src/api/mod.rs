//! HTTP API server

use std::sync::Arc;

use axum::{middleware, routing::get, routing::MethodRouter, Router};
use tower_http::trace::TraceLayer;

use crate::catalog::Catalog;

pub mod auth;
pub mod handlers;
pub mod state;

pub use auth::{Authenticator, StaticTokens};
pub use state::AppState;

/// A single route: path pattern plus the method router bound to it.
pub type Route = (&'static str, MethodRouter<AppState>);

/// Routes that sit behind the authentication gate when one is configured
pub fn product_routes() -> Vec<Route> {
    vec![
        ("/api/products", get(handlers::list_products)),
        ("/api/products/:id", get(handlers::get_product)),
    ]
}

/// Routes that are always open
pub fn public_routes() -> Vec<Route> {
    vec![("/health", get(handlers::health))]
}

fn mount(routes: Vec<Route>) -> Router<AppState> {
    routes
        .into_iter()
        .fold(Router::new(), |router, (path, handler)| {
            router.route(path, handler)
        })
}

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    let mut products = mount(product_routes());
    if let Some(authenticator) = state.authenticator.clone() {
        products = products.route_layer(middleware::from_fn_with_state(
            authenticator,
            auth::require_auth,
        ));
    }

    mount(public_routes())
        .merge(products)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Convenience helper serving the built-in catalog without authentication
pub fn create_default_router() -> Router {
    create_router(AppState::new(Arc::new(Catalog::seeded())))
}
