//! Router assembly and shared handler state.

use std::sync::Arc;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post, put},
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{
    error, handlers, middleware,
    models::api_key::ApiKey,
    store::SharedStore,
};

/// State shared with every handler via `State` extraction.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub api_key: Arc<ApiKey>,
}

impl AppState {
    pub fn new(store: SharedStore, api_key: &str) -> Self {
        Self {
            store,
            api_key: Arc::new(ApiKey::new(api_key)),
        }
    }
}

/// Build the HTTP router.
///
/// Static routes are registered before parameterised ones so that
/// `/api/products/stats` is never read as a product id.
pub fn build_router(state: AppState) -> Router {
    // Write routes: the API key is checked before the body is parsed
    let protected_routes = Router::new()
        .route("/api/products", post(handlers::products::create_product))
        .route(
            "/api/products/{id}",
            put(handlers::products::update_product).delete(handlers::products::delete_product),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_api_key,
        ));

    Router::new()
        // Public routes (no authentication required)
        .route("/", get(handlers::health::welcome))
        .route("/health", get(handlers::health::health_check))
        .route("/api/products", get(handlers::products::list_products))
        .route(
            "/api/products/stats",
            get(handlers::products::product_stats),
        )
        .route("/api/products/{id}", get(handlers::products::get_product))
        .merge(protected_routes)
        // Must follow every route so each method router picks it up
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(error::handle_panic))
                .layer(axum_middleware::from_fn(
                    middleware::logging::request_logging,
                )),
        )
        .with_state(state)
}
