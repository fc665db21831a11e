//! API Routes
//!
//! Configures the Axum router for the object cache.

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    delete_object_handler, fallback_handler, get_object_handler, put_object_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /object/:key` - Retrieve a stored object
/// - `PUT /object/:key?ttl=N` - Store an object
/// - `POST /object/:key?ttl=N` - Store an object
/// - `DELETE /object/:key` - Delete an object
///
/// Anything else, including other methods on `/object/:key`, gets a JSON 404.
/// Request bodies are not size-limited.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let object_routes = get(get_object_handler)
        .put(put_object_handler)
        .post(put_object_handler)
        .delete(delete_object_handler)
        .fallback(fallback_handler);

    Router::new()
        .route("/object/:key", object_routes)
        .fallback(fallback_handler)
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
