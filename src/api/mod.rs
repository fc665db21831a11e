//! API Module
//!
//! HTTP adapter in front of the cache engine.
//!
//! # Endpoints
//! - `GET /object/:key` - Retrieve an object
//! - `PUT|POST /object/:key[?ttl=N]` - Store a JSON object
//! - `DELETE /object/:key` - Delete an object

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
