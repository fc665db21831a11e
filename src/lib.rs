//! Object Cache - an in-memory JSON object store over HTTP
//!
//! Stores opaque payloads by key with per-entry TTL expiry and a
//! configurable eviction policy (`REJECT`, `OLDEST_FIRST`, `NEWEST_FIRST`)
//! once the configured number of slots is used.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{CacheEngine, EvictionPolicy, Ttl};
pub use config::Config;
pub use error::{CacheError, Result};
