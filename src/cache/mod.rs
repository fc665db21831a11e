//! Cache Module
//!
//! Provides the in-memory object store with TTL expiry and policy-driven
//! eviction.

mod clock;
mod engine;
mod entry;
mod policy;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::CacheEngine;
pub use entry::{CacheEntry, Ttl};
pub use policy::EvictionPolicy;
pub use stats::CacheStats;
pub use store::CacheStore;
