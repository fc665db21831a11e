//! Request and Response models for the object cache API
//!
//! This module defines the query parameters and JSON bodies used by the HTTP
//! adapter.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{is_valid_key, PutParams};
pub use responses::{DeleteResponse, ErrorResponse, PutResponse};
