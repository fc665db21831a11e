//! Error types for the object cache
//!
//! Provides unified error handling using thiserror. Engine outcomes
//! (absent, expired, full) and adapter failures share one enum so the
//! handlers can propagate them with `?`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the object cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// No entry stored under the key
    #[error("No object was found at key '{0}'.")]
    NotFound(String),

    /// Entry existed but its TTL had elapsed; it has been purged
    #[error("No object was found at key '{0}'.")]
    Expired(String),

    /// Store is full and the eviction policy refused or failed to make room
    #[error("Your request to store this object failed because the cache is full.")]
    CacheFull(String),

    /// Request rejected before reaching the store
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Request body did not parse as JSON
    #[error("The object provided in the body of your request was not valid JSON.")]
    InvalidJson(String),

    /// Delete targeted a key that is absent or expired
    #[error("The specified key was not found in the system.")]
    KeyNotFound(String),

    /// Request did not match `/object/{key}` or used an unsupported method
    #[error("The method you are trying to call is invalid.")]
    RouteNotFound,

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CacheError {
    /// HTTP status reported for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CacheError::NotFound(_) | CacheError::Expired(_) => StatusCode::NOT_FOUND,
            CacheError::KeyNotFound(_) | CacheError::RouteNotFound => StatusCode::NOT_FOUND,
            CacheError::CacheFull(_) => StatusCode::INSUFFICIENT_STORAGE,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::InvalidJson(_) | CacheError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// True for the "nothing live at this key" outcomes.
    pub fn is_absent(&self) -> bool {
        matches!(self, CacheError::NotFound(_) | CacheError::Expired(_))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(self.to_string()));

        (self.status_code(), body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the object cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_includes_key() {
        let err = CacheError::NotFound("abc".to_string());
        assert_eq!(err.to_string(), "No object was found at key 'abc'.");
    }

    #[test]
    fn test_expired_reads_like_not_found() {
        let expired = CacheError::Expired("abc".to_string());
        let missing = CacheError::NotFound("abc".to_string());
        assert_eq!(expired.to_string(), missing.to_string());
        assert!(expired.is_absent());
        assert!(missing.is_absent());
    }

    #[test]
    fn test_cache_full_message() {
        let err = CacheError::CacheFull("abc".to_string());
        assert!(err.to_string().ends_with("cache is full."));
        assert!(!err.is_absent());
    }

    #[test]
    fn test_status_codes() {
        let cases = vec![
            (CacheError::NotFound("k".into()), StatusCode::NOT_FOUND),
            (CacheError::Expired("k".into()), StatusCode::NOT_FOUND),
            (CacheError::KeyNotFound("k".into()), StatusCode::NOT_FOUND),
            (CacheError::RouteNotFound, StatusCode::NOT_FOUND),
            (CacheError::CacheFull("k".into()), StatusCode::INSUFFICIENT_STORAGE),
            (CacheError::InvalidRequest("k".into()), StatusCode::BAD_REQUEST),
            (CacheError::InvalidJson("k".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (CacheError::Internal("k".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
