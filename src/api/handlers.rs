//! API Handlers
//!
//! HTTP request handlers for `/object/{key}`. Each handler validates the
//! request, calls the engine and maps the outcome to a status code.

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::IgnoredAny;
use tracing::{debug, warn};

use crate::cache::CacheEngine;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{is_valid_key, DeleteResponse, PutParams, PutResponse};

/// Extractor outcomes are taken as `Result`s so that rejections surface as
/// JSON errors rather than axum's plain-text bodies.
pub type KeyPath = std::result::Result<Path<String>, PathRejection>;
pub type QueryPairs = std::result::Result<Query<Vec<(String, String)>>, QueryRejection>;
pub type RequestBody = std::result::Result<Bytes, BytesRejection>;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache engine
    pub engine: CacheEngine,
}

impl AppState {
    pub fn new(engine: CacheEngine) -> Self {
        Self { engine }
    }

    /// Creates a new AppState with an engine built from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(CacheEngine::from_config(config))
    }
}

/// Handler for GET /object/:key
///
/// Returns the stored JSON payload as the response body.
pub async fn get_object_handler(
    State(state): State<AppState>,
    path: KeyPath,
) -> Result<Response> {
    let key = object_key(path)?;

    let data = state.engine.get(&key).await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], data).into_response())
}

/// Handler for PUT and POST /object/:key
///
/// The body must be well-formed JSON; it is stored verbatim. An optional
/// `ttl` query parameter overrides the default TTL.
pub async fn put_object_handler(
    State(state): State<AppState>,
    path: KeyPath,
    query: QueryPairs,
    body: RequestBody,
) -> Result<Json<PutResponse>> {
    let key = object_key(path)?;

    let Query(pairs) = query.map_err(|rejection| {
        debug!("Rejected query string: {}", rejection.body_text());
        CacheError::InvalidRequest(rejection.body_text())
    })?;
    let params = PutParams::from_pairs(pairs);

    let body = body.map_err(|rejection| {
        warn!("Failed to read request body: {}", rejection.body_text());
        CacheError::Internal(rejection.body_text())
    })?;

    let data = parse_json_body(&body)?;
    state.engine.put(key.clone(), data, params.ttl()).await?;

    Ok(Json(PutResponse::new(key)))
}

/// Handler for DELETE /object/:key
pub async fn delete_object_handler(
    State(state): State<AppState>,
    path: KeyPath,
) -> Result<Json<DeleteResponse>> {
    let key = object_key(path)?;

    state.engine.delete(&key).await.map_err(|err| {
        if err.is_absent() {
            CacheError::KeyNotFound(key.clone())
        } else {
            err
        }
    })?;

    Ok(Json(DeleteResponse::new(key)))
}

/// Handler for every unmatched route or method.
pub async fn fallback_handler() -> CacheError {
    CacheError::RouteNotFound
}

/// Extracts the key segment; an undecodable or ill-formed key does not
/// match `/object/{key}` at all.
fn object_key(path: KeyPath) -> Result<String> {
    let Path(key) = path.map_err(|rejection| {
        debug!("Rejected object path: {}", rejection.body_text());
        CacheError::RouteNotFound
    })?;

    if is_valid_key(&key) {
        Ok(key)
    } else {
        Err(CacheError::RouteNotFound)
    }
}

/// Checks that `body` is a single JSON value and returns it as text.
fn parse_json_body(body: &[u8]) -> Result<String> {
    serde_json::from_slice::<IgnoredAny>(body).map_err(|err| {
        warn!("Rejected request body: {}", err);
        CacheError::InvalidJson(err.to_string())
    })?;

    String::from_utf8(body.to_vec()).map_err(|err| CacheError::InvalidJson(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheStore, EvictionPolicy};

    fn state(max_entries: usize, policy: EvictionPolicy) -> AppState {
        AppState::new(CacheEngine::new(CacheStore::new(max_entries, 300, policy)))
    }

    fn key(key: &str) -> KeyPath {
        Ok(Path(key.to_string()))
    }

    fn query(pairs: &[(&str, &str)]) -> QueryPairs {
        Ok(Query(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ))
    }

    fn body(body: &str) -> RequestBody {
        Ok(Bytes::from(body.to_string()))
    }

    async fn put(state: &AppState, k: &str, payload: &str) -> Result<Json<PutResponse>> {
        put_object_handler(State(state.clone()), key(k), query(&[]), body(payload)).await
    }

    #[tokio::test]
    async fn test_put_and_get_handler() {
        let state = state(100, EvictionPolicy::Reject);

        let response = put(&state, "test_key", r#"{"a":[1,2]}"#).await.unwrap();
        assert_eq!(response.key, "test_key");

        let response = get_object_handler(State(state), key("test_key"))
            .await
            .unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], br#"{"a":[1,2]}"#);
    }

    #[tokio::test]
    async fn test_get_nonexistent_key() {
        let state = state(100, EvictionPolicy::Reject);

        let result = get_object_handler(State(state), key("nonexistent")).await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_put_invalid_json() {
        let state = state(100, EvictionPolicy::Reject);

        let result = put(&state, "k", "{not json").await;
        assert!(matches!(result, Err(CacheError::InvalidJson(_))));
        assert!(state.engine.is_empty().await);
    }

    #[tokio::test]
    async fn test_put_empty_body_is_invalid_json() {
        let state = state(100, EvictionPolicy::Reject);
        assert!(matches!(put(&state, "k", "").await, Err(CacheError::InvalidJson(_))));
    }

    #[tokio::test]
    async fn test_put_when_full() {
        let state = state(1, EvictionPolicy::Reject);

        put(&state, "a", "1").await.unwrap();
        let result = put(&state, "b", "2").await;
        assert!(matches!(result, Err(CacheError::CacheFull(_))));
    }

    #[tokio::test]
    async fn test_put_with_negative_ttl_is_invisible() {
        let state = state(10, EvictionPolicy::Reject);

        put_object_handler(
            State(state.clone()),
            key("k"),
            query(&[("ttl", "-5"), ("ttl", "60")]),
            body("true"),
        )
        .await
        .unwrap();

        let result = get_object_handler(State(state), key("k")).await;
        assert!(matches!(result, Err(CacheError::Expired(_))));
    }

    #[tokio::test]
    async fn test_delete_handler() {
        let state = state(100, EvictionPolicy::Reject);

        put(&state, "to_delete", "{}").await.unwrap();
        let response = delete_object_handler(State(state.clone()), key("to_delete"))
            .await
            .unwrap();
        assert_eq!(response.key, "to_delete");

        let result = delete_object_handler(State(state), key("to_delete")).await;
        assert_eq!(
            result.unwrap_err(),
            CacheError::KeyNotFound("to_delete".to_string())
        );
    }

    #[tokio::test]
    async fn test_invalid_key_is_route_not_found() {
        let state = state(100, EvictionPolicy::Reject);

        let result = get_object_handler(State(state), key("bad-key")).await;
        assert!(matches!(result, Err(CacheError::RouteNotFound)));
    }

    #[test]
    fn test_parse_json_body() {
        assert_eq!(parse_json_body(b" [1, 2] ").unwrap(), " [1, 2] ");
        assert!(parse_json_body(b"{} {}").is_err());
        assert!(parse_json_body(b"\"\xff\"").is_err());
    }
}
