//! HTTP client for the backend REST API.
//!
//! Single point of contact with the backend: builds request URLs, attaches the
//! bearer token from the session store, sends JSON with credentials included,
//! and normalizes every response into the backend envelope. A 401 clears the
//! stored session and bounces to the login screen unless the caller opts out.
//! Single-attempt semantics throughout: no retry, no timeout, no backoff.

use contracts::envelope::ApiEnvelope;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

use crate::system::session::storage;

const BACKEND_PORT: u16 = 8080;
const API_PREFIX: &str = "/api/v1";

/// Per-call options for a client request.
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Pre-serialized query string, without the leading `?`.
    pub query: Option<String>,
    /// Suppress the automatic logout + redirect on a 401. Used by the login
    /// and register calls, where a 401 is an expected outcome.
    pub skip_auto_redirect: bool,
}

impl RequestConfig {
    /// Config carrying the query string serialized from `params`.
    /// `None` fields of the params struct are omitted entirely.
    pub fn with_query<P: Serialize>(params: &P) -> Result<Self, String> {
        let query = serde_qs::to_string(params)
            .map_err(|e| format!("Failed to serialize query params: {}", e))?;
        Ok(Self {
            query: (!query.is_empty()).then_some(query),
            skip_auto_redirect: false,
        })
    }

    pub fn without_auto_redirect() -> Self {
        Self {
            query: None,
            skip_auto_redirect: true,
        }
    }
}

/// Base URL of the backend, derived from the current window location.
///
/// Empty when no window is available (i.e. outside a browser context).
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}{}", protocol, hostname, BACKEND_PORT, API_PREFIX)
}

pub async fn get<T>(endpoint: &str, config: &RequestConfig) -> Result<ApiEnvelope<T>, String>
where
    T: DeserializeOwned,
{
    let response = prepare(Request::get(&request_url(endpoint, config)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    handle_response(response, config).await
}

pub async fn post<T, B>(
    endpoint: &str,
    body: &B,
    config: &RequestConfig,
) -> Result<ApiEnvelope<T>, String>
where
    T: DeserializeOwned,
    B: Serialize,
{
    send_with_body(Request::post(&request_url(endpoint, config)), body, config).await
}

pub async fn put<T, B>(
    endpoint: &str,
    body: &B,
    config: &RequestConfig,
) -> Result<ApiEnvelope<T>, String>
where
    T: DeserializeOwned,
    B: Serialize,
{
    send_with_body(Request::put(&request_url(endpoint, config)), body, config).await
}

pub async fn patch<T, B>(
    endpoint: &str,
    body: &B,
    config: &RequestConfig,
) -> Result<ApiEnvelope<T>, String>
where
    T: DeserializeOwned,
    B: Serialize,
{
    send_with_body(Request::patch(&request_url(endpoint, config)), body, config).await
}

pub async fn delete<T>(endpoint: &str, config: &RequestConfig) -> Result<ApiEnvelope<T>, String>
where
    T: DeserializeOwned,
{
    let response = prepare(Request::delete(&request_url(endpoint, config)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    handle_response(response, config).await
}

async fn send_with_body<T, B>(
    builder: RequestBuilder,
    body: &B,
    config: &RequestConfig,
) -> Result<ApiEnvelope<T>, String>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let request = prepare(builder)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?;
    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    handle_response(response, config).await
}

/// Attach the headers every request carries: JSON content type, included
/// credentials, and the bearer token when one is stored.
fn prepare(builder: RequestBuilder) -> RequestBuilder {
    let mut builder = builder
        .header("Content-Type", "application/json")
        .credentials(RequestCredentials::Include);
    if let Some(token) = storage::token() {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }
    builder
}

fn request_url(endpoint: &str, config: &RequestConfig) -> String {
    join_query(
        &format!("{}{}", api_base(), endpoint),
        config.query.as_deref(),
    )
}

/// Append a query string to a URL, if there is one.
fn join_query(url: &str, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{}?{}", url, q),
        _ => url.to_string(),
    }
}

async fn handle_response<T>(
    response: Response,
    config: &RequestConfig,
) -> Result<ApiEnvelope<T>, String>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if !response.ok() {
        if status == 401 && !config.skip_auto_redirect {
            storage::clear_session();
            redirect_to_login();
        }
        return Err(error_message(&body, status));
    }

    // An empty or non-envelope body (e.g. a 204) reads as an empty envelope.
    Ok(serde_json::from_str(&body).unwrap_or_else(|_| ApiEnvelope::empty()))
}

/// Most specific message available in a failed response: top-level `message`,
/// then the nested `error.message`, then a generic status fallback.
fn error_message(body: &str, status: u16) -> String {
    let parsed: serde_json::Value = serde_json::from_str(body).unwrap_or(serde_json::Value::Null);
    parsed
        .get("message")
        .and_then(|m| m.as_str())
        .or_else(|| {
            parsed
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
        })
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status))
}

fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::tutor::TutorSearchParams;

    #[test]
    fn test_join_query() {
        assert_eq!(join_query("/tutors", None), "/tutors");
        assert_eq!(join_query("/tutors", Some("")), "/tutors");
        assert_eq!(join_query("/tutors", Some("search=math")), "/tutors?search=math");
    }

    #[test]
    fn test_query_omits_absent_params() {
        let params = TutorSearchParams {
            search: Some("algebra".to_string()),
            min_rate: Some(10),
            ..Default::default()
        };
        let config = RequestConfig::with_query(&params).unwrap();
        assert_eq!(config.query.as_deref(), Some("search=algebra&minRate=10"));

        let config = RequestConfig::with_query(&TutorSearchParams::default()).unwrap();
        assert!(config.query.is_none());
    }

    #[test]
    fn test_error_message_prefers_body_message() {
        let body = r#"{"message":"Email already taken","error":{"code":"CONFLICT","message":"conflict"}}"#;
        assert_eq!(error_message(body, 409), "Email already taken");
    }

    #[test]
    fn test_error_message_falls_back_to_nested_error() {
        let body = r#"{"error":{"code":"VALIDATION","message":"Rate must be positive"}}"#;
        assert_eq!(error_message(body, 422), "Rate must be positive");
    }

    #[test]
    fn test_error_message_generic_fallback() {
        assert_eq!(error_message("", 500), "HTTP 500");
        assert_eq!(error_message("not json", 502), "HTTP 502");
    }
}
