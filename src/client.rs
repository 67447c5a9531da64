//! AeroAPI request gateway.
//!
//! Low-level HTTP client that owns the credential and base URL, assembles
//! request paths and turns every failure into `None`. Endpoint-specific
//! operations live on the resource wrappers.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{AeroApiError, Result};
use crate::query::Query;

/// Header carrying the AeroAPI key.
pub const API_KEY_HEADER: &str = "x-apikey";
const USER_AGENT: &str = concat!("aeroapi-rs/", env!("CARGO_PKG_VERSION"));

/// Low-level AeroAPI client.
///
/// Every request carries the `x-apikey` header. Results are `Some(json)` on
/// a 2xx response with a JSON body and `None` for any failure; the cause is
/// logged through `tracing`.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use aeroapi::AeroApiClient;
///
/// # async fn example() -> aeroapi::Result<()> {
/// let client = AeroApiClient::new("your-api-key")?;
/// let path = client.build_path("airports", Some("KSFO"), None);
/// if let Some(airport) = client.get(&path).await {
///     println!("{airport}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AeroApiClient {
    http: Client,
    base_url: Arc<Url>,
}

impl std::fmt::Debug for AeroApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AeroApiClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl AeroApiClient {
    /// Create a client for the public AeroAPI endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be used as a header value.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a client from environment variables.
    ///
    /// See [`ClientConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if `AEROAPI_API_KEY` is not set or the configuration
    /// is invalid.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Create a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the key cannot be used
    /// as a header value.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        // Ensure base URL ends with /
        let base_url_str = if config.base_url.ends_with('/') {
            config.base_url.clone()
        } else {
            format!("{}/", config.base_url)
        };

        let base_url = Url::parse(&base_url_str)?;

        let mut api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| AeroApiError::InvalidHeader(API_KEY_HEADER))?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a request target from an endpoint, optional sub-path and query.
    ///
    /// The result is `base_url + endpoint`, then `/sub_path` when given, then
    /// `?` and the form-encoded query if any parameter carries a value.
    /// Parameters without a value are dropped. Path segments are used as-is;
    /// callers must pass valid segments.
    #[must_use]
    pub fn build_path(&self, endpoint: &str, sub_path: Option<&str>, query: Option<&Query>) -> String {
        let mut path = format!("{}{endpoint}", self.base_url);

        if let Some(sub) = sub_path {
            path.push('/');
            path.push_str(sub);
        }

        if let Some(encoded) = query.and_then(Query::encode) {
            path.push('?');
            path.push_str(&encoded);
        }

        path
    }

    /// Make a GET request.
    ///
    /// `path` is joined to the base URL: absolute URLs (as returned by
    /// [`build_path`](Self::build_path)) are used unchanged, relative paths
    /// resolve against the base URL.
    pub async fn get(&self, path: &str) -> Option<Value> {
        self.get_with_headers(path, &HeaderMap::new()).await
    }

    /// Make a GET request with extra headers.
    ///
    /// Extra headers are merged over the client's `x-apikey` header and only
    /// replace it when they name it explicitly.
    pub async fn get_with_headers(&self, path: &str, headers: &HeaderMap) -> Option<Value> {
        self.send(Method::GET, path, None::<&()>, headers)
            .await
            .map_err(|e| log_failure(&Method::GET, path, &e))
            .ok()
    }

    /// Make a POST request with JSON body.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, payload: &B) -> Option<Value> {
        self.post_with_headers(path, payload, &HeaderMap::new()).await
    }

    /// Make a POST request with JSON body and extra headers.
    pub async fn post_with_headers<B: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &B,
        headers: &HeaderMap,
    ) -> Option<Value> {
        self.send(Method::POST, path, Some(payload), headers)
            .await
            .map_err(|e| log_failure(&Method::POST, path, &e))
            .ok()
    }

    /// Issue one request and decode the JSON body.
    #[tracing::instrument(skip(self, payload, headers))]
    pub(crate) async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&B>,
        headers: &HeaderMap,
    ) -> Result<Value> {
        let url = self.base_url.join(path)?;
        tracing::debug!(%url, "sending request");

        let mut request = self.http.request(method, url).headers(headers.clone());
        if let Some(body) = payload {
            request = request.json(body);
        }

        let response = request.send().await?;
        let response = Self::check_response(response).await?;

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = Self::extract_error_message(response, status).await;
        Err(AeroApiError::HttpStatus {
            status: status.as_u16(),
            message,
        })
    }

    /// Extract error message from a failed response.
    async fn extract_error_message(response: Response, status: StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return format!("HTTP {status}"),
        };

        // AeroAPI errors carry "title", "reason" and "detail"
        if let Ok(json) = serde_json::from_str::<Value>(&body) {
            for field in ["detail", "reason", "title"] {
                if let Some(msg) = json.get(field).and_then(|m| m.as_str()) {
                    return msg.to_string();
                }
            }
        }

        body
    }
}

fn log_failure(method: &Method, path: &str, error: &AeroApiError) {
    match error {
        AeroApiError::HttpStatus { status, .. } => {
            tracing::error!(%method, path, status, "AeroAPI request failed: {error}");
        }
        _ => tracing::error!(%method, path, "AeroAPI request failed: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> AeroApiClient {
        AeroApiClient::with_config(ClientConfig::new("test-key").with_base_url("https://example.com/"))
            .unwrap()
    }

    #[test]
    fn test_client_debug() {
        let client = AeroApiClient::new("test-token").unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("AeroApiClient"));
        assert!(debug.contains("base_url"));
        // Key should not be in debug output
        assert!(!debug.contains("test-token"));
    }

    #[test]
    fn test_default_base_url() {
        let client = AeroApiClient::new("key").unwrap();
        assert_eq!(
            client.base_url().as_str(),
            "https://aeroapi.flightaware.com/aeroapi/"
        );
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client1 = AeroApiClient::with_config(
            ClientConfig::new("key").with_base_url("https://example.com/aeroapi"),
        )
        .unwrap();
        let client2 = AeroApiClient::with_config(
            ClientConfig::new("key").with_base_url("https://example.com/aeroapi/"),
        )
        .unwrap();
        assert_eq!(client1.base_url().as_str(), client2.base_url().as_str());
    }

    #[test]
    fn test_invalid_base_url() {
        let result = AeroApiClient::with_config(ClientConfig::new("key").with_base_url("not a url"));
        assert!(matches!(result, Err(AeroApiError::UrlError(_))));
    }

    #[test]
    fn test_invalid_api_key() {
        let result = AeroApiClient::new("bad\nkey");
        assert!(matches!(result, Err(AeroApiError::InvalidHeader(API_KEY_HEADER))));
    }

    #[test]
    fn test_build_path_endpoint_only() {
        assert_eq!(client().build_path("endpoint", None, None), "https://example.com/endpoint");
    }

    #[test]
    fn test_build_path_with_sub_path() {
        assert_eq!(
            client().build_path("endpoint", Some("sub"), None),
            "https://example.com/endpoint/sub"
        );
    }

    #[test]
    fn test_build_path_drops_absent_params() {
        let query = Query::new().set("key", "value").set_opt("key2", None::<&str>);
        assert_eq!(
            client().build_path("endpoint", Some("sub"), Some(&query)),
            "https://example.com/endpoint/sub?key=value"
        );
    }

    #[test]
    fn test_build_path_empty_query_has_no_question_mark() {
        assert_eq!(
            client().build_path("endpoint", None, Some(&Query::new())),
            "https://example.com/endpoint"
        );
        let all_absent = Query::new().set_opt("cursor", None::<String>);
        assert_eq!(
            client().build_path("endpoint", None, Some(&all_absent)),
            "https://example.com/endpoint"
        );
    }

    #[test]
    fn test_built_path_survives_join() {
        let client = client();
        let path = client.build_path("airports", Some("KSFO"), None);
        assert_eq!(client.base_url().join(&path).unwrap().as_str(), path);
    }
}
