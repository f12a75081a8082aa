//! PawMart REST API client.
//!
//! # Architecture
//!
//! - One configured `reqwest` client per [`ApiClient`]; cheap to clone
//! - The bearer token from the [`crate::token`] store is attached to every
//!   outgoing request when present
//! - Idempotent reads get one automatic retry with backoff; mutations are
//!   never retried - a failed mutation is reported and the caller resubmits
//! - Per-domain repositories wrap the client and convert transport shapes
//!   into domain shapes via [`conversions`]
//!
//! # Example
//!
//! ```rust,ignore
//! use pawmart_client::api::{ApiClient, CacheProfile, ProductsRepo};
//!
//! let client = ApiClient::new(&config, tokens)?;
//! let products = ProductsRepo::new(client.clone(), CacheProfile::Catalog);
//! let page = products.get_products(&ProductFilter::default()).await?;
//! ```

pub mod appointments;
pub mod auth;
pub mod cache;
pub mod care;
pub mod conversions;
pub mod files;
pub mod pets;
pub mod products;
pub mod records;

pub use appointments::AppointmentsRepo;
pub use auth::AuthApi;
pub use cache::CacheProfile;
pub use care::CareServicesRepo;
pub use pets::PetsRepo;
pub use products::{ProductFilter, ProductsRepo};
pub use records::RecordsRepo;

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use secrecy::ExposeSecret;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::token::TokenStore;

/// How many automatic retries an idempotent read gets.
const READ_RETRIES: u32 = 1;

/// Base delay before the first read retry; doubles per attempt.
const READ_RETRY_BASE: Duration = Duration::from_millis(500);

// =============================================================================
// ApiClient
// =============================================================================

/// Client for the PawMart REST backend.
///
/// Cheap to clone; all repositories share one underlying HTTP client and
/// token store.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    /// Backend base URL, without a trailing slash.
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenStore>) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                http,
                base_url: config.api_url.as_str().trim_end_matches('/').to_owned(),
                tokens,
            }),
        })
    }

    /// Backend base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// The shared token store.
    #[must_use]
    pub fn tokens(&self) -> Arc<dyn TokenStore> {
        Arc::clone(&self.inner.tokens)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.inner.base_url, path.trim_start_matches('/'))
    }

    /// Attach `Authorization: Bearer <token>` when a token is stored.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.inner.tokens.load() {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    // =========================================================================
    // Reads (retried once)
    // =========================================================================

    /// GET a JSON resource.
    ///
    /// Retries once with backoff on transport errors and 5xx responses.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails after the retry, or the
    /// response cannot be decoded.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let mut delay = READ_RETRY_BASE;
        for _ in 0..READ_RETRIES {
            match self.fetch_json(path, query).await {
                Err(e) if e.is_retryable() => {
                    debug!(error = %e, path, "retrying idempotent read after backoff");
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                other => return other,
            }
        }
        self.fetch_json(path, query).await
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let request = self
            .authorize(self.inner.http.get(self.endpoint(path)))
            .query(query);
        Self::decode(request.send().await?).await
    }

    // =========================================================================
    // Mutations (never retried)
    // =========================================================================

    /// POST a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = self.authorize(self.inner.http.post(self.endpoint(path)).json(body));
        Self::decode(request.send().await?).await
    }

    /// PATCH a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    pub(crate) async fn patch_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = self.authorize(self.inner.http.patch(self.endpoint(path)).json(body));
        Self::decode(request.send().await?).await
    }

    /// DELETE a resource, discarding the response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        let request = self.authorize(self.inner.http.delete(self.endpoint(path)));
        Self::check_status(request.send().await?).await?;
        Ok(())
    }

    /// POST a multipart form and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ApiResult<T> {
        let request = self.authorize(self.inner.http.post(self.endpoint(path)).multipart(form));
        Self::decode(request.send().await?).await
    }

    // =========================================================================
    // Response handling
    // =========================================================================

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let response = Self::check_status(response).await?;

        // Read as text first for better error diagnostics
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %text.chars().take(500).collect::<String>(),
                "failed to parse backend response"
            );
            ApiError::Parse(e)
        })
    }

    async fn check_status(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(ApiError::RateLimited(retry_after));
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_backend_message(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_owned());

        match status.as_u16() {
            401 | 403 => Err(ApiError::Unauthorized(message)),
            404 => Err(ApiError::NotFound(message)),
            code => {
                tracing::error!(
                    status = %status,
                    body = %body.chars().take(500).collect::<String>(),
                    "backend returned non-success status"
                );
                Err(ApiError::Backend {
                    status: code,
                    message,
                })
            }
        }
    }
}

/// Extract the `message` field from a backend error body.
///
/// The backend reports `{"message": "..."}` for single failures and
/// `{"message": ["...", ...]}` for validation failures; the latter is
/// joined with `"; "`.
fn extract_backend_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("message")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(parts) => {
            let messages: Vec<&str> = parts.iter().filter_map(|p| p.as_str()).collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

// =============================================================================
// List envelopes
// =============================================================================

/// Paginated list envelope as the backend returns it.
///
/// The key naming the item array varies by resource (`products`, `pets`,
/// `services`, or plain `items`), so every accepted name is an optional
/// field and the first present one wins. `pages` is computed from
/// `total`/`limit` when the backend omits it.
#[derive(Debug, serde::Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub(crate) struct ListEnvelope<T> {
    #[serde(default)]
    items: Option<Vec<T>>,
    #[serde(default)]
    products: Option<Vec<T>>,
    #[serde(default)]
    pets: Option<Vec<T>>,
    #[serde(default)]
    services: Option<Vec<T>>,
    total: u64,
    #[serde(default)]
    limit: Option<u32>,
    #[serde(default)]
    pages: Option<u32>,
}

impl<T> ListEnvelope<T> {
    /// Split into `(items, total, pages)`.
    ///
    /// `requested_limit` is used to derive the page count when the backend
    /// reports neither `pages` nor `limit`.
    pub(crate) fn into_page(self, requested_limit: u32) -> (Vec<T>, u64, u32) {
        let items = self
            .items
            .or(self.products)
            .or(self.pets)
            .or(self.services)
            .unwrap_or_default();

        let limit = u64::from(self.limit.unwrap_or(requested_limit).max(1));
        let pages = self.pages.unwrap_or_else(|| {
            u32::try_from(self.total.div_ceil(limit)).unwrap_or(u32::MAX)
        });

        (items, self.total, pages)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_accepts_products_key() {
        let envelope: ListEnvelope<String> =
            serde_json::from_str(r#"{"products": ["a", "b"], "total": 2, "limit": 10}"#).unwrap();
        let (items, total, pages) = envelope.into_page(10);
        assert_eq!(items, vec!["a", "b"]);
        assert_eq!(total, 2);
        assert_eq!(pages, 1);
    }

    #[test]
    fn test_envelope_accepts_items_key() {
        let envelope: ListEnvelope<String> =
            serde_json::from_str(r#"{"items": ["a"], "total": 25, "limit": 10}"#).unwrap();
        let (items, total, pages) = envelope.into_page(10);
        assert_eq!(items, vec!["a"]);
        assert_eq!(total, 25);
        assert_eq!(pages, 3);
    }

    #[test]
    fn test_envelope_prefers_backend_reported_pages() {
        let envelope: ListEnvelope<String> =
            serde_json::from_str(r#"{"pets": [], "total": 100, "limit": 10, "pages": 7}"#).unwrap();
        let (_, _, pages) = envelope.into_page(10);
        assert_eq!(pages, 7);
    }

    #[test]
    fn test_envelope_falls_back_to_requested_limit() {
        let envelope: ListEnvelope<String> =
            serde_json::from_str(r#"{"items": [], "total": 30}"#).unwrap();
        let (_, _, pages) = envelope.into_page(12);
        assert_eq!(pages, 3);
    }

    #[test]
    fn test_envelope_missing_item_key_yields_empty() {
        let envelope: ListEnvelope<String> = serde_json::from_str(r#"{"total": 0}"#).unwrap();
        let (items, total, pages) = envelope.into_page(10);
        assert!(items.is_empty());
        assert_eq!(total, 0);
        assert_eq!(pages, 0);
    }

    #[test]
    fn test_extract_backend_message_string() {
        assert_eq!(
            extract_backend_message(r#"{"message": "Unauthorized", "statusCode": 401}"#),
            Some("Unauthorized".to_owned())
        );
    }

    #[test]
    fn test_extract_backend_message_array() {
        assert_eq!(
            extract_backend_message(
                r#"{"message": ["title must be longer", "price must be positive"]}"#
            ),
            Some("title must be longer; price must be positive".to_owned())
        );
    }

    #[test]
    fn test_extract_backend_message_absent() {
        assert_eq!(extract_backend_message("not json"), None);
        assert_eq!(extract_backend_message(r#"{"error": "x"}"#), None);
    }
}
