//! HTTP client for the SVGL API.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::ToolError;

/// Base endpoint of the SVGL API.
pub const API_BASE_URL: &str = "https://api.svgl.app";

/// A successful response body from the SVGL API.
#[derive(Debug, Clone)]
pub enum ApiPayload {
    /// Structured JSON (listing, category, and search endpoints).
    Json(Value),
    /// Raw SVG markup (the `/svg/` endpoint).
    Text(String),
}

impl ApiPayload {
    /// Render the payload for a text content block: JSON is pretty-printed,
    /// text passes through verbatim.
    pub fn into_text(self) -> Result<String, ToolError> {
        match self {
            ApiPayload::Json(value) => Ok(serde_json::to_string_pretty(&value)?),
            ApiPayload::Text(text) => Ok(text),
        }
    }
}

/// Fetch seam for the SVGL API.
///
/// Tools build their endpoint URL from [`base_url`](SvglFetch::base_url) and
/// hand the finished URL to [`fetch`](SvglFetch::fetch). Tests substitute a
/// stub implementation to capture the requested URLs.
#[async_trait]
pub trait SvglFetch: Send + Sync {
    /// The API base URL, without a trailing slash.
    fn base_url(&self) -> &str;

    /// Perform one GET against a fully-formed URL.
    async fn fetch(&self, endpoint: &str) -> Result<ApiPayload, ToolError>;
}

/// SVGL API client backed by reqwest.
///
/// One request per call: no retries, no caching, no explicit timeout
/// (reqwest's defaults apply).
pub struct SvglClient {
    client: reqwest::Client,
    base_url: String,
}

impl SvglClient {
    /// Create a client against the public SVGL API.
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    /// Create a client against an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::builder()
                .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for SvglClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SvglFetch for SvglClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, endpoint: &str) -> Result<ApiPayload, ToolError> {
        debug!("Fetching {}", endpoint);

        let response = self.client.get(endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            // The body carries no guaranteed shape on failure; don't read it.
            return Err(ToolError::UpstreamStatus {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        // The SVG markup endpoint serves plain text; everything else is JSON.
        // The upstream sets no reliable content-type header, so the URL shape
        // decides (substring match on the full URL, as the API behaves today).
        if endpoint.contains("/svg/") {
            Ok(ApiPayload::Text(response.text().await?))
        } else {
            Ok(ApiPayload::Json(response.json().await?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_payload_pretty_prints() {
        let payload = ApiPayload::Json(json!([{ "category": "ai", "total": 3 }]));
        let text = payload.into_text().unwrap();
        // Two-space indentation, one field per line.
        assert!(text.contains("\n  {\n"));
        assert!(text.contains("\"category\": \"ai\""));
    }

    #[test]
    fn test_text_payload_is_verbatim() {
        let svg = "<svg viewBox=\"0 0 24 24\"></svg>";
        let payload = ApiPayload::Text(svg.to_string());
        assert_eq!(payload.into_text().unwrap(), svg);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = SvglClient::with_base_url("https://example.test/");
        assert_eq!(client.base_url(), "https://example.test");
    }

    // Integration test that requires network access.
    #[tokio::test]
    #[ignore] // Run with: cargo test -- --ignored
    async fn test_fetch_categories_live() {
        let client = SvglClient::new();
        let url = format!("{}/categories", client.base_url());
        let payload = client.fetch(&url).await.unwrap();
        assert!(matches!(payload, ApiPayload::Json(Value::Array(_))));
    }
}
