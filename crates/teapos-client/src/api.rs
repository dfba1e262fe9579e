//! Typed client for the shop backend.

use serde::de::DeserializeOwned;

use teapos_core::catalog::{CustomizationOptions, Product};
use teapos_core::checkout::{OrderDraft, OrderReceipt};

use crate::error::ApiError;
use crate::transport::Transport;

/// Client for the point-of-sale backend API.
///
/// Paths mirror the backend blueprints: products under `/products`,
/// order submission under `/orders`, customization catalog and health
/// under `/meta`.
pub struct PosApi<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> PosApi<T> {
    /// Same-origin default, served through the host's reverse proxy.
    pub const DEFAULT_BASE_URL: &'static str = "/api";

    /// Create a client against the default base URL.
    pub fn new(transport: T) -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            transport,
        }
    }

    /// Point the client at a different base URL.
    ///
    /// Trailing slashes are trimmed so path joining stays predictable.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ApiError> {
        let raw = base_url.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
            return Err(ApiError::InvalidUrl(raw));
        }
        self.base_url = trimmed.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the customization catalog.
    pub async fn options(&self) -> Result<CustomizationOptions, ApiError> {
        self.get_json("/meta/options").await
    }

    /// Fetch the full product list.
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json("/products/all").await
    }

    /// Submit an order draft and return the backend's acknowledgement.
    pub async fn create_order(&self, draft: &OrderDraft) -> Result<OrderReceipt, ApiError> {
        let url = self.join("/orders/");
        let body = serde_json::to_string(draft)?;
        tracing::debug!("POST {} ({} items)", url, draft.item_count());

        let (status, text) = self.transport.post_json(&url, body).await?;
        if !(200..300).contains(&status) {
            tracing::warn!("order submission rejected: HTTP {} - {}", status, text);
            return Err(ApiError::Http {
                status,
                message: text,
            });
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Probe backend readiness. Any failure reads as unhealthy.
    pub async fn health(&self) -> bool {
        let url = self.join("/meta/health");
        match self.transport.get(&url).await {
            Ok((status, _)) => (200..300).contains(&status),
            Err(err) => {
                tracing::warn!("health probe failed: {}", err);
                false
            }
        }
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let url = self.join(path);
        tracing::debug!("GET {}", url);

        let (status, body) = self.transport.get(&url).await?;
        if !(200..300).contains(&status) {
            tracing::warn!("request failed: HTTP {} for {}", status, url);
            return Err(ApiError::Http {
                status,
                message: body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }

    fn join(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
