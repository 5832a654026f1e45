//! Catalog transports.

use async_trait::async_trait;
use quickcart_core::Product;
use reqwest::header::ACCEPT;
use tracing::{debug, instrument};
use url::Url;

use super::CatalogError;

/// A source of products.
///
/// One call is one complete fetch-then-parse: it either yields the whole
/// catalog or an error.
#[async_trait]
pub trait CatalogTransport: Send + Sync {
    /// Fetch and decode the full product list.
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Fetches the catalog with a single unauthenticated `GET`.
#[derive(Debug, Clone)]
pub struct HttpCatalogTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpCatalogTransport {
    /// Create a transport for `endpoint`.
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl CatalogTransport for HttpCatalogTransport {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Catalog returned non-success status"
            );
            return Err(CatalogError::Status(status));
        }

        let products: Vec<Product> = match serde_json::from_str(&response_text) {
            Ok(products) => products,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse catalog response"
                );
                return Err(CatalogError::Parse(e));
            }
        };

        debug!(count = products.len(), "Fetched catalog");
        Ok(products)
    }
}
