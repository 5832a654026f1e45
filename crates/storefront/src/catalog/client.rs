//! Cached catalog client.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use quickcart_core::{LoadState, Product, ProductId};
use tracing::{debug, instrument};

use super::cache::{CacheKey, CachedProducts};
use super::{CatalogError, CatalogTransport, HttpCatalogTransport};
use crate::config::CatalogConfig;

/// Client for the remote product catalog.
///
/// Cheap to clone. The loaded product list is cached for the configured TTL;
/// concurrent loads of an empty cache share one request.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    transport: Arc<dyn CatalogTransport>,
    cache: Cache<CacheKey, CachedProducts>,
}

impl CatalogClient {
    /// Create a client that fetches over HTTP.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        Self::with_transport(
            HttpCatalogTransport::new(config.url.clone()),
            config.cache_ttl,
        )
    }

    /// Create a client over any transport.
    #[must_use]
    pub fn with_transport(transport: impl CatalogTransport + 'static, ttl: Duration) -> Self {
        let cache = Cache::builder().max_capacity(1).time_to_live(ttl).build();

        Self {
            inner: Arc::new(CatalogClientInner {
                transport: Arc::new(transport),
                cache,
            }),
        }
    }

    /// Get the product list, loading it if not cached.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog could not be fetched or decoded.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<CachedProducts, CatalogError> {
        if let Some(products) = self.inner.cache.get(&CacheKey::Products).await {
            debug!("Cache hit for catalog");
            return Ok(products);
        }

        let transport = Arc::clone(&self.inner.transport);
        let products = self
            .inner
            .cache
            .try_get_with(CacheKey::Products, async move {
                transport.fetch_products().await.map(Arc::new)
            })
            .await?;

        Ok(products)
    }

    /// Load the product list as a [`LoadState`].
    ///
    /// Failures are logged here and collapse to [`LoadState::Error`].
    pub async fn load(&self) -> LoadState<CachedProducts> {
        let result = self.products().await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "Failed to load catalog");
        }
        LoadState::from_result(result)
    }

    /// Drop the cached catalog and load it again.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog could not be fetched or decoded.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<CachedProducts, CatalogError> {
        self.inner.cache.invalidate(&CacheKey::Products).await;
        self.products().await
    }

    /// Find one product in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ProductNotFound` if no product has `id`, or the
    /// load error if the catalog is unavailable.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.products()
            .await?
            .iter()
            .find(|product| product.id == id)
            .cloned()
            .ok_or(CatalogError::ProductNotFound(id))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use quickcart_core::Price;

    use super::*;

    fn product(id: i32) -> Product {
        Product {
            id: ProductId::new(id),
            category: "jewelery".to_string(),
            description: "Gold plated".to_string(),
            image: format!("https://img.example/{id}.jpg"),
            price: Price::from_cents(695),
            title: format!("Ring {id}"),
        }
    }

    /// Transport that counts calls and fails on demand.
    struct FakeTransport {
        products: Vec<Product>,
        fail: bool,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl CatalogTransport for FakeTransport {
        async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            if self.fail {
                Err(CatalogError::Status(reqwest::StatusCode::BAD_GATEWAY))
            } else {
                Ok(self.products.clone())
            }
        }
    }

    fn client(count: i32, fail: bool) -> (CatalogClient, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let transport = FakeTransport {
            products: (1..=count).map(product).collect(),
            fail,
            calls: Arc::clone(&calls),
        };
        (
            CatalogClient::with_transport(transport, Duration::from_secs(60)),
            calls,
        )
    }

    #[tokio::test]
    async fn test_products_cached_after_first_load() {
        let (client, calls) = client(3, false);

        assert_eq!(client.products().await.unwrap().len(), 3);
        assert_eq!(client.products().await.unwrap().len(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_concurrent_loads_share_one_fetch() {
        let (client, calls) = client(2, false);

        let (a, b) = tokio::join!(client.products(), client.products());
        assert_eq!(a.unwrap().len(), 2);
        assert_eq!(b.unwrap().len(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let (client, calls) = client(2, true);

        assert!(client.products().await.is_err());
        assert!(client.products().await.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_refresh_refetches() {
        let (client, calls) = client(1, false);

        client.products().await.unwrap();
        client.refresh().await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_load_states() {
        let (ok, _) = client(4, false);
        match ok.load().await {
            LoadState::Success(products) => assert_eq!(products.len(), 4),
            other => panic!("expected success, got {other:?}"),
        }

        let (failing, _) = client(4, true);
        assert!(failing.load().await.is_error());
    }

    #[tokio::test]
    async fn test_product_lookup() {
        let (client, _) = client(3, false);

        let found = client.product(ProductId::new(2)).await.unwrap();
        assert_eq!(found.title, "Ring 2");

        let err = client.product(ProductId::new(9)).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
