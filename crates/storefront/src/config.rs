//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL for the storefront (default: <http://localhost:3000>)
//! - `CATALOG_URL` - Product catalog endpoint (default: <https://fakestoreapi.com/products>)
//! - `CATALOG_CACHE_TTL_SECS` - How long a loaded catalog is reused (default: 300)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_TRACES_SAMPLE_RATE` - Fraction of requests traced (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default remote catalog endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

const DEFAULT_CATALOG_CACHE_TTL_SECS: u64 = 300;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Remote catalog configuration
    pub catalog: CatalogConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (e.g. "production")
    pub sentry_environment: Option<String>,
    /// Fraction of transactions sent to Sentry
    pub sentry_traces_sample_rate: f32,
}

/// Remote catalog configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Endpoint returning a JSON array of products
    pub url: Url,
    /// Lifetime of a cached catalog
    pub cache_ttl: Duration,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_var(&lookup, "STOREFRONT_HOST", "127.0.0.1", |v| {
            v.parse::<IpAddr>().map_err(|e| e.to_string())
        })?;
        let port = parse_var(&lookup, "STOREFRONT_PORT", "3000", |v| {
            v.parse::<u16>().map_err(|e| e.to_string())
        })?;
        let base_url = parse_var(&lookup, "STOREFRONT_BASE_URL", "http://localhost:3000", |v| {
            Url::parse(v)
                .map(|_| v.trim_end_matches('/').to_string())
                .map_err(|e| e.to_string())
        })?;

        let catalog = CatalogConfig::from_lookup(&lookup)?;

        let sentry_dsn = lookup("SENTRY_DSN").filter(|v| !v.is_empty());
        let sentry_environment = lookup("SENTRY_ENVIRONMENT").filter(|v| !v.is_empty());
        let sentry_traces_sample_rate =
            parse_var(&lookup, "SENTRY_TRACES_SAMPLE_RATE", "0.0", |v| {
                v.parse::<f32>()
                    .map_err(|e| e.to_string())
                    .and_then(|rate| {
                        if (0.0..=1.0).contains(&rate) {
                            Ok(rate)
                        } else {
                            Err("must be between 0.0 and 1.0".to_string())
                        }
                    })
            })?;

        Ok(Self {
            host,
            port,
            base_url,
            catalog,
            sentry_dsn,
            sentry_environment,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the storefront is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl CatalogConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = parse_var(lookup, "CATALOG_URL", DEFAULT_CATALOG_URL, |v| {
            let url = Url::parse(v).map_err(|e| e.to_string())?;
            match url.scheme() {
                "http" | "https" => Ok(url),
                other => Err(format!("unsupported scheme '{other}'")),
            }
        })?;
        let ttl_secs = parse_var(
            lookup,
            "CATALOG_CACHE_TTL_SECS",
            &DEFAULT_CATALOG_CACHE_TTL_SECS.to_string(),
            |v| v.parse::<u64>().map_err(|e| e.to_string()),
        )?;

        Ok(Self {
            url,
            cache_ttl: Duration::from_secs(ttl_secs),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Read `key` (or `default` when unset or empty) and parse it.
fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
    parse: impl FnOnce(&str) -> Result<T, String>,
) -> Result<T, ConfigError> {
    let raw = lookup(key).filter(|v| !v.trim().is_empty());
    let value = raw.as_deref().unwrap_or(default).trim();
    parse(value).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.catalog.url.as_str(), DEFAULT_CATALOG_URL);
        assert_eq!(config.catalog.cache_ttl, Duration::from_secs(300));
        assert!(config.sentry_dsn.is_none());
        assert!(!config.is_secure());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("STOREFRONT_HOST", "0.0.0.0"),
            ("STOREFRONT_PORT", "8080"),
            ("STOREFRONT_BASE_URL", "https://shop.example.com/"),
            ("CATALOG_URL", "http://127.0.0.1:9000/products"),
            ("CATALOG_CACHE_TTL_SECS", "5"),
            ("SENTRY_DSN", "https://key@sentry.example.com/1"),
        ])
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.base_url, "https://shop.example.com");
        assert!(config.is_secure());
        assert_eq!(config.catalog.url.port(), Some(9000));
        assert_eq!(config.catalog.cache_ttl, Duration::from_secs(5));
        assert!(config.sentry_dsn.is_some());
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let config = load(&[("STOREFRONT_PORT", ""), ("SENTRY_DSN", "")]).unwrap();
        assert_eq!(config.port, 3000);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("STOREFRONT_PORT", "not-a-port")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "STOREFRONT_PORT"));
    }

    #[test]
    fn test_catalog_url_rejects_other_schemes() {
        let err = load(&[("CATALOG_URL", "ftp://example.com/products")]).unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));

        assert!(load(&[("CATALOG_URL", "not a url")]).is_err());
    }

    #[test]
    fn test_sample_rate_bounds() {
        assert!(load(&[("SENTRY_TRACES_SAMPLE_RATE", "1.5")]).is_err());
        let config = load(&[("SENTRY_TRACES_SAMPLE_RATE", "0.25")]).unwrap();
        assert!((config.sentry_traces_sample_rate - 0.25).abs() < f32::EPSILON);
    }
}
