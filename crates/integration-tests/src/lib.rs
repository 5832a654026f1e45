//! Integration tests for Quickcart.
//!
//! Each test boots a fake catalog endpoint and a storefront on ephemeral
//! local ports, then talks to the storefront over real HTTP with a
//! cookie-keeping client.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p quickcart-integration-tests
//! ```

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use quickcart_storefront::{app, config::StorefrontConfig, state::AppState};
use reqwest::Client;
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// What the fake catalog endpoint answers with.
#[derive(Clone)]
pub enum CatalogResponse {
    /// 200 with this JSON body.
    Products(Value),
    /// A bare status code with an empty body.
    Status(StatusCode),
}

#[derive(Clone)]
struct FakeCatalog {
    response: CatalogResponse,
    hits: Arc<AtomicUsize>,
}

async fn serve_catalog(State(fake): State<FakeCatalog>) -> axum::response::Response {
    use axum::response::IntoResponse;

    fake.hits.fetch_add(1, Ordering::SeqCst);
    match fake.response {
        CatalogResponse::Products(body) => Json(body).into_response(),
        CatalogResponse::Status(status) => status.into_response(),
    }
}

/// A running storefront wired to a fake catalog.
pub struct TestContext {
    pub client: Client,
    pub storefront_url: String,
    catalog_hits: Arc<AtomicUsize>,
}

impl TestContext {
    /// Start a fake catalog and a storefront that loads from it.
    ///
    /// # Panics
    ///
    /// Panics if a listener cannot be bound or the configuration is rejected.
    pub async fn start(response: CatalogResponse) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let catalog = Router::new()
            .route("/products", get(serve_catalog))
            .with_state(FakeCatalog {
                response,
                hits: Arc::clone(&hits),
            });
        let catalog_addr = spawn(catalog).await;

        let catalog_url = format!("http://{catalog_addr}/products");
        let config = StorefrontConfig::from_lookup(|key| match key {
            "CATALOG_URL" => Some(catalog_url.clone()),
            _ => None,
        })
        .expect("Test configuration should be valid");
        let storefront_addr = spawn(app(AppState::new(config))).await;

        let client = Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            storefront_url: format!("http://{storefront_addr}"),
            catalog_hits: hits,
        }
    }

    /// Start with a healthy catalog of `products`.
    pub async fn with_products(products: Value) -> Self {
        Self::start(CatalogResponse::Products(products)).await
    }

    /// Absolute storefront URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.storefront_url)
    }

    /// GET `path` and return status and body.
    ///
    /// # Panics
    ///
    /// Panics if the request fails at the transport level.
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed");
        read(response).await
    }

    /// POST a form to `path` and return status and body.
    ///
    /// # Panics
    ///
    /// Panics if the request fails at the transport level.
    pub async fn post(&self, path: &str, form: &[(&str, &str)]) -> (StatusCode, String) {
        let response = self
            .client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST request failed");
        read(response).await
    }

    /// How many times the storefront has fetched the catalog.
    #[must_use]
    pub fn catalog_hits(&self) -> usize {
        self.catalog_hits.load(Ordering::SeqCst)
    }
}

async fn read(response: reqwest::Response) -> (StatusCode, String) {
    let status = response.status();
    let body = response.text().await.expect("Failed to read body");
    (status, body)
}

async fn spawn(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener
        .local_addr()
        .expect("Listener should have a local address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });
    addr
}

/// A product in the catalog endpoint's JSON shape.
#[must_use]
pub fn product_json(id: i32, title: &str, price: f64) -> Value {
    json!({
        "id": id,
        "title": title,
        "price": price,
        "description": format!("{title} description"),
        "category": "electronics",
        "image": format!("https://img.example/{id}.jpg"),
        "rating": { "rate": 4.1, "count": 259 }
    })
}
