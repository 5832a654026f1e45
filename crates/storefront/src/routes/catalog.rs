//! Catalog route handlers.
//!
//! The storefront shell renders the catalog in its loading state; the grid is
//! then fetched as an HTMX fragment from these handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use quickcart_core::{LoadState, Product};
use tracing::instrument;

use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub price: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            category: product.category.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            price: product.price.to_string(),
        }
    }
}

/// Catalog display data for templates.
///
/// Exactly one of `loading`, `error` or a product list is shown.
#[derive(Clone)]
pub struct CatalogView {
    pub loading: bool,
    pub error: bool,
    pub products: Vec<ProductView>,
}

impl CatalogView {
    /// The catalog before its fragment has loaded.
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            loading: true,
            error: false,
            products: Vec::new(),
        }
    }
}

impl<T> From<LoadState<T>> for CatalogView
where
    T: std::ops::Deref<Target = Vec<Product>>,
{
    fn from(state: LoadState<T>) -> Self {
        Self {
            loading: state.is_loading(),
            error: state.is_error(),
            products: state
                .data()
                .map(|products| products.iter().map(ProductView::from).collect())
                .unwrap_or_default(),
        }
    }
}

/// Catalog fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/catalog.html")]
pub struct CatalogTemplate {
    pub catalog: CatalogView,
}

/// Render the product grid, or the error state if the catalog is unavailable.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> CatalogTemplate {
    CatalogTemplate {
        catalog: CatalogView::from(state.catalog().load().await),
    }
}

/// Drop the cached catalog, fetch it again and render the result.
#[instrument(skip(state))]
pub async fn refresh(State(state): State<AppState>) -> CatalogTemplate {
    let result = state.catalog().refresh().await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "Failed to refresh catalog");
    }

    CatalogTemplate {
        catalog: CatalogView::from(LoadState::from_result(result)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use quickcart_core::{Price, ProductId};

    use super::*;

    fn product(id: i32) -> Product {
        Product {
            id: ProductId::new(id),
            category: "women's clothing".to_string(),
            description: "Lightweight jacket".to_string(),
            image: format!("https://img.example/{id}.jpg"),
            price: Price::from_cents(3999),
            title: format!("Jacket {id}"),
        }
    }

    #[test]
    fn test_product_view_formats_price() {
        let view = ProductView::from(&product(5));
        assert_eq!(view.id, "5");
        assert_eq!(view.price, "$39.99");
    }

    #[test]
    fn test_catalog_view_states() {
        let loading = CatalogView::from(LoadState::<Arc<Vec<Product>>>::Loading);
        assert!(loading.loading && !loading.error);

        let error = CatalogView::from(LoadState::<Arc<Vec<Product>>>::Error);
        assert!(error.error && !error.loading);
        assert!(error.products.is_empty());

        let success = CatalogView::from(LoadState::Success(Arc::new(vec![product(1), product(2)])));
        assert!(!success.loading && !success.error);
        assert_eq!(success.products.len(), 2);
    }

    #[test]
    fn test_catalog_template_renders_one_card_per_product() {
        let products = Arc::new((1..=5).map(product).collect::<Vec<_>>());
        let html = CatalogTemplate {
            catalog: CatalogView::from(LoadState::Success(products)),
        }
        .render()
        .unwrap();

        assert_eq!(html.matches("class=\"product-card\"").count(), 5);
        assert!(html.contains("Jacket 3"));
        assert_eq!(html.matches("hx-post=\"/cart/add\"").count(), 5);
        assert!(!html.contains("action=\"/cart/add\""));
        assert!(!html.contains("Something went wrong"));
    }

    #[test]
    fn test_catalog_template_error_has_no_grid() {
        let html = CatalogTemplate {
            catalog: CatalogView::from(LoadState::<Arc<Vec<Product>>>::Error),
        }
        .render()
        .unwrap();

        assert!(html.contains("Something went wrong..."));
        assert!(!html.contains("product-grid"));
        assert!(!html.contains("class=\"product-card\""));
    }

    #[test]
    fn test_catalog_template_loading_polls_fragment() {
        let html = CatalogTemplate {
            catalog: CatalogView::loading(),
        }
        .render()
        .unwrap();

        assert!(html.contains("hx-get=\"/catalog\""));
        assert!(html.contains("progressbar"));
    }
}
