//! App Context

use std::sync::Arc;

use crate::catalog::{CatalogService, DEFAULT_BASE_URL, HttpCatalogService};

/// Handles the storefront views depend on, injected explicitly rather than
/// reached through globals. Lives for one application session.
#[derive(Clone)]
pub struct AppContext {
    /// Remote catalog client.
    pub catalog: Arc<dyn CatalogService>,
}

impl AppContext {
    /// Build a context around any catalog implementation.
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogService>) -> Self {
        Self { catalog }
    }

    /// Build a context talking HTTP to the given catalog base URL.
    #[must_use]
    pub fn from_base_url(base_url: &str) -> Self {
        Self::new(Arc::new(HttpCatalogService::new(base_url)))
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::from_base_url(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::catalog::MockCatalogService;

    use super::*;

    #[tokio::test]
    async fn context_forwards_to_the_injected_catalog() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_list_products()
            .once()
            .return_once(|| Ok(vec![]));

        let context = AppContext::new(Arc::new(catalog));

        let products = context.catalog.list_products().await?;

        assert!(products.is_empty());

        Ok(())
    }
}
