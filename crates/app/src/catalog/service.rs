//! Catalog service trait and HTTP implementation.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, Response};
use tracing::debug;

use vitrine::{drafts::ProductInput, products::Product};

use crate::catalog::{
    errors::{CatalogError, RequestError},
    records::{CreatedRecord, ProductPayload, ProductRecord},
};

/// Public catalog endpoint used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Catalog client backed by plain HTTP requests.
///
/// Requests are issued one at a time from the caller's perspective; there is
/// no retry, deduplication, cancellation, or timeout handling here.
#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    client: Client,
    base_url: String,
}

impl HttpCatalogService {
    /// Create a client against the given catalog base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();

        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    fn product_url(&self, id: u64) -> String {
        format!("{}/products/{id}", self.base_url)
    }

    async fn fetch_all(&self) -> Result<Vec<ProductRecord>, RequestError> {
        let response = self.client.get(self.products_url()).send().await?;
        let response = expect_success(response)?;

        Ok(response.json().await?)
    }

    async fn fetch_one(&self, id: u64) -> Result<ProductRecord, RequestError> {
        let response = self.client.get(self.product_url(id)).send().await?;
        let response = expect_success(response)?;

        Ok(response.json().await?)
    }

    async fn post_payload(&self, payload: &ProductPayload) -> Result<CreatedRecord, RequestError> {
        let response = self
            .client
            .post(self.products_url())
            .json(payload)
            .send()
            .await?;
        let response = expect_success(response)?;

        Ok(response.json().await?)
    }

    async fn put_payload(&self, id: u64, payload: &ProductPayload) -> Result<(), RequestError> {
        let response = self
            .client
            .put(self.product_url(id))
            .json(payload)
            .send()
            .await?;

        // The update response body is not trusted; only the status matters
        // and the id stays the one from the request path.
        expect_success(response)?;

        Ok(())
    }

    async fn delete_by_id(&self, id: u64) -> Result<(), RequestError> {
        let response = self.client.delete(self.product_url(id)).send().await?;

        expect_success(response)?;

        Ok(())
    }
}

fn expect_success(response: Response) -> Result<Response, RequestError> {
    let status = response.status();

    if status.is_success() {
        Ok(response)
    } else {
        Err(RequestError::Status(status))
    }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        debug!(url = %self.products_url(), "listing products");

        let records = self.fetch_all().await.map_err(CatalogError::List)?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn get_product(&self, id: u64) -> Result<Product, CatalogError> {
        debug!(id, "fetching product");

        let record = self.fetch_one(id).await.map_err(CatalogError::NotFound)?;

        Ok(record.into())
    }

    async fn create_product(&self, input: ProductInput) -> Result<Product, CatalogError> {
        let payload = ProductPayload::from(&input);

        debug!(title = %payload.title, "creating product");

        let created = self
            .post_payload(&payload)
            .await
            .map_err(CatalogError::Create)?;

        Ok(payload.into_product(created.id))
    }

    async fn update_product(&self, id: u64, input: ProductInput) -> Result<Product, CatalogError> {
        let payload = ProductPayload::from(&input);

        debug!(id, "updating product");

        self.put_payload(id, &payload)
            .await
            .map_err(CatalogError::Update)?;

        Ok(payload.into_product(id))
    }

    async fn delete_product(&self, id: u64) -> Result<(), CatalogError> {
        debug!(id, "deleting product");

        self.delete_by_id(id).await.map_err(CatalogError::Delete)
    }
}

/// Operations the storefront performs against the catalog service.
#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieves the full product catalog.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Retrieve a single product.
    async fn get_product(&self, id: u64) -> Result<Product, CatalogError>;

    /// Creates a product; the service assigns the id.
    async fn create_product(&self, input: ProductInput) -> Result<Product, CatalogError>;

    /// Updates a product in place; the returned product carries the
    /// requested id regardless of what the service echoes back.
    async fn update_product(&self, id: u64, input: ProductInput) -> Result<Product, CatalogError>;

    /// Deletes a product.
    async fn delete_product(&self, id: u64) -> Result<(), CatalogError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    fn input() -> ProductInput {
        ProductInput {
            title: "Walnut Desk".to_string(),
            price: Decimal::new(12999, 2),
            description: "A sturdy desk.".to_string(),
            image: "https://example.com/desk.jpg".to_string(),
            category: "electronics".to_string(),
        }
    }

    #[test]
    fn urls_are_built_from_a_trimmed_base() {
        let service = HttpCatalogService::new("https://catalog.test/");

        assert_eq!(service.products_url(), "https://catalog.test/products");
        assert_eq!(service.product_url(7), "https://catalog.test/products/7");
    }

    #[tokio::test]
    async fn mock_supports_consumer_flows() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_update_product()
            .once()
            .withf(|id, input| *id == 9 && input.title == "Walnut Desk")
            .return_once(|id, input| Ok(ProductPayload::from(&input).into_product(id)));

        catalog.expect_list_products().never();
        catalog.expect_get_product().never();
        catalog.expect_create_product().never();
        catalog.expect_delete_product().never();

        let updated = catalog.update_product(9, input()).await?;

        assert_eq!(updated.id, 9, "update keeps the requested id");

        Ok(())
    }
}
