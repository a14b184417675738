//! Wire records for the catalog JSON contract.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use vitrine::{
    drafts::ProductInput,
    products::{Product, Rating},
};

/// Product as returned by the catalog service.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    /// Service-assigned identifier.
    pub id: u64,

    /// Product title.
    pub title: String,

    /// Price as a JSON number.
    pub price: Decimal,

    /// Product description.
    pub description: String,

    /// Category label, arbitrary text.
    pub category: String,

    /// Image URL.
    pub image: String,

    /// Aggregate rating; mutation responses may omit it.
    #[serde(default)]
    pub rating: RatingRecord,
}

/// Rating block within a [`ProductRecord`].
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RatingRecord {
    /// Average score, 0 to 5.
    #[serde(default)]
    pub rate: Decimal,

    /// Number of reviews.
    #[serde(default)]
    pub count: u64,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            price: record.price,
            image: record.image,
            category: record.category,
            rating: Rating {
                rate: record.rating.rate,
                count: record.rating.count,
            },
        }
    }
}

/// Request body for create and update, exactly the contract shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    /// Product title.
    pub title: String,

    /// Strictly positive price.
    pub price: Decimal,

    /// Product description.
    pub description: String,

    /// Image URL, already defaulted by validation.
    pub image: String,

    /// One of the creation categories.
    pub category: String,
}

impl From<&ProductInput> for ProductPayload {
    fn from(input: &ProductInput) -> Self {
        Self {
            title: input.title.clone(),
            price: input.price,
            description: input.description.clone(),
            image: input.image.clone(),
            category: input.category.clone(),
        }
    }
}

impl ProductPayload {
    /// Build the product a mutation is agreed to have produced. The id comes
    /// from the caller (assigned by the service on create, taken from the
    /// request path on update); the response body is not trusted for it.
    #[must_use]
    pub(crate) fn into_product(self, id: u64) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            image: self.image,
            category: self.category,
            rating: Rating::default(),
        }
    }
}

/// Create response: only the assigned id is trusted.
#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct CreatedRecord {
    pub(crate) id: u64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn record_decodes_the_catalog_shape() -> TestResult {
        let record: ProductRecord = serde_json::from_value(json!({
            "id": 1,
            "title": "Walnut Desk",
            "price": 109.95,
            "description": "A sturdy desk.",
            "category": "furniture",
            "image": "https://example.com/desk.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }))?;

        let product = Product::from(record);

        assert_eq!(product.id, 1);
        assert_eq!(product.price, Decimal::new(10995, 2));
        assert_eq!(product.rating.rate, Decimal::new(39, 1));
        assert_eq!(product.rating.count, 120);

        Ok(())
    }

    #[test]
    fn absent_rating_defaults_to_zero() -> TestResult {
        let record: ProductRecord = serde_json::from_value(json!({
            "id": 21,
            "title": "Brass Lamp",
            "price": 13.5,
            "description": "Warm light.",
            "category": "electronics",
            "image": "https://example.com/lamp.jpg"
        }))?;

        assert_eq!(record.rating.rate, Decimal::ZERO);
        assert_eq!(record.rating.count, 0);

        Ok(())
    }

    #[test]
    fn payload_serializes_to_the_contract_shape() -> TestResult {
        let payload = ProductPayload {
            title: "Walnut Desk".to_string(),
            price: Decimal::new(12999, 2),
            description: "A sturdy desk.".to_string(),
            image: "https://example.com/desk.jpg".to_string(),
            category: "electronics".to_string(),
        };

        let value = serde_json::to_value(&payload)?;

        assert_eq!(
            value,
            json!({
                "title": "Walnut Desk",
                "price": 129.99,
                "description": "A sturdy desk.",
                "image": "https://example.com/desk.jpg",
                "category": "electronics"
            })
        );

        Ok(())
    }

    #[test]
    fn into_product_takes_the_id_from_the_caller() {
        let payload = ProductPayload {
            title: "Walnut Desk".to_string(),
            price: Decimal::new(12999, 2),
            description: "A sturdy desk.".to_string(),
            image: "https://example.com/desk.jpg".to_string(),
            category: "electronics".to_string(),
        };

        let product = payload.into_product(42);

        assert_eq!(product.id, 42);
        assert_eq!(product.title, "Walnut Desk");
        assert_eq!(product.rating, Rating::default());
    }
}
