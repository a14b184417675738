//! Product form drafts and validation

use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::Decimal;
use thiserror::Error;

/// Categories offered when creating or editing a product. Products fetched
/// from the catalog may carry other labels.
pub const CATEGORIES: [&str; 4] = [
    "electronics",
    "jewelery",
    "men's clothing",
    "women's clothing",
];

/// Image used when the draft leaves the image URL blank.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://fakestoreapi.com/img/placeholder.jpg";

/// Form fields exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    /// Title field.
    pub title: String,

    /// Price field, unparsed.
    pub price: String,

    /// Description field.
    pub description: String,

    /// Selected category.
    pub category: String,

    /// Optional image URL field.
    pub image: String,
}

/// A validated draft, ready to send to the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    /// Trimmed title.
    pub title: String,

    /// Strictly positive price.
    pub price: Decimal,

    /// Trimmed description.
    pub description: String,

    /// Trimmed image URL, or the placeholder when left blank.
    pub image: String,

    /// One of [`CATEGORIES`].
    pub category: String,
}

/// A single violated validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    /// Title is blank.
    #[error("Product title is required")]
    TitleRequired,

    /// Price is missing, unparseable, or not strictly positive.
    #[error("Valid price is required")]
    PriceRequired,

    /// Description is blank.
    #[error("Product description is required")]
    DescriptionRequired,

    /// Category is missing or not one of [`CATEGORIES`].
    #[error("Category is required")]
    CategoryRequired,
}

/// Every rule a draft violated, shown together rather than one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftErrors(Vec<DraftError>);

impl DraftErrors {
    /// The violations, in field order.
    #[must_use]
    pub fn violations(&self) -> &[DraftError] {
        &self.0
    }
}

impl Display for DraftErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;

        for violation in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            Display::fmt(violation, f)?;
        }

        Ok(())
    }
}

impl std::error::Error for DraftErrors {}

impl ProductDraft {
    /// Pre-fill a draft from an existing product, for editing.
    #[must_use]
    pub fn from_product(product: &crate::products::Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
        }
    }

    /// Validate the draft, collecting every violation before any network
    /// call is made.
    ///
    /// # Errors
    ///
    /// Returns all violated rules together when any field is invalid.
    pub fn validate(&self) -> Result<ProductInput, DraftErrors> {
        let mut violations = Vec::new();

        if self.title.trim().is_empty() {
            violations.push(DraftError::TitleRequired);
        }

        let price = self
            .price
            .trim()
            .parse::<Decimal>()
            .ok()
            .filter(|value| *value > Decimal::ZERO);
        if price.is_none() {
            violations.push(DraftError::PriceRequired);
        }

        if self.description.trim().is_empty() {
            violations.push(DraftError::DescriptionRequired);
        }

        if !CATEGORIES.contains(&self.category.as_str()) {
            violations.push(DraftError::CategoryRequired);
        }

        let Some(price) = price else {
            return Err(DraftErrors(violations));
        };

        if !violations.is_empty() {
            return Err(DraftErrors(violations));
        }

        let image = self.image.trim();

        Ok(ProductInput {
            title: self.title.trim().to_string(),
            price,
            description: self.description.trim().to_string(),
            image: if image.is_empty() {
                PLACEHOLDER_IMAGE_URL.to_string()
            } else {
                image.to_string()
            },
            category: self.category.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            title: "Walnut Desk".to_string(),
            price: "129.99".to_string(),
            description: "A sturdy desk.".to_string(),
            category: "electronics".to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn valid_draft_passes_with_trimming_and_placeholder() -> TestResult {
        let mut draft = valid_draft();
        draft.title = "  Walnut Desk  ".to_string();
        draft.description = " A sturdy desk. ".to_string();

        let input = draft.validate()?;

        assert_eq!(input.title, "Walnut Desk");
        assert_eq!(input.description, "A sturdy desk.");
        assert_eq!(input.price, Decimal::new(12999, 2));
        assert_eq!(input.image, PLACEHOLDER_IMAGE_URL);
        assert_eq!(input.category, "electronics");

        Ok(())
    }

    #[test]
    fn provided_image_url_is_kept() -> TestResult {
        let mut draft = valid_draft();
        draft.image = " https://example.com/desk.jpg ".to_string();

        let input = draft.validate()?;

        assert_eq!(input.image, "https://example.com/desk.jpg");

        Ok(())
    }

    #[test]
    fn blank_title_and_zero_price_are_reported_together() {
        let mut draft = valid_draft();
        draft.title = "   ".to_string();
        draft.price = "0".to_string();

        let errors = draft.validate().unwrap_err();

        assert_eq!(
            errors.violations(),
            [DraftError::TitleRequired, DraftError::PriceRequired]
        );
        assert_eq!(
            errors.to_string(),
            "Product title is required, Valid price is required"
        );
    }

    #[test]
    fn negative_and_unparseable_prices_are_rejected() {
        for bad_price in ["-1", "abc", ""] {
            let mut draft = valid_draft();
            draft.price = bad_price.to_string();

            let errors = draft.validate().unwrap_err();

            assert_eq!(errors.violations(), [DraftError::PriceRequired]);
        }
    }

    #[test]
    fn category_outside_the_fixed_set_is_rejected() {
        let mut draft = valid_draft();
        draft.category = "gardening".to_string();

        let errors = draft.validate().unwrap_err();

        assert_eq!(errors.violations(), [DraftError::CategoryRequired]);
    }

    #[test]
    fn all_rules_can_fail_at_once() {
        let draft = ProductDraft::default();

        let errors = draft.validate().unwrap_err();

        assert_eq!(
            errors.violations(),
            [
                DraftError::TitleRequired,
                DraftError::PriceRequired,
                DraftError::DescriptionRequired,
                DraftError::CategoryRequired,
            ]
        );
    }

    #[test]
    fn from_product_round_trips_through_validate() -> TestResult {
        use crate::products::{Product, Rating};

        let product = Product {
            id: 7,
            title: "Brass Lamp".to_string(),
            description: "Warm light.".to_string(),
            price: Decimal::new(4550, 2),
            image: "https://example.com/lamp.jpg".to_string(),
            category: "jewelery".to_string(),
            rating: Rating::default(),
        };

        let input = ProductDraft::from_product(&product).validate()?;

        assert_eq!(input.title, product.title);
        assert_eq!(input.price, product.price);
        assert_eq!(input.image, product.image);
        assert_eq!(input.category, product.category);

        Ok(())
    }
}
