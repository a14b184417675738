//! Catalog listing derivation
//!
//! The rendered product list is always a derived view over the last fetched
//! snapshot: an exact-match category filter followed by a non-destructive
//! stable sort. Recomputing with the same inputs yields an identical
//! sequence.

use crate::products::Product;

/// Category selector for the product listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Keep every product.
    #[default]
    All,

    /// Keep only products whose category equals this value exactly.
    Named(String),
}

impl CategoryFilter {
    /// Sentinel value the UI uses for [`CategoryFilter::All`].
    pub const ALL: &'static str = "all";

    /// Parse a selector value as submitted by the UI.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == Self::ALL {
            Self::All
        } else {
            Self::Named(raw.to_string())
        }
    }

    /// The selector value for this filter.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => Self::ALL,
            Self::Named(name) => name,
        }
    }

    fn keeps(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => product.category == *name,
        }
    }
}

/// Sort selector for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Preserve the snapshot's original relative order.
    #[default]
    Default,

    /// Ascending by price; ties keep snapshot order.
    PriceLowToHigh,

    /// Descending by price; ties keep snapshot order.
    PriceHighToLow,

    /// Descending by rating score; ties keep snapshot order.
    Rating,

    /// Ascending by title, compared case-insensitively; ties keep snapshot
    /// order.
    Name,
}

impl SortMode {
    /// Parse a selector value as submitted by the UI; unknown values fall
    /// back to [`SortMode::Default`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "price-low" => Self::PriceLowToHigh,
            "price-high" => Self::PriceHighToLow,
            "rating" => Self::Rating,
            "name" => Self::Name,
            _ => Self::Default,
        }
    }

    /// The selector value for this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PriceLowToHigh => "price-low",
            Self::PriceHighToLow => "price-high",
            Self::Rating => "rating",
            Self::Name => "name",
        }
    }

    /// Human label for the sort `<select>`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Sort by: Default",
            Self::PriceLowToHigh => "Price: Low to High",
            Self::PriceHighToLow => "Price: High to Low",
            Self::Rating => "Highest Rated",
            Self::Name => "Name: A to Z",
        }
    }

    /// Every mode, in menu order.
    #[must_use]
    pub fn all() -> [Self; 5] {
        [
            Self::Default,
            Self::PriceLowToHigh,
            Self::PriceHighToLow,
            Self::Rating,
            Self::Name,
        ]
    }
}

/// Number of snapshot products carrying one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    /// Category label.
    pub category: String,

    /// Products in the full snapshot with that category.
    pub count: usize,
}

/// Derive the list of products to display from the snapshot and the two
/// selectors. The snapshot is never mutated.
#[must_use]
pub fn derive_listing(
    snapshot: &[Product],
    filter: &CategoryFilter,
    sort: SortMode,
) -> Vec<Product> {
    let mut listing: Vec<Product> = snapshot
        .iter()
        .filter(|product| filter.keeps(product))
        .cloned()
        .collect();

    // Vec::sort_by is stable, which keeps equal keys in snapshot order.
    match sort {
        SortMode::Default => {}
        SortMode::PriceLowToHigh => listing.sort_by(|a, b| a.price.cmp(&b.price)),
        SortMode::PriceHighToLow => listing.sort_by(|a, b| b.price.cmp(&a.price)),
        SortMode::Rating => listing.sort_by(|a, b| b.rating.rate.cmp(&a.rating.rate)),
        SortMode::Name => listing.sort_by(|a, b| {
            a.title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
        }),
    }

    listing
}

/// Selector options for the current snapshot: the `all` sentinel followed by
/// the distinct categories in first-appearance order.
#[must_use]
pub fn category_options(snapshot: &[Product]) -> Vec<String> {
    let mut options = vec![CategoryFilter::ALL.to_string()];

    for product in snapshot {
        if !options.iter().any(|existing| *existing == product.category) {
            options.push(product.category.clone());
        }
    }

    options
}

/// Per-category product counts, always computed against the full snapshot
/// rather than the filtered view.
#[must_use]
pub fn category_counts(snapshot: &[Product]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();

    for product in snapshot {
        match counts
            .iter_mut()
            .find(|entry| entry.category == product.category)
        {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                category: product.category.clone(),
                count: 1,
            }),
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::products::Rating;

    use super::*;

    fn product(id: u64, title: &str, category: &str, price: Decimal, rate: Decimal) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: String::new(),
            price,
            image: String::new(),
            category: category.to_string(),
            rating: Rating { rate, count: 10 },
        }
    }

    fn snapshot() -> Vec<Product> {
        vec![
            product(1, "Walnut Desk", "a", Decimal::from(10), Decimal::from(3)),
            product(2, "Brass Lamp", "b", Decimal::from(10), Decimal::from(5)),
            product(3, "Armchair", "a", Decimal::from(5), Decimal::from(4)),
        ]
    }

    #[test]
    fn filter_keeps_exact_category_matches_only() {
        let snapshot = snapshot();

        let listing = derive_listing(
            &snapshot,
            &CategoryFilter::Named("a".to_string()),
            SortMode::Default,
        );

        let ids: Vec<u64> = listing.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn filter_all_keeps_everything_in_snapshot_order() {
        let snapshot = snapshot();

        let listing = derive_listing(&snapshot, &CategoryFilter::All, SortMode::Default);

        let ids: Vec<u64> = listing.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn derivation_does_not_mutate_the_snapshot() {
        let snapshot = snapshot();
        let before = snapshot.clone();

        let _listing = derive_listing(&snapshot, &CategoryFilter::All, SortMode::PriceLowToHigh);

        assert_eq!(snapshot, before);
    }

    #[test]
    fn price_sort_is_stable_on_ties() {
        let snapshot = snapshot();

        let listing = derive_listing(&snapshot, &CategoryFilter::All, SortMode::PriceLowToHigh);

        // Products 1 and 2 share a price; the snapshot order between them is
        // preserved behind the cheaper product 3.
        let ids: Vec<u64> = listing.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn price_high_sorts_descending() {
        let snapshot = snapshot();

        let listing = derive_listing(&snapshot, &CategoryFilter::All, SortMode::PriceHighToLow);

        let ids: Vec<u64> = listing.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn rating_sorts_descending_by_score() {
        let snapshot = snapshot();

        let listing = derive_listing(&snapshot, &CategoryFilter::All, SortMode::Rating);

        let ids: Vec<u64> = listing.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn name_sort_is_case_insensitive() {
        let snapshot = vec![
            product(1, "zinc bowl", "a", Decimal::ONE, Decimal::ONE),
            product(2, "Armchair", "a", Decimal::ONE, Decimal::ONE),
            product(3, "brass lamp", "a", Decimal::ONE, Decimal::ONE),
        ];

        let listing = derive_listing(&snapshot, &CategoryFilter::All, SortMode::Name);

        let ids: Vec<u64> = listing.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn empty_snapshot_yields_empty_listing_and_bare_options() {
        let listing = derive_listing(&[], &CategoryFilter::All, SortMode::Rating);

        assert!(listing.is_empty());
        assert_eq!(category_options(&[]), vec!["all".to_string()]);
        assert!(category_counts(&[]).is_empty());
    }

    #[test]
    fn category_options_are_distinct_and_in_first_appearance_order() {
        let snapshot = vec![
            product(1, "A", "a", Decimal::ONE, Decimal::ONE),
            product(2, "B", "b", Decimal::ONE, Decimal::ONE),
            product(3, "C", "a", Decimal::ONE, Decimal::ONE),
        ];

        assert_eq!(
            category_options(&snapshot),
            vec!["all".to_string(), "a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn category_counts_cover_the_full_snapshot() {
        let snapshot = snapshot();

        let counts = category_counts(&snapshot);

        assert_eq!(
            counts,
            vec![
                CategoryCount {
                    category: "a".to_string(),
                    count: 2
                },
                CategoryCount {
                    category: "b".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn selector_round_trips_through_parse_and_as_str() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("jewelery"),
            CategoryFilter::Named("jewelery".to_string())
        );
        assert_eq!(CategoryFilter::Named("b".to_string()).as_str(), "b");

        for mode in SortMode::all() {
            assert_eq!(SortMode::parse(mode.as_str()), mode);
        }
        assert_eq!(SortMode::parse("unknown"), SortMode::Default);
    }

    // The listing scenario from the storefront: two products, a category
    // matching only the first, then back to "all" under the default sort.
    #[test]
    fn narrowing_then_clearing_the_category_restores_snapshot_order() {
        let snapshot = vec![
            product(1, "Walnut Desk", "a", Decimal::from(10), Decimal::from(3)),
            product(2, "Brass Lamp", "b", Decimal::from(10), Decimal::from(5)),
        ];

        let narrowed = derive_listing(
            &snapshot,
            &CategoryFilter::Named("a".to_string()),
            SortMode::Name,
        );

        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].title, "Walnut Desk");

        let restored = derive_listing(&snapshot, &CategoryFilter::All, SortMode::Default);

        let ids: Vec<u64> = restored.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
