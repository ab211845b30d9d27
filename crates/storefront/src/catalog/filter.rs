//! Listing-page filtering and sorting.
//!
//! The listing page filters and sorts client-side over the fetched page;
//! this logic is pure so every widget shares one implementation.

use rust_decimal::Decimal;

use super::types::Product;

/// Sort order for the product listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOption {
    /// Catalog order, unchanged.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    RatingAsc,
    RatingDesc,
    NameAsc,
    NameDesc,
}

/// Listing filters; `None`/empty fields are inactive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Case-insensitive substring match on the title.
    pub search: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    /// Products missing a rating count as rated 0.
    pub min_rating: Option<f64>,
}

impl ProductFilter {
    fn matches(&self, product: &Product) -> bool {
        if let Some(search) = &self.search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() && !product.title.to_lowercase().contains(&needle) {
                return false;
            }
        }
        if self.min_price.is_some_and(|min| product.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| product.price > max) {
            return false;
        }
        if self
            .min_rating
            .is_some_and(|min| product.rating.unwrap_or(0.0) < min)
        {
            return false;
        }
        true
    }
}

/// Apply filters, then sort (stable, so equal keys keep catalog order).
#[must_use]
pub fn filter_and_sort(
    products: &[Product],
    filter: &ProductFilter,
    sort: SortOption,
) -> Vec<Product> {
    let mut list: Vec<Product> = products
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect();

    match sort {
        SortOption::Default => {}
        SortOption::PriceAsc => list.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOption::PriceDesc => list.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOption::RatingAsc => list.sort_by(|a, b| rating_of(a).total_cmp(&rating_of(b))),
        SortOption::RatingDesc => list.sort_by(|a, b| rating_of(b).total_cmp(&rating_of(a))),
        SortOption::NameAsc => list.sort_by(|a, b| a.title.cmp(&b.title)),
        SortOption::NameDesc => list.sort_by(|a, b| b.title.cmp(&a.title)),
    }

    list
}

fn rating_of(product: &Product) -> f64 {
    product.rating.unwrap_or(0.0)
}
