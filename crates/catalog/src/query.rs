//! Catalog query engine: filtering and sorting over a product list.
//!
//! `apply` is a pure function of (products, spec); it never mutates its
//! input and returns a new ordered list.

use serde::{Deserialize, Serialize};

use ecocart_core::EcoRating;

use crate::product::Product;

/// Sort order for catalog results.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    RatingAsc,
    NameAsc,
    NameDesc,
}

impl SortKey {
    /// Parse a sort key, silently falling back to `Featured` for anything
    /// unrecognized. The storefront has always treated unknown keys as the
    /// default order rather than an error.
    pub fn parse_lenient(s: &str) -> SortKey {
        match s {
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            "rating-desc" => SortKey::RatingDesc,
            "rating-asc" => SortKey::RatingAsc,
            "name-asc" => SortKey::NameAsc,
            "name-desc" => SortKey::NameDesc,
            "featured" => SortKey::Featured,
            other => {
                tracing::debug!(sort_key = other, "unknown sort key, using featured");
                SortKey::Featured
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::RatingDesc => "rating-desc",
            SortKey::RatingAsc => "rating-asc",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
        }
    }
}

/// Filter and sort selection for the catalog page.
///
/// Each selection set is OR within the dimension; the three dimensions
/// AND-compose. An empty set means "no filter" on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Selected categories, stored lowercased (matching is case-insensitive).
    categories: Vec<String>,
    /// Selected brands, matched exactly.
    brands: Vec<String>,
    /// Selected eco ratings.
    ratings: Vec<EcoRating>,
    pub sort: SortKey,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a spec from URL query pairs, read once at page load.
    ///
    /// Recognizes the optional `category` and `rating` parameters. A rating
    /// value that is not a known letter grade is ignored.
    pub fn from_query_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut spec = Self::new();
        for (key, value) in pairs {
            match key {
                "category" => spec.toggle_category(value),
                "rating" => {
                    if let Ok(rating) = value.parse::<EcoRating>() {
                        spec.toggle_rating(rating);
                    } else {
                        tracing::debug!(rating = value, "ignoring unknown rating parameter");
                    }
                }
                _ => {}
            }
        }
        spec
    }

    /// Query pairs to write back to the URL.
    ///
    /// Only single selections are reflected: with two or more categories (or
    /// ratings) selected the parameter is omitted entirely. Known limitation
    /// of the storefront, preserved deliberately.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let [category] = self.categories.as_slice() {
            pairs.push(("category".to_string(), category.clone()));
        }
        if let [rating] = self.ratings.as_slice() {
            pairs.push(("rating".to_string(), rating.as_str().to_string()));
        }
        pairs
    }

    /// Toggle a category selection (case-insensitive; stored lowercased).
    pub fn toggle_category(&mut self, category: &str) {
        let category = category.to_lowercase();
        if let Some(pos) = self.categories.iter().position(|c| *c == category) {
            self.categories.remove(pos);
        } else {
            self.categories.push(category);
        }
    }

    pub fn toggle_brand(&mut self, brand: &str) {
        if let Some(pos) = self.brands.iter().position(|b| b == brand) {
            self.brands.remove(pos);
        } else {
            self.brands.push(brand.to_string());
        }
    }

    pub fn toggle_rating(&mut self, rating: EcoRating) {
        if let Some(pos) = self.ratings.iter().position(|r| *r == rating) {
            self.ratings.remove(pos);
        } else {
            self.ratings.push(rating);
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    pub fn ratings(&self) -> &[EcoRating] {
        &self.ratings
    }

    pub fn has_active_filters(&self) -> bool {
        !(self.categories.is_empty() && self.brands.is_empty() && self.ratings.is_empty())
    }

    /// Drop all selections and reset the sort ("Clear all").
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn matches(&self, product: &Product) -> bool {
        if !self.categories.is_empty()
            && !self
                .categories
                .iter()
                .any(|c| product.category.to_lowercase() == *c)
        {
            return false;
        }
        if !self.brands.is_empty() && !self.brands.iter().any(|b| *b == product.brand) {
            return false;
        }
        if !self.ratings.is_empty() && !self.ratings.contains(&product.eco_rating) {
            return false;
        }
        true
    }
}

/// Compute the visible, ordered subset of `products` for `spec`.
///
/// Filtering keeps input order; the sort is stable, so equal keys preserve
/// their prior relative order. `Featured` applies no reordering at all.
pub fn apply(products: &[Product], spec: &FilterSpec) -> Vec<Product> {
    let mut result: Vec<Product> = products
        .iter()
        .filter(|p| spec.matches(p))
        .cloned()
        .collect();

    match spec.sort {
        SortKey::Featured => {}
        SortKey::PriceAsc => result.sort_by_key(|p| p.price),
        SortKey::PriceDesc => result.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::RatingDesc => {
            result.sort_by(|a, b| b.eco_rating.weight().cmp(&a.eco_rating.weight()))
        }
        SortKey::RatingAsc => {
            result.sort_by(|a, b| a.eco_rating.weight().cmp(&b.eco_rating.weight()))
        }
        SortKey::NameAsc => result.sort_by(|a, b| name_key(a).cmp(&name_key(b))),
        SortKey::NameDesc => result.sort_by(|a, b| name_key(b).cmp(&name_key(a))),
    }

    result
}

// Case-insensitive name ordering. Stands in for locale collation, which is
// out of scope for the storefront.
fn name_key(p: &Product) -> String {
    p.name.to_lowercase()
}
