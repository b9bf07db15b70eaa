//! Greener-alternative suggestions for a product detail view.

use crate::product::Product;

/// How many fallback suggestions to show at most.
const FALLBACK_LIMIT: usize = 3;

/// Resolve the alternatives to suggest alongside `product`.
///
/// If the product lists alternative ids, those are resolved against the
/// catalog in catalog order; ids that match nothing are dropped silently.
/// With no ids listed, falls back to same-category products with a strictly
/// better eco rating, capped at three.
pub fn alternatives_for(product: &Product, products: &[Product]) -> Vec<Product> {
    if !product.alternatives.is_empty() {
        return products
            .iter()
            .filter(|p| product.alternatives.contains(&p.id))
            .cloned()
            .collect();
    }

    products
        .iter()
        .filter(|p| {
            p.id != product.id
                && p.category == product.category
                && p.eco_rating.weight() > product.eco_rating.weight()
        })
        .take(FALLBACK_LIMIT)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecocart_core::{EcoRating, Price};

    fn product(id: &str, rating: EcoRating, category: &str, alternatives: &[&str]) -> Product {
        Product {
            id: id.parse().unwrap(),
            name: format!("Product {id}"),
            description: String::new(),
            price: Price::from_cents(100),
            image: String::new(),
            eco_rating: rating,
            category: category.to_string(),
            brand: "Brand".to_string(),
            materials: vec![],
            alternatives: alternatives.iter().map(|s| s.parse().unwrap()).collect(),
        }
    }

    #[test]
    fn listed_ids_resolve_in_catalog_order() {
        let catalog = vec![
            product("1", EcoRating::A, "Care", &["3", "2"]),
            product("2", EcoRating::A, "Care", &[]),
            product("3", EcoRating::B, "Care", &[]),
        ];
        let result = alternatives_for(&catalog[0], &catalog);
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn unknown_listed_ids_are_dropped_silently() {
        let catalog = vec![
            product("1", EcoRating::D, "Care", &["99", "2"]),
            product("2", EcoRating::A, "Care", &[]),
        ];
        let result = alternatives_for(&catalog[0], &catalog);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "2");
    }

    #[test]
    fn fallback_suggests_better_rated_same_category_capped_at_three() {
        let catalog = vec![
            product("1", EcoRating::D, "Care", &[]),
            product("2", EcoRating::A, "Care", &[]),
            product("3", EcoRating::B, "Care", &[]),
            product("4", EcoRating::C, "Care", &[]),
            product("5", EcoRating::A, "Care", &[]),
            product("6", EcoRating::A, "Kitchen", &[]),
            product("7", EcoRating::F, "Care", &[]),
        ];
        let result = alternatives_for(&catalog[0], &catalog);
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        // Better-rated, same category, input order, first three.
        assert_eq!(ids, vec!["2", "3", "4"]);
    }

    #[test]
    fn fallback_is_empty_when_nothing_rates_better() {
        let catalog = vec![
            product("1", EcoRating::A, "Care", &[]),
            product("2", EcoRating::B, "Care", &[]),
        ];
        assert!(alternatives_for(&catalog[0], &catalog).is_empty());
    }
}
