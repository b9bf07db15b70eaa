//! Product records and the product supply boundary.

use serde::{Deserialize, Serialize};

use ecocart_core::{EcoRating, Price, ProductId};

/// Catalog product record.
///
/// Immutable once loaded; owned by the composition root for the session.
/// Serialized with camelCase field names so persisted cart snapshots keep
/// the original storefront's wire shape (`ecoRating`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    /// Image URL; opaque to the core, rendered by the host UI.
    pub image: String,
    pub eco_rating: EcoRating,
    pub category: String,
    pub brand: String,
    pub materials: Vec<String>,
    /// Suggested greener alternatives by id. May reference ids that are not
    /// in the catalog; resolution drops those silently.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<ProductId>,
}

/// Supplies the product list for a session.
///
/// The core treats the result as a static snapshot; there is no
/// subscription or refresh contract.
pub trait ProductSource {
    fn list_products(&self) -> Vec<Product>;
}

impl<S> ProductSource for std::sync::Arc<S>
where
    S: ProductSource + ?Sized,
{
    fn list_products(&self) -> Vec<Product> {
        (**self).list_products()
    }
}

/// Distinct categories in first-seen order (feeds the filter sidebar).
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut seen = Vec::new();
    for p in products {
        if !seen.contains(&p.category) {
            seen.push(p.category.clone());
        }
    }
    seen
}

/// Distinct brands in first-seen order.
pub fn distinct_brands(products: &[Product]) -> Vec<String> {
    let mut seen = Vec::new();
    for p in products {
        if !seen.contains(&p.brand) {
            seen.push(p.brand.clone());
        }
    }
    seen
}
