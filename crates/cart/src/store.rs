//! Cart state machine: an insertion-ordered set of product lines.

use serde::{Deserialize, Serialize};

use ecocart_catalog::Product;
use ecocart_core::{EcoRating, Price, ProductId};

use crate::totals::CartTotals;

/// One cart line: a denormalized product snapshot plus a quantity.
///
/// The quantity is at least 1 while the line exists; zero-quantity lines
/// collapse to removal in [`CartStore::set_quantity`]. The snapshot is taken
/// at add time and deliberately not refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Line total: unit price times quantity.
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Serializable cart state: the ordered list of lines.
///
/// Round-tripping through serialize/deserialize reproduces an equivalent
/// [`CartStore`].
pub type CartSnapshot = Vec<CartLine>;

/// The cart store.
///
/// Exclusively owns its lines; insertion order is display order, and no two
/// lines share a product id. All operations are infallible: mutations on
/// unknown ids are no-ops, never errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a cart from a previously persisted snapshot.
    pub fn from_snapshot(snapshot: CartSnapshot) -> Self {
        // Snapshots written by this store already uphold the invariants
        // (unique ids, quantity >= 1); replaying through add/set keeps a
        // hand-edited or merged snapshot from violating them.
        let mut store = Self::new();
        for line in snapshot {
            if line.quantity == 0 {
                continue;
            }
            let id = line.product.id.clone();
            store.add_item(line.product);
            store.set_quantity(&id, line.quantity);
        }
        store
    }

    /// Current state as a serializable snapshot.
    pub fn snapshot(&self) -> CartSnapshot {
        self.lines.clone()
    }

    /// Add one unit of `product`.
    ///
    /// An existing line gains quantity (its stored snapshot is untouched);
    /// otherwise a new line is appended with quantity 1.
    pub fn add_item(&mut self, product: Product) {
        if let Some(line) = self.line_mut(&product.id) {
            line.quantity += 1;
            tracing::debug!(product_id = %product.id, quantity = line.quantity, "cart quantity bumped");
            return;
        }
        tracing::debug!(product_id = %product.id, "cart line added");
        self.lines.push(CartLine {
            product,
            quantity: 1,
        });
    }

    /// Remove the line for `product_id`. No-op when absent.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        let before = self.lines.len();
        self.lines.retain(|line| line.product.id != *product_id);
        if self.lines.len() != before {
            tracing::debug!(product_id = %product_id, "cart line removed");
        }
    }

    /// Set the quantity for `product_id`.
    ///
    /// Zero removes the line (negative quantities are unrepresentable by
    /// type); a missing line is a no-op.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(product_id);
            return;
        }
        if let Some(line) = self.line_mut(product_id) {
            line.quantity = quantity;
        }
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up the line for a product, if present.
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == *product_id)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of line totals.
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Quantity-weighted average eco rating, bucketed back to a letter.
    ///
    /// `None` for an empty cart.
    pub fn average_eco_rating(&self) -> Option<EcoRating> {
        if self.lines.is_empty() {
            return None;
        }
        let total_units = u64::from(self.item_count());
        let weight_sum: u64 = self
            .lines
            .iter()
            .map(|l| u64::from(l.product.eco_rating.weight()) * u64::from(l.quantity))
            .sum();
        let mean = weight_sum as f64 / total_units as f64;
        Some(EcoRating::from_weighted_mean(mean))
    }

    /// Checkout summary (subtotal, shipping, tax, total).
    pub fn totals(&self) -> CartTotals {
        CartTotals::for_subtotal(self.subtotal())
    }

    fn line_mut(&mut self, product_id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product.id == *product_id)
    }
}
