//! Checkout summary math.

use serde::{Deserialize, Serialize};

use ecocart_core::Price;

/// Flat shipping charged on any non-empty cart.
const SHIPPING_FLAT: Price = Price::from_cents(599);

/// Sales tax rate: 7%.
const TAX_PERCENT: u64 = 7;

/// Derived checkout summary for a cart.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub subtotal: Price,
    pub shipping: Price,
    pub tax: Price,
    pub total: Price,
}

impl CartTotals {
    /// Compute the summary for a subtotal.
    ///
    /// Shipping is a flat $5.99 once the cart is non-empty; tax is 7% of the
    /// subtotal rounded to the nearest cent.
    pub fn for_subtotal(subtotal: Price) -> Self {
        let shipping = if subtotal > Price::ZERO {
            SHIPPING_FLAT
        } else {
            Price::ZERO
        };
        let tax = subtotal.percent(TAX_PERCENT, 100);
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}
