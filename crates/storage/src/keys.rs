//! Logical storage keys.
//!
//! Same key names the original storefront used in browser local storage, so
//! a persisted state written by one is readable by the other's layout.

/// Cart snapshot: ordered list of cart lines.
pub const CART_ITEMS: &str = "ecoCartItems";

/// User session record.
pub const USER_SESSION: &str = "ecoCartUser";
