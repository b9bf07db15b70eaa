//! Shopping cart domain module.
//!
//! This crate contains the cart state machine and its derived aggregates,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). Persistence of cart snapshots lives in `ecocart-storage`.

pub mod store;
pub mod totals;

pub use store::{CartLine, CartSnapshot, CartStore};
pub use totals::CartTotals;
