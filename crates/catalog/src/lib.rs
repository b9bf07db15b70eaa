//! Catalog domain module.
//!
//! This crate contains the product model and the catalog query engine
//! (filtering, sorting, alternatives), implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod alternatives;
pub mod product;
pub mod query;

pub use alternatives::alternatives_for;
pub use product::{distinct_brands, distinct_categories, Product, ProductSource};
pub use query::{apply, FilterSpec, SortKey};
