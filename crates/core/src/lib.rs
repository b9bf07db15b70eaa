//! `ecocart-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! typed identifiers, the domain error model, the eco-rating scale with its
//! single shared weight table, and a minor-unit price type.

pub mod error;
pub mod id;
pub mod price;
pub mod rating;

pub use error::{DomainError, DomainResult};
pub use id::{ProductId, UserId};
pub use price::Price;
pub use rating::EcoRating;
