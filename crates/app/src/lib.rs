//! Composition root for the storefront.
//!
//! Owns all session state explicitly (no globals): the product list, the
//! cart, the login session, and the active filter. The host UI holds an
//! [`AppState`] and calls into it from its event handlers.

pub mod source;
pub mod state;

pub use source::MockProductSource;
pub use state::AppState;
