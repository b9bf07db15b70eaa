//! Account/session domain module.
//!
//! This crate is intentionally decoupled from HTTP and storage. It models
//! the user profile, the persisted session record, and the account service
//! with its explicit backend-vs-demo two-path design.

pub mod service;
pub mod user;

pub use service::{
    AccountService, AuthBackend, AuthError, AuthMode, LoginOutcome, RegisterOutcome,
    UnavailableBackend,
};
pub use user::{SessionRecord, UserProfile};
