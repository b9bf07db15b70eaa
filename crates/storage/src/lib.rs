//! Key-value persistence for session state.
//!
//! Models the browser-local storage the original storefront used: a string
//! key-value surface, a cart-snapshot repository, and a session repository.
//! Loads tolerate corrupt data (discard, never propagate); saves are
//! best-effort fire-and-forget, since in-memory state remains the source of
//! truth for the session.

pub mod keys;
pub mod kv;
pub mod repository;

pub use kv::{InMemoryKeyValueStore, KeyValueStore, StorageError};
pub use repository::{CartRepository, SessionRepository};
