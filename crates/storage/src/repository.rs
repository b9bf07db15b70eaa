//! Cart and session repositories over the key-value surface.
//!
//! Loads never fail: absent data is `None`, corrupt data is logged, removed
//! and treated as `None`. Saves are best-effort; a failed write is logged
//! and swallowed.

use ecocart_accounts::SessionRecord;
use ecocart_cart::CartSnapshot;

use crate::keys;
use crate::kv::KeyValueStore;

/// Persists the cart snapshot under [`keys::CART_ITEMS`].
#[derive(Debug, Clone)]
pub struct CartRepository<S> {
    store: S,
}

impl<S: KeyValueStore> CartRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the persisted snapshot, if any.
    pub fn load(&self) -> Option<CartSnapshot> {
        load_json(&self.store, keys::CART_ITEMS)
    }

    /// Persist the whole cart, fire-and-forget.
    pub fn save(&self, snapshot: &CartSnapshot) {
        save_json(&self.store, keys::CART_ITEMS, snapshot);
    }
}

/// Persists the user session under [`keys::USER_SESSION`].
#[derive(Debug, Clone)]
pub struct SessionRepository<S> {
    store: S,
}

impl<S: KeyValueStore> SessionRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Option<SessionRecord> {
        load_json(&self.store, keys::USER_SESSION)
    }

    pub fn save(&self, record: &SessionRecord) {
        save_json(&self.store, keys::USER_SESSION, record);
    }

    /// Drop the session record (logout).
    pub fn clear(&self) {
        if let Err(err) = self.store.remove(keys::USER_SESSION) {
            tracing::warn!(key = keys::USER_SESSION, error = %err, "failed to clear stored value");
        }
    }
}

fn load_json<S, T>(store: &S, key: &str) -> Option<T>
where
    S: KeyValueStore,
    T: serde::de::DeserializeOwned,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!(key, error = %err, "storage read failed, treating as absent");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            // Corrupt data: discard so the next session starts clean.
            tracing::warn!(key, error = %err, "discarding unparseable stored value");
            let _ = store.remove(key);
            None
        }
    }
}

fn save_json<S, T>(store: &S, key: &str, value: &T)
where
    S: KeyValueStore,
    T: serde::Serialize,
{
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(key, error = %err, "failed to serialize value, skipping save");
            return;
        }
    };
    if let Err(err) = store.set(key, raw) {
        tracing::warn!(key, error = %err, "storage write failed, keeping in-memory state only");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;
    use ecocart_accounts::UserProfile;
    use ecocart_cart::{CartLine, CartStore};
    use ecocart_catalog::Product;
    use ecocart_core::{EcoRating, Price, UserId};

    use super::*;
    use crate::kv::{InMemoryKeyValueStore, StorageError};

    fn sample_product() -> Product {
        Product {
            id: "1".parse().unwrap(),
            name: "Water Bottle".to_string(),
            description: String::new(),
            price: Price::from_cents(2499),
            image: String::new(),
            eco_rating: EcoRating::A,
            category: "Kitchenware".to_string(),
            brand: "EcoLife".to_string(),
            materials: vec![],
            alternatives: vec![],
        }
    }

    #[test]
    fn cart_save_then_load_round_trips() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let repo = CartRepository::new(Arc::clone(&store));

        let mut cart = CartStore::new();
        cart.add_item(sample_product());
        cart.add_item(sample_product());
        repo.save(&cart.snapshot());

        let restored = CartStore::from_snapshot(repo.load().unwrap());
        assert_eq!(restored, cart);
    }

    #[test]
    fn absent_cart_loads_as_none() {
        let repo = CartRepository::new(InMemoryKeyValueStore::new());
        assert_eq!(repo.load(), None);
    }

    #[test]
    fn corrupt_cart_is_discarded_and_removed() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        store.set(keys::CART_ITEMS, "{not json".to_string()).unwrap();

        let repo = CartRepository::new(Arc::clone(&store));
        assert_eq!(repo.load(), None);
        // The bad value is gone; a later load is a clean miss.
        assert_eq!(store.get(keys::CART_ITEMS).unwrap(), None);
    }

    #[test]
    fn cart_with_unknown_rating_letter_counts_as_corrupt() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let raw = r#"[{"product":{"id":"1","name":"x","description":"","price":100,
            "image":"","ecoRating":"E","category":"c","brand":"b","materials":[]},
            "quantity":1}]"#;
        store.set(keys::CART_ITEMS, raw.to_string()).unwrap();

        let repo = CartRepository::new(store);
        assert_eq!(repo.load(), None);
    }

    #[test]
    fn zero_quantity_line_in_stored_data_survives_parse_but_not_restore() {
        // The parse is shape-level; CartStore::from_snapshot applies the
        // quantity >= 1 invariant.
        let line = CartLine {
            product: sample_product(),
            quantity: 0,
        };
        let store = Arc::new(InMemoryKeyValueStore::new());
        store
            .set(keys::CART_ITEMS, serde_json::to_string(&vec![line]).unwrap())
            .unwrap();

        let repo = CartRepository::new(store);
        let restored = CartStore::from_snapshot(repo.load().unwrap());
        assert!(restored.is_empty());
    }

    #[test]
    fn session_save_load_clear() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let repo = SessionRepository::new(Arc::clone(&store));

        let record = SessionRecord {
            user: UserProfile {
                id: UserId::new(),
                name: "Demo User".to_string(),
                email: "demo@example.com".to_string(),
            },
            logged_in_at: Utc::now(),
        };
        repo.save(&record);
        assert_eq!(repo.load(), Some(record));

        repo.clear();
        assert_eq!(repo.load(), None);
    }

    #[test]
    fn corrupt_session_is_discarded() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        store
            .set(keys::USER_SESSION, "\"not a session\"".to_string())
            .unwrap();
        let repo = SessionRepository::new(store);
        assert_eq!(repo.load(), None);
    }

    /// Store whose writes always fail; reads work.
    struct WriteFailStore(InMemoryKeyValueStore);

    impl KeyValueStore for WriteFailStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get(key)
        }

        fn set(&self, _key: &str, _value: String) -> Result<(), StorageError> {
            Err(StorageError::unavailable("read-only"))
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::unavailable("read-only"))
        }
    }

    #[test]
    fn failed_writes_are_swallowed() {
        let repo = CartRepository::new(WriteFailStore(InMemoryKeyValueStore::new()));
        let mut cart = CartStore::new();
        cart.add_item(sample_product());
        // Must not panic or surface the failure.
        repo.save(&cart.snapshot());
        assert_eq!(repo.load(), None);
    }
}
