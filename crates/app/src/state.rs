//! Session state owned by the composition root.

use ecocart_accounts::{
    AccountService, AuthBackend, AuthError, LoginOutcome, RegisterOutcome, SessionRecord,
};
use ecocart_cart::{CartStore, CartTotals};
use ecocart_catalog::{self as catalog, FilterSpec, Product, ProductSource, SortKey};
use ecocart_core::{EcoRating, ProductId};
use ecocart_storage::{CartRepository, KeyValueStore, SessionRepository};

/// All state for one storefront session.
///
/// The product list is a static snapshot; the cart and login session are
/// restored from storage at bootstrap and written back after every change
/// (best-effort). Every mutation goes through a method here, so nothing
/// ambient can drift.
pub struct AppState<S, B> {
    products: Vec<Product>,
    cart: CartStore,
    session: Option<SessionRecord>,
    filter: FilterSpec,
    cart_repo: CartRepository<S>,
    session_repo: SessionRepository<S>,
    accounts: AccountService<B>,
}

impl<S, B> AppState<S, B>
where
    S: KeyValueStore + Clone,
    B: AuthBackend,
{
    /// Build the session state: restore persisted cart/session (corrupt or
    /// absent data starts clean), fetch products once, and seed the filter
    /// from the page's query parameters.
    pub fn bootstrap<P: ProductSource>(
        source: &P,
        store: S,
        accounts: AccountService<B>,
        query_pairs: &[(&str, &str)],
    ) -> Self {
        let cart_repo = CartRepository::new(store.clone());
        let session_repo = SessionRepository::new(store);

        let cart = cart_repo
            .load()
            .map(CartStore::from_snapshot)
            .unwrap_or_default();
        let session = session_repo.load();
        let products = source.list_products();
        let filter = FilterSpec::from_query_pairs(query_pairs.iter().copied());

        tracing::info!(
            products = products.len(),
            cart_lines = cart.len(),
            authenticated = session.is_some(),
            "session bootstrapped"
        );

        Self {
            products,
            cart,
            session,
            filter,
            cart_repo,
            session_repo,
            accounts,
        }
    }

    // --- catalog ---

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The filtered, sorted product list to render.
    pub fn visible_products(&self) -> Vec<Product> {
        catalog::apply(&self.products, &self.filter)
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn toggle_category(&mut self, category: &str) {
        self.filter.toggle_category(category);
    }

    pub fn toggle_brand(&mut self, brand: &str) {
        self.filter.toggle_brand(brand);
    }

    pub fn toggle_rating(&mut self, rating: EcoRating) {
        self.filter.toggle_rating(rating);
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.filter.sort = sort;
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    /// Query pairs to write back to the URL after a filter change.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.filter.to_query_pairs()
    }

    /// Alternatives to suggest on a product's detail view.
    ///
    /// Unknown product id yields an empty list.
    pub fn alternatives(&self, product_id: &ProductId) -> Vec<Product> {
        match self.products.iter().find(|p| p.id == *product_id) {
            Some(product) => catalog::alternatives_for(product, &self.products),
            None => Vec::new(),
        }
    }

    // --- cart ---

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn cart_totals(&self) -> CartTotals {
        self.cart.totals()
    }

    /// Add one unit of the given product to the cart.
    ///
    /// An id that is not in the catalog is a logged no-op, never an error.
    pub fn add_to_cart(&mut self, product_id: &ProductId) {
        match self.products.iter().find(|p| p.id == *product_id) {
            Some(product) => {
                self.cart.add_item(product.clone());
                self.persist_cart();
            }
            None => {
                tracing::warn!(product_id = %product_id, "add_to_cart: unknown product, ignoring");
            }
        }
    }

    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        self.cart.remove_item(product_id);
        self.persist_cart();
    }

    pub fn set_cart_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        self.cart.set_quantity(product_id, quantity);
        self.persist_cart();
    }

    fn persist_cart(&self) {
        self.cart_repo.save(&self.cart.snapshot());
    }

    // --- accounts ---

    pub fn session(&self) -> Option<&SessionRecord> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Attempt a login; on success (real or demo fallback) the session is
    /// stored and persisted.
    pub fn login(&mut self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let outcome = self.accounts.login(email, password)?;
        let record = SessionRecord::started_now(outcome.user().clone());
        self.session_repo.save(&record);
        self.session = Some(record);
        Ok(outcome)
    }

    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisterOutcome, AuthError> {
        self.accounts.register(name, email, password)
    }

    pub fn logout(&mut self) {
        self.session = None;
        self.session_repo.clear();
        tracing::info!("logged out");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ecocart_accounts::{AuthMode, UnavailableBackend};
    use ecocart_storage::InMemoryKeyValueStore;

    use super::*;
    use crate::source::MockProductSource;

    type TestState = AppState<Arc<InMemoryKeyValueStore>, UnavailableBackend>;

    fn demo_state(store: &Arc<InMemoryKeyValueStore>, query: &[(&str, &str)]) -> TestState {
        AppState::bootstrap(
            &MockProductSource,
            Arc::clone(store),
            AccountService::new(UnavailableBackend, AuthMode::Demo),
            query,
        )
    }

    #[test]
    fn bootstrap_seeds_the_filter_from_query_pairs() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let state = demo_state(&store, &[("category", "Clothing")]);

        let visible = state.visible_products();
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|p| p.category == "Clothing"));
    }

    #[test]
    fn add_to_cart_with_unknown_id_is_a_no_op() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let mut state = demo_state(&store, &[]);
        state.add_to_cart(&"999".parse().unwrap());
        assert!(state.cart().is_empty());
    }

    #[test]
    fn cart_mutations_persist_across_bootstraps() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        {
            let mut state = demo_state(&store, &[]);
            state.add_to_cart(&"1".parse().unwrap());
            state.add_to_cart(&"1".parse().unwrap());
            state.add_to_cart(&"2".parse().unwrap());
        }

        let state = demo_state(&store, &[]);
        assert_eq!(state.cart().item_count(), 3);
        assert_eq!(state.cart().len(), 2);
    }

    #[test]
    fn alternatives_for_unknown_product_is_empty() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let state = demo_state(&store, &[]);
        assert!(state.alternatives(&"999".parse().unwrap()).is_empty());
    }

    #[test]
    fn demo_login_persists_a_session_and_logout_clears_it() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let mut state = demo_state(&store, &[]);

        let outcome = state.login("shopper@example.com", "pw").unwrap();
        assert!(matches!(outcome, LoginOutcome::DemoFallback { .. }));
        assert!(state.is_authenticated());

        // A fresh bootstrap sees the persisted session.
        let restored = demo_state(&store, &[]);
        assert!(restored.is_authenticated());
        assert_eq!(
            restored.session().unwrap().user.email,
            "shopper@example.com"
        );

        let mut state = restored;
        state.logout();
        assert!(!state.is_authenticated());
        let after_logout = demo_state(&store, &[]);
        assert!(!after_logout.is_authenticated());
    }
}
