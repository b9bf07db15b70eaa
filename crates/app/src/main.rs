//! Demo binary: walks a small storefront session against the mock catalog
//! and the in-memory store.

use std::sync::Arc;

use anyhow::Context;

use ecocart_accounts::{AccountService, AuthMode, LoginOutcome, UnavailableBackend};
use ecocart_app::{AppState, MockProductSource};
use ecocart_catalog::SortKey;
use ecocart_core::ProductId;
use ecocart_storage::InMemoryKeyValueStore;

fn main() -> anyhow::Result<()> {
    ecocart_observability::init();

    let store = Arc::new(InMemoryKeyValueStore::new());
    let accounts = AccountService::new(UnavailableBackend, AuthMode::Demo);

    // Landed on /products?category=Clothing.
    let mut state = AppState::bootstrap(
        &MockProductSource,
        Arc::clone(&store),
        accounts,
        &[("category", "Clothing")],
    );

    println!("== Clothing ==");
    for p in state.visible_products() {
        println!("  {} - {} ({} {})", p.name, p.price, p.eco_rating, p.brand);
    }

    state.clear_filters();
    state.set_sort(SortKey::RatingDesc);
    println!("== Full catalog, best rating first ==");
    for p in state.visible_products() {
        println!("  [{}] {} - {}", p.eco_rating, p.name, p.price);
    }

    let bottle: ProductId = "1".parse().context("mock product id")?;
    let fast_fashion: ProductId = "6".parse().context("mock product id")?;
    state.add_to_cart(&bottle);
    state.add_to_cart(&bottle);
    state.add_to_cart(&fast_fashion);

    let cart = state.cart();
    println!("== Cart ==");
    for line in cart.lines() {
        println!("  {} x{} = {}", line.product.name, line.quantity, line.line_total());
    }
    let totals = state.cart_totals();
    println!(
        "  subtotal {}  shipping {}  tax {}  total {}",
        totals.subtotal, totals.shipping, totals.tax, totals.total
    );
    if let Some(rating) = cart.average_eco_rating() {
        println!("  average eco rating: {rating}");
    }

    println!("== Greener alternatives for the fast-fashion shirt ==");
    for alt in state.alternatives(&fast_fashion) {
        println!("  {} [{}]", alt.name, alt.eco_rating);
    }

    match state.login("shopper@example.com", "password")? {
        LoginOutcome::Authenticated(user) => println!("logged in as {}", user.name),
        LoginOutcome::DemoFallback { user, backend_error } => {
            println!("backend said: {backend_error}; continuing as {}", user.name);
        }
    }

    Ok(())
}
