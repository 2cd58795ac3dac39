//! Predefined storefront states

#![allow(dead_code)]

use super::storefront::*;
use predicates::prelude::*;

/// Scenario: cart holding 2 x Wireless Headphones and 1 x Pet Shampoo
pub fn storefront_with_cart() -> anyhow::Result<TestStorefront> {
    let store = setup_storefront()?;

    store.nexbuy().args(["add", "p1", "--qty", "2"]).assert().success();
    store.nexbuy().args(["add", "p5"]).assert().success();

    Ok(store)
}

/// Scenario: signed in as asha@example.com
pub fn signed_in_storefront() -> anyhow::Result<TestStorefront> {
    let store = setup_storefront()?;

    store
        .nexbuy()
        .args(["login", "--email", "asha@example.com", "--password", "secret1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as asha@example.com"));

    Ok(store)
}

/// A small custom catalog in the same JSON shape as the built-in one
pub const GARDEN_CATALOG: &str = r#"[
  { "id": "g1", "title": "Watering Can", "price": 450, "category": "garden",
    "image": "can.jpg", "rating": 4.2, "stock": 3, "desc": "Galvanised steel" },
  { "id": "g2", "title": "Pruning Shears", "price": 899, "category": "garden",
    "image": "shears.jpg", "rating": 4.7, "stock": 8, "desc": "Bypass blades" }
]"#;
