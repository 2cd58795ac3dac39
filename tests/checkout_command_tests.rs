mod common;

use anyhow::Result;
use common::fixtures::*;
use common::storefront::*;
use predicates::prelude::*;
use serde_json::json;

const DETAILS: [&str; 8] = [
    "--name",
    "Priya Nair",
    "--address",
    "12 MG Road",
    "--card",
    "4111111111111111",
    "--city",
    "Pune",
];

#[test]
fn test_checkout_empty_cart() -> Result<()> {
    let store = setup_storefront()?;

    store
        .nexbuy()
        .arg("checkout")
        .args(DETAILS)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Cart empty"));

    Ok(())
}

#[test]
fn test_checkout_success_empties_cart() -> Result<()> {
    let store = storefront_with_cart()?;

    store
        .nexbuy()
        .arg("checkout")
        .args(DETAILS)
        .assert()
        .success()
        .stdout(predicate::str::contains("Order summary"))
        .stdout(predicate::str::contains("2 x Wireless Headphones  ₹2,598"))
        .stdout(predicate::str::contains("Total: ₹2,947"))
        .stdout(predicate::str::contains("Payment successful! Thank you, Priya Nair"));

    assert_eq!(store.saved_cart()?, json!([]));

    Ok(())
}

#[test]
fn test_checkout_rejects_short_card() -> Result<()> {
    let store = storefront_with_cart()?;

    store
        .nexbuy()
        .args(["checkout", "--name", "Priya Nair", "--address", "12 MG Road"])
        .args(["--card", "4111", "--city", "Pune"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Payment successful").not());

    // Cart is kept for another attempt
    assert_eq!(
        store.saved_cart()?,
        json!([
            { "productId": "p1", "quantity": 2 },
            { "productId": "p5", "quantity": 1 }
        ])
    );

    Ok(())
}

#[test]
fn test_checkout_requires_all_fields() -> Result<()> {
    let store = storefront_with_cart()?;

    store
        .nexbuy()
        .args(["checkout", "--name", "Priya Nair"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--address"));

    Ok(())
}
