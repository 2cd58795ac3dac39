//! Predicates for nexbuy output

#![allow(dead_code)]

use predicates::prelude::*;

pub fn unknown_product(id: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Product not found: {id}"))
}

pub fn empty_cart() -> impl Predicate<str> {
    predicates::str::contains("Your cart is empty")
}

pub fn no_results() -> impl Predicate<str> {
    predicates::str::contains("No products found")
}

/// Cart summary line with the given count and formatted total
pub fn cart_summary(quantity: u64, total: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Items: {quantity}  Total: {total}"))
}

pub fn has_product(id: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("[{id}]"))
}

pub fn error_line() -> impl Predicate<str> {
    predicates::str::contains("✕ Error:")
}

/// Position of each id's listing in the output, in the order given
pub fn listing_positions(stdout: &str, ids: &[&str]) -> Vec<Option<usize>> {
    ids.iter()
        .map(|id| stdout.find(&format!("[{id}]")))
        .collect()
}
