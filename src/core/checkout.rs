//! Simulated checkout.
//!
//! Validates the delivery and card details, produces a [`Receipt`] and empties the
//! cart. No payment is taken.

use crate::core::cart::{CartManager, CartTotals};
use crate::core::error::{NexbuyError, Result};
use crate::core::store::KeyValueStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutDetails {
    pub full_name: String,
    pub address: String,
    pub card_number: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    pub product_id: String,
    pub title: String,
    pub quantity: u32,
    pub line_total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub customer: String,
    pub lines: Vec<ReceiptLine>,
    pub totals: CartTotals,
}

impl CheckoutDetails {
    /// Check every field after trimming, reporting the first one that fails.
    pub fn validate(&self) -> Result<()> {
        if self.full_name.trim().chars().count() < 3 {
            return Err(NexbuyError::invalid_checkout("name must be at least 3 characters"));
        }
        if self.address.trim().chars().count() < 3 {
            return Err(NexbuyError::invalid_checkout(
                "address must be at least 3 characters",
            ));
        }
        let card = self.card_number.trim();
        if card.len() != 16 || !card.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NexbuyError::invalid_checkout("card: 16 digits"));
        }
        if self.city.trim().chars().count() < 2 {
            return Err(NexbuyError::invalid_checkout("city must be at least 2 characters"));
        }
        Ok(())
    }
}

/// Place the order held in `cart`. On success the cart is cleared.
pub fn checkout<S: KeyValueStore>(
    cart: &mut CartManager<'_, S>,
    details: &CheckoutDetails,
) -> Result<Receipt> {
    if cart.state().is_empty() {
        return Err(NexbuyError::EmptyCart);
    }
    details.validate()?;

    let lines = cart
        .lines()
        .into_iter()
        .map(|line| ReceiptLine {
            product_id: line.product.id.clone(),
            title: line.product.title.clone(),
            quantity: line.quantity,
            line_total: line.line_total,
        })
        .collect();
    let receipt = Receipt {
        customer: details.full_name.trim().to_string(),
        lines,
        totals: cart.totals(),
    };

    cart.clear();
    log::info!(
        "Checkout complete for {}: {} items, total {}",
        receipt.customer,
        receipt.totals.total_quantity,
        receipt.totals.total_price
    );

    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::store::{MemoryStore, CART_KEY};

    fn valid_details() -> CheckoutDetails {
        CheckoutDetails {
            full_name: "Priya Nair".to_string(),
            address: "12 Lake Road".to_string(),
            card_number: "4111111111111111".to_string(),
            city: "Pune".to_string(),
        }
    }

    #[test]
    fn test_checkout_clears_cart_and_returns_receipt() {
        let catalog = Catalog::sample();
        let mut store = MemoryStore::new();
        {
            let mut cart = CartManager::open(&catalog, &mut store);
            cart.add_item("p1", 2);
            cart.add_item("p5", 1);

            let receipt = checkout(&mut cart, &valid_details()).unwrap();
            assert_eq!(receipt.customer, "Priya Nair");
            assert_eq!(receipt.lines.len(), 2);
            assert_eq!(receipt.totals.total_quantity, 3);
            assert_eq!(receipt.totals.total_price, 2 * 1299 + 349);
            assert!(cart.state().is_empty());
        }
        assert_eq!(store.get(CART_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_empty_cart_rejected() {
        let catalog = Catalog::sample();
        let mut cart = CartManager::open(&catalog, MemoryStore::new());
        assert!(matches!(
            checkout(&mut cart, &valid_details()),
            Err(NexbuyError::EmptyCart)
        ));
    }

    #[test]
    fn test_invalid_details_keep_cart() {
        let catalog = Catalog::sample();
        let mut cart = CartManager::open(&catalog, MemoryStore::new());
        cart.add_item("p3", 1);

        let details = CheckoutDetails {
            card_number: "4111 1111 1111 1111".to_string(),
            ..valid_details()
        };
        assert!(matches!(
            checkout(&mut cart, &details),
            Err(NexbuyError::InvalidCheckout { .. })
        ));
        assert_eq!(cart.state().quantity("p3"), 1);
    }

    #[test]
    fn test_validation_rules() {
        assert!(valid_details().validate().is_ok());

        let short_name = CheckoutDetails {
            full_name: " Al ".to_string(),
            ..valid_details()
        };
        assert!(short_name.validate().is_err());

        let short_card = CheckoutDetails {
            card_number: "411111111111111".to_string(),
            ..valid_details()
        };
        assert!(short_card.validate().is_err());

        let short_city = CheckoutDetails {
            city: "X".to_string(),
            ..valid_details()
        };
        assert!(short_city.validate().is_err());

        let padded_card = CheckoutDetails {
            card_number: " 4111111111111111 ".to_string(),
            ..valid_details()
        };
        assert!(padded_card.validate().is_ok());
    }
}
