//! Typed cart commands raised by the view layer.
//!
//! Views never poke at the cart directly. They build a [`CartIntent`] and hand it to
//! [`CartManager::dispatch`], which reports whether anything actually changed.

use crate::core::cart::CartManager;
use crate::core::store::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartIntent {
    AddItem { product_id: String, delta: i64 },
    SetQuantity { product_id: String, quantity: i64 },
    RemoveItem { product_id: String },
    Clear,
}

impl CartIntent {
    pub fn add(product_id: impl Into<String>, delta: i64) -> Self {
        Self::AddItem {
            product_id: product_id.into(),
            delta,
        }
    }

    pub fn set_quantity(product_id: impl Into<String>, quantity: i64) -> Self {
        Self::SetQuantity {
            product_id: product_id.into(),
            quantity,
        }
    }

    pub fn remove(product_id: impl Into<String>) -> Self {
        Self::RemoveItem {
            product_id: product_id.into(),
        }
    }

    /// Product the intent targets, if any.
    pub fn product_id(&self) -> Option<&str> {
        match self {
            Self::AddItem { product_id, .. }
            | Self::SetQuantity { product_id, .. }
            | Self::RemoveItem { product_id } => Some(product_id),
            Self::Clear => None,
        }
    }
}

/// Outcome of a dispatched intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatched {
    /// False when the intent was a no-op (unknown id, already at stock, ...).
    pub changed: bool,
}

impl<'c, S: KeyValueStore> CartManager<'c, S> {
    pub fn dispatch(&mut self, intent: CartIntent) -> Dispatched {
        log::debug!("Dispatching {intent:?}");
        let before = self.state().clone();

        match intent {
            CartIntent::AddItem { product_id, delta } => {
                self.add_item(&product_id, delta);
            }
            CartIntent::SetQuantity {
                product_id,
                quantity,
            } => {
                self.set_quantity(&product_id, quantity);
            }
            CartIntent::RemoveItem { product_id } => {
                self.remove_item(&product_id);
            }
            CartIntent::Clear => {
                self.clear();
            }
        }

        Dispatched {
            changed: *self.state() != before,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::store::MemoryStore;

    #[test]
    fn test_dispatch_reports_changes() {
        let catalog = Catalog::sample();
        let mut cart = CartManager::open(&catalog, MemoryStore::new());

        assert!(cart.dispatch(CartIntent::add("p6", 5)).changed);
        // already at stock (5)
        assert!(!cart.dispatch(CartIntent::add("p6", 1)).changed);
        assert!(cart.dispatch(CartIntent::set_quantity("p6", 2)).changed);
        assert!(cart.dispatch(CartIntent::remove("p6")).changed);
        assert!(!cart.dispatch(CartIntent::remove("p6")).changed);
        assert!(!cart.dispatch(CartIntent::Clear).changed);
    }

    #[test]
    fn test_dispatch_unknown_product_is_no_op() {
        let catalog = Catalog::sample();
        let mut cart = CartManager::open(&catalog, MemoryStore::new());

        let outcome = cart.dispatch(CartIntent::add("p99", 1));
        assert!(!outcome.changed);
        assert!(cart.state().is_empty());
    }

    #[test]
    fn test_product_id_accessor() {
        assert_eq!(CartIntent::add("p1", 1).product_id(), Some("p1"));
        assert_eq!(CartIntent::remove("p2").product_id(), Some("p2"));
        assert_eq!(CartIntent::Clear.product_id(), None);
    }
}
