//! Cart state and the cart manager that owns it.
//!
//! [`CartManager`] is the only writer of [`CartState`]. Every mutation is clamped to
//! the product's stock, persisted through the [`KeyValueStore`] and then announced
//! to subscribed listeners.
//!
//! # Public API
//! - [`CartEntry`]: product id and a quantity in `1..=stock`
//! - [`CartState`]: insertion-ordered entries, at most one per product
//! - [`CartTotals`]: derived item count and price
//! - [`CartLine`]: an entry joined with its product for display
//! - [`CartManager`]: load, mutate, persist, notify
//!
//! # Failure policy
//! - Unknown product ids are ignored
//! - Quantities are clamped to `[0, stock]`, zero meaning "no entry"
//! - Absent or malformed persisted state loads as an empty cart
//! - Failed persistence writes are logged and the in-memory state is kept

use crate::core::catalog::{Catalog, Product};
use crate::core::error::Result;
use crate::core::store::{KeyValueStore, CART_KEY};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub product_id: String,
    pub quantity: u32,
}

/// Mapping of product id to entry, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CartState {
    entries: Vec<CartEntry>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartTotals {
    pub total_quantity: u64,
    pub total_price: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'c> {
    pub product: &'c Product,
    pub quantity: u32,
    pub line_total: u64,
}

/// Shapes accepted when reading a persisted cart.
#[derive(Deserialize)]
#[serde(untagged)]
enum PersistedCart {
    Entries(Vec<PersistedEntry>),
    /// `{ "<id>": { "product": {...}, "qty": n } }`
    Legacy(BTreeMap<String, LegacyEntry>),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedEntry {
    product_id: String,
    quantity: i64,
}

#[derive(Deserialize)]
struct LegacyEntry {
    qty: i64,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn get(&self, product_id: &str) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.product_id == product_id)
    }

    /// Quantity held for a product, zero when absent.
    pub fn quantity(&self, product_id: &str) -> u32 {
        self.get(product_id).map_or(0, |e| e.quantity)
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.get(product_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Order-independent view of the contents.
    pub fn quantities(&self) -> HashMap<&str, u32> {
        self.entries
            .iter()
            .map(|e| (e.product_id.as_str(), e.quantity))
            .collect()
    }

    pub fn totals(&self, catalog: &Catalog) -> CartTotals {
        self.entries
            .iter()
            .fold(CartTotals::default(), |mut totals, entry| {
                totals.total_quantity += u64::from(entry.quantity);
                if let Some(product) = catalog.get(&entry.product_id) {
                    totals.total_price += u64::from(entry.quantity) * product.price;
                }
                totals
            })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a persisted cart and bring it back within the catalog's bounds.
    ///
    /// Entries for unknown products or with non-positive quantities are dropped,
    /// quantities above stock are clamped and repeated ids are merged. Anything
    /// that does not parse yields an empty cart.
    pub fn restore(raw: &str, catalog: &Catalog) -> Self {
        let persisted: PersistedCart = match serde_json::from_str(raw) {
            Ok(persisted) => persisted,
            Err(e) => {
                log::warn!("Ignoring malformed cart data: {e}");
                return Self::new();
            }
        };

        let pairs: Vec<(String, i64)> = match persisted {
            PersistedCart::Entries(entries) => entries
                .into_iter()
                .map(|e| (e.product_id, e.quantity))
                .collect(),
            PersistedCart::Legacy(map) => map.into_iter().map(|(id, e)| (id, e.qty)).collect(),
        };

        let mut state = Self::new();
        for (product_id, quantity) in pairs {
            let Some(product) = catalog.get(&product_id) else {
                log::warn!("Dropping cart entry for unknown product {product_id}");
                continue;
            };
            let merged = i64::from(state.quantity(&product_id)).saturating_add(quantity);
            let clamped = merged.min(i64::from(product.stock));
            if clamped <= 0 {
                state.remove(&product_id);
            } else {
                state.upsert(&product_id, clamped as u32);
            }
        }
        state
    }

    fn upsert(&mut self, product_id: &str, quantity: u32) {
        match self.entries.iter_mut().find(|e| e.product_id == product_id) {
            Some(entry) => entry.quantity = quantity,
            None => self.entries.push(CartEntry {
                product_id: product_id.to_string(),
                quantity,
            }),
        }
    }

    fn remove(&mut self, product_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.product_id != product_id);
        self.entries.len() != before
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

type CartListener<'c> = Box<dyn FnMut(&CartState) + 'c>;

/// Sole owner of the cart for one storefront session.
pub struct CartManager<'c, S: KeyValueStore> {
    catalog: &'c Catalog,
    store: S,
    state: CartState,
    listeners: Vec<CartListener<'c>>,
}

impl<'c, S: KeyValueStore> CartManager<'c, S> {
    /// Restore the cart from `store`, falling back to an empty cart.
    pub fn open(catalog: &'c Catalog, store: S) -> Self {
        let state = match store.get(CART_KEY) {
            Ok(Some(raw)) => CartState::restore(&raw, catalog),
            Ok(None) => {
                log::debug!("No saved cart, starting empty");
                CartState::new()
            }
            Err(e) => {
                log::warn!("Cart load failed (starting with an empty cart): {e}");
                CartState::new()
            }
        };

        log::debug!("Opened cart with {} entries", state.len());

        Self {
            catalog,
            store,
            state,
            listeners: Vec::new(),
        }
    }

    /// Register a listener. It is called right away with the current state and
    /// again after every mutation.
    pub fn subscribe(&mut self, mut listener: impl FnMut(&CartState) + 'c) {
        listener(&self.state);
        self.listeners.push(Box::new(listener));
    }

    /// Add `delta` units, capped at the product's stock.
    pub fn add_item(&mut self, product_id: &str, delta: i64) -> &CartState {
        let catalog = self.catalog;
        let Some(product) = catalog.get(product_id) else {
            log::debug!("add_item ignored for unknown product {product_id}");
            return &self.state;
        };

        let target = i64::from(self.state.quantity(product_id))
            .saturating_add(delta)
            .min(i64::from(product.stock));
        if target <= 0 {
            self.state.remove(product_id);
        } else {
            self.state.upsert(product_id, target as u32);
        }

        log::debug!("Cart: {product_id} -> {}", target.max(0));
        self.commit()
    }

    /// Set an absolute quantity. Zero or less removes the entry.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> &CartState {
        if quantity <= 0 {
            self.state.remove(product_id);
            log::debug!("Cart: {product_id} removed by quantity {quantity}");
            return self.commit();
        }

        let catalog = self.catalog;
        let Some(product) = catalog.get(product_id) else {
            log::debug!("set_quantity ignored for unknown product {product_id}");
            return &self.state;
        };

        let clamped = quantity.min(i64::from(product.stock)) as u32;
        if clamped == 0 {
            self.state.remove(product_id);
        } else {
            self.state.upsert(product_id, clamped);
        }

        log::debug!("Cart: {product_id} -> {clamped}");
        self.commit()
    }

    pub fn remove_item(&mut self, product_id: &str) -> &CartState {
        if self.state.remove(product_id) {
            log::debug!("Cart: {product_id} removed");
        }
        self.commit()
    }

    pub fn clear(&mut self) -> &CartState {
        self.state.clear();
        log::debug!("Cart cleared");
        self.commit()
    }

    pub fn totals(&self) -> CartTotals {
        self.state.totals(self.catalog)
    }

    /// Entries in insertion order.
    pub fn snapshot(&self) -> &[CartEntry] {
        self.state.entries()
    }

    /// Entries joined with their products, in insertion order.
    pub fn lines(&self) -> Vec<CartLine<'c>> {
        let catalog = self.catalog;
        self.state
            .entries()
            .iter()
            .filter_map(|entry| {
                catalog.get(&entry.product_id).map(|product| CartLine {
                    product,
                    quantity: entry.quantity,
                    line_total: u64::from(entry.quantity) * product.price,
                })
            })
            .collect()
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Persist one last time and hand the store back.
    pub fn close(mut self) -> S {
        self.persist();
        self.store
    }

    fn commit(&mut self) -> &CartState {
        self.persist();
        for listener in self.listeners.iter_mut() {
            listener(&self.state);
        }
        &self.state
    }

    fn persist(&mut self) {
        let json = match self.state.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Cart serialization failed (cart kept in memory): {e}");
                return;
            }
        };

        if let Err(e) = self.store.set(CART_KEY, &json) {
            log::warn!("Cart save failed (cart kept in memory): {e}");
        }
    }
}
