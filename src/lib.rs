//! NexBuy - a terminal storefront with a persisted shopping cart.
//!
//! The library holds the storefront core: an immutable product catalog, a query
//! engine for search, filtering and sorting, and a cart manager that clamps
//! quantities to stock and persists every change through a key-value store.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Catalog and product records
//! - Cart state, typed cart intents and the cart manager
//! - The filter/sort query engine
//! - Key-value persistence (file and in-memory)
//! - Simulated sign-in and checkout
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use crate::core::{
    checkout,
    format_price,
    run_query,

    // Cart
    CartEntry,
    CartIntent,
    CartLine,
    CartManager,
    CartState,
    CartTotals,
    // Catalog
    Catalog,
    CategoryFilter,
    CheckoutDetails,
    Dispatched,
    FileStore,
    // Query engine
    FilterSpec,
    // Persistence
    KeyValueStore,
    MemoryStore,
    // Error handling
    NexbuyError,
    Product,
    Receipt,
    Result,
    SessionManager,
    Settings,
    SortMode,
    StorefrontContext,
    StorefrontInit,
    UserSession,
    CART_KEY,
    SESSION_KEY,
};
