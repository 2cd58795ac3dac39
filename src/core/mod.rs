//! Core functionality for the nexbuy storefront.
//!
//! This module provides the catalog, the cart manager, the query engine and the
//! persistence they share, plus the output helpers used by the commands.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod context;
pub mod dirs;
pub mod error;
pub mod intent;
pub mod money;
pub mod output;
pub mod query;
pub mod session;
pub mod store;
pub mod templates;

// === Error handling ===
pub use error::{NexbuyError, Result};

// === Catalog ===
pub use catalog::{Catalog, Product};

// === Persistence ===
// Key-value adapter shared by the cart and the session
pub use store::{FileStore, KeyValueStore, MemoryStore, CART_KEY, SESSION_KEY};

// === Cart ===
pub use cart::{CartEntry, CartLine, CartManager, CartState, CartTotals};
pub use intent::{CartIntent, Dispatched};

// === Query engine ===
pub use query::{run_query, CategoryFilter, FilterSpec, SortMode};

// === Session & checkout ===
pub use checkout::{checkout, CheckoutDetails, Receipt, ReceiptLine};
pub use session::{SessionManager, UserSession};

// === Start-up ===
pub use config::Settings;
pub use context::{StorefrontContext, StorefrontInit};

// === UI ===
pub use money::format_price;
pub use output::{
    print_error, print_info, print_notice, print_section_header, print_success,
};
pub use templates::{
    render_template, render_template_plain, strip_ansi_codes, TemplateContext, Templates, TEMPLATES,
};
