//! Centralized start-up for storefront commands.
//!
//! Every command needs the same things: settings, the catalog and a store rooted in
//! the data directory. [`StorefrontInit`] assembles them once so commands only deal
//! with their own logic.
//!
//! # Initialization Steps
//! 1. **Settings**: load `config.json`, creating it with defaults on first run
//! 2. **Catalog**: the configured JSON catalog, or the built-in sample
//! 3. **Store**: a [`FileStore`] in the resolved data directory

use crate::core::{
    cart::CartManager,
    catalog::{Catalog, Product},
    config::Settings,
    error::{NexbuyError, Result},
    money::format_price,
    query::FilterSpec,
    session::SessionManager,
    store::FileStore,
};
use std::path::Path;

/// Everything a command needs, owned for the duration of one invocation
pub struct StorefrontContext {
    pub settings: Settings,
    pub catalog: Catalog,
    pub store: FileStore,
}

pub struct StorefrontInit;

impl StorefrontInit {
    /// Initialize from the platform config directory
    pub fn initialize(data_dir_override: Option<&Path>) -> Result<StorefrontContext> {
        let settings = Settings::load_or_create()?;
        Self::initialize_with(settings, data_dir_override)
    }

    /// Initialize from already-loaded settings
    pub fn initialize_with(
        settings: Settings,
        data_dir_override: Option<&Path>,
    ) -> Result<StorefrontContext> {
        let catalog = match &settings.catalog_path {
            Some(path) => Catalog::from_json_file(path)?,
            None => Catalog::sample(),
        };

        let data_dir = settings.resolve_data_dir(data_dir_override)?;
        log::debug!("Using data directory: {}", data_dir.display());

        log::debug!(
            "Initialized storefront with {} products",
            catalog.len()
        );

        Ok(StorefrontContext {
            settings,
            catalog,
            store: FileStore::new(data_dir),
        })
    }
}

impl StorefrontContext {
    pub fn open_cart(&self) -> CartManager<'_, FileStore> {
        CartManager::open(&self.catalog, self.store.clone())
    }

    pub fn open_session(&self) -> SessionManager<FileStore> {
        SessionManager::open(self.store.clone())
    }

    /// Look up a product, turning a miss into a reportable error
    pub fn require_product(&self, id: &str) -> Result<&Product> {
        self.catalog
            .get(id)
            .ok_or_else(|| NexbuyError::unknown_product(id))
    }

    pub fn price(&self, amount: u64) -> String {
        format_price(amount, &self.settings.currency_symbol)
    }

    /// Filters in their reset state
    pub fn default_filters(&self) -> FilterSpec {
        FilterSpec::for_catalog(&self.catalog, self.settings.default_max_price)
    }
}
