//! Catalog search, filtering and sorting.
//!
//! [`run_query`] is a pure function of the catalog and a [`FilterSpec`]. Gates are
//! applied in a fixed order (price and included categories, category filter, search
//! text) and the survivors are stably sorted, so equal keys keep catalog order.
//!
//! The category is gated twice: by `included_categories` and by `category_filter`.
//! Both must admit a product.

use crate::core::catalog::{Catalog, Product};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    PriceAsc,
    PriceDesc,
    NameAsc,
    /// Catalog order.
    #[default]
    Relevance,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
            SortMode::NameAsc => "name-asc",
            SortMode::Relevance => "relevance",
        }
    }
}

/// Unrecognised modes fall back to [`SortMode::Relevance`].
impl FromStr for SortMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "price-asc" => SortMode::PriceAsc,
            "price-desc" => SortMode::PriceDesc,
            "name-asc" => SortMode::NameAsc,
            _ => SortMode::Relevance,
        })
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn admits(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        match value.trim() {
            "all" | "" => CategoryFilter::All,
            other => CategoryFilter::Only(other.to_string()),
        }
    }
}

/// Parameters of a single catalog query.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    /// Trimmed and lower-cased; empty admits everything.
    pub search_text: String,
    pub category_filter: CategoryFilter,
    pub max_price: u64,
    pub included_categories: BTreeSet<String>,
    pub sort_mode: SortMode,
}

impl FilterSpec {
    /// The "clear filters" state: every category ticked, no search, catalog order.
    pub fn for_catalog(catalog: &Catalog, max_price: u64) -> Self {
        Self {
            search_text: String::new(),
            category_filter: CategoryFilter::All,
            max_price,
            included_categories: catalog
                .categories()
                .into_iter()
                .map(str::to_string)
                .collect(),
            sort_mode: SortMode::Relevance,
        }
    }

    /// Like [`FilterSpec::for_catalog`] with no price ceiling.
    pub fn admit_all(catalog: &Catalog) -> Self {
        Self::for_catalog(catalog, u64::MAX)
    }

    pub fn with_search(mut self, text: &str) -> Self {
        self.search_text = text.trim().to_lowercase();
        self
    }

    pub fn with_category(mut self, filter: CategoryFilter) -> Self {
        self.category_filter = filter;
        self
    }

    pub fn with_max_price(mut self, max_price: u64) -> Self {
        self.max_price = max_price;
        self
    }

    pub fn with_included<I, T>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.included_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sort(mut self, sort_mode: SortMode) -> Self {
        self.sort_mode = sort_mode;
        self
    }

    fn matches_search(&self, product: &Product) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let haystack = format!(
            "{} {} {}",
            product.title, product.description, product.category
        )
        .to_lowercase();
        haystack.contains(&self.search_text)
    }
}

/// Run a query over the catalog. Never mutates anything.
pub fn run_query<'c>(catalog: &'c Catalog, spec: &FilterSpec) -> Vec<&'c Product> {
    let mut results: Vec<&Product> = catalog
        .products()
        .iter()
        .filter(|p| p.price <= spec.max_price && spec.included_categories.contains(&p.category))
        .filter(|p| spec.category_filter.admits(&p.category))
        .filter(|p| spec.matches_search(p))
        .collect();

    // sort_by is stable
    match spec.sort_mode {
        SortMode::PriceAsc => results.sort_by(|a, b| a.price.cmp(&b.price)),
        SortMode::PriceDesc => results.sort_by(|a, b| b.price.cmp(&a.price)),
        SortMode::NameAsc => results.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortMode::Relevance => {}
    }

    log::debug!(
        "Query matched {} of {} products",
        results.len(),
        catalog.len()
    );
    results
}

/// Case-insensitive title ordering with a byte-wise tie-break.
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
