//! Immutable product catalog.
//!
//! The catalog is loaded once at startup and never mutated afterwards. Cart and query
//! code only ever borrows it.
//!
//! # Public API
//! - [`Product`]: A single purchasable item
//! - [`Catalog`]: Ordered, validated product list with id lookup

use crate::core::error::{NexbuyError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A purchasable product. Prices are in the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(alias = "desc")]
    pub description: String,
    pub price: u64,
    pub image: String,
    pub rating: f32,
    pub stock: u32,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        price: u64,
        stock: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            description: String::new(),
            price,
            image: String::new(),
            rating: 0.0,
            stock,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }
}

/// The fixed, ordered set of products for a session.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and ratings outside `[0, 5]`.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(products.len());

        for (position, product) in products.iter().enumerate() {
            if !(0.0..=5.0).contains(&product.rating) {
                return Err(NexbuyError::InvalidRating {
                    id: product.id.clone(),
                    rating: product.rating,
                });
            }
            if by_id.insert(product.id.clone(), position).is_some() {
                return Err(NexbuyError::DuplicateProduct {
                    id: product.id.clone(),
                });
            }
        }

        Ok(Self { products, by_id })
    }

    /// Load a catalog from a JSON array of products.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        log::debug!("Loading catalog from {}", path.display());

        let content =
            fs::read_to_string(path).map_err(|e| NexbuyError::catalog_read_failed(path, e))?;
        let products: Vec<Product> = serde_json::from_str(&content)
            .map_err(|e| NexbuyError::catalog_parse_failed(path, e))?;

        log::debug!("Loaded {} products from {}", products.len(), path.display());
        Self::new(products)
    }

    /// The built-in demo catalog.
    pub fn sample() -> Self {
        let products = vec![
            Product::new("p1", "Wireless Headphones", "electronics", 1299, 12)
                .with_description("Quality wireless sound")
                .with_image("box4_image.jpg")
                .with_rating(4.4),
            Product::new("p2", "Vitamin Supplements", "beauty", 799, 25)
                .with_description("Daily vitamins")
                .with_image("box2_image.jpg")
                .with_rating(4.1),
            Product::new("p3", "Kids Building Blocks", "toys", 499, 30)
                .with_description("Fun & safe")
                .with_image("box7_image.jpg")
                .with_rating(4.6),
            Product::new("p4", "Ceramic Vase", "home", 1499, 7)
                .with_description("Stylish interior piece")
                .with_image("box3_image.jpg")
                .with_rating(4.0),
            Product::new("p5", "Pet Shampoo", "pets", 349, 50)
                .with_description("Gentle & fragrant")
                .with_image("box6_image.jpg")
                .with_rating(4.2),
            Product::new("p6", "Smartphone", "electronics", 15999, 5)
                .with_description("Latest model")
                .with_image("box4_image.jpg")
                .with_rating(4.5),
            Product::new("p7", "Face Moisturizer", "beauty", 999, 18)
                .with_description("Hydrating formula")
                .with_image("box5_image.jpg")
                .with_rating(4.3),
            Product::new("p8", "Dining Chair", "home", 2999, 10)
                .with_description("Comfortable & durable")
                .with_image("box1_image.jpg")
                .with_rating(4.1),
        ];

        let by_id = products
            .iter()
            .enumerate()
            .map(|(position, product)| (product.id.clone(), position))
            .collect();

        Self { products, by_id }
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.by_id.get(id).map(|&position| &self.products[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
