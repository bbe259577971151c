//! Fixtures

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::{
    cart::Cart,
    fixtures::{carts::CartFixture, items::ItemsFixture},
    items::{Item, ItemError},
    orders::{ItemOrder, ItemOrderError},
};

pub mod carts;
pub mod items;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Cart references an item that was not loaded
    #[error("Item not found: {0}")]
    UnknownItem(String),

    /// Item terms failed validation
    #[error(transparent)]
    Item(#[from] ItemError),

    /// Order quantity failed validation
    #[error(transparent)]
    ItemOrder(#[from] ItemOrderError),
}

/// Catalogue items and cart contents loaded from YAML.
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    items: Vec<Item>,

    /// String key -> index into `items`
    item_keys: FxHashMap<String, usize>,

    /// Validated orders as (item index, quantity)
    orders: Vec<(usize, u32)>,

    membership: bool,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            items: Vec::new(),
            item_keys: FxHashMap::default(),
            orders: Vec::new(),
            membership: false,
        }
    }

    /// Load items from `items/<name>.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if an item fails validation.
    pub fn load_items(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("items").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ItemsFixture = serde_norway::from_str(&contents)?;

        for (key, item_fixture) in fixture.items {
            let item = Item::try_from(item_fixture)?;

            self.item_keys.insert(key, self.items.len());
            self.items.push(item);
        }

        debug!(set = name, items = self.items.len(), "loaded item fixtures");

        Ok(self)
    }

    /// Load cart contents from `carts/<name>.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if an order references
    /// an item that has not been loaded, or if a quantity fails validation.
    pub fn load_cart(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("carts").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: CartFixture = serde_norway::from_str(&contents)?;

        for order in fixture.orders {
            let (index, item) = self.indexed_item(&order.item)?;
            let quantity = ItemOrder::new(item, order.quantity)?.quantity();

            self.orders.push((index, quantity));
        }

        self.membership = fixture.membership;

        debug!(
            set = name,
            orders = self.orders.len(),
            membership = self.membership,
            "loaded cart fixture"
        );

        Ok(self)
    }

    /// Load a complete fixture set (items and cart with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_items(name)?.load_cart(name)?;

        Ok(fixture)
    }

    /// Get an item by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the item is not found.
    pub fn item(&self, key: &str) -> Result<&Item, FixtureError> {
        self.indexed_item(key).map(|(_, item)| item)
    }

    /// Get all items
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Whether the loaded cart belongs to a member
    pub fn membership(&self) -> bool {
        self.membership
    }

    /// Create a cart from the loaded orders
    pub fn cart(&self) -> Cart<'_> {
        let mut cart = Cart::new();

        for &(index, quantity) in &self.orders {
            if let Some(item) = self.items.get(index) {
                cart.add(ItemOrder::with_quantity(item, quantity));
            }
        }

        cart.set_membership(self.membership);

        cart
    }

    fn indexed_item(&self, key: &str) -> Result<(usize, &Item), FixtureError> {
        self.item_keys
            .get(key)
            .and_then(|&index| self.items.get(index).map(|item| (index, item)))
            .ok_or_else(|| FixtureError::UnknownItem(key.to_string()))
    }
}
