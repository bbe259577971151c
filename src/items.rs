//! Items

use std::fmt;

use rust_decimal::Decimal;
use rusty_money::iso;
use thiserror::Error;

use crate::pricing::format_currency;

/// Errors raised when an item is constructed with invalid terms.
#[derive(Debug, Error, PartialEq)]
pub enum ItemError {
    /// The item name was empty.
    #[error("item name cannot be empty")]
    EmptyName,

    /// The unit price was below zero.
    #[error("item price cannot be less than 0, got {0}")]
    NegativePrice(Decimal),

    /// The bulk quantity was below zero.
    #[error("bulk quantity cannot be less than 0, got {0}")]
    NegativeBulkQuantity(i64),

    /// The bulk quantity does not fit in a `u32`.
    #[error("bulk quantity {0} is out of range")]
    BulkQuantityOutOfRange(i64),

    /// The bulk price was below zero.
    #[error("bulk price cannot be less than 0, got {0}")]
    NegativeBulkPrice(Decimal),
}

/// Alternate pricing applied to whole groups of an item for members.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BulkPricing {
    quantity: u32,
    price: Decimal,
}

impl BulkPricing {
    /// Number of units that make up one bulk group.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price charged for one whole bulk group.
    pub fn price(&self) -> Decimal {
        self.price
    }
}

/// A catalogue product with a unit price and optional bulk pricing.
///
/// Items compare equal when their names, prices and bulk terms all match.
/// Prices compare numerically, so `1.0` and `1.00` are the same price.
/// A bulk item is never equal to a non-bulk item.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    name: String,
    price: Decimal,
    bulk: Option<BulkPricing>,
}

impl Item {
    /// Creates an item without bulk pricing.
    ///
    /// # Errors
    ///
    /// - [`ItemError::EmptyName`]: `name` is empty.
    /// - [`ItemError::NegativePrice`]: `price` is below zero.
    pub fn new(name: impl Into<String>, price: Decimal) -> Result<Self, ItemError> {
        let name = name.into();

        if name.is_empty() {
            return Err(ItemError::EmptyName);
        }

        if price < Decimal::ZERO {
            return Err(ItemError::NegativePrice(price));
        }

        Ok(Self {
            name,
            price,
            bulk: None,
        })
    }

    /// Creates an item that sells `bulk_quantity` units for `bulk_price` to members.
    ///
    /// A bulk quantity of zero is accepted, but such an item is always priced per unit.
    ///
    /// # Errors
    ///
    /// Any error from [`Item::new`], plus:
    /// - [`ItemError::NegativeBulkQuantity`]: `bulk_quantity` is below zero.
    /// - [`ItemError::BulkQuantityOutOfRange`]: `bulk_quantity` exceeds `u32::MAX`.
    /// - [`ItemError::NegativeBulkPrice`]: `bulk_price` is below zero.
    pub fn with_bulk(
        name: impl Into<String>,
        price: Decimal,
        bulk_quantity: i64,
        bulk_price: Decimal,
    ) -> Result<Self, ItemError> {
        let item = Self::new(name, price)?;

        if bulk_quantity < 0 {
            return Err(ItemError::NegativeBulkQuantity(bulk_quantity));
        }

        let quantity = u32::try_from(bulk_quantity)
            .map_err(|_err| ItemError::BulkQuantityOutOfRange(bulk_quantity))?;

        if bulk_price < Decimal::ZERO {
            return Err(ItemError::NegativeBulkPrice(bulk_price));
        }

        Ok(Self {
            bulk: Some(BulkPricing {
                quantity,
                price: bulk_price,
            }),
            ..item
        })
    }

    /// Returns the name of the item
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price of the item
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the bulk terms, if the item has any.
    pub fn bulk(&self) -> Option<&BulkPricing> {
        self.bulk.as_ref()
    }

    /// Returns the bulk group size, if the item has bulk pricing.
    pub fn bulk_quantity(&self) -> Option<u32> {
        self.bulk.map(|bulk| bulk.quantity)
    }

    /// Returns the bulk group price, if the item has bulk pricing.
    pub fn bulk_price(&self) -> Option<Decimal> {
        self.bulk.map(|bulk| bulk.price)
    }

    /// Whether the item has bulk pricing.
    pub fn is_bulk(&self) -> bool {
        self.bulk.is_some()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, format_currency(self.price, iso::USD))?;

        if let Some(bulk) = &self.bulk {
            write!(
                f,
                " ({} for {})",
                bulk.quantity,
                format_currency(bulk.price, iso::USD)
            )?;
        }

        Ok(())
    }
}
