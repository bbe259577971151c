//! Item Orders

use std::fmt;

use thiserror::Error;

use crate::items::Item;

/// Errors raised when an order is constructed with an invalid quantity.
#[derive(Debug, Error, PartialEq)]
pub enum ItemOrderError {
    /// The requested quantity was below zero.
    #[error("item quantity cannot be less than 0, got {0}")]
    NegativeQuantity(i64),

    /// The requested quantity does not fit in a `u32`.
    #[error("item quantity {0} is out of range")]
    QuantityOutOfRange(i64),
}

/// A requested quantity of a single item.
///
/// The order borrows its item; neither the order nor the cart ever copies or mutates it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemOrder<'a> {
    item: &'a Item,
    quantity: u32,
}

impl<'a> ItemOrder<'a> {
    /// Creates an order for `quantity` units of `item`. Zero is a valid quantity.
    ///
    /// # Errors
    ///
    /// - [`ItemOrderError::NegativeQuantity`]: `quantity` is below zero.
    /// - [`ItemOrderError::QuantityOutOfRange`]: `quantity` exceeds `u32::MAX`.
    pub fn new(item: &'a Item, quantity: i64) -> Result<Self, ItemOrderError> {
        if quantity < 0 {
            return Err(ItemOrderError::NegativeQuantity(quantity));
        }

        let quantity = u32::try_from(quantity)
            .map_err(|_err| ItemOrderError::QuantityOutOfRange(quantity))?;

        Ok(Self::with_quantity(item, quantity))
    }

    /// Creates an order from an already unsigned quantity.
    #[must_use]
    pub fn with_quantity(item: &'a Item, quantity: u32) -> Self {
        Self { item, quantity }
    }

    /// Returns the ordered item
    pub fn item(&self) -> &'a Item {
        self.item
    }

    /// Returns the ordered quantity
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl fmt::Display for ItemOrder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Item: {}, quantity is: {}", self.item, self.quantity)
    }
}
