//! Cart

use std::{collections::hash_map::Entry, fmt, slice};

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{
    items::Item,
    orders::ItemOrder,
    pricing::{TotalPriceError, total_price},
};

/// The orders selected during a single checkout session.
///
/// A cart holds at most one order per distinct [`Item`]. Adding a second order
/// for an equal item replaces the first in its original position.
#[derive(Debug, Default)]
pub struct Cart<'a> {
    orders: Vec<ItemOrder<'a>>,
    positions: FxHashMap<&'a Item, usize>,
    membership: bool,
}

impl<'a> Cart<'a> {
    /// Create a new, empty cart for a non-member.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an order, replacing any existing order for an equal item.
    pub fn add(&mut self, order: ItemOrder<'a>) {
        match self.positions.entry(order.item()) {
            Entry::Occupied(entry) => {
                if let Some(existing) = self.orders.get_mut(*entry.get()) {
                    *existing = order;
                }

                debug!(
                    item = %order.item(),
                    quantity = order.quantity(),
                    replaced = true,
                    "updated cart order"
                );
            }
            Entry::Vacant(entry) => {
                entry.insert(self.orders.len());
                self.orders.push(order);

                debug!(
                    item = %order.item(),
                    quantity = order.quantity(),
                    replaced = false,
                    "added cart order"
                );
            }
        }
    }

    /// Sets whether the customer is a member. Members receive bulk pricing.
    pub fn set_membership(&mut self, membership: bool) {
        self.membership = membership;

        debug!(membership, "set cart membership");
    }

    /// Whether the customer is a member.
    pub fn is_member(&self) -> bool {
        self.membership
    }

    /// Calculate the cart total, rounded half-to-even to exactly two decimal places.
    ///
    /// # Errors
    ///
    /// Returns a [`TotalPriceError`] if the decimal arithmetic overflowed.
    #[tracing::instrument(
        name = "cart.calculate_total",
        skip(self),
        fields(orders = self.orders.len(), membership = self.membership)
    )]
    pub fn calculate_total(&self) -> Result<Decimal, TotalPriceError> {
        let total = total_price(&self.orders, self.membership)?;

        debug!(%total, "calculated cart total");

        Ok(total)
    }

    /// Removes every order. Membership is left unchanged.
    pub fn clear(&mut self) {
        let cleared = self.orders.len();

        self.orders.clear();
        self.positions.clear();

        debug!(cleared, "cleared cart");
    }

    /// Get the number of distinct orders in the cart.
    pub fn cart_size(&self) -> usize {
        self.len()
    }

    /// Get the number of distinct orders in the cart.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Returns the order for `item`, if the cart holds one.
    pub fn get(&self, item: &Item) -> Option<&ItemOrder<'a>> {
        self.positions
            .get(item)
            .and_then(|&position| self.orders.get(position))
    }

    /// Iterate over the orders in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, ItemOrder<'a>> {
        self.orders.iter()
    }
}

impl<'c, 'a> IntoIterator for &'c Cart<'a> {
    type Item = &'c ItemOrder<'a>;
    type IntoIter = slice::Iter<'c, ItemOrder<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Cart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;

        for (idx, order) in self.orders.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }

            write!(f, "{order}")?;
        }

        f.write_str("]")
    }
}
