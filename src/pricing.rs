//! Pricing

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::orders::ItemOrder;

/// Number of decimal places totals are reported with.
pub const TOTAL_SCALE: u32 = 2;

/// Errors that can occur while calculating line or cart totals.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// Decimal arithmetic exceeded the representable range.
    #[error("price arithmetic overflowed")]
    Overflow,
}

/// Calculates the unrounded contribution of a single order to a cart total.
///
/// Members buying a bulk item pay the bulk price for each whole group and the
/// unit price for the remainder. Everyone else, and any item whose bulk group
/// size is zero, pays the unit price for every unit.
///
/// # Errors
///
/// - [`TotalPriceError::Overflow`]: the multiplication or addition overflowed.
pub fn line_total(order: &ItemOrder<'_>, membership: bool) -> Result<Decimal, TotalPriceError> {
    let item = order.item();
    let quantity = order.quantity();

    match item.bulk() {
        Some(bulk) if membership && bulk.quantity() > 0 => {
            let groups = Decimal::from(quantity / bulk.quantity());
            let remainder = Decimal::from(quantity % bulk.quantity());

            let grouped = groups
                .checked_mul(bulk.price())
                .ok_or(TotalPriceError::Overflow)?;

            let loose = remainder
                .checked_mul(item.price())
                .ok_or(TotalPriceError::Overflow)?;

            grouped.checked_add(loose).ok_or(TotalPriceError::Overflow)
        }
        _ => Decimal::from(quantity)
            .checked_mul(item.price())
            .ok_or(TotalPriceError::Overflow),
    }
}

/// Whether bulk pricing changes how `order` is priced.
pub fn bulk_applies(order: &ItemOrder<'_>, membership: bool) -> bool {
    membership
        && order
            .item()
            .bulk()
            .is_some_and(|bulk| bulk.quantity() > 0 && order.quantity() >= bulk.quantity())
}

/// Rounds `amount` half-to-even and rescales it to exactly [`TOTAL_SCALE`] places.
pub fn round_total(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(TOTAL_SCALE, RoundingStrategy::MidpointNearestEven);

    rounded.rescale(TOTAL_SCALE);

    rounded
}

/// Sums the line totals of `orders` and rounds the result.
///
/// # Errors
///
/// - [`TotalPriceError::Overflow`]: a line total or the running sum overflowed.
pub fn total_price<'o, 'a: 'o>(
    orders: impl IntoIterator<Item = &'o ItemOrder<'a>>,
    membership: bool,
) -> Result<Decimal, TotalPriceError> {
    let total = orders.into_iter().try_fold(Decimal::ZERO, |acc, order| {
        acc.checked_add(line_total(order, membership)?)
            .ok_or(TotalPriceError::Overflow)
    })?;

    Ok(round_total(total))
}

/// Formats `amount` using the symbol, separators and precision of `currency`'s locale.
pub fn format_currency(amount: Decimal, currency: &Currency) -> String {
    Money::from_decimal(amount, currency).to_string()
}
