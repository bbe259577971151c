//! Receipt

use std::io;

use rust_decimal::Decimal;
use rusty_money::iso::{self, Currency};
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    cart::Cart,
    orders::ItemOrder,
    pricing::{TotalPriceError, bulk_applies, format_currency, line_total, total_price},
};

/// Errors that can occur when building or writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Error calculating line or cart totals.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// The receipt could not be written.
    #[error("failed to write receipt")]
    IO,
}

/// A single priced order on a receipt.
#[derive(Debug, Clone, Copy)]
pub struct ReceiptLine<'a> {
    order: ItemOrder<'a>,
    line_total: Decimal,
    bulk_applied: bool,
}

impl<'a> ReceiptLine<'a> {
    /// The order this line prices
    pub fn order(&self) -> &ItemOrder<'a> {
        &self.order
    }

    /// Unrounded amount charged for the order
    pub fn line_total(&self) -> Decimal {
        self.line_total
    }

    /// Whether any units were charged at the bulk price
    pub fn bulk_applied(&self) -> bool {
        self.bulk_applied
    }
}

/// Snapshot of a cart's pricing at checkout.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    lines: SmallVec<[ReceiptLine<'a>; 10]>,

    /// Rounded total actually charged
    total: Decimal,

    /// Rounded total had no bulk pricing been applied
    regular_total: Decimal,

    currency: &'static Currency,
}

impl<'a> Receipt<'a> {
    /// Price every order in `cart`.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if any total overflowed.
    pub fn from_cart(cart: &Cart<'a>) -> Result<Self, ReceiptError> {
        let membership = cart.is_member();

        let lines = cart
            .iter()
            .map(|order| -> Result<ReceiptLine<'a>, TotalPriceError> {
                Ok(ReceiptLine {
                    order: *order,
                    line_total: line_total(order, membership)?,
                    bulk_applied: bulk_applies(order, membership),
                })
            })
            .collect::<Result<SmallVec<[ReceiptLine<'a>; 10]>, TotalPriceError>>()?;

        Ok(Self {
            lines,
            total: cart.calculate_total()?,
            regular_total: total_price(cart, false)?,
            currency: iso::USD,
        })
    }

    /// Priced lines in cart order
    pub fn lines(&self) -> &[ReceiptLine<'a>] {
        &self.lines
    }

    /// Total amount charged
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Amount saved through bulk pricing.
    pub fn savings(&self) -> Decimal {
        self.regular_total - self.total
    }

    /// Currency used when rendering amounts
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Writes the receipt as a table followed by the total and savings.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::IO`] if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Qty", "Unit Price", "Line Total", ""]);

        for (idx, line) in self.lines.iter().enumerate() {
            let item = line.order.item();

            builder.push_record([
                format!("#{:<3}", idx + 1),
                item.name().to_string(),
                line.order.quantity().to_string(),
                format_currency(item.price(), self.currency),
                format_currency(line.line_total, self.currency),
                if line.bulk_applied {
                    "bulk".to_string()
                } else {
                    String::new()
                },
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(2..5), Alignment::right());

        writeln!(out, "\n{table}").map_err(|_err| ReceiptError::IO)?;

        writeln!(
            out,
            " Total:   {}",
            format_currency(self.total, self.currency)
        )
        .map_err(|_err| ReceiptError::IO)?;

        writeln!(
            out,
            " Savings: {}",
            format_currency(self.savings(), self.currency)
        )
        .map_err(|_err| ReceiptError::IO)
    }
}
