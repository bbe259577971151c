//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::Cart,
    fixtures::{Fixture, FixtureError},
    items::{BulkPricing, Item, ItemError},
    orders::{ItemOrder, ItemOrderError},
    pricing::{TotalPriceError, format_currency, line_total, round_total},
    receipt::{Receipt, ReceiptError, ReceiptLine},
};
