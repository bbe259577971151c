//! Till
//!
//! Till prices a retail shopping cart: catalogue items with optional bulk pricing,
//! per-item orders, and a cart that totals them, applying bulk pricing for members.

pub mod cart;
pub mod fixtures;
pub mod items;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod receipt;
pub mod utils;
