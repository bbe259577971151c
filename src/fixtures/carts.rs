//! Cart Fixtures

use serde::Deserialize;

/// Cart contents in YAML
#[derive(Debug, Deserialize)]
pub struct CartFixture {
    /// Whether the customer is a member
    #[serde(default)]
    pub membership: bool,

    /// Orders, in the order they are added to the cart
    #[serde(default)]
    pub orders: Vec<OrderFixture>,
}

/// Order Fixture
#[derive(Debug, Deserialize)]
pub struct OrderFixture {
    /// Key of the ordered item in the items fixture
    pub item: String,

    /// Requested quantity
    pub quantity: i64,
}
