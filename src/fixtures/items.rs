//! Item Fixtures

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{fixtures::FixtureError, items::Item};

/// Wrapper for items in YAML
#[derive(Debug, Deserialize)]
pub struct ItemsFixture {
    /// Map of item key -> item fixture
    pub items: FxHashMap<String, ItemFixture>,
}

/// Item Fixture
#[derive(Debug, Deserialize)]
pub struct ItemFixture {
    /// Item name
    pub name: String,

    /// Unit price (e.g., "0.95")
    pub price: String,

    /// Optional bulk terms
    #[serde(default)]
    pub bulk: Option<BulkFixture>,
}

/// Bulk pricing terms for an item fixture
#[derive(Debug, Deserialize)]
pub struct BulkFixture {
    /// Units per bulk group
    pub quantity: i64,

    /// Price for one bulk group (e.g., "5.00")
    pub price: String,
}

impl TryFrom<ItemFixture> for Item {
    type Error = FixtureError;

    fn try_from(fixture: ItemFixture) -> Result<Self, Self::Error> {
        let price = parse_price(&fixture.price)?;

        let item = match fixture.bulk {
            Some(bulk) => Item::with_bulk(
                fixture.name,
                price,
                bulk.quantity,
                parse_price(&bulk.price)?,
            )?,
            None => Item::new(fixture.name, price)?,
        };

        Ok(item)
    }
}

/// Parse a decimal price string (e.g., "2.99") without losing precision
///
/// # Errors
///
/// Returns [`FixtureError::InvalidPrice`] if the string is not a decimal number.
pub fn parse_price(s: &str) -> Result<Decimal, FixtureError> {
    Decimal::from_str_exact(s.trim()).map_err(|_err| FixtureError::InvalidPrice(s.to_string()))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::items::ItemError;

    #[test]
    fn parse_price_keeps_exact_scale() -> TestResult {
        let price = parse_price("0.95")?;

        assert_eq!(price, Decimal::new(95, 2));
        assert_eq!(price.scale(), 2);

        Ok(())
    }

    #[test]
    fn parse_price_rejects_garbage() {
        assert!(matches!(
            parse_price("two dollars"),
            Err(FixtureError::InvalidPrice(s)) if s == "two dollars"
        ));
    }

    #[test]
    fn bulk_fixture_builds_bulk_item() -> TestResult {
        let fixture: ItemFixture = serde_norway::from_str(
            "name: Pencil\nprice: \"0.95\"\nbulk:\n  quantity: 10\n  price: \"5.00\"\n",
        )?;

        let item = Item::try_from(fixture)?;

        assert_eq!(
            item,
            Item::with_bulk("Pencil", Decimal::new(95, 2), 10, Decimal::new(500, 2))?
        );

        Ok(())
    }

    #[test]
    fn invalid_fixture_surfaces_item_error() -> TestResult {
        let fixture: ItemFixture = serde_norway::from_str("name: \"\"\nprice: \"1.00\"\n")?;

        assert!(matches!(
            Item::try_from(fixture),
            Err(FixtureError::Item(ItemError::EmptyName))
        ));

        Ok(())
    }
}
