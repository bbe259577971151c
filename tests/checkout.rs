//! End-to-end pricing of carts through the public API.

use rust_decimal::Decimal;
use testresult::TestResult;

use till::prelude::*;

fn default_item() -> Result<Item, ItemError> {
    Item::new("itemName", Decimal::new(100, 2))
}

#[test]
fn invalid_constructions_fail_independently() {
    assert_eq!(Item::new("", Decimal::ONE), Err(ItemError::EmptyName));
    assert!(matches!(
        Item::new("itemName", Decimal::new(-1, 2)),
        Err(ItemError::NegativePrice(_))
    ));
    assert!(matches!(
        Item::with_bulk("itemName", Decimal::ONE, -1, Decimal::ONE),
        Err(ItemError::NegativeBulkQuantity(-1))
    ));
    assert!(matches!(
        Item::with_bulk("itemName", Decimal::ONE, 1, Decimal::new(-1, 2)),
        Err(ItemError::NegativeBulkPrice(_))
    ));
}

#[test]
fn negative_order_quantity_fails() -> TestResult {
    let item = default_item()?;

    assert_eq!(
        ItemOrder::new(&item, -1),
        Err(ItemOrderError::NegativeQuantity(-1))
    );

    Ok(())
}

#[test]
fn checkout_session() -> TestResult {
    let base = default_item()?;
    let notebook = Item::new("itemName", Decimal::new(300, 2))?;
    let pencil = Item::with_bulk("itemName", Decimal::new(95, 2), 10, Decimal::new(500, 2))?;

    let mut cart = Cart::new();
    cart.add(ItemOrder::new(&base, 1)?);

    assert_eq!(cart.calculate_total()?, Decimal::new(100, 2));

    cart.add(ItemOrder::new(&notebook, 4)?);

    assert_eq!(cart.calculate_total()?, Decimal::new(1300, 2));

    cart.clear();
    cart.add(ItemOrder::new(&base, 1)?);
    cart.set_membership(true);
    cart.add(ItemOrder::new(&pencil, 10)?);

    assert_eq!(cart.calculate_total()?, Decimal::new(600, 2));
    assert_eq!(cart.cart_size(), 2);

    Ok(())
}

#[test]
fn later_order_for_same_item_wins() -> TestResult {
    let item = default_item()?;
    let mut cart = Cart::new();

    cart.add(ItemOrder::new(&item, 1)?);
    cart.add(ItemOrder::new(&item, 9)?);

    assert_eq!(cart.cart_size(), 1);
    assert_eq!(cart.calculate_total()?, Decimal::new(900, 2));
    assert_eq!(cart.to_string(), "[Item: itemName, $1.00, quantity is: 9]");

    Ok(())
}

#[test]
fn totals_are_always_two_places() -> TestResult {
    let thirds = Item::with_bulk("thirds", Decimal::new(3333, 4), 3, Decimal::ONE)?;
    let mut cart = Cart::new();

    cart.add(ItemOrder::new(&thirds, 4)?);
    cart.set_membership(true);

    // one group at 1.00 plus one unit at 0.3333
    let total = cart.calculate_total()?;

    assert_eq!(total, Decimal::new(133, 2));
    assert_eq!(total.scale(), 2);

    Ok(())
}

#[test]
fn many_small_lines_do_not_drift() -> TestResult {
    let items = (0..100)
        .map(|n| Item::new(format!("item-{n}"), Decimal::new(1, 1)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut cart = Cart::new();

    for item in &items {
        cart.add(ItemOrder::new(item, 1)?);
    }

    assert_eq!(cart.cart_size(), 100);
    assert_eq!(cart.calculate_total()?.to_string(), "10.00");

    Ok(())
}
