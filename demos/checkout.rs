//! Checkout Example
//!
//! Loads a catalogue and cart from a fixture set and prints the priced receipt.
//!
//! Use `-f` to load a fixture set by name
//! Use `-m true|false` to override the cart's membership
//! Set `RUST_LOG=till=debug` to trace cart updates

use std::{io, time::Instant};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use till::{fixtures::Fixture, receipt::Receipt, utils::CheckoutArgs};

/// Checkout Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_err| EnvFilter::new("info")),
        )
        .init();

    let args = CheckoutArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)?;
    let mut cart = fixture.cart();

    if let Some(membership) = args.membership {
        cart.set_membership(membership);
    }

    info!(
        fixture = %args.fixture,
        orders = cart.cart_size(),
        membership = cart.is_member(),
        "loaded cart"
    );

    let start = Instant::now();
    let receipt = Receipt::from_cart(&cart)?;
    let elapsed = start.elapsed().as_secs_f32();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    receipt.write_to(&mut handle)?;

    println!("\nPriced in {elapsed}s");

    Ok(())
}
