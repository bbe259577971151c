//! Utils

use clap::Parser;

/// Arguments for the checkout demo
#[derive(Debug, Parser)]
pub struct CheckoutArgs {
    /// Fixture set to use for the catalogue & cart
    #[clap(short, long, default_value = "stationery")]
    pub fixture: String,

    /// Override the cart's membership status
    #[clap(short, long)]
    pub membership: Option<bool>,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_to_stationery_fixture() -> TestResult {
        let args = CheckoutArgs::try_parse_from(["checkout"])?;

        assert_eq!(args.fixture, "stationery");
        assert_eq!(args.membership, None);

        Ok(())
    }

    #[test]
    fn membership_override_parses() -> TestResult {
        let args = CheckoutArgs::try_parse_from(["checkout", "-f", "other", "-m", "false"])?;

        assert_eq!(args.fixture, "other");
        assert_eq!(args.membership, Some(false));

        Ok(())
    }
}
