//! Pricing
//!
//! Order totals are computed in integer minor units and only turned into decimal text
//! at the display boundary.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    cart::CartLine,
    shipping::{DeliveryMode, ShippingPolicy},
};

/// Errors raised while reading decimal amounts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    /// The text is not a decimal number.
    #[error("could not parse amount {0:?}")]
    Invalid(String),

    /// The amount does not fit in minor units.
    #[error("amount {0} is out of range")]
    OutOfRange(String),
}

/// Derived order amounts. Always recomputed from the cart and delivery mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderTotal {
    /// Sum of line totals
    pub subtotal: Money<'static, Currency>,

    /// Fee for the chosen delivery mode
    pub shipping_fee: Money<'static, Currency>,

    /// Subtotal plus shipping fee
    pub total: Money<'static, Currency>,
}

/// Converts a decimal amount into minor units, rounding half away from zero to two
/// decimal places.
pub fn decimal_to_minor(amount: Decimal) -> Option<i64> {
    amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.to_i64())
}

/// Converts minor units back into a two-place decimal.
pub fn minor_to_decimal(minor_units: i64) -> Decimal {
    Decimal::new(minor_units, 2)
}

/// Parses decimal text (`"9.90"`, `"9,90"`) into money.
///
/// # Errors
///
/// - [`AmountError::Invalid`]: the text is not a decimal number.
/// - [`AmountError::OutOfRange`]: the amount does not fit in minor units.
pub fn parse_amount(
    text: &str,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, AmountError> {
    let amount = text
        .trim()
        .replace(',', ".")
        .parse::<Decimal>()
        .map_err(|_err| AmountError::Invalid(text.to_string()))?;

    let minor_units =
        decimal_to_minor(amount).ok_or_else(|| AmountError::OutOfRange(text.to_string()))?;

    Ok(Money::from_minor(minor_units, currency))
}

/// Formats money as a plain two-place decimal, e.g. `"34.80"`.
pub fn format_amount(money: &Money<'_, Currency>) -> String {
    minor_to_decimal(money.to_minor_units()).to_string()
}

/// Sum of `price * quantity` over the lines, using each line's snapshot price.
pub fn subtotal(lines: &[CartLine], currency: &'static Currency) -> Money<'static, Currency> {
    Money::from_minor(subtotal_minor(lines), currency)
}

/// Subtotal plus the shipping fee for `mode`.
pub fn total(
    lines: &[CartLine],
    currency: &'static Currency,
    mode: DeliveryMode,
    policy: &ShippingPolicy,
) -> Money<'static, Currency> {
    order_total(lines, currency, mode, policy).total
}

/// Computes subtotal, shipping fee and total in one pass.
pub fn order_total(
    lines: &[CartLine],
    currency: &'static Currency,
    mode: DeliveryMode,
    policy: &ShippingPolicy,
) -> OrderTotal {
    let subtotal = subtotal_minor(lines);
    let shipping_fee = policy.fee_minor(mode);

    OrderTotal {
        subtotal: Money::from_minor(subtotal, currency),
        shipping_fee: Money::from_minor(shipping_fee, currency),
        total: Money::from_minor(subtotal.saturating_add(shipping_fee), currency),
    }
}

fn subtotal_minor(lines: &[CartLine]) -> i64 {
    lines
        .iter()
        .fold(0_i64, |acc, line| acc.saturating_add(line.total_minor()))
}
