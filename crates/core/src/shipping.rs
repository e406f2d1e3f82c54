//! Shipping

use std::{fmt, str::FromStr};

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard home delivery fee, in minor units.
pub const STANDARD_DELIVERY_FEE: i64 = 9_00;

/// How the order reaches the customer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// Courier drops the order at the customer's address.
    #[default]
    Delivery,

    /// Customer collects the order in store.
    Pickup,
}

impl fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryMode::Delivery => f.write_str("delivery"),
            DeliveryMode::Pickup => f.write_str("pickup"),
        }
    }
}

/// Unrecognised delivery mode text.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown delivery mode {0:?}, expected \"delivery\" or \"pickup\"")]
pub struct ParseDeliveryModeError(String);

impl FromStr for DeliveryMode {
    type Err = ParseDeliveryModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "delivery" => Ok(DeliveryMode::Delivery),
            "pickup" => Ok(DeliveryMode::Pickup),
            _ => Err(ParseDeliveryModeError(s.to_string())),
        }
    }
}

/// Shipping fee schedule keyed on delivery mode only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingPolicy {
    delivery_fee: i64,
}

impl ShippingPolicy {
    /// Creates a policy charging `delivery_fee` for home delivery. Negative fees are
    /// clamped to zero.
    pub fn new(delivery_fee: Money<'_, Currency>) -> Self {
        Self::from_minor(delivery_fee.to_minor_units())
    }

    /// Creates a policy from a fee in minor units.
    pub fn from_minor(delivery_fee: i64) -> Self {
        Self {
            delivery_fee: delivery_fee.max(0),
        }
    }

    /// Delivery fee in minor units.
    pub fn delivery_fee_minor(&self) -> i64 {
        self.delivery_fee
    }

    /// Fee charged for the given mode, in minor units.
    pub fn fee_minor(&self, mode: DeliveryMode) -> i64 {
        match mode {
            DeliveryMode::Delivery => self.delivery_fee,
            DeliveryMode::Pickup => 0,
        }
    }

    /// Fee charged for the given mode.
    pub fn shipping_fee(
        &self,
        mode: DeliveryMode,
        currency: &'static Currency,
    ) -> Money<'static, Currency> {
        Money::from_minor(self.fee_minor(mode), currency)
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self::from_minor(STANDARD_DELIVERY_FEE)
    }
}
