//! Vitrine
//!
//! Vitrine is the storefront core of a small pharmacy marketplace: catalogue entry
//! normalisation, the shopping cart, order totals, checkout validation, favourites and
//! order history. Everything here is synchronous and free of I/O.

use rusty_money::iso::{self, Currency};

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod favorites;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod shipping;

/// Currency every storefront amount is expressed in.
pub fn storefront_currency() -> &'static Currency {
    iso::BRL
}
