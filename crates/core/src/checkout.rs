//! Checkout

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::{
    cart::CartStore,
    orders::Order,
    pricing::format_amount,
    shipping::{DeliveryMode, ShippingPolicy},
};

/// Reasons a checkout is refused. Shown to the customer as blocking messages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Nothing to order.
    #[error("your cart is empty")]
    EmptyCart,

    /// A card payment was chosen without complete card details.
    #[error("fill in all card details")]
    MissingCardDetails,
}

/// Card data typed in at checkout. Never stored on the order.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    /// Card number
    pub number: String,

    /// Name printed on the card
    pub holder: String,

    /// Expiry, `MM/YY`
    pub expiry: String,

    /// Security code
    pub cvv: String,
}

impl CardDetails {
    fn is_complete(&self) -> bool {
        [&self.number, &self.holder, &self.expiry, &self.cvv]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

impl fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardDetails")
            .field("holder", &self.holder)
            .finish_non_exhaustive()
    }
}

/// Payment method with whatever data it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Credit card
    Credit(CardDetails),

    /// Debit card
    Debit(CardDetails),

    /// Instant bank transfer
    Pix,

    /// Cash on delivery or at the counter
    Cash,
}

impl PaymentMethod {
    /// The kind of payment, without card data.
    pub fn kind(&self) -> PaymentKind {
        match self {
            PaymentMethod::Credit(_) => PaymentKind::Credit,
            PaymentMethod::Debit(_) => PaymentKind::Debit,
            PaymentMethod::Pix => PaymentKind::Pix,
            PaymentMethod::Cash => PaymentKind::Cash,
        }
    }

    fn card(&self) -> Option<&CardDetails> {
        match self {
            PaymentMethod::Credit(card) | PaymentMethod::Debit(card) => Some(card),
            PaymentMethod::Pix | PaymentMethod::Cash => None,
        }
    }
}

/// Payment method recorded on an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    /// Credit card
    Credit,

    /// Debit card
    Debit,

    /// Instant bank transfer
    Pix,

    /// Cash
    Cash,
}

/// Choices made on the checkout screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    /// Delivery or pickup
    pub delivery_mode: DeliveryMode,

    /// How the customer pays
    pub payment: PaymentMethod,
}

/// Checks that the cart and request can be turned into an order.
///
/// # Errors
///
/// - [`CheckoutError::EmptyCart`]: the cart has no lines.
/// - [`CheckoutError::MissingCardDetails`]: a card payment lacks any card field.
pub fn validate(cart: &CartStore, request: &CheckoutRequest) -> Result<(), CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    if request
        .payment
        .card()
        .is_some_and(|card| !card.is_complete())
    {
        return Err(CheckoutError::MissingCardDetails);
    }

    Ok(())
}

/// Places an order for the cart contents and clears the cart.
///
/// The cart is left untouched when validation fails.
///
/// # Errors
///
/// See [`validate`].
pub fn checkout(
    cart: &mut CartStore,
    request: &CheckoutRequest,
    policy: &ShippingPolicy,
) -> Result<Order, CheckoutError> {
    validate(cart, request)?;

    let totals = cart.order_total(request.delivery_mode, policy);

    let order = Order::new(
        cart.lines().to_vec(),
        totals,
        request.delivery_mode,
        request.payment.kind(),
    );

    cart.clear();

    info!(
        lines = order.lines().len(),
        total = %format_amount(&totals.total),
        delivery_mode = %request.delivery_mode,
        "order placed"
    );

    Ok(order)
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso};
    use testresult::TestResult;

    use crate::{orders::OrderStatus, products::Product};

    use super::*;

    fn card() -> CardDetails {
        CardDetails {
            number: "4111111111111111".to_string(),
            holder: "Maria Silva".to_string(),
            expiry: "12/30".to_string(),
            cvv: "123".to_string(),
        }
    }

    fn cart_with_items() -> Result<CartStore, crate::cart::CartError> {
        let mut cart = CartStore::new(iso::BRL);

        cart.add_item(&Product::new(
            "1",
            "Dipirona",
            Money::from_minor(9_90, iso::BRL),
        ))?;

        Ok(cart)
    }

    #[test]
    fn empty_cart_is_refused() {
        let mut cart = CartStore::new(iso::BRL);
        let request = CheckoutRequest {
            delivery_mode: DeliveryMode::Pickup,
            payment: PaymentMethod::Pix,
        };

        let result = checkout(&mut cart, &request, &ShippingPolicy::default());

        assert_eq!(result, Err(CheckoutError::EmptyCart));
    }

    #[test]
    fn incomplete_card_is_refused_and_cart_kept() -> TestResult {
        let mut cart = cart_with_items()?;
        let request = CheckoutRequest {
            delivery_mode: DeliveryMode::Delivery,
            payment: PaymentMethod::Credit(CardDetails {
                cvv: " ".to_string(),
                ..card()
            }),
        };

        let result = checkout(&mut cart, &request, &ShippingPolicy::default());

        assert_eq!(result, Err(CheckoutError::MissingCardDetails));
        assert_eq!(cart.len(), 1);

        Ok(())
    }

    #[test]
    fn non_card_payments_need_no_card_details() -> TestResult {
        let cart = cart_with_items()?;

        for payment in [PaymentMethod::Pix, PaymentMethod::Cash] {
            let request = CheckoutRequest {
                delivery_mode: DeliveryMode::Pickup,
                payment,
            };

            assert_eq!(validate(&cart, &request), Ok(()));
        }

        Ok(())
    }

    #[test]
    fn successful_checkout_returns_order_and_clears_cart() -> TestResult {
        let mut cart = cart_with_items()?;
        let request = CheckoutRequest {
            delivery_mode: DeliveryMode::Delivery,
            payment: PaymentMethod::Debit(card()),
        };

        let order = checkout(&mut cart, &request, &ShippingPolicy::default())?;

        assert!(cart.is_empty());
        assert_eq!(order.lines().len(), 1);
        assert_eq!(order.totals().total, Money::from_minor(18_90, iso::BRL));
        assert_eq!(order.payment(), PaymentKind::Debit);
        assert_eq!(order.delivery_mode(), DeliveryMode::Delivery);
        assert_eq!(order.status(), OrderStatus::Preparing);
        assert_eq!(order.number(), None);

        Ok(())
    }

    #[test]
    fn card_debug_output_hides_sensitive_fields() {
        let output = format!("{:?}", card());

        assert!(!output.contains("4111"));
        assert!(!output.contains("123"));
    }
}
