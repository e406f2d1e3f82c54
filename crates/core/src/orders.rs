//! Orders

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{cart::CartLine, checkout::PaymentKind, pricing::OrderTotal, shipping::DeliveryMode};

/// Fulfilment progress of a placed order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Pharmacy is putting the order together.
    #[default]
    Preparing,

    /// Courier is on the way.
    Delivering,

    /// Order reached the customer.
    Delivered,
}

impl OrderStatus {
    /// The status that follows this one, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            OrderStatus::Preparing => Some(OrderStatus::Delivering),
            OrderStatus::Delivering => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Preparing => f.write_str("preparing"),
            OrderStatus::Delivering => f.write_str("delivering"),
            OrderStatus::Delivered => f.write_str("delivered"),
        }
    }
}

/// A checked-out order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    number: Option<u64>,
    lines: Vec<CartLine>,
    totals: OrderTotal,
    delivery_mode: DeliveryMode,
    payment: PaymentKind,
    status: OrderStatus,
}

impl Order {
    pub(crate) fn new(
        lines: Vec<CartLine>,
        totals: OrderTotal,
        delivery_mode: DeliveryMode,
        payment: PaymentKind,
    ) -> Self {
        Self {
            number: None,
            lines,
            totals,
            delivery_mode,
            payment,
            status: OrderStatus::Preparing,
        }
    }

    /// Order number, assigned once the order is recorded in an [`OrderHistory`].
    pub fn number(&self) -> Option<u64> {
        self.number
    }

    /// Lines as they were in the cart at checkout.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Subtotal, shipping fee and total charged.
    pub fn totals(&self) -> &OrderTotal {
        &self.totals
    }

    /// Delivery mode chosen at checkout.
    pub fn delivery_mode(&self) -> DeliveryMode {
        self.delivery_mode
    }

    /// Payment method used, without card details.
    pub fn payment(&self) -> PaymentKind {
        self.payment
    }

    /// Current fulfilment status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }
}

/// Orders placed during the session.
#[derive(Debug, Clone, Default)]
pub struct OrderHistory {
    orders: Vec<Order>,
    last_number: u64,
}

impl OrderHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an order and returns the number assigned to it.
    pub fn record(&mut self, mut order: Order) -> u64 {
        self.last_number += 1;
        order.number = Some(self.last_number);
        self.orders.push(order);

        self.last_number
    }

    /// Get an order by number.
    pub fn get(&self, number: u64) -> Option<&Order> {
        self.orders
            .iter()
            .find(|order| order.number == Some(number))
    }

    /// Moves an order to its next status, returning the new status. Delivered and
    /// unknown orders are left alone.
    pub fn advance(&mut self, number: u64) -> Option<OrderStatus> {
        let order = self
            .orders
            .iter_mut()
            .find(|order| order.number == Some(number))?;

        let next = order.status.next()?;

        order.status = next;

        Some(next)
    }

    /// Iterates over orders, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter().rev()
    }

    /// Get the number of recorded orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if no orders were recorded.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso};

    use super::*;

    fn order() -> Order {
        let zero = Money::from_minor(0, iso::BRL);

        Order::new(
            Vec::new(),
            OrderTotal {
                subtotal: zero,
                shipping_fee: zero,
                total: zero,
            },
            DeliveryMode::Pickup,
            PaymentKind::Pix,
        )
    }

    #[test]
    fn record_assigns_sequential_numbers() {
        let mut history = OrderHistory::new();

        assert_eq!(history.record(order()), 1);
        assert_eq!(history.record(order()), 2);
        assert_eq!(history.len(), 2);
        assert_eq!(history.get(2).and_then(Order::number), Some(2));
    }

    #[test]
    fn iter_lists_newest_first() {
        let mut history = OrderHistory::new();

        history.record(order());
        history.record(order());

        let numbers: Vec<_> = history.iter().filter_map(Order::number).collect();

        assert_eq!(numbers, [2, 1]);
    }

    #[test]
    fn advance_walks_through_statuses() {
        let mut history = OrderHistory::new();
        let number = history.record(order());

        assert_eq!(history.advance(number), Some(OrderStatus::Delivering));
        assert_eq!(history.advance(number), Some(OrderStatus::Delivered));
        assert_eq!(history.advance(number), None);
        assert_eq!(
            history.get(number).map(Order::status),
            Some(OrderStatus::Delivered)
        );
    }

    #[test]
    fn advance_unknown_order_is_none() {
        let mut history = OrderHistory::new();

        assert_eq!(history.advance(9), None);
    }
}
