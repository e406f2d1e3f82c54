//! Checkout through to order history

use rusty_money::{Money, iso::BRL};
use serde_json::json;
use testresult::TestResult;
use vitrine::prelude::*;

const BASE_URL: &str = "http://192.168.0.10:3000/api";

#[test]
fn catalogue_entries_flow_into_a_recorded_order() -> TestResult {
    let entries: Vec<CatalogEntry> = serde_json::from_value(json!([
        { "id": "2", "nome": "Colorio ecoflim 5mg/ml", "preco": 15, "image": "colirio.png" },
        { "id": "4", "nome": "Xarope 44E VICK", "preco": "15.00" }
    ]))?;

    let products = entries
        .iter()
        .map(|entry| entry.normalize(BASE_URL, storefront_currency()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut cart = CartStore::new(storefront_currency());

    for product in &products {
        cart.add_item(product)?;
    }

    let line = cart.get(&"2".into()).ok_or("line missing")?;

    assert_eq!(line.image_ref(), "http://192.168.0.10:3000/api/uploads/colirio.png");

    let request = CheckoutRequest {
        delivery_mode: DeliveryMode::Delivery,
        payment: PaymentMethod::Pix,
    };

    let order = checkout(&mut cart, &request, &ShippingPolicy::default())?;

    assert!(cart.is_empty());
    assert_eq!(order.totals().subtotal, Money::from_minor(30_00, BRL));
    assert_eq!(order.totals().total, Money::from_minor(39_00, BRL));

    let mut history = OrderHistory::new();
    let number = history.record(order);

    assert_eq!(history.advance(number), Some(OrderStatus::Delivering));
    assert_eq!(history.iter().count(), 1);

    Ok(())
}

#[test]
fn failed_checkout_keeps_the_cart() -> TestResult {
    let mut cart = CartStore::new(BRL);

    cart.add_item(&Product::new("3", "Bepantol", Money::from_minor(15_00, BRL)))?;

    let request = CheckoutRequest {
        delivery_mode: DeliveryMode::Pickup,
        payment: PaymentMethod::Credit(CardDetails::default()),
    };

    let result = checkout(&mut cart, &request, &ShippingPolicy::default());

    assert_eq!(result.err(), Some(CheckoutError::MissingCardDetails));
    assert_eq!(cart.total_items(), 1);

    Ok(())
}

#[test]
fn favourites_survive_cart_checkout() -> TestResult {
    let product = Product::new("1", "Dipirona", Money::from_minor(9_90, BRL));
    let mut favorites = Favorites::new();
    let mut cart = CartStore::new(BRL);

    favorites.add(&product);
    cart.add_item(&product)?;

    let request = CheckoutRequest {
        delivery_mode: DeliveryMode::Pickup,
        payment: PaymentMethod::Cash,
    };

    checkout(&mut cart, &request, &ShippingPolicy::default())?;

    assert!(favorites.contains(&product.id));

    Ok(())
}
