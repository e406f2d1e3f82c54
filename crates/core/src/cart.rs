//! Cart
//!
//! The cart keeps one line per product, in the order products were first added. Each
//! line snapshots the product as it was at that moment, so later catalogue edits or
//! removals never change what the customer is charged for a line already in the cart.

use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::debug;

use crate::{
    pricing::{self, OrderTotal},
    products::{Product, ProductId},
    shipping::{DeliveryMode, ShippingPolicy},
};

/// Errors related to cart mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// A product's currency differs from the cart currency (product, product currency, cart currency).
    #[error("Product {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),
}

/// One product-plus-quantity row in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    product_id: ProductId,
    name: String,
    description: Option<String>,
    price: Money<'static, Currency>,
    previous_price: Option<Money<'static, Currency>>,
    image_ref: String,
    quantity: u32,
}

impl CartLine {
    fn snapshot(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            previous_price: product.previous_price,
            image_ref: product.image_ref.clone(),
            quantity: 1,
        }
    }

    /// Returns the referenced product identifier.
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Returns the product name at the time it was added.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the product description at the time it was added.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the unit price locked in when the product was first added.
    pub fn price(&self) -> &Money<'static, Currency> {
        &self.price
    }

    /// Returns the pre-markdown price at the time it was added.
    pub fn previous_price(&self) -> Option<&Money<'static, Currency>> {
        self.previous_price.as_ref()
    }

    /// Returns the image reference at the time it was added.
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    /// Returns the quantity, always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns `price * quantity`.
    pub fn total(&self) -> Money<'_, Currency> {
        Money::from_minor(self.total_minor(), self.price.currency())
    }

    pub(crate) fn total_minor(&self) -> i64 {
        self.price
            .to_minor_units()
            .saturating_mul(i64::from(self.quantity))
    }
}

/// In-memory cart for a single shopping session.
#[derive(Debug, Clone)]
pub struct CartStore {
    lines: Vec<CartLine>,
    currency: &'static Currency,
}

impl CartStore {
    /// Create an empty cart priced in the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        CartStore {
            lines: Vec::new(),
            currency,
        }
    }

    /// Adds one unit of `product`, returning the line's new quantity.
    ///
    /// An existing line for the same product only has its quantity bumped; its
    /// snapshot, price included, is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::CurrencyMismatch`] if the product is priced in another currency.
    /// Catalogue entries are normalised into the cart's currency, so only hand-built
    /// products can hit it.
    pub fn add_item(&mut self, product: &Product) -> Result<u32, CartError> {
        let product_currency = product.price.currency();

        if product_currency != self.currency {
            return Err(CartError::CurrencyMismatch(
                product.id.clone(),
                product_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        if let Some(line) = self.line_mut(&product.id) {
            line.quantity = line.quantity.saturating_add(1);

            return Ok(line.quantity);
        }

        self.lines.push(CartLine::snapshot(product));

        Ok(1)
    }

    /// Removes the line for `product_id`. Returns whether a line was removed.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let before = self.lines.len();

        self.lines.retain(|line| &line.product_id != product_id);

        self.lines.len() != before
    }

    /// Sets the quantity of the line for `product_id` to exactly `quantity`.
    ///
    /// Zero or negative quantities remove the line. Updating a product that is not in
    /// the cart does nothing.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);

            return;
        }

        let Some(line) = self.line_mut(product_id) else {
            debug!(%product_id, quantity, "ignoring quantity update for product not in cart");

            return;
        };

        line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Iterates over lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Get the line for a product, if present.
    pub fn get(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines
            .iter()
            .find(|line| &line.product_id == product_id)
    }

    /// Get the number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    pub fn total_items(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity))
            .sum()
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Calculate the subtotal of the cart.
    pub fn subtotal(&self) -> Money<'static, Currency> {
        pricing::subtotal(&self.lines, self.currency)
    }

    /// Calculate the order total for the given delivery mode.
    pub fn order_total(&self, mode: DeliveryMode, policy: &ShippingPolicy) -> OrderTotal {
        pricing::order_total(&self.lines, self.currency, mode, policy)
    }

    fn line_mut(&mut self, product_id: &ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| &line.product_id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;
    use testresult::TestResult;

    use crate::catalog::CatalogEntry;

    use super::*;

    fn product(id: &str, price: i64) -> Product {
        Product::new(id, format!("Product {id}"), Money::from_minor(price, iso::BRL))
    }

    fn ids(cart: &CartStore) -> Vec<&str> {
        cart.iter().map(|line| line.product_id().as_str()).collect()
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = CartStore::new(iso::BRL);

        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.currency(), iso::BRL);
    }

    #[test]
    fn add_new_product_inserts_line_with_quantity_one() -> TestResult {
        let mut cart = CartStore::new(iso::BRL);

        let quantity = cart.add_item(&product("a", 1_00))?;

        assert_eq!(quantity, 1);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&"a".into()).map(CartLine::quantity), Some(1));

        Ok(())
    }

    #[test]
    fn add_existing_product_bumps_quantity() -> TestResult {
        let mut cart = CartStore::new(iso::BRL);

        cart.add_item(&product("a", 1_00))?;
        let quantity = cart.add_item(&product("a", 1_00))?;

        assert_eq!(quantity, 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_items(), 2);

        Ok(())
    }

    #[test]
    fn add_existing_product_keeps_snapshot() -> TestResult {
        let mut cart = CartStore::new(iso::BRL);

        cart.add_item(&product("a", 10_00).with_description("old"))?;

        let repriced = Product::new("a", "Renamed", Money::from_minor(20_00, iso::BRL))
            .with_description("new");

        cart.add_item(&repriced)?;

        let line = cart.get(&"a".into()).ok_or("line missing")?;

        assert_eq!(line.name(), "Product a");
        assert_eq!(line.description(), Some("old"));
        assert_eq!(line.price(), &Money::from_minor(10_00, iso::BRL));
        assert_eq!(line.total(), Money::from_minor(20_00, iso::BRL));

        Ok(())
    }

    #[test]
    fn normalised_catalogue_entries_always_add() -> TestResult {
        let entries: Vec<CatalogEntry> = serde_json::from_value(serde_json::json!([
            { "id": "1", "nome": "Dipirona", "preco": 9.9 },
            { "id": 2, "preco": "abc" },
            { "id": "3", "nome": "Bepantol", "preco": -4 }
        ]))?;

        let mut cart = CartStore::new(crate::storefront_currency());

        for entry in &entries {
            let product = entry.normalize("http://localhost:3000/api", crate::storefront_currency())?;

            cart.add_item(&product)?;
        }

        assert_eq!(ids(&cart), ["1", "2", "3"]);

        Ok(())
    }

    #[test]
    fn add_rejects_other_currency() {
        let mut cart = CartStore::new(iso::BRL);
        let product = Product::new("a", "Imported", Money::from_minor(1_00, iso::USD));

        let result = cart.add_item(&product);

        assert_eq!(
            result,
            Err(CartError::CurrencyMismatch(
                "a".into(),
                iso::USD.iso_alpha_code,
                iso::BRL.iso_alpha_code
            ))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn remove_deletes_line() -> TestResult {
        let mut cart = CartStore::new(iso::BRL);

        cart.add_item(&product("a", 1_00))?;
        cart.add_item(&product("b", 1_00))?;

        assert!(cart.remove_item(&"a".into()));
        assert_eq!(ids(&cart), ["b"]);

        Ok(())
    }

    #[test]
    fn remove_absent_is_noop() -> TestResult {
        let mut cart = CartStore::new(iso::BRL);

        cart.add_item(&product("a", 1_00))?;

        assert!(!cart.remove_item(&"missing".into()));
        assert_eq!(ids(&cart), ["a"]);

        Ok(())
    }

    #[test]
    fn update_sets_absolute_quantity() -> TestResult {
        let mut cart = CartStore::new(iso::BRL);

        cart.add_item(&product("a", 1_00))?;
        cart.add_item(&product("a", 1_00))?;
        cart.update_quantity(&"a".into(), 5);

        assert_eq!(cart.get(&"a".into()).map(CartLine::quantity), Some(5));

        Ok(())
    }

    #[test]
    fn update_to_zero_or_below_removes_line() -> TestResult {
        let mut cart = CartStore::new(iso::BRL);

        cart.add_item(&product("a", 1_00))?;
        cart.add_item(&product("b", 1_00))?;
        cart.update_quantity(&"a".into(), 0);
        cart.update_quantity(&"b".into(), -3);

        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn update_absent_is_noop() -> TestResult {
        let mut cart = CartStore::new(iso::BRL);

        cart.add_item(&product("a", 1_00))?;
        cart.update_quantity(&"missing".into(), 3);

        assert_eq!(ids(&cart), ["a"]);
        assert_eq!(cart.total_items(), 1);

        Ok(())
    }

    #[test]
    fn updates_do_not_reorder_lines() -> TestResult {
        let mut cart = CartStore::new(iso::BRL);

        cart.add_item(&product("a", 1_00))?;
        cart.add_item(&product("b", 1_00))?;
        cart.add_item(&product("c", 1_00))?;
        cart.update_quantity(&"a".into(), 10);
        cart.add_item(&product("b", 1_00))?;

        assert_eq!(ids(&cart), ["a", "b", "c"]);

        Ok(())
    }

    #[test]
    fn clear_empties_cart() -> TestResult {
        let mut cart = CartStore::new(iso::BRL);

        cart.add_item(&product("a", 1_00))?;
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::from_minor(0, iso::BRL));

        Ok(())
    }

    #[test]
    fn huge_quantity_saturates() -> TestResult {
        let mut cart = CartStore::new(iso::BRL);

        cart.add_item(&product("a", 1))?;
        cart.update_quantity(&"a".into(), i64::MAX);

        assert_eq!(cart.get(&"a".into()).map(CartLine::quantity), Some(u32::MAX));

        Ok(())
    }
}
