//! Storefront session
//!
//! One customer's session: the listing they last saw, their cart, favourites and
//! past orders. Catalogue calls are awaited before the cart is touched, so a failed
//! lookup never leaves the cart half-updated.

use thiserror::Error;
use tracing::{info, warn};
use vitrine::{
    cart::{CartError, CartStore},
    checkout::{self, CheckoutError, CheckoutRequest},
    favorites::Favorites,
    orders::OrderHistory,
    pricing::OrderTotal,
    products::{Product, ProductId},
    shipping::{DeliveryMode, ShippingPolicy},
    storefront_currency,
};

use crate::catalog::{Catalog, CatalogError};

/// Errors raised by storefront actions.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

/// A customer session over a [`Catalog`].
#[derive(Debug)]
pub struct Storefront<C> {
    catalog: C,
    policy: ShippingPolicy,
    listing: Vec<Product>,
    cart: CartStore,
    favorites: Favorites,
    history: OrderHistory,
}

impl<C: Catalog> Storefront<C> {
    /// Start an empty session.
    pub fn new(catalog: C, policy: ShippingPolicy) -> Self {
        Self {
            catalog,
            policy,
            listing: Vec::new(),
            cart: CartStore::new(storefront_currency()),
            favorites: Favorites::new(),
            history: OrderHistory::new(),
        }
    }

    /// Reloads the full listing from the catalogue.
    ///
    /// # Errors
    ///
    /// Returns the catalogue error; the previous listing is kept.
    pub async fn load_products(&mut self) -> Result<&[Product], StorefrontError> {
        self.listing = self.catalog.list_products().await?;

        Ok(&self.listing)
    }

    /// Searches the catalogue by name.
    ///
    /// A blank query returns the current listing. When the catalogue cannot be
    /// searched, the current listing is filtered locally instead.
    pub async fn search(&self, query: &str) -> Vec<Product> {
        let query = query.trim();

        if query.is_empty() {
            return self.listing.clone();
        }

        match self.catalog.search_products(query).await {
            Ok(products) => products,
            Err(error) => {
                warn!(%error, query, "catalogue search failed, filtering locally");

                let needle = query.to_lowercase();

                self.listing
                    .iter()
                    .filter(|product| product.name.to_lowercase().contains(&needle))
                    .cloned()
                    .collect()
            }
        }
    }

    /// Fetches a product and adds one unit of it to the cart, returning the line quantity.
    ///
    /// # Errors
    ///
    /// Returns the catalogue error when the product cannot be fetched; the cart is
    /// left untouched.
    pub async fn add_to_cart(&mut self, id: &ProductId) -> Result<u32, StorefrontError> {
        let product = self.catalog.get_product(id).await?;

        Ok(self.cart.add_item(&product)?)
    }

    /// Flips the favourite mark of a product, returning whether it is now a favourite.
    ///
    /// # Errors
    ///
    /// Returns the catalogue error when the product is not in the listing and cannot
    /// be fetched.
    pub async fn toggle_favorite(&mut self, id: &ProductId) -> Result<bool, StorefrontError> {
        let product = match self.listing.iter().find(|product| &product.id == id) {
            Some(product) => product.clone(),
            None => self.catalog.get_product(id).await?,
        };

        Ok(self.favorites.toggle(&product))
    }

    /// Totals for the current cart.
    pub fn order_total(&self, mode: DeliveryMode) -> OrderTotal {
        self.cart.order_total(mode, &self.policy)
    }

    /// Places an order for the cart and records it, returning the order number.
    ///
    /// # Errors
    ///
    /// Returns the checkout error; the cart is left untouched.
    pub fn checkout(&mut self, request: &CheckoutRequest) -> Result<u64, StorefrontError> {
        let order = checkout::checkout(&mut self.cart, request, &self.policy)?;
        let number = self.history.record(order);

        info!(order = number, "order recorded");

        Ok(number)
    }

    /// The listing last loaded.
    pub fn listing(&self) -> &[Product] {
        &self.listing
    }

    /// The cart.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The cart, for quantity updates and removals.
    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// Favourite products.
    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Orders placed in this session.
    pub fn history(&self) -> &OrderHistory {
        &self.history
    }

    /// Orders placed in this session, for status updates.
    pub fn history_mut(&mut self) -> &mut OrderHistory {
        &mut self.history
    }
}
