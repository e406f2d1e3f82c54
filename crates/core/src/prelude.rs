//! Vitrine prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{CartError, CartLine, CartStore},
    catalog::{CatalogEntry, CatalogEntryError, resolve_image_ref},
    checkout::{
        CardDetails, CheckoutError, CheckoutRequest, PaymentKind, PaymentMethod, checkout,
    },
    favorites::Favorites,
    orders::{Order, OrderHistory, OrderStatus},
    pricing::{AmountError, OrderTotal, format_amount, order_total, parse_amount, subtotal, total},
    products::{Product, ProductId},
    shipping::{DeliveryMode, ShippingPolicy},
    storefront_currency,
};
