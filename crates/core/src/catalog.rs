//! Catalogue entries
//!
//! [`CatalogEntry`] is the product record as served by the product API. Nothing in it
//! is trusted: apart from `id`, every field may be missing or carry the wrong type.
//! [`CatalogEntry::normalize`] turns it into a fully populated [`Product`], substituting
//! defaults instead of failing.

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::{
    pricing::decimal_to_minor,
    products::{Product, ProductId, UNNAMED_PRODUCT},
};

/// Path under the API base URL where relative product images are served.
pub const UPLOADS_PATH: &str = "uploads";

/// Errors raised while normalising catalogue entries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogEntryError {
    /// The entry has no usable identifier.
    #[error("catalogue entry has no usable id")]
    MissingId,
}

/// Product record in the API's wire format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Product identifier
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub id: Value,

    /// Product name (`nome`)
    #[serde(default, rename = "nome", skip_serializing_if = "Value::is_null")]
    pub name: Value,

    /// Product description (`descricao`)
    #[serde(default, rename = "descricao", skip_serializing_if = "Value::is_null")]
    pub description: Value,

    /// Product price (`preco`)
    #[serde(default, rename = "preco", skip_serializing_if = "Value::is_null")]
    pub price: Value,

    /// Price before a markdown (`precoAntigo`)
    #[serde(default, rename = "precoAntigo", skip_serializing_if = "Value::is_null")]
    pub previous_price: Value,

    /// Image URL or path relative to the uploads directory
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub image: Value,

    /// Category label (`categoria`)
    #[serde(default, rename = "categoria", skip_serializing_if = "Value::is_null")]
    pub category: Value,
}

impl CatalogEntry {
    /// Normalises the entry into a [`Product`].
    ///
    /// Missing names become [`UNNAMED_PRODUCT`], missing or unreadable prices become
    /// zero, negative prices are clamped to zero and relative image paths are resolved
    /// against `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogEntryError::MissingId`] when the entry has no string or numeric id.
    pub fn normalize(
        &self,
        base_url: &str,
        currency: &'static Currency,
    ) -> Result<Product, CatalogEntryError> {
        let id = match &self.id {
            Value::String(id) if !id.trim().is_empty() => ProductId::new(id.clone()),
            Value::Number(id) => ProductId::new(id.to_string()),
            _ => return Err(CatalogEntryError::MissingId),
        };

        let name = non_blank(&self.name).unwrap_or_else(|| {
            warn!(product_id = %id, "catalogue entry has no name");

            UNNAMED_PRODUCT.to_string()
        });

        let price = match loose_minor_units(&self.price) {
            Some(minor_units) if minor_units >= 0 => minor_units,
            Some(minor_units) => {
                warn!(product_id = %id, minor_units, "catalogue entry has a negative price");

                0
            }
            None => {
                warn!(product_id = %id, "catalogue entry has no readable price");

                0
            }
        };

        let previous_price = loose_minor_units(&self.previous_price)
            .filter(|minor_units| *minor_units >= 0)
            .map(|minor_units| Money::from_minor(minor_units, currency));

        let image_ref = non_blank(&self.image)
            .map(|image| resolve_image_ref(base_url, &image))
            .unwrap_or_default();

        Ok(Product {
            id,
            name,
            description: non_blank(&self.description),
            price: Money::from_minor(price, currency),
            previous_price,
            image_ref,
            category: non_blank(&self.category),
        })
    }
}

/// Completes a product image reference.
///
/// Absolute `http(s)` URLs are kept; anything else is treated as a file name in the
/// API's uploads directory.
pub fn resolve_image_ref(base_url: &str, image: &str) -> String {
    let image = image.trim();

    if image.is_empty() || image.starts_with("http") {
        return image.to_string();
    }

    format!(
        "{}/{UPLOADS_PATH}/{}",
        base_url.trim_end_matches('/'),
        image.trim_start_matches('/')
    )
}

fn non_blank(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        _ => None,
    }
}

fn loose_minor_units(value: &Value) -> Option<i64> {
    let amount = match value {
        Value::Number(number) => number
            .to_string()
            .parse::<Decimal>()
            .ok()
            .or_else(|| number.as_f64().and_then(|float| Decimal::try_from(float).ok())),
        Value::String(text) => text.trim().replace(',', ".").parse::<Decimal>().ok(),
        _ => None,
    }?;

    decimal_to_minor(amount)
}
