//! Catalogue access
//!
//! A [`Catalog`] hands out normalised [`Product`]s, wherever they come from: the
//! product API over HTTP ([`HttpCatalog`]) or a products service in the same process
//! ([`ServiceCatalog`]).

use std::error::Error as StdError;

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;
use tracing::warn;
use vitrine::{
    catalog::CatalogEntry,
    products::{Product, ProductId},
    storefront_currency,
};

mod http;
mod service;

pub use http::{DEFAULT_TIMEOUT, HttpCatalog};
pub use service::ServiceCatalog;

/// Boxed source error for failures that come from different transports.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Errors raised by catalogue lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The requested product does not exist.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// The catalogue could not be reached or failed; retrying may help.
    #[error("catalogue unavailable")]
    Transient(#[source] BoxError),

    /// The catalogue answered with something that is not a product.
    #[error("unreadable catalogue response")]
    Decode(#[source] BoxError),
}

/// Read access to the product catalogue.
#[automock]
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Retrieves the whole catalogue.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Retrieves products whose name contains `query`.
    async fn search_products(&self, query: &str) -> Result<Vec<Product>, CatalogError>;

    /// Retrieves a single product.
    async fn get_product(&self, id: &ProductId) -> Result<Product, CatalogError>;
}

/// Normalises a listing, dropping entries without an id.
fn normalize_entries(entries: &[CatalogEntry], base_url: &str) -> Vec<Product> {
    entries
        .iter()
        .filter_map(|entry| match entry.normalize(base_url, storefront_currency()) {
            Ok(product) => Some(product),
            Err(error) => {
                warn!(%error, "skipping catalogue entry");

                None
            }
        })
        .collect()
}

fn normalize_entry(entry: &CatalogEntry, base_url: &str) -> Result<Product, CatalogError> {
    entry
        .normalize(base_url, storefront_currency())
        .map_err(|error| CatalogError::Decode(error.into()))
}
