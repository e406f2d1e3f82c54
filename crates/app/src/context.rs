//! App Context

use std::{path::PathBuf, sync::Arc};

use thiserror::Error;

use crate::domain::products::{JsonProductsService, ProductsService, ProductsServiceError};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to open products file")]
    Products(#[source] ProductsServiceError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    /// Build application context from a products file, seeding it when missing.
    ///
    /// # Errors
    ///
    /// Returns an error when the products file cannot be read, written or parsed.
    pub async fn from_products_file(path: impl Into<PathBuf>) -> Result<Self, AppInitError> {
        let products = JsonProductsService::open(path)
            .await
            .map_err(AppInitError::Products)?;

        Ok(Self {
            products: Arc::new(products),
        })
    }
}
