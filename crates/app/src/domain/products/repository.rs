//! Products Repository

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tokio::fs;
use tracing::info;

use crate::domain::products::{
    errors::ProductsServiceError, records::ProductRecord, seed::seed_products,
};

/// Reads and writes the whole product list as one pretty-printed JSON array.
#[derive(Debug, Clone)]
pub(crate) struct JsonProductsRepository {
    path: PathBuf,
}

impl JsonProductsRepository {
    #[must_use]
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the product list, writing the seed catalogue first when the file is missing.
    pub(crate) async fn load_or_seed(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(error) if error.kind() == ErrorKind::NotFound => {
                let products = seed_products();

                self.save(&products).await?;

                info!(path = %self.path.display(), "seeded products file");

                Ok(products)
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Replaces the file contents with `products`.
    pub(crate) async fn save(&self, products: &[ProductRecord]) -> Result<(), ProductsServiceError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let bytes = serde_json::to_vec_pretty(products)?;
        let staging = self.path.with_extension("json.tmp");

        fs::write(&staging, bytes).await?;
        fs::rename(&staging, &self.path).await?;

        Ok(())
    }
}
