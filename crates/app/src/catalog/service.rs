//! In-process catalogue

use std::sync::Arc;

use async_trait::async_trait;
use vitrine::{
    catalog::CatalogEntry,
    products::{Product, ProductId},
};

use crate::domain::products::{ProductsService, ProductsServiceError, records::ProductRecord};

use super::{Catalog, CatalogError, normalize_entries, normalize_entry};

/// Catalogue backed directly by a [`ProductsService`].
///
/// Records go through the same wire representation the product API serves, so
/// normalisation behaves exactly as it does for [`super::HttpCatalog`].
#[derive(Clone)]
pub struct ServiceCatalog {
    products: Arc<dyn ProductsService>,
    base_url: String,
}

impl ServiceCatalog {
    /// Create a catalogue over `products`, resolving relative images against `base_url`.
    pub fn new(products: Arc<dyn ProductsService>, base_url: impl Into<String>) -> Self {
        Self {
            products,
            base_url: base_url.into(),
        }
    }
}

impl std::fmt::Debug for ServiceCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceCatalog")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Catalog for ServiceCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let records = self.products.list_products().await.map_err(service_error)?;

        Ok(normalize_entries(&to_entries(&records)?, &self.base_url))
    }

    async fn search_products(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        let records = self
            .products
            .search_products(query)
            .await
            .map_err(service_error)?;

        Ok(normalize_entries(&to_entries(&records)?, &self.base_url))
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        let record = self
            .products
            .get_product(id)
            .await
            .map_err(|error| match error {
                ProductsServiceError::NotFound => CatalogError::NotFound(id.clone()),
                error => service_error(error),
            })?;

        normalize_entry(&to_entry(&record)?, &self.base_url)
    }
}

fn to_entry(record: &ProductRecord) -> Result<CatalogEntry, CatalogError> {
    serde_json::to_value(record)
        .and_then(serde_json::from_value)
        .map_err(|error| CatalogError::Decode(error.into()))
}

fn to_entries(records: &[ProductRecord]) -> Result<Vec<CatalogEntry>, CatalogError> {
    records.iter().map(to_entry).collect()
}

fn service_error(error: ProductsServiceError) -> CatalogError {
    CatalogError::Transient(error.into())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::{Money, iso};
    use testresult::TestResult;

    use crate::domain::products::MockProductsService;

    use super::*;

    const BASE_URL: &str = "http://localhost:3000/api";

    fn record() -> ProductRecord {
        ProductRecord {
            id: ProductId::new("2"),
            name: "Colorio ecoflim 5mg/ml".to_string(),
            description: Some("15 Ml".to_string()),
            price: Decimal::new(15_00, 2),
            image: "colirio.png".to_string(),
            category: None,
            previous_price: Some(Decimal::new(18_00, 2)),
        }
    }

    #[tokio::test]
    async fn products_are_normalised() -> TestResult {
        let mut mock = MockProductsService::new();

        mock.expect_list_products()
            .once()
            .returning(|| Ok(vec![record()]));

        let catalog = ServiceCatalog::new(Arc::new(mock), BASE_URL);
        let products = catalog.list_products().await?;
        let product = products.first().ok_or("no products")?;

        assert_eq!(product.price, Money::from_minor(15_00, iso::BRL));
        assert_eq!(
            product.previous_price,
            Some(Money::from_minor(18_00, iso::BRL))
        );
        assert_eq!(product.image_ref, "http://localhost:3000/api/uploads/colirio.png");

        Ok(())
    }

    #[tokio::test]
    async fn missing_product_is_not_found() {
        let mut mock = MockProductsService::new();

        mock.expect_get_product()
            .once()
            .returning(|_| Err(ProductsServiceError::NotFound));

        let catalog = ServiceCatalog::new(Arc::new(mock), BASE_URL);
        let result = catalog.get_product(&ProductId::new("9")).await;

        assert!(matches!(result, Err(CatalogError::NotFound(id)) if id.as_str() == "9"));
    }

    #[tokio::test]
    async fn storage_failures_are_transient() {
        let mut mock = MockProductsService::new();

        mock.expect_search_products()
            .once()
            .returning(|_| Err(ProductsServiceError::InvalidData));

        let catalog = ServiceCatalog::new(Arc::new(mock), BASE_URL);
        let result = catalog.search_products("x").await;

        assert!(matches!(result, Err(CatalogError::Transient(_))));
    }
}
