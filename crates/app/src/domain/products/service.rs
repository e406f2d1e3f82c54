//! Products service.

use std::path::PathBuf;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tokio::sync::RwLock;
use tracing::info;
use vitrine::products::ProductId;

use crate::domain::products::{
    data::{NewProduct, ProductUpdate},
    errors::ProductsServiceError,
    records::ProductRecord,
    repository::JsonProductsRepository,
    seed::seed_products,
};

/// Products kept in memory and mirrored to a JSON file after every change.
#[derive(Debug)]
pub struct JsonProductsService {
    repository: JsonProductsRepository,
    products: RwLock<Vec<ProductRecord>>,
}

impl JsonProductsService {
    /// Opens the products file at `path`, seeding it when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read, written or parsed.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, ProductsServiceError> {
        let repository = JsonProductsRepository::new(path);
        let products = repository.load_or_seed().await?;

        info!(
            path = %repository.path().display(),
            products = products.len(),
            "loaded products"
        );

        Ok(Self {
            repository,
            products: RwLock::new(products),
        })
    }

    /// Overwrites the products file with the seed catalogue.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be written.
    pub async fn reset(&self) -> Result<usize, ProductsServiceError> {
        let mut products = self.products.write().await;
        let seeded = seed_products();

        self.repository.save(&seeded).await?;

        *products = seeded;

        Ok(products.len())
    }
}

#[async_trait]
impl ProductsService for JsonProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        Ok(self.products.read().await.clone())
    }

    async fn search_products(
        &self,
        query: &str,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let query = query.trim();
        let products = self.products.read().await;

        Ok(products
            .iter()
            .filter(|product| query.is_empty() || product.name_matches(query))
            .cloned()
            .collect())
    }

    async fn get_product(&self, id: &ProductId) -> Result<ProductRecord, ProductsServiceError> {
        self.products
            .read()
            .await
            .iter()
            .find(|product| &product.id == id)
            .cloned()
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        product.validate()?;

        let mut products = self.products.write().await;

        let created = ProductRecord {
            id: next_id(&products),
            name: product.name,
            description: product.description,
            price: product.price,
            image: product.image,
            category: product.category,
            previous_price: product.previous_price,
        };

        let mut updated = products.clone();

        updated.push(created.clone());

        self.repository.save(&updated).await?;

        *products = updated;

        info!(product_id = %created.id, "created product");

        Ok(created)
    }

    async fn update_product(
        &self,
        id: &ProductId,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut products = self.products.write().await;
        let mut updated = products.clone();

        let record = updated
            .iter_mut()
            .find(|product| &product.id == id)
            .ok_or(ProductsServiceError::NotFound)?;

        update.apply(record)?;

        let record = record.clone();

        self.repository.save(&updated).await?;

        *products = updated;

        info!(product_id = %id, "updated product");

        Ok(record)
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), ProductsServiceError> {
        let mut products = self.products.write().await;

        if !products.iter().any(|product| &product.id == id) {
            return Err(ProductsServiceError::NotFound);
        }

        let remaining: Vec<ProductRecord> = products
            .iter()
            .filter(|product| &product.id != id)
            .cloned()
            .collect();

        self.repository.save(&remaining).await?;

        *products = remaining;

        info!(product_id = %id, "deleted product");

        Ok(())
    }
}

/// Creation time in Unix milliseconds, bumped past any id already taken.
fn next_id(products: &[ProductRecord]) -> ProductId {
    let mut candidate = Timestamp::now().as_millisecond();

    loop {
        let id = ProductId::new(candidate.to_string());

        if !products.iter().any(|product| product.id == id) {
            return id;
        }

        candidate = candidate.saturating_add(1);
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieves products whose name contains `query`, ignoring case. A blank query
    /// matches everything.
    async fn search_products(
        &self,
        query: &str,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, id: &ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a new product with a generated id.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Applies a partial update to a product.
    async fn update_product(
        &self,
        id: &ProductId,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes a product.
    async fn delete_product(&self, id: &ProductId) -> Result<(), ProductsServiceError>;
}
