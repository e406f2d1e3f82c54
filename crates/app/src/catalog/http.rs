//! Product API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use vitrine::{
    catalog::CatalogEntry,
    products::{Product, ProductId},
};

use super::{Catalog, CatalogError, normalize_entries, normalize_entry};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Catalogue served by the product API, e.g. `http://192.168.0.10:3000/api`.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    base_url: String,
    base: Url,
    http: Client,
}

impl HttpCatalog {
    /// Create a client for the API at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Transient`] when `base_url` is not an `http(s)` URL or
    /// the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        let base = Url::parse(&base_url)
            .map_err(|error| CatalogError::Transient(error.into()))?;

        if base.cannot_be_a_base() {
            return Err(CatalogError::Transient(
                format!("{base_url} cannot carry a path").into(),
            ));
        }

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(transport_error)?;

        Ok(Self {
            base_url,
            base,
            http,
        })
    }

    /// API base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Appends `segments` to the base path; each one is percent-encoded, so ids
    /// containing `/`, `?` or `#` stay a single segment.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();

        // Checked in `new`.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }

        url
    }

    /// `Ok(None)` when the API answers 404.
    async fn fetch<T: DeserializeOwned>(
        &self,
        url: Url,
        query: Option<&str>,
    ) -> Result<Option<T>, CatalogError> {
        let mut request = self.http.get(url);

        if let Some(query) = query {
            request = request.query(&[("q", query)]);
        }

        let response = request.send().await.map_err(transport_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        decode(response).await.map(Some)
    }

    /// A listing endpoint must exist; a 404 there means the base URL is wrong.
    async fn fetch_listing(
        &self,
        url: Url,
        query: Option<&str>,
    ) -> Result<Vec<Product>, CatalogError> {
        let entries: Vec<CatalogEntry> = self
            .fetch(url.clone(), query)
            .await?
            .ok_or_else(|| {
                CatalogError::Transient(format!("no product listing at {url}").into())
            })?;

        Ok(normalize_entries(&entries, &self.base_url))
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.fetch_listing(self.url(&["products"]), None).await
    }

    async fn search_products(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        self.fetch_listing(self.url(&["products", "search"]), Some(query))
            .await
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        let entry: CatalogEntry = self
            .fetch(self.url(&["products", id.as_str()]), None)
            .await?
            .ok_or_else(|| CatalogError::NotFound(id.clone()))?;

        normalize_entry(&entry, &self.base_url)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, CatalogError> {
    let status = response.status();

    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();

        return Err(CatalogError::Transient(
            format!("request failed with status {status}: {text}").into(),
        ));
    }

    response.json().await.map_err(transport_error)
}

fn transport_error(error: reqwest::Error) -> CatalogError {
    if error.is_decode() {
        CatalogError::Decode(error.into())
    } else {
        CatalogError::Transient(error.into())
    }
}
