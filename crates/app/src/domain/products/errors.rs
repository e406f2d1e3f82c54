//! Products service errors.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product not found")]
    NotFound,

    #[error("name, price and image are required")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Storage(#[from] io::Error),

    #[error("products file is malformed")]
    Serialization(#[from] serde_json::Error),
}
