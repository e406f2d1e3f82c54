//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use vitrine_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData => {
            StatusError::bad_request().brief(error.to_string())
        }
        ProductsServiceError::Storage(source) => {
            error!("failed to write products file: {source}");

            StatusError::internal_server_error()
        }
        ProductsServiceError::Serialization(source) => {
            error!("failed to encode products: {source}");

            StatusError::internal_server_error()
        }
    }
}
