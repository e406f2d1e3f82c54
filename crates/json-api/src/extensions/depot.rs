//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use crate::observability::REQUEST_ID_DEPOT_KEY;

/// Helpers for reading request-scoped values from the depot.
pub(crate) trait DepotExt {
    /// Get an injected value, or fail the request with a 500.
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// The id assigned to the request by the logging middleware.
    fn request_id(&self) -> Option<&str>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn request_id(&self) -> Option<&str> {
        self.get::<String>(REQUEST_ID_DEPOT_KEY)
            .ok()
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn missing_injection_is_a_500() {
        let depot = Depot::new();

        let result = depot.obtain_or_500::<Arc<String>>();

        assert!(matches!(
            result,
            Err(error) if error.code == StatusCode::INTERNAL_SERVER_ERROR
        ));
    }

    #[test]
    fn request_id_is_read_back() {
        let mut depot = Depot::new();

        assert_eq!(depot.request_id(), None);

        depot.insert(REQUEST_ID_DEPOT_KEY, "req-9".to_string());

        assert_eq!(depot.request_id(), Some("req-9"));
    }
}
