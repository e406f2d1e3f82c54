//! Request IDs

use salvo::{http::header::HeaderValue, prelude::Response};
use tracing::warn;
use uuid::Uuid;

pub(super) const REQUEST_ID_HEADER: &str = "x-request-id";

/// Keeps a caller-supplied id, or generates a v7 UUID when it is missing or blank.
pub(super) fn resolve(header_value: Option<String>) -> String {
    header_value
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| Uuid::now_v7().to_string())
}

pub(super) fn set_response_header(res: &mut Response, request_id: &str) {
    match HeaderValue::from_str(request_id) {
        Ok(value) => {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        Err(source) => {
            warn!(
                request_id,
                "could not encode request id for response header: {source}"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_ids_are_replaced() {
        let id = resolve(Some("  ".to_string()));

        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn supplied_ids_are_kept() {
        assert_eq!(resolve(Some("req-1".to_string())), "req-1");
    }
}
