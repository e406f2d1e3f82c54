//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::error;

/// Map errors to an internal server error, logging the cause.
pub(crate) trait ResultExt<T> {
    fn or_500(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn errors_become_opaque_500s() {
        let failed: Result<(), &str> = Err("disk full");

        assert!(matches!(
            failed.or_500("saving products"),
            Err(error) if error.code == StatusCode::INTERNAL_SERVER_ERROR && !error.brief.contains("disk")
        ));
    }

    #[test]
    fn successes_pass_through() {
        let ok: Result<u8, &str> = Ok(7);

        assert!(matches!(ok.or_500("unused"), Ok(7)));
    }
}
