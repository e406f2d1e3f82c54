//! Request logging settings, fixed once at startup.

use std::{sync::OnceLock, time::Duration};

use crate::config::observability::ObservabilityConfig;

/// Settings read by the request logging middleware.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct RequestSettings {
    pub(super) slow_request_threshold: Duration,
    pub(super) parent_propagation: bool,
}

impl Default for RequestSettings {
    fn default() -> Self {
        Self {
            slow_request_threshold: Duration::from_secs(1),
            parent_propagation: false,
        }
    }
}

impl From<&ObservabilityConfig> for RequestSettings {
    fn from(config: &ObservabilityConfig) -> Self {
        Self {
            slow_request_threshold: Duration::from_millis(config.slow_request_threshold_ms),
            // Parent contexts are meaningless when spans are not exported.
            parent_propagation: config.otel_enabled && config.otel_parent_propagation_enabled,
        }
    }
}

static SETTINGS: OnceLock<RequestSettings> = OnceLock::new();

/// Later calls are ignored; the first configuration wins.
pub(super) fn apply_runtime_config(config: &ObservabilityConfig) {
    _ = SETTINGS.set(config.into());
}

/// The configured settings, or the defaults when nothing was applied (tests).
pub(super) fn current() -> RequestSettings {
    SETTINGS.get().copied().unwrap_or_default()
}
