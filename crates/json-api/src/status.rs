//! Service status handlers

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
}

/// Banner response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BannerResponse {
    /// Greeting confirming the API is up
    pub message: String,
}

/// Healthcheck handler
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// API root handler
#[endpoint(tags("health"), summary = "API banner")]
pub(crate) async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "Vitrine product API is running".to_string(),
    })
}
