use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use business::domain::shopping_item::service::ShoppingListService;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// Number of items currently on the shopping list
    pub item_count: u64,
}

pub struct Api {
    service: Arc<dyn ShoppingListService>,
}

impl Api {
    pub fn new(service: Arc<dyn ShoppingListService>) -> Self {
        Self { service }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns the current status of the service.
    ///
    /// ## Response
    /// - `status`: "healthy" if service is running
    /// - `timestamp`: Current server timestamp in ISO 8601 format
    /// - `version`: Service version from Cargo.toml
    /// - `item_count`: Items currently held in memory
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            item_count: self.service.count() as u64,
        })
    }
}
