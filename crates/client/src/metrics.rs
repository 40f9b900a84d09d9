//! `/metrics` endpoints.

use std::collections::HashMap;

use crate::http::{ApiError, ReviewerApi};

impl ReviewerApi {
    /// Visit counts keyed by URL pattern. `GET /metrics/visits/by-url`
    pub async fn url_visit_counts(&self) -> Result<HashMap<String, i64>, ApiError> {
        let response = self
            .client
            .get(self.url("/metrics/visits/by-url"))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Entity counts keyed by entity name. `GET /metrics/counts`
    pub async fn entity_counts(&self) -> Result<HashMap<String, i64>, ApiError> {
        let response = self.client.get(self.url("/metrics/counts")).send().await?;
        Self::parse_response(response).await
    }
}
