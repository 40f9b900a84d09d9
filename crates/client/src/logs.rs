//! `/logs` endpoints: asynchronous log-file generation.
//!
//! Starting a generation returns a task id; progress is observed by
//! polling the status endpoint (see [`crate::poller`]). Download URLs
//! are only constructed here, never fetched: the operator follows them
//! with a browser or `curl`.

use serde::Deserialize;

use reviewer_core::job::JobStatus;
use reviewer_core::types::ApiDate;

use crate::http::{ApiError, ReviewerApi};

/// Response returned by `POST /logs/generate` after the backend has
/// accepted a generation task.
///
/// `task_id` and `status` are optional on the wire so that a malformed
/// acceptance (no id) can be detected instead of failing to parse.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogGenerationStarted {
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub status: Option<JobStatus>,
    #[serde(default)]
    pub status_url: Option<String>,
}

/// Response returned by `GET /logs/generate/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogGenerationStatus {
    pub status: JobStatus,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
}

impl ReviewerApi {
    /// Start generating a log file for the given date.
    /// `POST /logs/generate?date=YYYY-MM-DD`
    pub async fn start_log_generation(
        &self,
        date: ApiDate,
    ) -> Result<LogGenerationStarted, ApiError> {
        let response = self
            .client
            .post(self.url("/logs/generate"))
            .query(&[("date", date.to_string())])
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Fetch the current status of a generation task.
    /// `GET /logs/generate/{id}/status`
    pub async fn log_generation_status(
        &self,
        task_id: &str,
    ) -> Result<LogGenerationStatus, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/logs/generate/{task_id}/status")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// URL of the file produced by a completed generation task.
    /// `GET /logs/generate/{id}/download`
    pub fn generated_log_download_url(&self, task_id: &str) -> String {
        self.url(&format!("/logs/generate/{task_id}/download"))
    }

    /// URL of the standard application log file for a date.
    /// `GET /logs/download?date=YYYY-MM-DD`
    pub fn standard_log_download_url(&self, date: ApiDate) -> String {
        format!("{}?date={date}", self.url("/logs/download"))
    }
}
