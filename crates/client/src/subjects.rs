//! `/subjects` endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use reviewer_core::types::ApiId;

use crate::http::{ApiError, ReviewerApi};

/// A subject together with the names of the teachers who teach it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: ApiId,
    pub name: String,
    #[serde(default)]
    pub teacher_names: Vec<String>,
}

/// Payload for creating or renaming a subject.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubjectPayload {
    #[validate(length(min = 2, max = 100, message = "Subject name must be 2-100 characters"))]
    pub name: String,
}

impl ReviewerApi {
    /// Fetch all subjects. `GET /subjects`
    pub async fn list_subjects(&self) -> Result<Vec<Subject>, ApiError> {
        let response = self.client.get(self.url("/subjects")).send().await?;
        Self::parse_response(response).await
    }

    /// Fetch one subject by id. `GET /subjects/{id}`
    pub async fn get_subject(&self, id: ApiId) -> Result<Subject, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/subjects/{id}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Fetch one subject by name. `GET /subjects/name/{name}`
    pub async fn get_subject_by_name(&self, name: &str) -> Result<Subject, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/subjects/name/{name}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Create a subject. `POST /subjects`
    pub async fn create_subject(&self, payload: &SubjectPayload) -> Result<Subject, ApiError> {
        let response = self
            .client
            .post(self.url("/subjects"))
            .json(payload)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Update a subject. `PUT /subjects/{id}`
    pub async fn update_subject(
        &self,
        id: ApiId,
        payload: &SubjectPayload,
    ) -> Result<Subject, ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/subjects/{id}")))
            .json(payload)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Delete a subject. `DELETE /subjects/{id}`
    pub async fn delete_subject(&self, id: ApiId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/subjects/{id}")))
            .send()
            .await?;
        Self::check_status(response).await
    }
}
