//! `/reviews` endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use reviewer_core::types::{ApiDate, ApiId};

use crate::http::{ApiError, ReviewerApi};
use crate::teachers::Teacher;

/// One review as the backend displays it: author and teacher resolved,
/// subject named.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ApiId,
    pub author_id: ApiId,
    pub author: String,
    pub teacher: Teacher,
    pub subject_id: ApiId,
    pub subject_name: String,
    pub date: ApiDate,
    pub grade: i32,
    pub comment: Option<String>,
}

/// Payload for creating or updating a review.
///
/// The date must additionally be past-or-present; callers check that
/// with `reviewer_core::validation` against the current day.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPayload {
    pub user_id: ApiId,
    pub teacher_id: ApiId,
    pub subject_id: ApiId,
    pub date: ApiDate,
    #[validate(range(min = 1, max = 10, message = "Grade must be between 1 and 10"))]
    pub grade: i32,
    #[validate(length(max = 5000, message = "Comment must be no longer than 5000 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Optional filters for `GET /reviews/search`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<ApiDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<ApiDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_grade: Option<i32>,
}

impl ReviewerApi {
    /// Fetch all reviews. `GET /reviews`
    pub async fn list_reviews(&self) -> Result<Vec<Review>, ApiError> {
        let response = self.client.get(self.url("/reviews")).send().await?;
        Self::parse_response(response).await
    }

    /// Fetch one review by id. `GET /reviews/{id}`
    pub async fn get_review(&self, id: ApiId) -> Result<Review, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/reviews/{id}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Fetch the reviews written by a user. `GET /reviews/user/{userId}`
    pub async fn reviews_by_user(&self, user_id: ApiId) -> Result<Vec<Review>, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/reviews/user/{user_id}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Fetch the reviews written by a user, by username.
    /// `GET /reviews/username/{username}`
    pub async fn reviews_by_username(&self, username: &str) -> Result<Vec<Review>, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/reviews/username/{username}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Fetch the reviews about a teacher. `GET /reviews/teacher/{teacherId}`
    pub async fn reviews_by_teacher(&self, teacher_id: ApiId) -> Result<Vec<Review>, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/reviews/teacher/{teacher_id}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Fetch the most recent reviews. `GET /reviews/recent?limit=`
    pub async fn recent_reviews(&self, limit: u32) -> Result<Vec<Review>, ApiError> {
        let response = self
            .client
            .get(self.url("/reviews/recent"))
            .query(&[("limit", limit)])
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Search reviews with optional filters. `GET /reviews/search`
    pub async fn search_reviews(&self, filter: &ReviewFilter) -> Result<Vec<Review>, ApiError> {
        let response = self
            .client
            .get(self.url("/reviews/search"))
            .query(filter)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Create a review. `POST /reviews`
    pub async fn create_review(&self, payload: &ReviewPayload) -> Result<Review, ApiError> {
        let response = self
            .client
            .post(self.url("/reviews"))
            .json(payload)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Update a review. `PUT /reviews/{id}`
    pub async fn update_review(
        &self,
        id: ApiId,
        payload: &ReviewPayload,
    ) -> Result<Review, ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/reviews/{id}")))
            .json(payload)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Delete a review. `DELETE /reviews/{id}`
    pub async fn delete_review(&self, id: ApiId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/reviews/{id}")))
            .send()
            .await?;
        Self::check_status(response).await
    }
}
