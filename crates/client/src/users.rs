//! `/users` endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use reviewer_core::types::ApiId;

use crate::http::{ApiError, ReviewerApi};
use crate::reviews::Review;

/// A registered user together with the reviews they authored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: ApiId,
    pub username: String,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Payload for creating or renaming a user.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    #[validate(length(min = 1, message = "Username cannot be blank"))]
    pub username: String,
}

impl ReviewerApi {
    /// Fetch all users. `GET /users`
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let response = self.client.get(self.url("/users")).send().await?;
        Self::parse_response(response).await
    }

    /// Fetch one user by id. `GET /users/{id}`
    pub async fn get_user(&self, id: ApiId) -> Result<User, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/users/{id}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Fetch one user by username. `GET /users/username/{username}`
    pub async fn get_user_by_username(&self, username: &str) -> Result<User, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/users/username/{username}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Create a user. `POST /users`
    pub async fn create_user(&self, payload: &UserPayload) -> Result<User, ApiError> {
        let response = self
            .client
            .post(self.url("/users"))
            .json(payload)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Update a user. `PUT /users/{id}`
    pub async fn update_user(&self, id: ApiId, payload: &UserPayload) -> Result<User, ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/users/{id}")))
            .json(payload)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Delete a user. `DELETE /users/{id}`
    pub async fn delete_user(&self, id: ApiId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/users/{id}")))
            .send()
            .await?;
        Self::check_status(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_username_fails_validation() {
        let payload = UserPayload {
            username: String::new(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn username_serializes_in_camel_case() {
        let payload = UserPayload {
            username: "frozzel".into(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["username"], "frozzel");
    }
}
