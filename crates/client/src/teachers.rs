//! `/teachers` endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use reviewer_core::types::ApiId;

use crate::http::{ApiError, ReviewerApi};

/// A teacher together with the names of the subjects they teach.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: ApiId,
    pub surname: String,
    pub name: String,
    pub patronym: Option<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
}

impl Teacher {
    /// `Surname Name [Patronym]`, the display form used everywhere.
    pub fn full_name(&self) -> String {
        match self.patronym.as_deref() {
            Some(patronym) if !patronym.is_empty() => {
                format!("{} {} {}", self.surname, self.name, patronym)
            }
            _ => format!("{} {}", self.surname, self.name),
        }
    }
}

/// Payload for creating or updating a teacher. `Deserialize` is
/// derived too so bulk imports can read payload arrays from a file.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TeacherPayload {
    #[validate(length(min = 1, max = 50, message = "Surname must be 1-50 characters"))]
    pub surname: String,
    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    pub name: String,
    #[validate(length(max = 50, message = "Patronym must be no longer than 50 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patronym: Option<String>,
}

impl ReviewerApi {
    /// Fetch all teachers. `GET /teachers`
    pub async fn list_teachers(&self) -> Result<Vec<Teacher>, ApiError> {
        let response = self.client.get(self.url("/teachers")).send().await?;
        Self::parse_response(response).await
    }

    /// Fetch one teacher by id. `GET /teachers/{id}`
    pub async fn get_teacher(&self, id: ApiId) -> Result<Teacher, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/teachers/{id}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Find a teacher by surname and name.
    /// `GET /teachers/search/by-fullname?surname=&name=`
    pub async fn find_teacher_by_full_name(
        &self,
        surname: &str,
        name: &str,
    ) -> Result<Teacher, ApiError> {
        let response = self
            .client
            .get(self.url("/teachers/search/by-fullname"))
            .query(&[("surname", surname), ("name", name)])
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Find the teachers of a subject.
    /// `GET /teachers/search/by-subject?subjectName=`
    pub async fn find_teachers_by_subject(
        &self,
        subject_name: &str,
    ) -> Result<Vec<Teacher>, ApiError> {
        let response = self
            .client
            .get(self.url("/teachers/search/by-subject"))
            .query(&[("subjectName", subject_name)])
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Create a teacher. `POST /teachers`
    pub async fn create_teacher(&self, payload: &TeacherPayload) -> Result<Teacher, ApiError> {
        let response = self
            .client
            .post(self.url("/teachers"))
            .json(payload)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Create several teachers in one call. `POST /teachers/bulk`
    pub async fn create_teachers_bulk(
        &self,
        payloads: &[TeacherPayload],
    ) -> Result<Vec<Teacher>, ApiError> {
        let response = self
            .client
            .post(self.url("/teachers/bulk"))
            .json(payloads)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Update a teacher. `PUT /teachers/{id}`
    pub async fn update_teacher(
        &self,
        id: ApiId,
        payload: &TeacherPayload,
    ) -> Result<Teacher, ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/teachers/{id}")))
            .json(payload)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Delete a teacher. `DELETE /teachers/{id}`
    pub async fn delete_teacher(&self, id: ApiId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/teachers/{id}")))
            .send()
            .await?;
        Self::check_status(response).await
    }

    /// Link a subject to a teacher.
    /// `POST /teachers/{teacherId}/subjects/{subjectId}`
    pub async fn assign_subject_to_teacher(
        &self,
        teacher_id: ApiId,
        subject_id: ApiId,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(&format!("/teachers/{teacher_id}/subjects/{subject_id}")))
            .send()
            .await?;
        Self::check_status(response).await
    }

    /// Unlink a subject from a teacher.
    /// `DELETE /teachers/{teacherId}/subjects/{subjectId}`
    pub async fn remove_subject_from_teacher(
        &self,
        teacher_id: ApiId,
        subject_id: ApiId,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/teachers/{teacher_id}/subjects/{subject_id}")))
            .send()
            .await?;
        Self::check_status(response).await
    }
}
