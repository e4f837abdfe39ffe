//! Student roster endpoints.

use std::path::Path;

use ballot_core::entities::Student;
use ballot_core::requests::{
    BulkStudentCreate, FileUpload, StudentCreate, StudentQuery, StudentUpdate,
};
use ballot_core::responses::{ImportSummary, MessageResponse, StudentCount, StudentValidation};
use reqwest::{
    Method,
    multipart::{Form, Part},
};

use crate::{ApiClient, error::ApiError};

fn student_path(id: &str) -> String {
    format!("/students/{}", urlencoding::encode(id))
}

/// Query string for `GET /students/`. `search` is only sent when non-empty.
fn list_path(query: &StudentQuery) -> String {
    let mut path = format!("/students/?skip={}&limit={}", query.skip, query.limit);
    if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
        path.push_str("&search=");
        path.push_str(&urlencoding::encode(search));
    }
    path
}

impl ApiClient {
    /// `GET /students/?skip&limit&search`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or a bad body.
    pub async fn list_students(&self, query: &StudentQuery) -> Result<Vec<Student>, ApiError> {
        self.get_json(&list_path(query)).await
    }

    /// `POST /students/`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for missing or malformed fields without
    /// sending a request.
    pub async fn create_student(&self, student: &StudentCreate) -> Result<Student, ApiError> {
        student.validate()?;
        self.send_json(Method::POST, "/students/", student).await
    }

    /// `POST /students/bulk`. Per-row failures come back in the summary.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for an empty batch without sending a request.
    pub async fn bulk_create_students(
        &self,
        batch: &BulkStudentCreate,
    ) -> Result<ImportSummary, ApiError> {
        if batch.students.is_empty() {
            return Err(ApiError::validation("No valid student data found"));
        }
        self.send_json(Method::POST, "/students/bulk", batch).await
    }

    /// `POST /students/upload-csv` with the file in the `file` form field.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or a bad body.
    pub async fn upload_students_csv(&self, file: &FileUpload) -> Result<ImportSummary, ApiError> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(file.content_type.as_deref().unwrap_or("text/csv"))?;
        let form = Form::new().part("file", part);
        self.send_form(Method::POST, "/students/upload-csv", form)
            .await
    }

    /// Read a CSV file from disk and upload it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`] if the file cannot be read, otherwise as
    /// [`ApiClient::upload_students_csv`].
    pub async fn upload_students_csv_file(&self, path: &Path) -> Result<ImportSummary, ApiError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| ApiError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("students.csv");
        self.upload_students_csv(&FileUpload::new(file_name, bytes))
            .await
    }

    /// `GET /students/count`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or a bad body.
    pub async fn count_students(&self) -> Result<u64, ApiError> {
        let count: StudentCount = self.get_json("/students/count").await?;
        Ok(count.count)
    }

    /// `GET /students/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or a bad body.
    pub async fn get_student(&self, id: &str) -> Result<Student, ApiError> {
        self.get_json(&student_path(id)).await
    }

    /// `PUT /students/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for an empty update without sending a request.
    pub async fn update_student(
        &self,
        id: &str,
        update: &StudentUpdate,
    ) -> Result<Student, ApiError> {
        if update.is_empty() {
            return Err(ApiError::validation("Nothing to update"));
        }
        self.send_json(Method::PUT, &student_path(id), update).await
    }

    /// `DELETE /students/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or a bad body.
    pub async fn delete_student(&self, id: &str) -> Result<MessageResponse, ApiError> {
        self.delete_json(&student_path(id)).await
    }

    /// `GET /students/validate/{studentId}`. Eligibility check used before voting.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or a bad body.
    pub async fn validate_student(&self, student_id: &str) -> Result<StudentValidation, ApiError> {
        self.get_json(&format!(
            "/students/validate/{}",
            urlencoding::encode(student_id)
        ))
        .await
    }
}
