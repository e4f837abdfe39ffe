//! Request payloads sent to the backend.
//!
//! Every payload that has required fields exposes `validate()`, which runs
//! before any request is issued so that missing input never costs a network
//! round trip.

use std::fmt;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ElectionStatus, Role};
use crate::errors::CoreError;
use crate::roster;

fn require(value: &str, message: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::validation(message))
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

/// `POST /auth/login` body.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the email or password is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        require(&self.email, "Email is required")?;
        require(&self.password, "Password is required")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// `POST /auth/signup` body.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SignupRequest {
    pub email: String,
    pub full_name: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl SignupRequest {
    /// The login credentials this registration will create.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }

    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when a required field is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        require(&self.email, "Email is required")?;
        require(&self.full_name, "Full name is required")?;
        require(&self.password, "Password is required")
    }
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// `POST /auth/login` response.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Token {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Elections
// ---------------------------------------------------------------------------

/// `POST /elections/` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ElectionCreate {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl ElectionCreate {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the title is blank or the
    /// voting period ends before it starts.
    pub fn validate(&self) -> Result<(), CoreError> {
        require(&self.title, "Please fill in all required election fields")?;
        if self.end_time <= self.start_time {
            return Err(CoreError::validation("End time must be after start time"));
        }
        Ok(())
    }
}

/// `PUT /elections/{id}` body. Unset fields are left untouched by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ElectionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ElectionStatus>,
}

impl ElectionUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.status.is_none()
    }
}

/// `POST /elections/{id}/vote` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VoteRequest {
    pub candidate_id: String,
}

impl VoteRequest {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when no candidate is selected.
    pub fn validate(&self) -> Result<(), CoreError> {
        require(&self.candidate_id, "Please select a candidate")
    }
}

// ---------------------------------------------------------------------------
// Candidates (multipart)
// ---------------------------------------------------------------------------

/// A file attached to a multipart request.
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            content_type: None,
        }
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

impl fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .field("content_type", &self.content_type)
            .finish()
    }
}

fn text_fields<'a>(fields: [(&'static str, Option<&'a str>); 4]) -> Vec<(&'static str, String)> {
    fields
        .into_iter()
        .filter_map(|(name, value)| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (name, v.to_string()))
        })
        .collect()
}

/// `POST /elections/{id}/candidates` form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateCreate {
    pub name: String,
    pub bio: Option<String>,
    pub party: Option<String>,
    pub position: Option<String>,
    pub photo: Option<FileUpload>,
}

impl CandidateCreate {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the name is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        require(&self.name, "All candidates must have a name")
    }

    /// Non-empty text fields in form order.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        text_fields([
            ("name", Some(self.name.as_str())),
            ("bio", self.bio.as_deref()),
            ("party", self.party.as_deref()),
            ("position", self.position.as_deref()),
        ])
    }
}

/// `PUT /elections/{id}/candidates/{cid}` form. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateUpdate {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub party: Option<String>,
    pub position: Option<String>,
    pub photo: Option<FileUpload>,
}

impl CandidateUpdate {
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        text_fields([
            ("name", self.name.as_deref()),
            ("bio", self.bio.as_deref()),
            ("party", self.party.as_deref()),
            ("position", self.position.as_deref()),
        ])
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.form_fields().is_empty() && self.photo.is_none()
    }
}

// ---------------------------------------------------------------------------
// Students
// ---------------------------------------------------------------------------

/// `POST /students/` body, also the element type of a bulk create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StudentCreate {
    pub student_id: String,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
}

impl StudentCreate {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the student id or name is blank,
    /// the email is malformed, or the year is outside `1..=10`.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.student_id.trim().is_empty() || self.full_name.trim().is_empty() {
            return Err(CoreError::validation(
                "Student ID and Full Name are required",
            ));
        }
        if let Some(email) = self.email.as_deref()
            && !roster::is_valid_email(email)
        {
            return Err(CoreError::validation("Invalid email format"));
        }
        if let Some(year) = self.year
            && !roster::YEAR_RANGE.contains(&year)
        {
            return Err(CoreError::validation(
                "Year must be a number between 1 and 10",
            ));
        }
        Ok(())
    }
}

/// `PUT /students/{id}` body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StudentUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl StudentUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.student_id.is_none()
            && self.full_name.is_none()
            && self.email.is_none()
            && self.program.is_none()
            && self.year.is_none()
            && self.is_active.is_none()
    }
}

/// `POST /students/bulk` body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BulkStudentCreate {
    pub students: Vec<StudentCreate>,
}

/// Paging and search parameters for `GET /students/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentQuery {
    pub skip: u32,
    pub limit: u32,
    pub search: Option<String>,
}

impl Default for StudentQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: 100,
            search: None,
        }
    }
}

impl StudentQuery {
    /// Query for a zero-based page of `page_size` rows.
    #[must_use]
    pub fn page(page: u32, page_size: u32) -> Self {
        Self {
            skip: page.saturating_mul(page_size),
            limit: page_size,
            search: None,
        }
    }

    #[must_use]
    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = search.filter(|s| !s.trim().is_empty());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn credentials_require_both_fields() {
        assert!(Credentials::new("a@x.com", "pw").validate().is_ok());
        assert!(Credentials::new("", "pw").validate().is_err());
        assert!(Credentials::new("a@x.com", "  ").validate().is_err());
    }

    #[test]
    fn credentials_debug_hides_password() {
        let rendered = format!("{:?}", Credentials::new("a@x.com", "hunter2"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn signup_omits_unset_role() {
        let req = SignupRequest {
            email: "a@x.com".into(),
            full_name: "A".into(),
            password: "pw".into(),
            role: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("role").is_none());
        assert_eq!(req.credentials(), Credentials::new("a@x.com", "pw"));
    }

    #[test]
    fn election_create_checks_period() {
        let start = DateTime::parse_from_rfc3339("2025-03-01T08:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let mut create = ElectionCreate {
            title: "Council".into(),
            description: None,
            start_time: start,
            end_time: start,
        };
        assert!(create.validate().is_err());
        create.end_time = start + chrono::Duration::hours(1);
        assert!(create.validate().is_ok());
        create.title = " ".into();
        assert!(create.validate().is_err());
    }

    #[test]
    fn candidate_form_skips_blank_optionals() {
        let candidate = CandidateCreate {
            name: "Ada".into(),
            bio: Some(String::new()),
            party: Some("Blue".into()),
            position: None,
            photo: None,
        };
        assert_eq!(
            candidate.form_fields(),
            vec![("name", "Ada".to_string()), ("party", "Blue".to_string())]
        );
    }

    #[test]
    fn candidate_update_empty_detection() {
        assert!(CandidateUpdate::default().is_empty());
        let update = CandidateUpdate {
            photo: Some(FileUpload::new("a.png", vec![1, 2, 3])),
            ..CandidateUpdate::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn student_create_validation() {
        let mut student = StudentCreate {
            student_id: "ST001".into(),
            full_name: "John Doe".into(),
            ..StudentCreate::default()
        };
        assert!(student.validate().is_ok());
        student.email = Some("not-an-email".into());
        assert!(student.validate().is_err());
        student.email = Some("john@uni.edu".into());
        student.year = Some(11);
        assert!(student.validate().is_err());
        student.year = Some(2);
        student.full_name = String::new();
        assert!(student.validate().is_err());
    }

    #[test]
    fn student_query_paging() {
        let query = StudentQuery::page(2, 20).with_search(Some("  ".into()));
        assert_eq!(query.skip, 40);
        assert_eq!(query.limit, 20);
        assert_eq!(query.search, None);
    }

    #[test]
    fn election_update_serializes_only_set_fields() {
        let update = ElectionUpdate {
            title: Some("New".into()),
            ..ElectionUpdate::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"title": "New"}));
    }
}
