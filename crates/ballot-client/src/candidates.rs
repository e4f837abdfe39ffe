//! Candidate endpoints. Both take multipart forms so a photo can ride along.

use ballot_core::entities::Election;
use ballot_core::requests::{CandidateCreate, CandidateUpdate, FileUpload};
use reqwest::{
    Method,
    multipart::{Form, Part},
};

use crate::{ApiClient, error::ApiError};

fn build_form(
    fields: Vec<(&'static str, String)>,
    photo: Option<&FileUpload>,
) -> Result<Form, ApiError> {
    let mut form = fields
        .into_iter()
        .fold(Form::new(), |form, (name, value)| form.text(name, value));

    if let Some(photo) = photo {
        let mut part = Part::bytes(photo.bytes.clone()).file_name(photo.file_name.clone());
        if let Some(content_type) = &photo.content_type {
            part = part.mime_str(content_type)?;
        }
        form = form.part("photo", part);
    }
    Ok(form)
}

fn candidates_path(election_id: &str) -> String {
    format!("/elections/{}/candidates", urlencoding::encode(election_id))
}

impl ApiClient {
    /// `POST /elections/{id}/candidates`. Returns the updated election.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a blank name without sending a request,
    /// otherwise any transport, status, or decode error.
    pub async fn add_candidate(
        &self,
        election_id: &str,
        candidate: &CandidateCreate,
    ) -> Result<Election, ApiError> {
        candidate.validate()?;
        let form = build_form(candidate.form_fields(), candidate.photo.as_ref())?;
        self.send_form(Method::POST, &candidates_path(election_id), form)
            .await
    }

    /// `PUT /elections/{id}/candidates/{cid}`. Only the fields that are set are sent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for an empty update without sending a request.
    pub async fn update_candidate(
        &self,
        election_id: &str,
        candidate_id: &str,
        update: &CandidateUpdate,
    ) -> Result<Election, ApiError> {
        if update.is_empty() {
            return Err(ApiError::validation("Nothing to update"));
        }
        let form = build_form(update.form_fields(), update.photo.as_ref())?;
        let path = format!(
            "{}/{}",
            candidates_path(election_id),
            urlencoding::encode(candidate_id)
        );
        self.send_form(Method::PUT, &path, form).await
    }
}
