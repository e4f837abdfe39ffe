//! Request construction and response handling shared by every endpoint.
//!
//! Every request goes to `base_url + path` and carries `Authorization: Bearer`
//! when the client holds a token. Every response body is read as JSON: a
//! success status decodes into the caller's type, anything else becomes
//! [`ApiError::Status`] with the body's `message` or `detail` text.

use reqwest::{Method, RequestBuilder, multipart::Form};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{ApiClient, error::ApiError};

/// Used when an error body carries no usable message.
pub const FALLBACK_ERROR: &str = "An error occurred";

/// Pull a human-readable message out of an error body.
///
/// Prefers a non-empty `message`, then `detail`. A `detail` array of
/// `{ "msg": ... }` objects (request validation errors) is joined with `; `.
#[must_use]
pub fn extract_error_message(body: &Value, fallback: &str) -> String {
    let from_field = |key: &str| match body.get(key)? {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(items) => {
            let joined = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(text) => Some(text.as_str()),
                    other => other.get("msg").and_then(Value::as_str),
                })
                .collect::<Vec<_>>()
                .join("; ");
            (!joined.is_empty()).then_some(joined)
        }
        _ => None,
    };

    from_field("message")
        .or_else(|| from_field("detail"))
        .unwrap_or_else(|| fallback.to_string())
}

/// Turn a response into `T`, or into the error the backend described.
pub(crate) async fn parse_response<T: DeserializeOwned>(
    resp: reqwest::Response,
    fallback: &str,
) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp.text().await?;
    tracing::debug!(status = status.as_u16(), bytes = body.len(), "response");

    if !status.is_success() {
        let message = serde_json::from_str::<Value>(&body)
            .map_or_else(|_| fallback.to_string(), |v| extract_error_message(&v, fallback));
        tracing::debug!(status = status.as_u16(), %message, "request failed");
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

impl ApiClient {
    /// Full URL for an endpoint path such as `/elections/`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, authorized = self.token.is_some(), "request");
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.request(Method::GET, path).send().await?;
        parse_response(resp, FALLBACK_ERROR).await
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.request(method, path).json(body).send().await?;
        parse_response(resp, FALLBACK_ERROR).await
    }

    /// POST without a body, used by the election lifecycle actions.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self
            .request(Method::POST, path)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;
        parse_response(resp, FALLBACK_ERROR).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.request(Method::DELETE, path).send().await?;
        parse_response(resp, FALLBACK_ERROR).await
    }

    /// Multipart upload. The transport sets the boundary content type.
    pub(crate) async fn send_form<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        let fallback = if method == Method::PUT {
            "Update failed"
        } else {
            "Upload failed"
        };
        let resp = self.request(method, path).multipart(form).send().await?;
        parse_response(resp, fallback).await
    }
}
