//! Boundary error taxonomy and its HTTP mapping.
//!
//! Clients only ever see three messages (missing parameter, user not found,
//! generic upstream failure); upstream detail stays in the server log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error("username query parameter missing or blank")]
  MissingUsername,

  #[error("github user not found")]
  UserNotFound,

  #[error("github returned status {0}")]
  UpstreamStatus(StatusCode),

  #[error("github request failed: {0}")]
  Upstream(#[from] reqwest::Error),
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      Self::MissingUsername => StatusCode::BAD_REQUEST,
      Self::UserNotFound => StatusCode::NOT_FOUND,
      Self::UpstreamStatus(_) | Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  /// Client-facing message; never includes raw upstream error text.
  pub fn message(&self) -> &'static str {
    match self {
      Self::MissingUsername => "Username is required",
      Self::UserNotFound => "User not found. Did they delete their account in shame?",
      Self::UpstreamStatus(_) | Self::Upstream(_) => {
        "Failed to roast. The GitHub API might be rate-limiting us, or the user broke something."
      }
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    if matches!(self, Self::UpstreamStatus(_) | Self::Upstream(_)) {
      eprintln!("roast-api: upstream error: {}", self);
    }
    (self.status(), Json(json!({ "error": self.message() }))).into_response()
  }
}
