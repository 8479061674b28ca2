//! Request-level failures and their HTTP rendering.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActivityError {
    #[error("Activity '{activity}' not found")]
    NotFound { activity: String },

    #[error("Student {email} is already signed up for {activity}")]
    AlreadyRegistered { email: String, activity: String },

    #[error("Student {email} is not signed up for {activity}")]
    NotRegistered { email: String, activity: String },

    #[error("Query parameter 'email' is required")]
    MissingEmail,

    #[error("Activity '{activity}' is full ({max_participants} participants)")]
    ActivityFull {
        activity: String,
        max_participants: u32,
    },
}

impl ActivityError {
    pub fn status(&self) -> StatusCode {
        match self {
            ActivityError::NotFound { .. } => StatusCode::NOT_FOUND,
            ActivityError::AlreadyRegistered { .. }
            | ActivityError::NotRegistered { .. }
            | ActivityError::ActivityFull { .. } => StatusCode::BAD_REQUEST,
            ActivityError::MissingEmail => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
