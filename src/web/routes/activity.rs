use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use crate::error::ActivityError;
use crate::services::activity_signup_service;
use crate::web::AppState;

// Raw pairs so a repeated `email` key resolves to its last value instead of
// failing deserialization.
type RosterQuery = Vec<(String, String)>;

fn email_param(query: &[(String, String)]) -> Option<&str> {
    query
        .iter()
        .rev()
        .find(|(key, _)| key == "email")
        .map(|(_, value)| value.as_str())
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(state): State<AppState>,
) -> Result<Json<Value>, ActivityError> {
    let email = activity_signup_service::require_email(email_param(&query))?;
    let message = activity_signup_service::sign_up(
        &state.store,
        &activity_name,
        email,
        state.enforce_capacity,
    )?;
    Ok(Json(json!({ "message": message })))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(state): State<AppState>,
) -> Result<Json<Value>, ActivityError> {
    let email = activity_signup_service::require_email(email_param(&query))?;
    let message = activity_signup_service::unregister(&state.store, &activity_name, email)?;
    Ok(Json(json!({ "message": message })))
}
