use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::ActivityError;
use crate::models::{ActivitiesSnapshot, Activity};
use crate::services::activities_service;
use crate::web::AppState;

pub async fn list_activities_handler(State(state): State<AppState>) -> Json<ActivitiesSnapshot> {
    Json(activities_service::list_activities(&state.store))
}

pub async fn activity_handler(
    Path(activity_name): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Activity>, ActivityError> {
    activities_service::load_activity(&state.store, &activity_name).map(Json)
}
