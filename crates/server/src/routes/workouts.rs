use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use common::types::Welcome;
use service::workouts::{Created, SearchFilter, Total, Workout, WorkoutInput};

use crate::errors::ApiError;
use crate::state::AppState;

pub async fn root(State(state): State<AppState>) -> Json<Welcome> {
    Json(Welcome::new(&*state.welcome_message))
}

/// Validate and store a workout; 201 with the stored record.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<WorkoutInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let Json(input) = payload?;
    let created = state.workouts.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<SearchFilter>, QueryRejection>,
) -> Result<Json<Vec<Workout>>, ApiError> {
    let Query(filter) = query?;
    let found = state.workouts.search(filter).await?;
    Ok(Json(found))
}

pub async fn total(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Total>, ApiError> {
    let total = state.workouts.total(&category).await?;
    Ok(Json(total))
}
