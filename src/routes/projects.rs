use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::error::AppError;
use crate::models::{NewProject, Project};
use crate::state::SharedState;

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Project>>, AppError> {
    let projects = state.store.list().await?;
    Ok(Json(projects))
}

/// The body is parsed as JSON whatever the Content-Type says. A body that
/// cannot be read (too large, aborted) is treated like one that cannot be parsed.
pub async fn create(
    State(state): State<SharedState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<Project>), AppError> {
    let body = body.map_err(|e| {
        tracing::debug!("Failed to read project body: {e}");
        AppError::MalformedRequest
    })?;
    let req = parse_new_project(&body)?;

    let project = state.store.append(req).await?;
    tracing::info!(id = project.id, title = %project.title, "Project added");

    Ok((StatusCode::CREATED, Json(project)))
}

fn parse_new_project(body: &[u8]) -> Result<NewProject, AppError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejecting project body: {e}");
        AppError::MalformedRequest
    })?;

    // A bare `null` has no fields to read at all.
    if value.is_null() {
        return Err(AppError::MalformedRequest);
    }

    Ok(NewProject::from_json(&value))
}
