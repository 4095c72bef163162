use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::domain::Enrollment;
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/Enrollment/getAllEnrollment", tag = "enrollments",
    responses(
        (status = 200, description = "List OK", body = [service::domain::Enrollment]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn get_all_enrollments(State(state): State<ServerState>) -> Result<Json<Vec<Enrollment>>, JsonApiError> {
    let list = state.services.enrollments.get_all().await?;
    info!(count = list.len(), "list enrollments");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/Enrollment/getEnrollment/{id}", tag = "enrollments",
    params(("id" = i32, Path, description = "Enrollment ID")),
    responses(
        (status = 200, description = "OK", body = service::domain::Enrollment),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_enrollment(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Enrollment>, JsonApiError> {
    match state.services.enrollments.get_by_id(id).await? {
        Some(e) => Ok(Json(e)),
        None => Err(JsonApiError::not_found("enrollment", id)),
    }
}

/// Only `student.idStudent` and `course.idCourse` are read from the nested objects.
#[utoipa::path(
    post, path = "/Enrollment/createEnrollment", tag = "enrollments",
    request_body = service::domain::Enrollment,
    responses(
        (status = 200, description = "Saved", body = service::domain::Enrollment),
        (status = 500, description = "Save Failed")
    )
)]
pub async fn create_enrollment(State(state): State<ServerState>, Json(input): Json<Enrollment>) -> Result<Json<Enrollment>, JsonApiError> {
    info!(student_id = ?input.student_id(), course_id = ?input.course_id(), status = ?input.status, "enrollment_save_request");
    let saved = state.services.enrollments.save(input).await?;
    info!(id = ?saved.id, "saved enrollment");
    Ok(Json(saved))
}

#[utoipa::path(
    delete, path = "/Enrollment/deleteEnrollment/{id}", tag = "enrollments",
    params(("id" = i32, Path, description = "Enrollment ID")),
    responses(
        (status = 200, description = "Deleted (also when the id does not exist)"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete_enrollment(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.services.enrollments.delete(id).await?;
    info!(id, "deleted enrollment");
    Ok(StatusCode::OK)
}
