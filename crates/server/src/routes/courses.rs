use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::domain::Course;
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/Course/getAllCourse", tag = "courses",
    responses(
        (status = 200, description = "List OK", body = [service::domain::Course]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn get_all_courses(State(state): State<ServerState>) -> Result<Json<Vec<Course>>, JsonApiError> {
    let list = state.services.courses.get_all().await?;
    info!(count = list.len(), "list courses");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/Course/getCourse/{id}", tag = "courses",
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "OK", body = service::domain::Course),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_course(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Course>, JsonApiError> {
    match state.services.courses.get_by_id(id).await? {
        Some(c) => Ok(Json(c)),
        None => Err(JsonApiError::not_found("course", id)),
    }
}

#[utoipa::path(
    post, path = "/Course/createCourse", tag = "courses",
    request_body = service::domain::Course,
    responses(
        (status = 200, description = "Saved", body = service::domain::Course),
        (status = 500, description = "Save Failed")
    )
)]
pub async fn create_course(State(state): State<ServerState>, Json(input): Json<Course>) -> Result<Json<Course>, JsonApiError> {
    let saved = state.services.courses.save(input).await?;
    info!(id = ?saved.id, code = ?saved.code, "saved course");
    Ok(Json(saved))
}

#[utoipa::path(
    delete, path = "/Course/deleteCourse/{id}", tag = "courses",
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Deleted (also when the id does not exist)"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete_course(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.services.courses.delete(id).await?;
    info!(id, "deleted course");
    Ok(StatusCode::OK)
}
