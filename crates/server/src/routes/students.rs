use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::domain::Student;
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/students/getAllStudents", tag = "students",
    responses(
        (status = 200, description = "List OK", body = [service::domain::Student]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn get_all_students(State(state): State<ServerState>) -> Result<Json<Vec<Student>>, JsonApiError> {
    let list = state.services.students.get_all().await?;
    info!(count = list.len(), "list students");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/students/getStudent/{id}", tag = "students",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "OK", body = service::domain::Student),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_student(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Student>, JsonApiError> {
    match state.services.students.get_by_id(id).await? {
        Some(s) => Ok(Json(s)),
        None => Err(JsonApiError::not_found("student", id)),
    }
}

#[utoipa::path(
    post, path = "/students/createStudent", tag = "students",
    request_body = service::domain::Student,
    responses(
        (status = 200, description = "Saved", body = service::domain::Student),
        (status = 500, description = "Save Failed")
    )
)]
pub async fn create_student(State(state): State<ServerState>, Json(input): Json<Student>) -> Result<Json<Student>, JsonApiError> {
    let saved = state.services.students.save(input).await?;
    info!(id = ?saved.id, "saved student");
    Ok(Json(saved))
}

#[utoipa::path(
    delete, path = "/students/deleteStudent/{id}", tag = "students",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Deleted (also when the id does not exist)"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete_student(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.services.students.delete(id).await?;
    info!(id, "deleted student");
    Ok(StatusCode::OK)
}
