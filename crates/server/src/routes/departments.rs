use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::domain::Department;
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/Depatment/getAllDepartment", tag = "departments",
    responses(
        (status = 200, description = "List OK", body = [service::domain::Department]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn get_all_departments(State(state): State<ServerState>) -> Result<Json<Vec<Department>>, JsonApiError> {
    let list = state.services.departments.get_all().await?;
    info!(count = list.len(), "list departments");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/Depatment/getDepartment/{id}", tag = "departments",
    params(("id" = i32, Path, description = "Department ID")),
    responses(
        (status = 200, description = "OK", body = service::domain::Department),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_department(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Department>, JsonApiError> {
    state
        .services
        .departments
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("department", id))
}

#[utoipa::path(
    post, path = "/Depatment/createDepartment", tag = "departments",
    request_body = service::domain::Department,
    responses(
        (status = 200, description = "Saved", body = service::domain::Department),
        (status = 500, description = "Save Failed")
    )
)]
pub async fn create_department(State(state): State<ServerState>, Json(input): Json<Department>) -> Result<Json<Department>, JsonApiError> {
    let saved = state.services.departments.save(input).await?;
    info!(id = ?saved.id, name = ?saved.name, "saved department");
    Ok(Json(saved))
}

#[utoipa::path(
    delete, path = "/Depatment/deleteDepartment/{id}", tag = "departments",
    params(("id" = i32, Path, description = "Department ID")),
    responses(
        (status = 200, description = "Deleted (also when the id does not exist)"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete_department(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.services.departments.delete(id).await?;
    info!(id, "deleted department");
    Ok(StatusCode::OK)
}
