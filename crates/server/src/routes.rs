use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod courses;
pub mod departments;
pub mod enrollments;
pub mod students;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router.
///
/// Paths keep the casing (and the "Depatment" spelling) existing clients call.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let students = Router::new()
        .route("/students/getAllStudents", get(students::get_all_students))
        .route("/students/getStudent/:id", get(students::get_student))
        .route("/students/createStudent", post(students::create_student))
        .route("/students/deleteStudent/:id", delete(students::delete_student));

    let departments = Router::new()
        .route("/Depatment/getAllDepartment", get(departments::get_all_departments))
        .route("/Depatment/getDepartment/:id", get(departments::get_department))
        .route("/Depatment/createDepartment", post(departments::create_department))
        .route("/Depatment/deleteDepartment/:id", delete(departments::delete_department));

    let courses = Router::new()
        .route("/Course/getAllCourse", get(courses::get_all_courses))
        .route("/Course/getCourse/:id", get(courses::get_course))
        .route("/Course/createCourse", post(courses::create_course))
        .route("/Course/deleteCourse/:id", delete(courses::delete_course));

    let enrollments = Router::new()
        .route("/Enrollment/getAllEnrollment", get(enrollments::get_all_enrollments))
        .route("/Enrollment/getEnrollment/:id", get(enrollments::get_enrollment))
        .route("/Enrollment/createEnrollment", post(enrollments::create_enrollment))
        .route("/Enrollment/deleteEnrollment/:id", delete(enrollments::delete_enrollment));

    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    public
        .merge(students)
        .merge(departments)
        .merge(courses)
        .merge(enrollments)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status and latency on response
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
