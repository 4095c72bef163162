use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

use models::Status;
use service::domain::{Course, Department, Enrollment, Student};

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::students::get_all_students,
        crate::routes::students::get_student,
        crate::routes::students::create_student,
        crate::routes::students::delete_student,
        crate::routes::departments::get_all_departments,
        crate::routes::departments::get_department,
        crate::routes::departments::create_department,
        crate::routes::departments::delete_department,
        crate::routes::courses::get_all_courses,
        crate::routes::courses::get_course,
        crate::routes::courses::create_course,
        crate::routes::courses::delete_course,
        crate::routes::enrollments::get_all_enrollments,
        crate::routes::enrollments::get_enrollment,
        crate::routes::enrollments::create_enrollment,
        crate::routes::enrollments::delete_enrollment,
    ),
    components(
        schemas(
            HealthResponse,
            Student,
            Department,
            Course,
            Status,
            Enrollment,
        )
    ),
    tags(
        (name = "health"),
        (name = "students"),
        (name = "departments"),
        (name = "courses"),
        (name = "enrollments")
    )
)]
pub struct ApiDoc;
