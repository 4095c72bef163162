//! Service layer providing CRUD operations on top of models.
//! - `repository` hides SeaORM behind a per-entity `Repository<T>` contract.
//! - `services` exposes one service per entity over that contract.
//! - `domain` holds the JSON-facing records exchanged with the API layer.

pub mod errors;
pub mod domain;
pub mod repository;
pub mod services;
#[cfg(test)]
pub mod test_support;

pub use services::{CourseService, DepartmentService, EnrollmentService, Services, StudentService};
