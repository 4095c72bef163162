//! SeaORM entities for the student management schema plus connection helpers.

pub mod errors;
pub mod db;
pub mod status;
pub mod department;
pub mod student;
pub mod course;
pub mod enrollment;

pub use status::Status;

#[cfg(test)]
mod tests;
