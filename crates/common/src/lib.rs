//! Cross-crate helpers shared by the HTTP server and the binary.

pub mod types;
pub mod utils;
