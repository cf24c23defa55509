//! Pieces shared by the service crates and the binary: response types,
//! logging setup and startup environment checks.

pub mod types;
pub mod utils;
pub mod env;
