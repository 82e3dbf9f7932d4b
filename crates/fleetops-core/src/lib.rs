//! Fleetops core library
//!
//! Domain models, error types, and configuration shared by the fleetops
//! crates. Nothing in here talks to the network or the database directly;
//! persistence lives in `fleetops-db` and HTTP in `fleetops-api`.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{BackOfficeConfig, BaseConfig, Config};
pub use error::{AppError, ErrorMetadata, LogLevel};
