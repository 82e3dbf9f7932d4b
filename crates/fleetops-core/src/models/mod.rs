//! Data models for the back office
//!
//! Domain structs and response DTOs, organized per entity. Database row
//! mapping derives are gated on the `sqlx` feature so DB-free crates can use
//! the same types.

mod assignment;
mod rider_order;
mod settings;
mod upload;

// Re-export all models for convenient imports
pub use assignment::*;
pub use rider_order::*;
pub use settings::*;
pub use upload::*;
