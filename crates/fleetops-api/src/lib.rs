//! FleetOps Orders API
//!
//! HTTP surface for the daily order-statement pipeline: the multipart upload
//! endpoint, upload-run inspection, and the per-order rate setting.

pub mod api_doc;
pub mod error;
pub mod handlers;
pub mod response;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;
pub mod utils;
