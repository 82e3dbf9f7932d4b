pub mod settings;
pub mod upload_daily;
pub mod uploads;
