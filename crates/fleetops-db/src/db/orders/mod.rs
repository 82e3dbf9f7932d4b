pub mod rider_order;
pub mod upload;

pub use rider_order::RiderOrderRepository;
pub use upload::DailyUploadRepository;
