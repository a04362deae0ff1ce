pub mod engine;
pub mod seatmap;
pub mod service;

pub use seatmap::SeatPool;
pub use service::{CheckinError, CheckinService};
