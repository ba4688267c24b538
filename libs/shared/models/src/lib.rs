pub mod booking;
pub mod error;
