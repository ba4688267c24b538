pub mod booking;
pub mod conflict;
pub mod events;
pub mod handlers;
pub mod models;
pub mod router;
pub mod slots;
