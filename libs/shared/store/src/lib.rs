use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use shared_models::booking::Booking;

/// The application-owned booking collection. The scheduling engine never
/// sees this type, only `&[Booking]` snapshots taken from it; handlers
/// hold the write guard across validate-then-merge so writes against the
/// same collection are serialized.
#[derive(Debug, Default)]
pub struct BookingStore {
    bookings: RwLock<Vec<Booking>>,
}

impl BookingStore {
    pub fn new(initial: Vec<Booking>) -> Self {
        Self {
            bookings: RwLock::new(initial),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Vec<Booking>> {
        self.bookings.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Vec<Booking>> {
        self.bookings.write().await
    }

    pub async fn snapshot(&self) -> Vec<Booking> {
        self.bookings.read().await.clone()
    }
}

/// Removes a booking by id from a collection guard. Returns the removed
/// record when present.
pub fn remove_booking(bookings: &mut Vec<Booking>, booking_id: Uuid) -> Option<Booking> {
    let position = bookings.iter().position(|b| b.id == booking_id)?;
    Some(bookings.remove(position))
}
