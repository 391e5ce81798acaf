use std::path::PathBuf;

use log::{info, warn};

use crate::domain::{Ledger, Reservation, ReservationId, Room, RoomCategory, RoomNumber};
use crate::storage::{BookingStore, LoadResult};

use super::AppError;

/// Hotel booking operations over an in-memory ledger mirrored to a bookings file.
///
/// Every mutation is written to the file first and only applied to the
/// ledger once the write succeeded, so the two never disagree.
pub struct BookingService {
    ledger: Ledger,
    store: BookingStore,
}

impl BookingService {
    /// Create a service from an already populated ledger.
    pub fn new(ledger: Ledger, store: BookingStore) -> Self {
        Self { ledger, store }
    }

    /// Open the bookings file at `path` and replay it onto the seed rooms.
    ///
    /// Never fails: an unreadable file degrades to an empty ledger and bad
    /// lines are skipped, both with a warning.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let store = BookingStore::new(path);
        let mut service = Self::new(Ledger::default(), store);

        match service.store.load() {
            Ok(result) => {
                let loaded = service.restore(result);
                info!(
                    "Loaded {} booking(s) from {}",
                    loaded,
                    service.store.path().display()
                );
            }
            Err(e) => warn!("{:#}; starting with an empty ledger", e),
        }
        service
    }

    /// Replay persisted records into the ledger. Returns how many were accepted.
    pub fn restore(&mut self, result: LoadResult) -> usize {
        for error in &result.errors {
            warn!(
                "Skipping malformed line {} in {}: {}",
                error.line,
                self.store.path().display(),
                error.error
            );
        }

        let mut loaded = 0;
        for record in result.records {
            let id = record.id;
            // Well-formed lines reserve their id even if the booking itself is rejected
            self.ledger.observe_id(id);
            match self.ledger.commit(record) {
                Ok(_) => loaded += 1,
                Err(e) => warn!(
                    "Skipping booking {} in {}: {}",
                    id,
                    self.store.path().display(),
                    e
                ),
            }
        }
        loaded
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    /// Rooms that can still be booked, in seed order.
    pub fn list_available(&self) -> Vec<&Room> {
        self.ledger.available_rooms().collect()
    }

    /// First free room of the named category. Unknown categories find nothing.
    pub fn find_first_available_by_category(&self, category: &str) -> Option<&Room> {
        let category: RoomCategory = category.parse().ok()?;
        self.ledger.first_available(category)
    }

    /// Reserve a room for a guest and persist the booking.
    pub fn book(
        &mut self,
        guest_name: &str,
        room_number: RoomNumber,
    ) -> Result<ReservationId, AppError> {
        let reservation = self.ledger.draft(guest_name, room_number)?;
        self.store.append(&reservation)?;
        Ok(self.ledger.commit(reservation)?)
    }

    /// Cancel a booking, free its room and rewrite the bookings file.
    pub fn cancel(&mut self, id: ReservationId) -> Result<Reservation, AppError> {
        let remaining = self.ledger.remaining_after(id)?;
        self.store.rewrite(remaining)?;
        Ok(self.ledger.release(id)?)
    }

    /// Active reservations in booking order. Empty when nothing is booked.
    pub fn list_all(&self) -> &[Reservation] {
        self.ledger.reservations()
    }
}
