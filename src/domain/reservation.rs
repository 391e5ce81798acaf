use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Room, RoomCategory, RoomNumber, seed_rooms};

pub type ReservationId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub guest_name: String,
    pub room_number: RoomNumber,
    pub room_category: RoomCategory,
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BookingID: {} - {} - Room {} ({})",
            self.id, self.guest_name, self.room_number, self.room_category
        )
    }
}

/// In-memory set of rooms and the reservations currently holding them.
///
/// A room is available if and only if no reservation in the ledger
/// references it. Ids are handed out from `next_id`, which always sits
/// above every id the ledger has seen. It is `None` once `u64::MAX` has
/// been seen and no further ids can be issued.
#[derive(Debug, Clone)]
pub struct Ledger {
    rooms: Vec<Room>,
    reservations: Vec<Reservation>,
    next_id: Option<ReservationId>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(seed_rooms())
    }
}

impl Ledger {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self {
            rooms,
            reservations: Vec::new(),
            next_id: Some(1),
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, number: RoomNumber) -> Option<&Room> {
        self.rooms.iter().find(|r| r.number == number)
    }

    /// Rooms that can be booked, in seed order.
    pub fn available_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|r| r.available)
    }

    pub fn first_available(&self, category: RoomCategory) -> Option<&Room> {
        self.available_rooms().find(|r| r.category == category)
    }

    /// Active reservations in insertion order.
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn reservation(&self, id: ReservationId) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == id)
    }

    pub fn next_id(&self) -> Option<ReservationId> {
        self.next_id
    }

    /// Move the id counter past `id` without booking anything.
    pub fn observe_id(&mut self, id: ReservationId) {
        self.next_id = match (self.next_id, id.checked_add(1)) {
            (Some(next), Some(after)) => Some(next.max(after)),
            _ => None,
        };
    }

    /// Build the reservation a booking would create, without touching the ledger.
    pub fn draft(
        &self,
        guest_name: &str,
        room_number: RoomNumber,
    ) -> Result<Reservation, LedgerError> {
        let guest_name = guest_name.trim();
        if guest_name.is_empty() || guest_name.contains(['|', '\n', '\r']) {
            return Err(LedgerError::InvalidGuestName(guest_name.to_string()));
        }

        let id = self.next_id.ok_or(LedgerError::IdsExhausted)?;
        if self.reservation(id).is_some() {
            return Err(LedgerError::DuplicateReservation(id));
        }

        let room = self.bookable_room(room_number)?;
        Ok(Reservation {
            id,
            guest_name: guest_name.to_string(),
            room_number: room.number,
            room_category: room.category,
        })
    }

    /// Add a reservation and take its room off the market.
    ///
    /// Used both for fresh bookings and when replaying persisted records,
    /// so the id may be anything not already active.
    pub fn commit(&mut self, mut reservation: Reservation) -> Result<ReservationId, LedgerError> {
        if self.reservation(reservation.id).is_some() {
            return Err(LedgerError::DuplicateReservation(reservation.id));
        }
        let room_number = self.bookable_room(reservation.room_number)?.number;

        let room = self
            .rooms
            .iter_mut()
            .find(|r| r.number == room_number)
            .ok_or(LedgerError::RoomNotFound(room_number))?;
        room.available = false;
        // The room is the source of truth for the category
        reservation.room_category = room.category;

        let id = reservation.id;
        self.observe_id(id);
        self.reservations.push(reservation);
        Ok(id)
    }

    /// Remove a reservation and make its room available again.
    pub fn release(&mut self, id: ReservationId) -> Result<Reservation, LedgerError> {
        let index = self
            .reservations
            .iter()
            .position(|r| r.id == id)
            .ok_or(LedgerError::ReservationNotFound(id))?;
        let reservation = self.reservations.remove(index);

        if let Some(room) = self
            .rooms
            .iter_mut()
            .find(|r| r.number == reservation.room_number)
        {
            room.available = true;
        }
        Ok(reservation)
    }

    /// Reservations that would remain after cancelling `id`.
    pub fn remaining_after(
        &self,
        id: ReservationId,
    ) -> Result<impl Iterator<Item = &Reservation>, LedgerError> {
        if self.reservation(id).is_none() {
            return Err(LedgerError::ReservationNotFound(id));
        }
        Ok(self.reservations.iter().filter(move |r| r.id != id))
    }

    fn bookable_room(&self, number: RoomNumber) -> Result<&Room, LedgerError> {
        let room = self.room(number).ok_or(LedgerError::RoomNotFound(number))?;
        if !room.available {
            return Err(LedgerError::RoomUnavailable(number));
        }
        Ok(room)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    InvalidGuestName(String),
    RoomNotFound(RoomNumber),
    RoomUnavailable(RoomNumber),
    ReservationNotFound(ReservationId),
    DuplicateReservation(ReservationId),
    IdsExhausted,
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::InvalidGuestName(name) => {
                write!(f, "Invalid guest name '{}'", name)
            }
            LedgerError::RoomNotFound(number) => write!(f, "Room {} does not exist", number),
            LedgerError::RoomUnavailable(number) => {
                write!(f, "Room {} is already booked", number)
            }
            LedgerError::ReservationNotFound(id) => write!(f, "Booking ID {} not found", id),
            LedgerError::DuplicateReservation(id) => {
                write!(f, "Booking ID {} is already in use", id)
            }
            LedgerError::IdsExhausted => write!(f, "No booking IDs left to issue"),
        }
    }
}

impl std::error::Error for LedgerError {}
