use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Cents, format_cents};

pub type RoomNumber = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomCategory {
    Standard,
    Deluxe,
    Suite,
}

impl RoomCategory {
    /// The spelling written to the bookings file.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomCategory::Standard => "Standard",
            RoomCategory::Deluxe => "Deluxe",
            RoomCategory::Suite => "Suite",
        }
    }
}

impl FromStr for RoomCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(RoomCategory::Standard),
            "deluxe" => Ok(RoomCategory::Deluxe),
            "suite" => Ok(RoomCategory::Suite),
            _ => Err(UnknownCategory(s.trim().to_string())),
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown room category '{}' (expected Standard, Deluxe or Suite)",
            self.0
        )
    }
}

impl std::error::Error for UnknownCategory {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub number: RoomNumber,
    pub category: RoomCategory,
    pub nightly_rate: Cents,
    pub available: bool,
}

impl Room {
    pub fn new(number: RoomNumber, category: RoomCategory, nightly_rate: Cents) -> Self {
        Self {
            number,
            category,
            nightly_rate,
            available: true,
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room {} ({}) - ${}",
            self.number,
            self.category,
            format_cents(self.nightly_rate)
        )
    }
}

/// The fixed set of rooms every ledger starts from, in display order.
pub fn seed_rooms() -> Vec<Room> {
    vec![
        Room::new(101, RoomCategory::Standard, 10000),
        Room::new(102, RoomCategory::Standard, 10000),
        Room::new(201, RoomCategory::Deluxe, 18000),
        Room::new(202, RoomCategory::Deluxe, 18000),
        Room::new(301, RoomCategory::Suite, 25000),
        Room::new(302, RoomCategory::Suite, 25000),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("standard".parse::<RoomCategory>(), Ok(RoomCategory::Standard));
        assert_eq!("DELUXE".parse::<RoomCategory>(), Ok(RoomCategory::Deluxe));
        assert_eq!(" Suite ".parse::<RoomCategory>(), Ok(RoomCategory::Suite));
        assert!("penthouse".parse::<RoomCategory>().is_err());
    }

    #[test]
    fn test_seed_rooms_start_available() {
        let rooms = seed_rooms();
        assert_eq!(rooms.len(), 6);
        assert!(rooms.iter().all(|r| r.available));
        assert_eq!(rooms[0].to_string(), "Room 101 (Standard) - $100.00");
    }
}
