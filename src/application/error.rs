use thiserror::Error;

use crate::domain::{
    Cents, GradeError, LedgerError, ReservationId, RoomNumber, TradeError, format_cents,
};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid guest name: '{0}'")]
    InvalidGuestName(String),

    #[error("Room not found: {0}")]
    RoomNotFound(RoomNumber),

    #[error("Room {0} is not available")]
    RoomUnavailable(RoomNumber),

    #[error("Booking ID not found: {0}")]
    ReservationNotFound(ReservationId),

    #[error("Booking ID already in use: {0}")]
    DuplicateReservation(ReservationId),

    #[error("No booking IDs left to issue")]
    IdsExhausted,

    #[error("Stock not found: {0}")]
    StockNotFound(String),

    #[error("Insufficient balance: balance {}, required {}", money(.balance), money(.required))]
    InsufficientBalance { balance: Cents, required: Cents },

    #[error("Insufficient shares of {symbol}: held {held}, requested {requested}")]
    InsufficientShares {
        symbol: String,
        held: u32,
        requested: u32,
    },

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid quantity: must be a positive number of shares")]
    InvalidQuantity,

    #[error("No students to report on")]
    NoStudents,

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

fn money(cents: &Cents) -> String {
    format_cents(*cents)
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InvalidGuestName(name) => AppError::InvalidGuestName(name),
            LedgerError::RoomNotFound(number) => AppError::RoomNotFound(number),
            LedgerError::RoomUnavailable(number) => AppError::RoomUnavailable(number),
            LedgerError::ReservationNotFound(id) => AppError::ReservationNotFound(id),
            LedgerError::DuplicateReservation(id) => AppError::DuplicateReservation(id),
            LedgerError::IdsExhausted => AppError::IdsExhausted,
        }
    }
}

impl From<TradeError> for AppError {
    fn from(err: TradeError) -> Self {
        match err {
            TradeError::InvalidQuantity => AppError::InvalidQuantity,
            TradeError::NegativeDeposit(amount) => AppError::InvalidAmount(format!(
                "cannot deposit a negative amount ({})",
                format_cents(amount)
            )),
            TradeError::BalanceOverflow => {
                AppError::InvalidAmount("cash balance would overflow".to_string())
            }
            TradeError::InsufficientBalance { balance, required } => {
                AppError::InsufficientBalance { balance, required }
            }
            TradeError::InsufficientShares {
                symbol,
                held,
                requested,
            } => AppError::InsufficientShares {
                symbol,
                held,
                requested,
            },
        }
    }
}

impl From<GradeError> for AppError {
    fn from(err: GradeError) -> Self {
        match err {
            GradeError::NoStudents => AppError::NoStudents,
        }
    }
}
