// Application layer - one service per program, sitting between the
// interactive menus and the domain types.

mod booking;
pub mod error;
mod reporting;
mod trading;

pub use booking::*;
pub use error::*;
pub use reporting::*;
pub use trading::*;
