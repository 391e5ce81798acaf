mod grades;
mod market;
mod money;
mod portfolio;
mod reservation;
mod room;

pub use grades::*;
pub use market::*;
pub use money::*;
pub use portfolio::*;
pub use reservation::*;
pub use room::*;
