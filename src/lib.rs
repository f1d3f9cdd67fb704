pub mod constants;
pub mod errors;

pub mod events;
pub mod performance;
pub mod portfolio;
pub mod positions;
pub mod returns;

pub use events::*;
pub use portfolio::*;
pub use positions::*;
pub use returns::*;
