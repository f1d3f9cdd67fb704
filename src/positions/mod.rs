pub mod calculator;
pub mod positions_model;

pub use calculator::PositionCalculator;
pub use positions_model::Position;
