mod event_handlers;
mod position_calculator;
mod state;

pub use position_calculator::PositionCalculator;
