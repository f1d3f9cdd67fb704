pub mod events_constants;
pub mod events_model;

pub use events_model::{Event, EventKind};
