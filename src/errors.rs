use thiserror::Error;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the computation engine.
///
/// Degenerate business input (insufficient cash flows, closed positions,
/// non-convergent series) never surfaces here; those cases produce `None`
/// or zero values. `Error` is reserved for caller programming errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported event kind: {0}")]
    UnsupportedEventKind(String),
}
