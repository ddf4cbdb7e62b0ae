/// Error types for profile layout
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// Layout needs at least one point
    #[error("River profile has no points")]
    EmptyProfile,

    /// Layout keeps the aspect ratio, which needs a positive width
    #[error("River profile has no horizontal extent (widest x: {0})")]
    ZeroWidth(f64),
}

/// Type alias for Results using ProfileError
pub type Result<T> = std::result::Result<T, ProfileError>;
