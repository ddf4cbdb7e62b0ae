/// Error types for scale construction
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScaleError {
    /// A time domain needs two distinct instants to span anything.
    #[error("Too few distinct dates for a time scale (needed: 2, found: {found})")]
    DegenerateDomain { found: usize },
}

/// Type alias for Results using ScaleError
pub type Result<T> = std::result::Result<T, ScaleError>;
