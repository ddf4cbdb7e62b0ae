/// Error types for the graph helpers
use hydro_scale::ScaleError;
use hydro_utils::error::DateError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Predicted point whose band does not contain its value
    #[error("Prediction band [{min}, {max}] does not contain value {value}")]
    InvalidBand { value: f64, min: f64, max: f64 },

    /// Point flagged both missing and predicted
    #[error("Data point at {0} is flagged both missing and predicted")]
    ConflictingState(String),

    /// Timestamp could not be read
    #[error(transparent)]
    DateParse(#[from] DateError),

    /// Scale could not be built
    #[error(transparent)]
    Scale(#[from] ScaleError),

    /// Nothing to derive facts or extents from
    #[error("No data points in series")]
    EmptySeries,
}

/// Type alias for Results using GraphError
pub type Result<T> = std::result::Result<T, GraphError>;
