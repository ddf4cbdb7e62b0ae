//! Linear and time scales for chart layout.
//!
//! A scale maps a data domain onto a pixel range and back. Scales are built
//! once per render and never mutated afterwards; builder-style setters
//! consume and return the scale.

pub mod error;
pub mod linear;
pub mod ticks;
pub mod time;

pub use error::{Result, ScaleError};
pub use linear::LinearScale;
pub use time::TimeScale;

/// Mapping between a data domain and a pixel range.
pub trait Scale {
    type Domain;

    /// Map a domain value to a range coordinate.
    fn map(&self, value: &Self::Domain) -> f64;

    /// Map a range coordinate back to the domain, when representable.
    fn invert(&self, px: f64) -> Option<Self::Domain>;
}
