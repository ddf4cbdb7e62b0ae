//! Helpers for turning station observations into graph series.

pub mod format;
pub mod preset;
pub mod record;

pub use format::{format_number, format_observation_value, AppLang};
pub use preset::{ObservationType, SeriesPreset};
pub use record::{observation_data_to_line_data, ObservationRecord};
