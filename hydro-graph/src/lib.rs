//! Chart-side logic for hydrograph series.
//!
//! This crate turns series of observations into what a renderer needs:
//! - `data_point` / `series`: the point model and per-series configuration
//! - `segment`: runs of missing / predicted points for separate styling
//! - `scales`: x and y scales derived from series data
//! - `date_shift`: wall-clock preserving timestamp shifts
//! - `threshold` / `format`: colouring and axis label helpers
//! - `facts` / `lines`: date extents and reference lines

pub mod data_point;
pub mod date_shift;
pub mod error;
pub mod facts;
pub mod format;
pub mod lines;
pub mod scales;
pub mod segment;
pub mod series;
pub mod threshold;

pub use data_point::{sorted_by_date, DataPoint, PointState, SortDirection};
pub use date_shift::{
    get_timezone_offset, shift_date, shift_date_to, shift_series_dates, shift_series_dates_to,
};
pub use error::{GraphError, Result};
pub use facts::{series_dates, series_facts, SeriesFacts};
pub use format::{change_format, tick_format};
pub use lines::{create_mean_level_line, create_now_line, GraphLine};
pub use scales::{create_x_scale, create_y_scale};
pub use segment::{
    segment_by, separate_on_missing, separate_on_missing_and_predicted, separate_on_predicted,
};
pub use series::{GraphSeries, SeriesType, ValueFormatter};
pub use threshold::{
    color_by_index, color_by_threshold, has_value_in_threshold, value_in_threshold,
    ThresholdDirection,
};
