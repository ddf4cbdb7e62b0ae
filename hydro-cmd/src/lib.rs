//! Command implementations for the hydro CLI.
//!
//! Each subcommand reads its input from a file or argument, runs the
//! library routine and prints the result to stdout.

use clap::{Subcommand, ValueEnum};
use hydro_observation::{AppLang, ObservationType};

pub mod dates;
pub mod observations;
pub mod profile;
pub mod series;

/// Which markers split a series into separately drawn runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SegmentOn {
    Missing,
    Predicted,
    Both,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the timezone offset of an ISO timestamp in minutes behind UTC
    Offset {
        /// Timestamp such as 2021-02-01T00:00:00.000+02:00
        date: String,
    },

    /// Shift a timestamp so a local formatter shows its own wall-clock time
    Shift {
        /// Timestamp to shift
        date: String,

        /// Display zone as minutes behind UTC (-60 for UTC+01:00); host zone when omitted
        #[arg(short, long, allow_hyphen_values = true)]
        local_offset: Option<i32>,
    },

    /// Split the series in a JSON file into runs of missing / predicted points
    Segment {
        /// JSON array of series
        series_json: String,

        #[arg(long, value_enum, default_value_t = SegmentOn::Both)]
        on: SegmentOn,
    },

    /// Lay out a river cross-section for a water level
    Profile {
        /// CSV (x,y or x,msl columns) or JSON array of profile points
        profile: String,

        /// Water level in metres
        #[arg(short, long, allow_hyphen_values = true)]
        level: Option<f64>,

        /// Bridge level in metres
        #[arg(short, long, allow_hyphen_values = true)]
        bridge: Option<f64>,

        /// Total drawing width in pixels
        #[arg(short, long, default_value_t = 600.0)]
        width: f64,

        /// Reserve room for axes
        #[arg(long)]
        axis: bool,
    },

    /// Convert daily observation records into a chart series
    Observations {
        /// JSON array of observation records
        records_json: String,

        /// water-level, water-flow, water-temperature or water-ph
        #[arg(short = 't', long = "type", default_value = "water-level")]
        observation_type: ObservationType,

        /// nb, en, sv, da or fi
        #[arg(long, default_value = "nb")]
        lang: AppLang,

        /// Reference time for dropping future gaps; now when omitted
        #[arg(long)]
        now: Option<String>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Offset { date } => dates::run_offset(&date),
        Command::Shift { date, local_offset } => dates::run_shift(&date, local_offset),
        Command::Segment { series_json, on } => series::run_segment(&series_json, on),
        Command::Profile {
            profile,
            level,
            bridge,
            width,
            axis,
        } => profile::run_profile(&profile, level, bridge, width, axis),
        Command::Observations {
            records_json,
            observation_type,
            lang,
            now,
        } => observations::run_observations(&records_json, observation_type, lang, now.as_deref()),
    }
}
