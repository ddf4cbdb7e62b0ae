//! `offset` and `shift` subcommands.

use anyhow::{anyhow, Context};
use chrono::FixedOffset;
use hydro_graph::{get_timezone_offset, shift_date, shift_date_to};
use log::info;

pub fn run_offset(date: &str) -> anyhow::Result<()> {
    println!("{}", get_timezone_offset(date));
    Ok(())
}

pub fn run_shift(date: &str, local_offset: Option<i32>) -> anyhow::Result<()> {
    println!("{}", shifted(date, local_offset)?);
    Ok(())
}

/// Display zone for a minutes-behind-UTC value, as returned by `offset`.
pub fn display_offset(minutes_behind_utc: i32) -> anyhow::Result<FixedOffset> {
    FixedOffset::west_opt(minutes_behind_utc * 60)
        .ok_or_else(|| anyhow!("offset out of range: {minutes_behind_utc} minutes"))
}

pub fn shifted(date: &str, local_offset: Option<i32>) -> anyhow::Result<String> {
    let result = match local_offset {
        Some(minutes) => {
            let display = display_offset(minutes)?;
            info!("Shifting {date} for display at {display}");
            shift_date_to(date, &display)
        }
        None => {
            info!("Shifting {date} for display in the host zone");
            shift_date(date)
        }
    };
    result.with_context(|| format!("Failed to shift {date}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_offset_sign() {
        assert_eq!(display_offset(-60).unwrap().local_minus_utc(), 3600);
        assert_eq!(display_offset(120).unwrap().local_minus_utc(), -7200);
        assert!(display_offset(24 * 60).is_err());
    }

    #[test]
    fn test_shifted_explicit_zone() {
        assert_eq!(
            shifted("2021-02-01T00:00:00.000+02:00", Some(-60)).unwrap(),
            "2021-01-31T23:00:00.000Z"
        );
        assert!(shifted("yesterday", Some(0)).is_err());
    }
}
