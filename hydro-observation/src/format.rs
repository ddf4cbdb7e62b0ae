use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Locales that write decimals with a comma.
const DECIMAL_COMMA_LOCALES: [&str; 4] = ["nb", "sv", "da", "fi"];

/// Interface languages observation views are shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppLang {
    #[default]
    Nb,
    En,
    Sv,
    Da,
    Fi,
}

impl AppLang {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppLang::Nb => "nb",
            AppLang::En => "en",
            AppLang::Sv => "sv",
            AppLang::Da => "da",
            AppLang::Fi => "fi",
        }
    }
}

impl fmt::Display for AppLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppLang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nb" => Ok(AppLang::Nb),
            "en" => Ok(AppLang::En),
            "sv" => Ok(AppLang::Sv),
            "da" => Ok(AppLang::Da),
            "fi" => Ok(AppLang::Fi),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

/// Render `input` with the decimal separator of `locale`.
///
/// Only the first `.` is replaced; unknown locales keep the point.
pub fn format_number(input: impl fmt::Display, locale: &str) -> String {
    let text = input.to_string();
    if DECIMAL_COMMA_LOCALES.contains(&locale) {
        text.replacen('.', ",", 1)
    } else {
        text
    }
}

/// Fixed number of decimals, then locale formatting. `None` renders empty.
///
/// A single trailing `.0` is dropped, so one-decimal values that land on a
/// whole number print without a fraction.
pub fn format_observation_value(value: Option<f64>, locale: &str, decimals: usize) -> String {
    let Some(v) = value else {
        return String::new();
    };
    let fixed = format!("{v:.decimals$}");
    match fixed.strip_suffix(".0") {
        Some("-0") => format_number("0", locale),
        Some(whole) => format_number(whole, locale),
        None => format_number(fixed, locale),
    }
}
