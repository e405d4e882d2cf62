//! Odds format enumeration and environment-driven format resolution
//!
//! The converter itself only ever sees concrete `OddsFormat` values; the
//! environment is consulted here, once per resolution, never cached.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{OddsError, OddsResult};

/// Environment variable naming the default source format
pub const INPUT_FORMAT_ENV: &str = "INPUT_ODDS_FORMAT";

/// Environment variable naming the default target format
pub const OUTPUT_FORMAT_ENV: &str = "OUTPUT_ODDS_FORMAT";

/// Package default when no source format is supplied anywhere
pub const DEFAULT_INPUT_FORMAT: OddsFormat = OddsFormat::American;

/// Package default when no target format is supplied anywhere
pub const DEFAULT_OUTPUT_FORMAT: OddsFormat = OddsFormat::American;

/// Supported odds representations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OddsFormat {
    /// Total payout multiplier per unit stake, including the stake itself
    Decimal,
    /// Signed moneyline odds: profit per 100 staked, or stake required to profit 100
    American,
    /// Profit-to-stake ratio expressed as a reduced positive fraction
    Fractional,
}

impl OddsFormat {
    /// Parse a format name, falling back to `default` when `value` is absent.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// `default` must be supplied when `value` is `None`.
    pub fn parse(value: Option<&str>, default: Option<OddsFormat>) -> OddsResult<OddsFormat> {
        let name = match value {
            Some(name) => name,
            None => {
                return default.ok_or_else(|| {
                    OddsError::invalid_format(
                        "Odds format value is required when no default is provided",
                    )
                })
            }
        };

        match name.trim().to_ascii_lowercase().as_str() {
            "decimal" => Ok(Self::Decimal),
            "american" => Ok(Self::American),
            "fractional" => Ok(Self::Fractional),
            _ => Err(OddsError::invalid_format(format!(
                "Unsupported odds format: {}",
                name
            ))),
        }
    }

    /// Lowercase name of the format, matching the serialized representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::American => "american",
            Self::Fractional => "fractional",
        }
    }
}

impl fmt::Display for OddsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Return the default source format from `INPUT_ODDS_FORMAT`.
///
/// An unset variable falls back to the package default; an unrecognized
/// value is an error, not silently swallowed.
pub fn input_format_from_env() -> OddsResult<OddsFormat> {
    let value = std::env::var(INPUT_FORMAT_ENV).ok();
    OddsFormat::parse(value.as_deref(), Some(DEFAULT_INPUT_FORMAT))
}

/// Return the default target format from `OUTPUT_ODDS_FORMAT`.
pub fn output_format_from_env() -> OddsResult<OddsFormat> {
    let value = std::env::var(OUTPUT_FORMAT_ENV).ok();
    OddsFormat::parse(value.as_deref(), Some(DEFAULT_OUTPUT_FORMAT))
}

/// Resolve a source format: explicit name over environment over package default.
pub fn resolve_input_format(value: Option<&str>) -> OddsResult<OddsFormat> {
    match value {
        Some(name) => OddsFormat::parse(Some(name), Some(DEFAULT_INPUT_FORMAT)),
        None => input_format_from_env(),
    }
}

/// Resolve a target format: explicit name over environment over package default.
pub fn resolve_output_format(value: Option<&str>) -> OddsResult<OddsFormat> {
    match value {
        Some(name) => OddsFormat::parse(Some(name), Some(DEFAULT_OUTPUT_FORMAT)),
        None => output_format_from_env(),
    }
}
