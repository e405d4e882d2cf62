//! oddsconv
//!
//! A Rust library and CLI tool for converting betting odds between decimal,
//! American (moneyline), and fractional notation, with environment-driven
//! default format selection.
//!
//! Decimal odds are the canonical pivot: every conversion runs to-decimal
//! then from-decimal. Floats are snapped to fractions with the closest
//! rational under a fixed denominator bound, so common book prices such as
//! -110 or 150 round-trip exactly.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod format;
pub mod formatter;
pub mod parser;
pub mod validation;

// Re-export commonly used types
pub use conversion::{convert, from_decimal, limit_denominator, to_decimal, DecimalOdds};
pub use error::{OddsError, OddsResult};
pub use format::{
    input_format_from_env, output_format_from_env, resolve_input_format, resolve_output_format,
    OddsFormat, DEFAULT_INPUT_FORMAT, DEFAULT_OUTPUT_FORMAT,
};
pub use formatter::{ConvertedOdds, ConvertedValue};
pub use parser::{OddsInput, OddsValue};

/// Convert odds between two explicit formats
pub fn convert_odds(
    odds: &OddsInput,
    from: OddsFormat,
    to: OddsFormat,
) -> OddsResult<ConvertedOdds> {
    conversion::convert(odds, from, to)
}

/// Convert odds, resolving format names from explicit values, the
/// environment, then the package defaults
pub fn convert_odds_with_defaults(
    odds: &OddsInput,
    from: Option<&str>,
    to: Option<&str>,
) -> OddsResult<ConvertedOdds> {
    let from = resolve_input_format(from)?;
    let to = resolve_output_format(to)?;
    conversion::convert(odds, from, to)
}
