//! Domain-range validation for odds values
//!
//! Batch checks collect every offending value before failing, so a caller
//! sees the whole rejected set at once rather than the first bad element.

use num_rational::Rational64;

use crate::error::{OddsError, OddsResult};

/// Reject American odds of zero, or of magnitude below 100.
///
/// NaN counts as out of range.
pub fn validate_american_values(values: &[f64]) -> OddsResult<()> {
    if values.iter().any(|value| *value == 0.0) {
        return Err(OddsError::invalid_odds("American odds cannot be zero"));
    }

    let offenders = collect_offenders(values, |value| !(value.abs() >= 100.0));
    if offenders.is_empty() {
        Ok(())
    } else {
        Err(OddsError::invalid_odds_batch(
            "American odds must be <= -100 or >= 100",
            offenders,
        ))
    }
}

/// Reject decimal odds below 1.0. NaN counts as out of range.
pub fn validate_decimal_values(values: &[f64]) -> OddsResult<()> {
    let offenders = collect_offenders(values, |value| !(value >= 1.0));
    if offenders.is_empty() {
        Ok(())
    } else {
        Err(OddsError::invalid_odds_batch(
            "Decimal odds must be >= 1.0",
            offenders,
        ))
    }
}

/// Reject fractions without a strictly positive numerator and denominator.
///
/// `Rational64` normalizes the sign onto the numerator, so a single check
/// covers both components.
pub fn validate_fraction_ratios(ratios: &[Rational64]) -> OddsResult<()> {
    let offenders: Vec<String> = ratios
        .iter()
        .filter(|ratio| *ratio.numer() <= 0)
        .map(|ratio| ratio.to_string())
        .collect();
    if offenders.is_empty() {
        Ok(())
    } else {
        Err(OddsError::invalid_odds_batch(
            "Fractional odds require positive numerator and denominator",
            offenders,
        ))
    }
}

fn collect_offenders(values: &[f64], invalid: impl Fn(f64) -> bool) -> Vec<String> {
    values
        .iter()
        .copied()
        .filter(|value| invalid(*value))
        .map(|value| value.to_string())
        .collect()
}
