//! Core conversion engine between odds formats
//!
//! Decimal odds are the pivot representation: every conversion runs
//! to-decimal then from-decimal, with no direct path between the other two
//! formats. Decimal-format inputs pass through `to_decimal` unvalidated;
//! the `>= 1.0` domain check sits on the `from_decimal` side only.

use num_rational::Rational64;
use num_traits::Zero;

use crate::conversion::rational::limit_denominator;
use crate::error::{OddsError, OddsResult};
use crate::format::OddsFormat;
use crate::formatter::{ConvertedOdds, ConvertedValue};
use crate::parser::{parse_fraction_text, OddsInput, OddsValue};
use crate::validation::{
    validate_american_values, validate_decimal_values, validate_fraction_ratios,
};

/// Decimal-odds pivot, tagged with the shape of the originating input
#[derive(Debug, Clone, PartialEq)]
pub enum DecimalOdds {
    Scalar(f64),
    Sequence(Vec<f64>),
}

impl DecimalOdds {
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Sequence(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// View the decimal values uniformly, regardless of shape
    pub fn values(&self) -> &[f64] {
        match self {
            Self::Scalar(value) => std::slice::from_ref(value),
            Self::Sequence(values) => values,
        }
    }
}

/// Convert odds in `format` into decimal odds, preserving shape.
pub fn to_decimal(odds: &OddsInput, format: OddsFormat) -> OddsResult<DecimalOdds> {
    match format {
        OddsFormat::Decimal => {
            // Pass-through: decimal inputs are not revalidated here
            let values = numeric_values(odds, "Decimal")?;
            Ok(shape_decimal(odds.is_scalar(), values))
        }
        OddsFormat::American => american_to_decimal(odds),
        OddsFormat::Fractional => fractional_to_decimal(odds),
    }
}

/// Convert decimal odds into the requested format, preserving shape.
///
/// Every element must be at least 1.0, regardless of target format.
pub fn from_decimal(decimal: &DecimalOdds, format: OddsFormat) -> OddsResult<ConvertedOdds> {
    let values = decimal.values();
    validate_decimal_values(values)?;

    let converted = match format {
        OddsFormat::Decimal => values
            .iter()
            .map(|value| ConvertedValue::Number(*value))
            .collect(),
        OddsFormat::American => values
            .iter()
            .map(|value| decimal_to_american(*value).map(ConvertedValue::Number))
            .collect::<OddsResult<Vec<_>>>()?,
        OddsFormat::Fractional => values
            .iter()
            .map(|value| decimal_to_fraction_text(*value).map(ConvertedValue::Text))
            .collect::<OddsResult<Vec<_>>>()?,
    };

    Ok(shape_converted(decimal.is_scalar(), converted))
}

/// Convert odds from `from` into `to` via the decimal pivot.
pub fn convert(odds: &OddsInput, from: OddsFormat, to: OddsFormat) -> OddsResult<ConvertedOdds> {
    let decimal = to_decimal(odds, from)?;
    from_decimal(&decimal, to)
}

fn american_to_decimal(odds: &OddsInput) -> OddsResult<DecimalOdds> {
    let values = numeric_values(odds, "American")?;
    validate_american_values(&values)?;

    let decimals = values
        .iter()
        .map(|a| {
            if *a > 0.0 {
                a / 100.0 + 1.0
            } else {
                100.0 / a.abs() + 1.0
            }
        })
        .collect();
    Ok(shape_decimal(odds.is_scalar(), decimals))
}

fn fractional_to_decimal(odds: &OddsInput) -> OddsResult<DecimalOdds> {
    // Exactly two numeric elements collapse into one numerator/denominator
    // pair; any other length is that many independent odds values.
    if let OddsInput::Sequence(values) = odds {
        if values.len() == 2 && values.iter().all(OddsValue::is_numeric) {
            let ratio = pair_ratio(&values[0], &values[1])?;
            validate_fraction_ratios(std::slice::from_ref(&ratio))?;
            return Ok(DecimalOdds::Scalar(ratio_to_f64(&ratio) + 1.0));
        }
    }

    let ratios = odds
        .as_slice()
        .iter()
        .map(fraction_element_ratio)
        .collect::<OddsResult<Vec<_>>>()?;
    validate_fraction_ratios(&ratios)?;

    let decimals = ratios
        .iter()
        .map(|ratio| ratio_to_f64(ratio) + 1.0)
        .collect();
    Ok(shape_decimal(odds.is_scalar(), decimals))
}

fn fraction_element_ratio(value: &OddsValue) -> OddsResult<Rational64> {
    match value {
        OddsValue::Text(text) => parse_fraction_text(text),
        OddsValue::Ratio(ratio) => Ok(*ratio),
        OddsValue::Number(number) => limit_denominator(*number),
        OddsValue::Pair(numer, denom) => {
            if *denom == 0 {
                Err(OddsError::invalid_odds(
                    "Fractional odds require positive numerator and denominator",
                ))
            } else {
                Ok(Rational64::new(*numer, *denom))
            }
        }
    }
}

fn pair_ratio(numer: &OddsValue, denom: &OddsValue) -> OddsResult<Rational64> {
    let numer = pair_component(numer)?;
    let denom = pair_component(denom)?;
    if denom.is_zero() {
        return Err(OddsError::invalid_odds(
            "Fractional odds require positive numerator and denominator",
        ));
    }
    Ok(numer / denom)
}

fn pair_component(value: &OddsValue) -> OddsResult<Rational64> {
    match value {
        OddsValue::Number(number) => {
            if number.fract() == 0.0
                && *number >= i64::MIN as f64
                && *number <= i64::MAX as f64
            {
                Ok(Rational64::from_integer(*number as i64))
            } else {
                Err(OddsError::type_mismatch(format!(
                    "Fractional odds pairs require integer components; received {}",
                    number
                )))
            }
        }
        OddsValue::Ratio(ratio) => Ok(*ratio),
        other => Err(OddsError::type_mismatch(format!(
            "Fractional odds pairs require numeric components; received {}",
            other.type_name()
        ))),
    }
}

fn decimal_to_american(value: f64) -> OddsResult<f64> {
    let approx = limit_denominator(value)?;
    let numer = *approx.numer();
    let denom = *approx.denom();

    // A payout-to-stake ratio of at least 2 is the underdog side
    if approx >= Rational64::from_integer(2) {
        Ok((numer - denom) as f64 * 100.0 / denom as f64)
    } else if numer == denom {
        Err(OddsError::invalid_odds(
            "Decimal odds of 1.0 cannot be represented as American odds",
        ))
    } else {
        Ok(-100.0 * denom as f64 / (numer - denom) as f64)
    }
}

fn decimal_to_fraction_text(value: f64) -> OddsResult<String> {
    let ratio = limit_denominator(value - 1.0)?;
    if *ratio.numer() <= 0 {
        return Err(OddsError::invalid_odds(format!(
            "Fractional odds require positive ratio; received decimal odds {}",
            value
        )));
    }
    Ok(format!("{}/{}", ratio.numer(), ratio.denom()))
}

fn numeric_values(odds: &OddsInput, format_name: &str) -> OddsResult<Vec<f64>> {
    odds.as_slice()
        .iter()
        .map(|value| match value {
            OddsValue::Number(number) => Ok(*number),
            OddsValue::Ratio(ratio) => Ok(ratio_to_f64(ratio)),
            other => Err(OddsError::type_mismatch(format!(
                "{} odds must be numeric; received {}",
                format_name,
                other.type_name()
            ))),
        })
        .collect()
}

fn ratio_to_f64(ratio: &Rational64) -> f64 {
    *ratio.numer() as f64 / *ratio.denom() as f64
}

fn shape_decimal(scalar: bool, values: Vec<f64>) -> DecimalOdds {
    if scalar {
        DecimalOdds::Scalar(values[0])
    } else {
        DecimalOdds::Sequence(values)
    }
}

fn shape_converted(scalar: bool, values: Vec<ConvertedValue>) -> ConvertedOdds {
    if scalar {
        let mut values = values;
        ConvertedOdds::Scalar(values.remove(0))
    } else {
        ConvertedOdds::Sequence(values)
    }
}
