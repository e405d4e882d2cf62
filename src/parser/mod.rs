//! Odds input model and boundary classification
//!
//! The scalar-vs-sequence shape of an input is decided once here, at the
//! boundary; the conversion engine never re-inspects raw input. JSON values
//! deeper than one dimension are rejected, with the exception of two-element
//! integer arrays, which classify as numerator/denominator pairs.

use num_rational::Rational64;
use serde_json::Value;
use std::fmt;

use crate::error::{OddsError, OddsResult};

/// A single odds element as supplied by a caller
#[derive(Debug, Clone, PartialEq)]
pub enum OddsValue {
    /// Plain numeric odds (decimal, American, or a fractional profit/stake value)
    Number(f64),
    /// Fractional odds text such as "5/2"
    Text(String),
    /// An exact profit/stake rational
    Ratio(Rational64),
    /// An explicit numerator/denominator pair
    Pair(i64, i64),
}

impl OddsValue {
    /// Whether the value can serve as one side of a numerator/denominator pair
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Ratio(_))
    }

    /// Short noun for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Ratio(_) => "rational",
            Self::Pair(_, _) => "pair",
        }
    }
}

impl fmt::Display for OddsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{}", number),
            Self::Text(text) => f.write_str(text),
            Self::Ratio(ratio) => write!(f, "{}", ratio),
            Self::Pair(numer, denom) => write!(f, "{}/{}", numer, denom),
        }
    }
}

impl From<f64> for OddsValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for OddsValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for OddsValue {
    fn from(value: i32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for OddsValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OddsValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Rational64> for OddsValue {
    fn from(value: Rational64) -> Self {
        Self::Ratio(value)
    }
}

impl From<(i64, i64)> for OddsValue {
    fn from((numer, denom): (i64, i64)) -> Self {
        Self::Pair(numer, denom)
    }
}

/// Odds input tagged with its shape: one value, or an ordered sequence
#[derive(Debug, Clone, PartialEq)]
pub enum OddsInput {
    Scalar(OddsValue),
    Sequence(Vec<OddsValue>),
}

impl OddsInput {
    /// Create a scalar input from anything convertible to an odds value
    pub fn scalar(value: impl Into<OddsValue>) -> Self {
        Self::Scalar(value.into())
    }

    /// Create a sequence input from an iterator of odds values
    pub fn sequence<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OddsValue>,
    {
        Self::Sequence(values.into_iter().map(Into::into).collect())
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Number of odds elements carried by the input
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Sequence(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// View the elements uniformly, regardless of shape
    pub fn as_slice(&self) -> &[OddsValue] {
        match self {
            Self::Scalar(value) => std::slice::from_ref(value),
            Self::Sequence(values) => values,
        }
    }

    /// Classify a JSON value as odds input.
    ///
    /// Numbers and strings are scalars; flat arrays are sequences. A
    /// two-element integer array inside a sequence classifies as a
    /// numerator/denominator pair; any other nesting fails with a shape
    /// error.
    pub fn from_json(value: &Value) -> OddsResult<Self> {
        match value {
            Value::Number(number) => Ok(Self::Scalar(OddsValue::Number(json_number(number)?))),
            Value::String(text) => Ok(Self::Scalar(OddsValue::Text(text.clone()))),
            Value::Array(items) => {
                let values = items
                    .iter()
                    .map(classify_element)
                    .collect::<OddsResult<Vec<_>>>()?;
                Ok(Self::Sequence(values))
            }
            other => Err(OddsError::type_mismatch(format!(
                "JSON {} cannot be interpreted as odds",
                json_type_name(other)
            ))),
        }
    }
}

fn classify_element(item: &Value) -> OddsResult<OddsValue> {
    match item {
        Value::Number(number) => Ok(OddsValue::Number(json_number(number)?)),
        Value::String(text) => Ok(OddsValue::Text(text.clone())),
        Value::Array(inner) if inner.len() == 2 => {
            let numer = inner[0].as_i64();
            let denom = inner[1].as_i64();
            match (numer, denom) {
                (Some(numer), Some(denom)) => Ok(OddsValue::Pair(numer, denom)),
                _ => Err(OddsError::type_mismatch(
                    "Numerator/denominator pairs must hold two integers",
                )),
            }
        }
        Value::Array(_) => Err(OddsError::shape(
            "Odds converters expect scalars or one-dimensional sequences",
        )),
        other => Err(OddsError::type_mismatch(format!(
            "JSON {} cannot be interpreted as odds",
            json_type_name(other)
        ))),
    }
}

fn json_number(number: &serde_json::Number) -> OddsResult<f64> {
    number
        .as_f64()
        .ok_or_else(|| OddsError::type_mismatch(format!("JSON number {} is out of range", number)))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parse fractional odds text: `"n/d"`, a bare integer, or a decimal number.
///
/// Decimal text is read digit-by-digit, so `"2.5"` is exactly 5/2 rather
/// than an approximation of the nearest float. Signs are accepted here;
/// positivity is a domain check enforced by the converter.
pub fn parse_fraction_text(text: &str) -> OddsResult<Rational64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(fraction_mismatch(text));
    }

    if let Some((numer, denom)) = trimmed.split_once('/') {
        let numer: i64 = numer.trim().parse().map_err(|_| fraction_mismatch(text))?;
        let denom: i64 = denom.trim().parse().map_err(|_| fraction_mismatch(text))?;
        if denom == 0 {
            return Err(OddsError::invalid_odds(
                "Fractional odds require positive numerator and denominator",
            ));
        }
        return Ok(Rational64::new(numer, denom));
    }

    if let Some((whole, frac)) = trimmed.split_once('.') {
        return parse_decimal_text(whole, frac).ok_or_else(|| fraction_mismatch(text));
    }

    trimmed
        .parse::<i64>()
        .map(Rational64::from_integer)
        .map_err(|_| fraction_mismatch(text))
}

fn parse_decimal_text(whole: &str, frac: &str) -> Option<Rational64> {
    let (negative, digits) = match whole.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, whole.strip_prefix('+').unwrap_or(whole)),
    };
    if digits.is_empty() && frac.is_empty() {
        return None;
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut numer: i64 = if digits.is_empty() {
        0
    } else {
        digits.parse().ok()?
    };
    let mut denom: i64 = 1;
    for digit in frac.bytes() {
        numer = numer.checked_mul(10)?.checked_add((digit - b'0') as i64)?;
        denom = denom.checked_mul(10)?;
    }
    if negative {
        numer = -numer;
    }
    Some(Rational64::new(numer, denom))
}

fn fraction_mismatch(text: &str) -> OddsError {
    OddsError::type_mismatch(format!("Invalid fraction literal: {:?}", text))
}
