//! Converted-output model and rendering
//!
//! Decimal and American targets produce numbers; the fractional target
//! produces reduced `"n/d"` text. The scalar/sequence tag assigned at the
//! input boundary travels through to the output unchanged.

use serde::Serialize;
use std::fmt;

/// One converted odds value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConvertedValue {
    Number(f64),
    Text(String),
}

impl ConvertedValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl fmt::Display for ConvertedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{}", number),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Conversion output mirroring the shape of the input
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConvertedOdds {
    Scalar(ConvertedValue),
    Sequence(Vec<ConvertedValue>),
}

impl ConvertedOdds {
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

    /// View the converted values uniformly, regardless of shape
    pub fn values(&self) -> &[ConvertedValue] {
        match self {
            Self::Scalar(value) => std::slice::from_ref(value),
            Self::Sequence(values) => values,
        }
    }

    /// The single converted value, when the output is scalar
    pub fn as_scalar(&self) -> Option<&ConvertedValue> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::Sequence(_) => None,
        }
    }
}

impl fmt::Display for ConvertedOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(value) => write!(f, "{}", value),
            Self::Sequence(values) => {
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                Ok(())
            }
        }
    }
}
