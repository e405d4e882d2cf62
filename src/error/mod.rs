//! Error types for odds conversion operations

/// Core error type for odds conversion
#[derive(Debug, Clone, thiserror::Error)]
pub enum OddsError {
    /// Unrecognized format name, or a missing value with no default to fall back on
    #[error("{message}")]
    InvalidFormat { message: String },

    /// A value violates the domain constraint for its format
    #[error("{message}")]
    InvalidOdds {
        message: String,
        /// Every offending value in the rejected batch, rendered as text
        offenders: Vec<String>,
    },

    /// An element cannot be interpreted as odds in the requested format
    #[error("{message}")]
    TypeMismatch { message: String },

    /// Input is neither a scalar nor a one-dimensional sequence
    #[error("{message}")]
    ShapeError { message: String },
}

impl OddsError {
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    pub fn invalid_odds(message: impl Into<String>) -> Self {
        Self::InvalidOdds {
            message: message.into(),
            offenders: Vec::new(),
        }
    }

    /// Build an `InvalidOdds` error naming every offending value in the batch
    pub fn invalid_odds_batch(constraint: &str, offenders: Vec<String>) -> Self {
        let message = format!("{}; received: {}", constraint, offenders.join(", "));
        Self::InvalidOdds { message, offenders }
    }

    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::TypeMismatch {
            message: message.into(),
        }
    }

    pub fn shape(message: impl Into<String>) -> Self {
        Self::ShapeError {
            message: message.into(),
        }
    }

    /// Offending values carried by an `InvalidOdds` batch failure
    pub fn offenders(&self) -> &[String] {
        match self {
            Self::InvalidOdds { offenders, .. } => offenders,
            _ => &[],
        }
    }
}

/// Result type for odds conversion operations
pub type OddsResult<T> = Result<T, OddsError>;
