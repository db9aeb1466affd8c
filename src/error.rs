use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type ProjectionResult<T> = Result<T, ProjectionError>;

#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// User-facing category of a rejected input set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationErrorKind {
    InvalidNumber,
    NegativeValue,
    HorizonOutOfRange,
    InflationTooHigh,
}

/// Input rejection raised before any simulation work starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("`{field}` must be a finite number")]
    InvalidNumber { field: &'static str },

    #[error("`{field}` must not be negative")]
    NegativeValue { field: &'static str },

    #[error("horizon must be between 1 and 600 months, got {horizon_months}")]
    HorizonOutOfRange { horizon_months: u32 },

    #[error("annual inflation must be <= 200%, got {annual_rate}")]
    InflationTooHigh { annual_rate: f64 },
}

impl ValidationError {
    #[must_use]
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::InvalidNumber { .. } => ValidationErrorKind::InvalidNumber,
            Self::NegativeValue { .. } => ValidationErrorKind::NegativeValue,
            Self::HorizonOutOfRange { .. } => ValidationErrorKind::HorizonOutOfRange,
            Self::InflationTooHigh { .. } => ValidationErrorKind::InflationTooHigh,
        }
    }

    /// Message shown to the user for this rejection category.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        self.kind().user_message()
    }
}

impl ValidationErrorKind {
    #[must_use]
    pub fn user_message(self) -> &'static str {
        match self {
            Self::InvalidNumber => "Fill in every field with a valid number.",
            Self::NegativeValue => "Negative values are not allowed.",
            Self::HorizonOutOfRange => "Horizon: use 1 to 600 months.",
            Self::InflationTooHigh => "Inflation is too high. Use a realistic value.",
        }
    }
}
