//! Error types for appraisal calculations

use thiserror::Error;

/// Errors raised by the appraisal functions and the series loader
#[derive(Error, Debug)]
pub enum AppraisalError {
    /// Two positionally aligned sequences have different lengths
    #[error("{left} and {right} must have same length ({left_len} vs {right_len})")]
    LengthMismatch {
        left: &'static str,
        right: &'static str,
        left_len: usize,
        right_len: usize,
    },

    /// Total discounted costs are exactly zero, so a ratio cannot be formed
    #[error("total discounted costs cannot be zero")]
    ZeroDenominator,

    #[error("unknown project type '{given}'. Choose from: {}", .valid.join(", "))]
    UnknownProjectType {
        given: String,
        valid: Vec<&'static str>,
    },

    #[error("unknown rate category '{given}'. Choose from: {}", .valid.join(", "))]
    UnknownRateCategory {
        given: String,
        valid: Vec<&'static str>,
    },

    /// Years are counted from the base year and cannot precede it
    #[error("year {0} is before the base year (year 0)")]
    NegativeYear(i64),

    /// Too many values to number consecutive years with a u32
    #[error("{0} values exceed the largest representable year offset")]
    TooManyYears(usize),

    /// A configuration variable is present but not valid unicode
    #[error("invalid value '{value}' for {name}")]
    InvalidSetting { name: &'static str, value: String },

    #[error("invalid value '{value}' in column '{column}'")]
    Parse { column: &'static str, value: String },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppraisalError {
    pub(crate) fn length_mismatch(
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    ) -> Self {
        Self::LengthMismatch {
            left,
            right,
            left_len,
            right_len,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppraisalError>;

/// Convert a signed year from text input into a year offset
pub(crate) fn checked_year(year: i64) -> Result<u32> {
    if year < 0 {
        return Err(AppraisalError::NegativeYear(year));
    }
    u32::try_from(year).map_err(|_| AppraisalError::Parse {
        column: "year",
        value: year.to_string(),
    })
}
