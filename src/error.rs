//! Error types for the ews-analysis crate.
//!
//! The derived metrics engine itself never fails, it reports values it cannot compute as missing.
//! These errors come from checking raw input before it ever reaches the engine.
use crate::keys::{InputField, RequiredField};
use thiserror::Error;

/// Error type for the crate.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum AnalysisError {
    /// A measurement that can only be zero or positive was negative.
    #[error("{0} must not be negative")]
    Negative(InputField),
    /// A measurement was NaN or infinite.
    #[error("{0} must be a finite number")]
    NotFinite(InputField),
    /// A measurement was outside its physically meaningful range.
    #[error("{0} is out of range")]
    OutOfRange(InputField),
    /// A text field required to mark an observation complete was blank.
    #[error("{0} is required to mark complete")]
    MissingRequired(RequiredField),
    /// Direction text was something other than `faster` or `slower`.
    #[error("direction must be either faster or slower")]
    InvalidDirection,
    /// Text could not be parsed as a number.
    #[error("value is not a number")]
    NotANumber,
    /// Text could not be parsed as a date, time, or date and time.
    #[error("value is not a valid time")]
    InvalidTime,
}

/// Shorthand for results.
pub type Result<T> = std::result::Result<T, AnalysisError>;
