//! Checks on raw user input before it reaches the derived metrics engine.
//!
//! The engine assumes its numbers are real measurements and its direction is one of two values.
//! These functions turn form text into typed values and reject observations that do not make
//! physical sense.
use crate::{
    error::{AnalysisError, Result},
    keys::{InputField, RequiredField},
    observation::{Observation, ObservationStatus},
    rate_of_spread::RosDirection,
};
use chrono::{NaiveDateTime, NaiveTime};
use optional::{none, some, Optioned};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::debug;

/// Check an observation, returning the first problem found.
///
/// Problems are reported in the order of [`InputField`], followed by missing required names.
///
/// # Examples
///
/// ```rust
/// use ews_analysis::{
///     validate, AnalysisError, InputField, Observation, WindSlope, WindSlopeColumn,
/// };
///
/// assert!(validate(&Observation::new()).is_ok());
///
/// let obs = Observation::new().with_wind_slope(WindSlope::new(
///     WindSlopeColumn::new().with_midflame_ws(-1.0),
///     WindSlopeColumn::new(),
/// ));
/// assert_eq!(
///     validate(&obs),
///     Err(AnalysisError::Negative(InputField::ObservedMidflameWs))
/// );
/// ```
pub fn validate(obs: &Observation) -> Result<()> {
    match validation_errors(obs).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Check an observation, returning every problem found.
pub fn validation_errors(obs: &Observation) -> Vec<AnalysisError> {
    let mut errors: Vec<AnalysisError> = InputField::iter()
        .filter_map(|field| check_input(field, obs.input(field)).err())
        .collect();

    if obs.status() == ObservationStatus::Complete {
        let incident = obs.incident();
        errors.extend(
            RequiredField::iter()
                .filter(|field| match field {
                    RequiredField::IncidentName => incident.incident_name().trim().is_empty(),
                    RequiredField::ObserverName => incident.observer_name().trim().is_empty(),
                })
                .map(AnalysisError::MissingRequired),
        );
    }

    for err in &errors {
        debug!(error = %err, "observation failed validation");
    }

    errors
}

/// Check a single input value. Missing values are always acceptable.
pub fn check_input(field: InputField, value: Optioned<f64>) -> Result<()> {
    let value = match value.into_option() {
        Some(val) => val,
        None => return Ok(()),
    };

    if !value.is_finite() {
        return Err(AnalysisError::NotFinite(field));
    }

    match field.range() {
        Some((low, high)) if value < low || value > high => Err(AnalysisError::OutOfRange(field)),
        Some(_) => Ok(()),
        None if value < 0.0 => Err(AnalysisError::Negative(field)),
        None => Ok(()),
    }
}

/// Parse the direction text from a form.
///
/// Blank text means no direction has been chosen.
///
/// # Examples
///
/// ```rust
/// use ews_analysis::{parse_direction, RosDirection, AnalysisError};
///
/// assert_eq!(parse_direction("slower"), Ok(Some(RosDirection::Slower)));
/// assert_eq!(parse_direction(" "), Ok(None));
/// assert_eq!(parse_direction("up"), Err(AnalysisError::InvalidDirection));
/// ```
pub fn parse_direction(text: &str) -> Result<Option<RosDirection>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    RosDirection::from_str(text)
        .map(Some)
        .map_err(|_| AnalysisError::InvalidDirection)
}

/// Parse a numeric measurement from a form.
///
/// Blank text is a missing measurement, which is not the same as `0`.
///
/// # Examples
///
/// ```rust
/// use ews_analysis::{parse_measurement, AnalysisError};
///
/// assert_eq!(parse_measurement("8.5").unwrap().into_option(), Some(8.5));
/// assert_eq!(parse_measurement("0").unwrap().into_option(), Some(0.0));
/// assert!(parse_measurement("").unwrap().is_none());
/// assert_eq!(parse_measurement("calm").unwrap_err(), AnalysisError::NotANumber);
/// ```
pub fn parse_measurement(text: &str) -> Result<Optioned<f64>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(none());
    }

    match f64::from_str(text) {
        Ok(val) if val.is_finite() => Ok(some(val)),
        _ => Err(AnalysisError::NotANumber),
    }
}

/// Parse the observation date and time from a form, `YYYY-MM-DDTHH:MM` with optional seconds.
pub fn parse_observation_time(text: &str) -> Result<Option<NaiveDateTime>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M"))
        .map(Some)
        .map_err(|_| AnalysisError::InvalidTime)
}

/// Parse the time of a log entry from a form, `HH:MM`.
pub fn parse_log_time(text: &str) -> Result<Option<NaiveTime>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    NaiveTime::parse_from_str(text, "%H:%M")
        .map(Some)
        .map_err(|_| AnalysisError::InvalidTime)
}
