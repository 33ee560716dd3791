//! Enums used as keys for looking up values in an observation.
use std::fmt::Display;
use strum_macros::EnumIter;

/// Numeric values a user enters on an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum InputField {
    /// Relative humidity (%)
    RelativeHumidity,
    /// Observed eye-level wind speed (mph)
    ObservedEyeLevelWs,
    /// Observed midflame wind speed (mph)
    ObservedMidflameWs,
    /// Observed slope contribution (mph)
    ObservedSlopeContribution,
    /// Predicted eye-level wind speed (mph)
    PredictedEyeLevelWs,
    /// Predicted midflame wind speed (mph)
    PredictedMidflameWs,
    /// Predicted slope contribution (mph)
    PredictedSlopeContribution,
    /// Observed rate of spread (ch/hr)
    ObservedRos,
    /// Latitude in decimal degrees
    Latitude,
    /// Longitude in decimal degrees
    Longitude,
}

impl InputField {
    /// Inclusive lower and upper bounds on a valid value, if the field has them.
    ///
    /// Wind, slope, and spread measurements only have a lower bound of zero, which is reported
    /// separately as [`AnalysisError::Negative`](crate::AnalysisError::Negative).
    pub fn range(self) -> Option<(f64, f64)> {
        use self::InputField::*;

        match self {
            RelativeHumidity => Some((0.0, 100.0)),
            Latitude => Some((-90.0, 90.0)),
            Longitude => Some((-180.0, 180.0)),
            _ => None,
        }
    }
}

impl Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use self::InputField::*;

        let label = match self {
            RelativeHumidity => "relative humidity",
            ObservedEyeLevelWs => "observed eye-level wind speed",
            ObservedMidflameWs => "observed midflame wind speed",
            ObservedSlopeContribution => "observed slope contribution",
            PredictedEyeLevelWs => "predicted eye-level wind speed",
            PredictedMidflameWs => "predicted midflame wind speed",
            PredictedSlopeContribution => "predicted slope contribution",
            ObservedRos => "observed rate of spread",
            Latitude => "latitude",
            Longitude => "longitude",
        };

        f.write_str(label)
    }
}

/// Values derived from the inputs by the engine. These are never entered by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum DerivedField {
    /// Total effective wind speed of the observed column (mph)
    ObservedTotalEws,
    /// Total effective wind speed of the predicted column (mph)
    PredictedTotalEws,
    /// Ratio of the larger to the smaller total EWS (dimensionless)
    EwsRatio,
    /// Projected rate of spread (ch/hr)
    CalculatedRos,
}

/// Text fields that must be filled in before an observation can be marked complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum RequiredField {
    /// Name of the incident
    IncidentName,
    /// Name of the person making the observation
    ObserverName,
}

impl Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RequiredField::IncidentName => f.write_str("incident name"),
            RequiredField::ObserverName => f.write_str("observer name"),
        }
    }
}
