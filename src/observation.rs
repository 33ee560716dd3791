//! A complete fire behavior observation record.
//!
//! The derived values stored on an [`Observation`] are a cache of [`recompute`]. Anything that
//! stores observations should save the result of [`Observation::recomputed`], and can audit
//! existing records with [`Observation::is_consistent`].
use crate::{
    derived::{recompute, DerivedValues},
    keys::{DerivedField, InputField},
    rate_of_spread::RateOfSpread,
    wind_slope::WindSlope,
};
use chrono::{NaiveDateTime, NaiveTime};
use optional::{none, Optioned};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};
use tracing::debug;

/// Workflow state of an observation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ObservationStatus {
    /// Still being filled in. Nothing is required.
    #[strum(serialize = "draft")]
    Draft,
    /// Finished. The incident and observer names are required.
    #[strum(serialize = "complete")]
    Complete,
}

impl Default for ObservationStatus {
    fn default() -> Self {
        ObservationStatus::Draft
    }
}

impl Display for ObservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(<&'static str>::from(*self))
    }
}

/// Identifying information about the incident and observer.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IncidentOverview {
    incident_name: String,
    observer_name: String,
    observation_time: Option<NaiveDateTime>,
    // Latitude and longitude in decimal degrees.
    location: Option<(f64, f64)>,
    perimeter_notes: String,
    growth_notes: String,
}

impl IncidentOverview {
    /// Create an empty overview.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the incident name.
    #[inline]
    pub fn with_incident_name<S: Into<String>>(mut self, name: S) -> Self {
        self.incident_name = name.into();
        self
    }

    /// Builder method to set the observer name.
    #[inline]
    pub fn with_observer_name<S: Into<String>>(mut self, name: S) -> Self {
        self.observer_name = name.into();
        self
    }

    /// Builder method to set the time of the observation.
    #[inline]
    pub fn with_observation_time<T>(mut self, time: T) -> Self
    where
        Option<NaiveDateTime>: From<T>,
    {
        self.observation_time = Option::from(time);
        self
    }

    /// Builder method to set the latitude and longitude.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ews_analysis::IncidentOverview;
    ///
    /// let inc = IncidentOverview::new().with_location((44.12, -121.34));
    /// assert_eq!(inc.location(), Some((44.12, -121.34)));
    ///
    /// let inc = inc.with_location(None);
    /// assert!(inc.location().is_none());
    /// ```
    #[inline]
    pub fn with_location<T>(mut self, location: T) -> Self
    where
        Option<(f64, f64)>: From<T>,
    {
        self.location = Option::from(location);
        self
    }

    /// Builder method to set notes about the fire perimeter.
    #[inline]
    pub fn with_perimeter_notes<S: Into<String>>(mut self, notes: S) -> Self {
        self.perimeter_notes = notes.into();
        self
    }

    /// Builder method to set notes about fire growth.
    #[inline]
    pub fn with_growth_notes<S: Into<String>>(mut self, notes: S) -> Self {
        self.growth_notes = notes.into();
        self
    }

    /// Name of the incident.
    #[inline]
    pub fn incident_name(&self) -> &str {
        &self.incident_name
    }

    /// Name of the observer.
    #[inline]
    pub fn observer_name(&self) -> &str {
        &self.observer_name
    }

    /// Time of the observation.
    #[inline]
    pub fn observation_time(&self) -> Option<NaiveDateTime> {
        self.observation_time
    }

    /// Latitude and longitude.
    #[inline]
    pub fn location(&self) -> Option<(f64, f64)> {
        self.location
    }

    /// Perimeter notes.
    #[inline]
    pub fn perimeter_notes(&self) -> &str {
        &self.perimeter_notes
    }

    /// Growth notes.
    #[inline]
    pub fn growth_notes(&self) -> &str {
        &self.growth_notes
    }
}

/// Fuel types that can be checked off on an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum FuelType {
    Litter,
    Grass,
    Crown,
}

/// Relative humidity and the fuels carrying the fire.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct EnvironmentalInputs {
    /// Relative humidity in percent.
    #[serde(with = "crate::serde_optioned")]
    pub relative_humidity: Optioned<f64>,
    /// Fire is carried in litter.
    pub fuel_litter: bool,
    /// Fire is carried in grass.
    pub fuel_grass: bool,
    /// Fire is in the crowns.
    pub fuel_crown: bool,
}

impl Default for EnvironmentalInputs {
    fn default() -> Self {
        EnvironmentalInputs {
            relative_humidity: none(),
            fuel_litter: false,
            fuel_grass: false,
            fuel_crown: false,
        }
    }
}

impl EnvironmentalInputs {
    /// The fuel types that are checked, in a fixed order.
    pub fn fuel_types(&self) -> Vec<FuelType> {
        FuelType::iter()
            .filter(|fuel| match fuel {
                FuelType::Litter => self.fuel_litter,
                FuelType::Grass => self.fuel_grass,
                FuelType::Crown => self.fuel_crown,
            })
            .collect()
    }
}

/// One timestamped line in the observation log.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationEntry {
    /// Local time of the entry.
    pub time: Option<NaiveTime>,
    /// What the fire was doing.
    pub fire_behavior_notes: String,
    /// How the weather was trending.
    pub weather_trends: String,
}

impl ObservationEntry {
    /// Create a new log entry.
    pub fn new<T, S1, S2>(time: T, fire_behavior_notes: S1, weather_trends: S2) -> Self
    where
        Option<NaiveTime>: From<T>,
        S1: Into<String>,
        S2: Into<String>,
    {
        ObservationEntry {
            time: Option::from(time),
            fire_behavior_notes: fire_behavior_notes.into(),
            weather_trends: weather_trends.into(),
        }
    }
}

/// Items of the LCES safety checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum LcesItem {
    Lookouts,
    Communications,
    EscapeRoutes,
    SafetyZones,
}

impl Display for LcesItem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let label = match self {
            LcesItem::Lookouts => "lookouts",
            LcesItem::Communications => "communications",
            LcesItem::EscapeRoutes => "escape routes",
            LcesItem::SafetyZones => "safety zones",
        };
        f.write_str(label)
    }
}

/// The LCES safety audit, whether each item is in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct SafetyAudit {
    pub lookouts: bool,
    pub communications: bool,
    pub escape_routes: bool,
    pub safety_zones: bool,
}

impl SafetyAudit {
    /// Whether a single checklist item is in place.
    pub fn is_checked(&self, item: LcesItem) -> bool {
        match item {
            LcesItem::Lookouts => self.lookouts,
            LcesItem::Communications => self.communications,
            LcesItem::EscapeRoutes => self.escape_routes,
            LcesItem::SafetyZones => self.safety_zones,
        }
    }

    /// Whether all four items are in place.
    pub fn is_complete(&self) -> bool {
        LcesItem::iter().all(|item| self.is_checked(item))
    }

    /// The items that are not in place.
    pub fn missing(&self) -> Vec<LcesItem> {
        LcesItem::iter().filter(|&item| !self.is_checked(item)).collect()
    }
}

/// A fire behavior observation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Observation {
    status: ObservationStatus,
    incident: IncidentOverview,
    environment: EnvironmentalInputs,
    wind_slope: WindSlope,
    ros: RateOfSpread,
    #[serde(rename = "observations_log")]
    log: Vec<ObservationEntry>,
    safety: SafetyAudit,
}

impl Observation {
    /// Create a new, empty draft observation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ews_analysis::{Observation, ObservationStatus};
    ///
    /// let obs = Observation::new();
    /// assert_eq!(obs.status(), ObservationStatus::Draft);
    /// assert!(obs.wind_slope().ews_ratio().is_none());
    /// assert!(obs.log().is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the status.
    #[inline]
    pub fn with_status(mut self, status: ObservationStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder method to set the incident overview.
    #[inline]
    pub fn with_incident(mut self, incident: IncidentOverview) -> Self {
        self.incident = incident;
        self
    }

    /// Builder method to set the environmental inputs.
    #[inline]
    pub fn with_environment(mut self, environment: EnvironmentalInputs) -> Self {
        self.environment = environment;
        self
    }

    /// Builder method to set the wind and slope columns.
    ///
    /// Derived values are carried along as given; use [`recomputed`](Observation::recomputed)
    /// before storing.
    #[inline]
    pub fn with_wind_slope(mut self, wind_slope: WindSlope) -> Self {
        self.wind_slope = wind_slope;
        self
    }

    /// Builder method to set the rate of spread.
    #[inline]
    pub fn with_ros(mut self, ros: RateOfSpread) -> Self {
        self.ros = ros;
        self
    }

    /// Builder method to append an entry to the observation log.
    #[inline]
    pub fn with_log_entry(mut self, entry: ObservationEntry) -> Self {
        self.log.push(entry);
        self
    }

    /// Builder method to replace the whole observation log.
    #[inline]
    pub fn with_log(mut self, log: Vec<ObservationEntry>) -> Self {
        self.log = log;
        self
    }

    /// Builder method to set the safety audit.
    #[inline]
    pub fn with_safety(mut self, safety: SafetyAudit) -> Self {
        self.safety = safety;
        self
    }

    /// Workflow status.
    #[inline]
    pub fn status(&self) -> ObservationStatus {
        self.status
    }

    /// Incident overview.
    #[inline]
    pub fn incident(&self) -> &IncidentOverview {
        &self.incident
    }

    /// Environmental inputs.
    #[inline]
    pub fn environment(&self) -> &EnvironmentalInputs {
        &self.environment
    }

    /// Wind and slope columns.
    #[inline]
    pub fn wind_slope(&self) -> &WindSlope {
        &self.wind_slope
    }

    /// Rate of spread.
    #[inline]
    pub fn ros(&self) -> &RateOfSpread {
        &self.ros
    }

    /// Observation log, oldest entry first.
    #[inline]
    pub fn log(&self) -> &[ObservationEntry] {
        &self.log
    }

    /// Safety audit.
    #[inline]
    pub fn safety(&self) -> &SafetyAudit {
        &self.safety
    }

    /// The fuel types checked in the environmental inputs.
    #[inline]
    pub fn fuel_types(&self) -> Vec<FuelType> {
        self.environment.fuel_types()
    }

    /// A copy of this observation with every derived value freshly computed.
    ///
    /// This is what should be stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ews_analysis::{Observation, RateOfSpread, RosDirection, WindSlope, WindSlopeColumn};
    ///
    /// let obs = Observation::new()
    ///     .with_wind_slope(WindSlope::new(
    ///         WindSlopeColumn::new().with_midflame_ws(8.0).with_slope_contribution(2.0),
    ///         WindSlopeColumn::new().with_midflame_ws(12.0).with_slope_contribution(3.0),
    ///     ))
    ///     .with_ros(
    ///         RateOfSpread::new()
    ///             .with_observed_ros(10.0)
    ///             .with_direction(RosDirection::Slower),
    ///     );
    ///
    /// assert!(!obs.is_consistent());
    ///
    /// let obs = obs.recomputed();
    /// assert!(obs.is_consistent());
    /// assert_eq!(obs.wind_slope().ews_ratio().into_option(), Some(1.5));
    /// ```
    pub fn recomputed(&self) -> Observation {
        let (wind_slope, ros) = recompute(&self.wind_slope, &self.ros);
        let obs = Observation {
            wind_slope,
            ros,
            ..self.clone()
        };

        debug!(
            incident = obs.incident.incident_name(),
            status = %obs.status,
            derived = %obs.derived_values(),
            "recomputed observation"
        );

        obs
    }

    /// The derived values as currently stored on this observation.
    #[inline]
    pub fn derived_values(&self) -> DerivedValues {
        DerivedValues::stored(&self.wind_slope, &self.ros)
    }

    /// Whether the stored derived values are exactly what recomputing would produce.
    pub fn is_consistent(&self) -> bool {
        let stored = self.derived_values();
        let fresh = DerivedValues::computed(&self.wind_slope, &self.ros);

        let consistent = stored.matches(&fresh);
        if !consistent {
            debug!(
                incident = self.incident.incident_name(),
                stored = ?stored,
                fresh = ?fresh,
                "stored derived values do not match inputs"
            );
        }

        consistent
    }

    /// Look up an input value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ews_analysis::{InputField, Observation, WindSlope, WindSlopeColumn};
    ///
    /// let obs = Observation::new().with_wind_slope(WindSlope::new(
    ///     WindSlopeColumn::new().with_midflame_ws(8.0),
    ///     WindSlopeColumn::new(),
    /// ));
    ///
    /// assert_eq!(obs.input(InputField::ObservedMidflameWs).into_option(), Some(8.0));
    /// assert!(obs.input(InputField::PredictedMidflameWs).is_none());
    /// ```
    pub fn input(&self, field: InputField) -> Optioned<f64> {
        use self::InputField::*;

        let observed = self.wind_slope.observed();
        let predicted = self.wind_slope.predicted();

        match field {
            RelativeHumidity => self.environment.relative_humidity,
            ObservedEyeLevelWs => observed.eye_level_ws(),
            ObservedMidflameWs => observed.midflame_ws(),
            ObservedSlopeContribution => observed.slope_contribution(),
            PredictedEyeLevelWs => predicted.eye_level_ws(),
            PredictedMidflameWs => predicted.midflame_ws(),
            PredictedSlopeContribution => predicted.slope_contribution(),
            ObservedRos => self.ros.observed_ros(),
            Latitude => Optioned::from(self.incident.location.map(|(lat, _)| lat)),
            Longitude => Optioned::from(self.incident.location.map(|(_, lon)| lon)),
        }
    }

    /// Look up a stored derived value.
    pub fn derived(&self, field: DerivedField) -> Optioned<f64> {
        use self::DerivedField::*;

        match field {
            ObservedTotalEws => self.wind_slope.observed().total_ews(),
            PredictedTotalEws => self.wind_slope.predicted().total_ews(),
            EwsRatio => self.wind_slope.ews_ratio(),
            CalculatedRos => self.ros.calculated_ros(),
        }
    }
}
