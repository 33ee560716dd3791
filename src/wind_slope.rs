//! Wind and slope measurements for an observed and a predicted column.
use optional::{none, Optioned};
use serde::{Deserialize, Serialize};

/// One column of wind and slope measurements, either observed in the field or predicted.
///
/// All wind speeds are in mph. Any value may be missing, and a missing value is not the same as a
/// measured zero. The total effective wind speed is only ever set by
/// [`recompute`](crate::recompute).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct WindSlopeColumn {
    #[serde(with = "crate::serde_optioned")]
    pub(crate) eye_level_ws: Optioned<f64>,
    #[serde(with = "crate::serde_optioned")]
    pub(crate) midflame_ws: Optioned<f64>,
    #[serde(with = "crate::serde_optioned")]
    pub(crate) slope_contribution: Optioned<f64>,
    #[serde(default = "crate::serde_optioned::missing", with = "crate::serde_optioned")]
    pub(crate) total_ews: Optioned<f64>,
}

impl Default for WindSlopeColumn {
    fn default() -> Self {
        WindSlopeColumn {
            eye_level_ws: none(),
            midflame_ws: none(),
            slope_contribution: none(),
            total_ews: none(),
        }
    }
}

impl WindSlopeColumn {
    /// Create a new column with every value missing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ews_analysis::WindSlopeColumn;
    ///
    /// let col = WindSlopeColumn::new();
    /// assert!(col.midflame_ws().is_none());
    /// assert!(col.total_ews().is_none());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the eye-level wind speed.
    ///
    /// This value is recorded for reference only, it does not enter any calculation.
    #[inline]
    pub fn with_eye_level_ws<T>(mut self, value: T) -> Self
    where
        Optioned<f64>: From<T>,
    {
        self.eye_level_ws = Optioned::from(value);
        self
    }

    /// Builder method to set the midflame wind speed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ews_analysis::WindSlopeColumn;
    /// use optional::none;
    ///
    /// let col = WindSlopeColumn::new().with_midflame_ws(8.0);
    /// assert_eq!(col.midflame_ws().into_option(), Some(8.0));
    ///
    /// // A measured zero is a value, not a missing measurement.
    /// let col = col.with_midflame_ws(Some(0.0));
    /// assert_eq!(col.midflame_ws().into_option(), Some(0.0));
    ///
    /// let col = col.with_midflame_ws(none::<f64>());
    /// assert!(col.midflame_ws().is_none());
    /// ```
    #[inline]
    pub fn with_midflame_ws<T>(mut self, value: T) -> Self
    where
        Optioned<f64>: From<T>,
    {
        self.midflame_ws = Optioned::from(value);
        self
    }

    /// Builder method to set the slope contribution.
    #[inline]
    pub fn with_slope_contribution<T>(mut self, value: T) -> Self
    where
        Optioned<f64>: From<T>,
    {
        self.slope_contribution = Optioned::from(value);
        self
    }

    /// Eye-level wind speed.
    #[inline]
    pub fn eye_level_ws(&self) -> Optioned<f64> {
        self.eye_level_ws
    }

    /// Midflame wind speed.
    #[inline]
    pub fn midflame_ws(&self) -> Optioned<f64> {
        self.midflame_ws
    }

    /// Wind speed equivalent of the slope.
    #[inline]
    pub fn slope_contribution(&self) -> Optioned<f64> {
        self.slope_contribution
    }

    /// Total effective wind speed as of the last recompute.
    #[inline]
    pub fn total_ews(&self) -> Optioned<f64> {
        self.total_ews
    }

    /// Copy of this column with the derived total replaced.
    #[inline]
    pub(crate) fn with_total_ews(mut self, total_ews: Optioned<f64>) -> Self {
        self.total_ews = total_ews;
        self
    }
}

/// Observed and predicted wind/slope columns and the ratio between their totals.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct WindSlope {
    pub(crate) observed: WindSlopeColumn,
    pub(crate) predicted: WindSlopeColumn,
    #[serde(default = "crate::serde_optioned::missing", with = "crate::serde_optioned")]
    pub(crate) ews_ratio: Optioned<f64>,
}

impl Default for WindSlope {
    fn default() -> Self {
        WindSlope::new(WindSlopeColumn::new(), WindSlopeColumn::new())
    }
}

impl WindSlope {
    /// Pair up an observed and predicted column.
    ///
    /// The ratio starts out missing; call [`recompute`](crate::recompute) to fill it in.
    #[inline]
    pub fn new(observed: WindSlopeColumn, predicted: WindSlopeColumn) -> Self {
        WindSlope {
            observed,
            predicted,
            ews_ratio: none(),
        }
    }

    /// The column measured in the field.
    #[inline]
    pub fn observed(&self) -> &WindSlopeColumn {
        &self.observed
    }

    /// The column from the prediction, e.g. a fire behavior model run.
    #[inline]
    pub fn predicted(&self) -> &WindSlopeColumn {
        &self.predicted
    }

    /// Builder method to replace the observed column.
    #[inline]
    pub fn with_observed(mut self, observed: WindSlopeColumn) -> Self {
        self.observed = observed;
        self
    }

    /// Builder method to replace the predicted column.
    #[inline]
    pub fn with_predicted(mut self, predicted: WindSlopeColumn) -> Self {
        self.predicted = predicted;
        self
    }

    /// Ratio of the larger to the smaller total EWS as of the last recompute.
    #[inline]
    pub fn ews_ratio(&self) -> Optioned<f64> {
        self.ews_ratio
    }
}
