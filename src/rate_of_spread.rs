//! Rate of spread observations and the direction a fire is diverging from its prediction.
use optional::{none, Optioned};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// Whether the fire is spreading faster or slower than predicted.
///
/// # Examples
///
/// ```rust
/// use ews_analysis::RosDirection;
/// use std::str::FromStr;
///
/// assert_eq!(RosDirection::from_str("faster").unwrap(), RosDirection::Faster);
/// assert_eq!(RosDirection::Slower.to_string(), "slower");
/// assert!(RosDirection::from_str("sideways").is_err());
/// ```
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
pub enum RosDirection {
    /// Projected spread is the observed spread multiplied by the EWS ratio.
    #[strum(serialize = "faster")]
    Faster,
    /// Projected spread is the observed spread divided by the EWS ratio.
    #[strum(serialize = "slower")]
    Slower,
}

impl RosDirection {
    /// The direction selected after a user clicks `clicked` while `current` is selected.
    ///
    /// Clicking the direction that is already selected clears the selection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ews_analysis::RosDirection::{self, *};
    ///
    /// assert_eq!(RosDirection::select(None, Faster), Some(Faster));
    /// assert_eq!(RosDirection::select(Some(Slower), Faster), Some(Faster));
    /// assert_eq!(RosDirection::select(Some(Faster), Faster), None);
    /// ```
    pub fn select(current: Option<RosDirection>, clicked: RosDirection) -> Option<RosDirection> {
        if current == Some(clicked) {
            None
        } else {
            Some(clicked)
        }
    }
}

impl Display for RosDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(<&'static str>::from(*self))
    }
}

/// An observed rate of spread in chains per hour and the spread projected from it.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RateOfSpread {
    #[serde(with = "crate::serde_optioned")]
    pub(crate) observed_ros: Optioned<f64>,
    #[serde(rename = "ros_direction")]
    pub(crate) direction: Option<RosDirection>,
    #[serde(default = "crate::serde_optioned::missing", with = "crate::serde_optioned")]
    pub(crate) calculated_ros: Optioned<f64>,
}

impl Default for RateOfSpread {
    fn default() -> Self {
        RateOfSpread {
            observed_ros: none(),
            direction: None,
            calculated_ros: none(),
        }
    }
}

impl RateOfSpread {
    /// Create a new rate of spread with nothing observed and no direction.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the observed rate of spread.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ews_analysis::{RateOfSpread, RosDirection};
    ///
    /// let ros = RateOfSpread::new()
    ///     .with_observed_ros(10.0)
    ///     .with_direction(RosDirection::Faster);
    ///
    /// assert_eq!(ros.observed_ros().into_option(), Some(10.0));
    /// assert_eq!(ros.direction(), Some(RosDirection::Faster));
    /// assert!(ros.calculated_ros().is_none());
    /// ```
    #[inline]
    pub fn with_observed_ros<T>(mut self, value: T) -> Self
    where
        Optioned<f64>: From<T>,
    {
        self.observed_ros = Optioned::from(value);
        self
    }

    /// Builder method to set, or clear, the direction.
    #[inline]
    pub fn with_direction<T>(mut self, direction: T) -> Self
    where
        Option<RosDirection>: From<T>,
    {
        self.direction = Option::from(direction);
        self
    }

    /// Observed rate of spread.
    #[inline]
    pub fn observed_ros(&self) -> Optioned<f64> {
        self.observed_ros
    }

    /// Direction of divergence from the prediction.
    #[inline]
    pub fn direction(&self) -> Option<RosDirection> {
        self.direction
    }

    /// Projected rate of spread as of the last recompute.
    #[inline]
    pub fn calculated_ros(&self) -> Optioned<f64> {
        self.calculated_ros
    }

    #[inline]
    pub(crate) fn with_calculated_ros(mut self, calculated_ros: Optioned<f64>) -> Self {
        self.calculated_ros = calculated_ros;
        self
    }
}
