//! Derived fire behavior metrics: effective wind speed, EWS ratio, and projected rate of spread.
//!
//! Everything here is a pure function of its arguments. A value that cannot be computed yet,
//! because an input is missing or the math would divide by zero, comes back as a missing value
//! rather than an error. A missing value is never treated as zero, and zero is never treated as
//! missing.
use crate::{
    rate_of_spread::{RateOfSpread, RosDirection},
    wind_slope::{WindSlope, WindSlopeColumn},
};
use optional::{none, some, Optioned};
use std::fmt::Display;

/// Total effective wind speed (EWS) of a column, the midflame wind speed plus the slope
/// contribution.
///
/// The eye-level wind speed is not used.
///
/// # Examples
///
/// ```rust
/// use ews_analysis::{total_effective_wind_speed, WindSlopeColumn};
///
/// let col = WindSlopeColumn::new()
///     .with_eye_level_ws(15.0)
///     .with_midflame_ws(8.0)
///     .with_slope_contribution(2.0);
/// assert_eq!(total_effective_wind_speed(&col).into_option(), Some(10.0));
///
/// let col = col.with_slope_contribution(None);
/// assert!(total_effective_wind_speed(&col).is_none());
/// ```
pub fn total_effective_wind_speed(column: &WindSlopeColumn) -> Optioned<f64> {
    match (
        column.midflame_ws().into_option(),
        column.slope_contribution().into_option(),
    ) {
        (Some(midflame), Some(slope)) => some(midflame + slope),
        _ => none(),
    }
}

/// Ratio of the larger to the smaller of two total effective wind speeds.
///
/// The order of the arguments does not matter. The ratio is missing if either total is missing or
/// if the smaller total is exactly zero.
///
/// # Examples
///
/// ```rust
/// use ews_analysis::ews_ratio;
/// use optional::{none, some};
///
/// assert_eq!(ews_ratio(some(10.0), some(15.0)).into_option(), Some(1.5));
/// assert_eq!(ews_ratio(some(15.0), some(10.0)).into_option(), Some(1.5));
/// assert!(ews_ratio(some(10.0), some(0.0)).is_none());
/// assert!(ews_ratio(some(10.0), none()).is_none());
/// ```
pub fn ews_ratio(
    observed_total_ews: Optioned<f64>,
    predicted_total_ews: Optioned<f64>,
) -> Optioned<f64> {
    let (observed, predicted) = match (
        observed_total_ews.into_option(),
        predicted_total_ews.into_option(),
    ) {
        (Some(observed), Some(predicted)) => (observed, predicted),
        _ => return none(),
    };

    let big = observed.max(predicted);
    let small = observed.min(predicted);

    // Exact comparison, no tolerance.
    if small == 0.0 {
        return none();
    }

    some(big / small)
}

/// Project a rate of spread from an observed rate of spread and the EWS ratio.
///
/// A fire spreading faster than predicted has its observed spread multiplied by the ratio, one
/// spreading slower has it divided by the ratio. The result is missing if any argument is missing
/// or the ratio is zero.
///
/// # Examples
///
/// ```rust
/// use ews_analysis::{projected_ros, RosDirection::*};
/// use optional::some;
///
/// assert_eq!(projected_ros(some(10.0), some(2.0), Some(Faster)).into_option(), Some(20.0));
/// assert_eq!(projected_ros(some(10.0), some(2.0), Some(Slower)).into_option(), Some(5.0));
/// assert!(projected_ros(some(10.0), some(2.0), None).is_none());
/// ```
pub fn projected_ros(
    observed_ros: Optioned<f64>,
    ews_ratio: Optioned<f64>,
    direction: Option<RosDirection>,
) -> Optioned<f64> {
    let (observed_ros, ews_ratio, direction) =
        match (observed_ros.into_option(), ews_ratio.into_option(), direction) {
            (Some(ros), Some(ratio), Some(dir)) => (ros, ratio, dir),
            _ => return none(),
        };

    if ews_ratio == 0.0 {
        return none();
    }

    match direction {
        RosDirection::Faster => some(observed_ros * ews_ratio),
        RosDirection::Slower => some(observed_ros / ews_ratio),
    }
}

/// Recompute every derived value from the current inputs.
///
/// The arguments are not modified. The returned copies are identical to the inputs except for the
/// two total effective wind speeds, the EWS ratio, and the calculated rate of spread, which are
/// always freshly computed. Whatever derived values the inputs carried are ignored.
///
/// # Examples
///
/// ```rust
/// use ews_analysis::{recompute, RateOfSpread, RosDirection, WindSlope, WindSlopeColumn};
///
/// let wind_slope = WindSlope::new(
///     WindSlopeColumn::new().with_midflame_ws(8.0).with_slope_contribution(2.0),
///     WindSlopeColumn::new().with_midflame_ws(12.0).with_slope_contribution(3.0),
/// );
/// let ros = RateOfSpread::new()
///     .with_observed_ros(10.0)
///     .with_direction(RosDirection::Faster);
///
/// let (wind_slope, ros) = recompute(&wind_slope, &ros);
///
/// assert_eq!(wind_slope.observed().total_ews().into_option(), Some(10.0));
/// assert_eq!(wind_slope.predicted().total_ews().into_option(), Some(15.0));
/// assert_eq!(wind_slope.ews_ratio().into_option(), Some(1.5));
/// assert_eq!(ros.calculated_ros().into_option(), Some(15.0));
/// ```
pub fn recompute(wind_slope: &WindSlope, ros: &RateOfSpread) -> (WindSlope, RateOfSpread) {
    let observed_total_ews = total_effective_wind_speed(wind_slope.observed());
    let predicted_total_ews = total_effective_wind_speed(wind_slope.predicted());
    let ratio = ews_ratio(observed_total_ews, predicted_total_ews);
    let calculated_ros = projected_ros(ros.observed_ros(), ratio, ros.direction());

    let wind_slope = WindSlope {
        observed: wind_slope.observed().with_total_ews(observed_total_ews),
        predicted: wind_slope.predicted().with_total_ews(predicted_total_ews),
        ews_ratio: ratio,
    };

    (wind_slope, ros.with_calculated_ros(calculated_ros))
}

/// The four derived values, pulled out of a wind/slope and rate of spread pair.
#[derive(Clone, Copy, Debug)]
pub struct DerivedValues {
    /// Total effective wind speed of the observed column (mph).
    pub observed_total_ews: Optioned<f64>,
    /// Total effective wind speed of the predicted column (mph).
    pub predicted_total_ews: Optioned<f64>,
    /// Ratio of the larger to the smaller total EWS.
    pub ews_ratio: Optioned<f64>,
    /// Projected rate of spread (ch/hr).
    pub calculated_ros: Optioned<f64>,
}

impl DerivedValues {
    /// Gather the derived values as they are currently stored, without recomputing anything.
    pub fn stored(wind_slope: &WindSlope, ros: &RateOfSpread) -> Self {
        DerivedValues {
            observed_total_ews: wind_slope.observed().total_ews(),
            predicted_total_ews: wind_slope.predicted().total_ews(),
            ews_ratio: wind_slope.ews_ratio(),
            calculated_ros: ros.calculated_ros(),
        }
    }

    /// Compute fresh derived values from the inputs.
    pub fn computed(wind_slope: &WindSlope, ros: &RateOfSpread) -> Self {
        let (wind_slope, ros) = recompute(wind_slope, ros);
        Self::stored(&wind_slope, &ros)
    }

    /// Whether two sets of derived values agree exactly, with missing matching missing.
    pub fn matches(&self, other: &DerivedValues) -> bool {
        self.observed_total_ews.into_option() == other.observed_total_ews.into_option()
            && self.predicted_total_ews.into_option() == other.predicted_total_ews.into_option()
            && self.ews_ratio.into_option() == other.ews_ratio.into_option()
            && self.calculated_ros.into_option() == other.calculated_ros.into_option()
    }
}

impl Display for DerivedValues {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&crate::display::calculation_summary(self))
    }
}
