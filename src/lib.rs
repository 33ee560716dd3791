#![warn(missing_docs)]
/*!
Types and functions for deriving standard fire behavior indices from wildfire field observations.

An observer records wind and slope for two columns, what was measured in the field and what was
predicted, along with the rate of spread actually seen. From these the crate derives:

 - the total effective wind speed (EWS) of each column,
 - the EWS ratio between the two columns, and
 - a projected rate of spread adjusted by that ratio.

Any input may be missing while an observation is being filled in. Missing values are carried as
`optional::Optioned<f64>` and propagate through every calculation as missing, never as zero. The
calculations never fail; anything that cannot be computed yet is simply missing.

```rust
use ews_analysis::{recompute, RateOfSpread, RosDirection, WindSlope, WindSlopeColumn};

let wind_slope = WindSlope::new(
    WindSlopeColumn::new().with_midflame_ws(8.0).with_slope_contribution(2.0),
    WindSlopeColumn::new(),
);
let ros = RateOfSpread::new().with_observed_ros(10.0).with_direction(RosDirection::Faster);

let (wind_slope, ros) = recompute(&wind_slope, &ros);

assert_eq!(wind_slope.observed().total_ews().into_option(), Some(10.0));
assert!(wind_slope.predicted().total_ews().is_none());
assert!(wind_slope.ews_ratio().is_none());
assert!(ros.calculated_ros().is_none());
```
*/

//
// API
//
pub use crate::{
    derived::{
        ews_ratio, projected_ros, recompute, total_effective_wind_speed, DerivedValues,
    },
    display::{
        calculation_summary, format_ews, format_ratio, format_ros, PLACEHOLDER,
    },
    error::{AnalysisError, Result},
    keys::{DerivedField, InputField, RequiredField},
    observation::{
        EnvironmentalInputs, FuelType, IncidentOverview, LcesItem, Observation, ObservationEntry,
        ObservationStatus, SafetyAudit,
    },
    rate_of_spread::{RateOfSpread, RosDirection},
    stats::ObservationStats,
    validation::{
        check_input, parse_direction, parse_log_time, parse_measurement, parse_observation_time,
        validate, validation_errors,
    },
    wind_slope::{WindSlope, WindSlopeColumn},
};

//
// Internal use only
//

// Modules
mod derived;
mod display;
mod error;
mod keys;
mod observation;
mod rate_of_spread;
mod serde_optioned;
mod stats;
mod validation;
mod wind_slope;
