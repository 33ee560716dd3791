//! Formatting of derived values for presentation.
//!
//! A value that has not been computed is shown as a neutral placeholder. Showing a zero or an error
//! instead would suggest a measurement that does not exist.
use crate::derived::DerivedValues;
use itertools::Itertools;
use optional::Optioned;

/// Shown in place of a value that could not be computed.
pub const PLACEHOLDER: &str = "\u{2014}";

const EWS_DECIMALS: usize = 1;
const RATIO_DECIMALS: usize = 2;
const ROS_DECIMALS: usize = 2;

// Halfway values round away from zero, so 1.125 shows as 1.13 rather than 1.12.
fn fixed(val: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    format!("{:.*}", decimals, (val * scale).round() / scale)
}

fn format_value(value: Optioned<f64>, decimals: usize) -> String {
    match value.into_option() {
        Some(val) => fixed(val, decimals),
        None => PLACEHOLDER.to_owned(),
    }
}

/// Format a total effective wind speed (mph) with one decimal place.
///
/// # Examples
///
/// ```rust
/// use ews_analysis::{format_ews, PLACEHOLDER};
/// use optional::{none, some};
///
/// assert_eq!(format_ews(some(10.0)), "10.0");
/// assert_eq!(format_ews(some(0.0)), "0.0");
/// assert_eq!(format_ews(none()), PLACEHOLDER);
/// ```
pub fn format_ews(value: Optioned<f64>) -> String {
    format_value(value, EWS_DECIMALS)
}

/// Format an EWS ratio with two decimal places.
pub fn format_ratio(value: Optioned<f64>) -> String {
    format_value(value, RATIO_DECIMALS)
}

/// Format a projected rate of spread (ch/hr) with two decimal places.
pub fn format_ros(value: Optioned<f64>) -> String {
    format_value(value, ROS_DECIMALS)
}

/// A one line summary of the derived values that are available, suitable for announcing to a
/// screen reader. Values that are missing are left out entirely, and if nothing is available the
/// summary is empty.
///
/// # Examples
///
/// ```rust
/// use ews_analysis::{calculation_summary, DerivedValues};
/// use optional::{none, some};
///
/// let derived = DerivedValues {
///     observed_total_ews: some(10.0),
///     predicted_total_ews: none(),
///     ews_ratio: none(),
///     calculated_ros: none(),
/// };
/// assert_eq!(calculation_summary(&derived), "Observed EWS: 10.0 mph");
/// ```
pub fn calculation_summary(derived: &DerivedValues) -> String {
    let parts = [
        derived
            .observed_total_ews
            .into_option()
            .map(|v| format!("Observed EWS: {} mph", fixed(v, EWS_DECIMALS))),
        derived
            .predicted_total_ews
            .into_option()
            .map(|v| format!("Predicted EWS: {} mph", fixed(v, EWS_DECIMALS))),
        derived
            .ews_ratio
            .into_option()
            .map(|v| format!("EWS Ratio: {}\u{d7}", fixed(v, RATIO_DECIMALS))),
        derived
            .calculated_ros
            .into_option()
            .map(|v| format!("Projected ROS: {} ch/hr", fixed(v, ROS_DECIMALS))),
    ];

    parts.iter().flatten().join(". ")
}
