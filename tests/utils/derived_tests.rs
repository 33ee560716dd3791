use super::*;
use ews_analysis::{
    ews_ratio, recompute, DerivedField, DerivedValues, InputField, Observation, RosDirection,
};
use strum::IntoEnumIterator;

const TOL: f64 = 1.0e-9;

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
fn check_value(analysis: Optioned<f64>, expected: &HashMap<String, Optioned<f64>>, key: &str) {
    let target = expected
        .get(key)
        .copied()
        .unwrap_or_else(|| panic!("no expected value for {}", key));

    match (analysis.into_option(), target.into_option()) {
        (Some(val), Some(tgt)) => assert!(
            approx_equal(tgt, val, TOL),
            "{}: expected {} got {}",
            key,
            tgt,
            val
        ),
        (None, None) => {}
        (val, tgt) => panic!("{}: expected {:?} got {:?}", key, tgt, val),
    }
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_observed_total_ews(obs: &Observation, expected: &HashMap<String, Optioned<f64>>) {
    let obs = obs.recomputed();
    check_value(
        obs.derived(DerivedField::ObservedTotalEws),
        expected,
        "observed_total_ews",
    );
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_predicted_total_ews(obs: &Observation, expected: &HashMap<String, Optioned<f64>>) {
    let obs = obs.recomputed();
    check_value(
        obs.derived(DerivedField::PredictedTotalEws),
        expected,
        "predicted_total_ews",
    );
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_ews_ratio(obs: &Observation, expected: &HashMap<String, Optioned<f64>>) {
    let obs = obs.recomputed();
    check_value(obs.derived(DerivedField::EwsRatio), expected, "ews_ratio");

    if let Some(ratio) = obs.wind_slope().ews_ratio().into_option() {
        assert!(ratio >= 1.0);
    }
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_ews_ratio_symmetric(obs: &Observation) {
    let obs = obs.recomputed();
    let observed = obs.wind_slope().observed().total_ews();
    let predicted = obs.wind_slope().predicted().total_ews();

    assert_eq!(
        ews_ratio(observed, predicted).into_option(),
        ews_ratio(predicted, observed).into_option()
    );
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_calculated_ros(obs: &Observation, expected: &HashMap<String, Optioned<f64>>) {
    let recomputed = obs.recomputed();
    check_value(
        recomputed.derived(DerivedField::CalculatedRos),
        expected,
        "calculated_ros",
    );

    // Flipping the direction moves the projection to the other side of the observed ROS.
    let ratio = recomputed.wind_slope().ews_ratio().into_option();
    let observed = recomputed.ros().observed_ros().into_option();
    if let (Some(ratio), Some(observed), Some(direction)) =
        (ratio, observed, recomputed.ros().direction())
    {
        let flipped = match direction {
            RosDirection::Faster => RosDirection::Slower,
            RosDirection::Slower => RosDirection::Faster,
        };
        let (_, ros) = recompute(
            recomputed.wind_slope(),
            &recomputed.ros().with_direction(flipped),
        );
        let flipped_ros = ros.calculated_ros().into_option().unwrap();

        match flipped {
            RosDirection::Faster => assert!(approx_equal(observed * ratio, flipped_ros, TOL)),
            RosDirection::Slower => assert!(approx_equal(observed / ratio, flipped_ros, TOL)),
        }
    }
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_inputs_unchanged(obs: &Observation) {
    let recomputed = obs.recomputed();

    for field in InputField::iter() {
        assert_eq!(
            obs.input(field).into_option(),
            recomputed.input(field).into_option(),
            "{} changed",
            field
        );
    }
    assert_eq!(obs.ros().direction(), recomputed.ros().direction());
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_consistent_after_recompute(obs: &Observation) {
    let once = obs.recomputed();
    assert!(once.is_consistent());

    let twice = once.recomputed();
    assert!(twice.is_consistent());
    assert!(once.derived_values().matches(&twice.derived_values()));
    assert!(DerivedValues::computed(obs.wind_slope(), obs.ros()).matches(&once.derived_values()));
}
