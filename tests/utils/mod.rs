use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use ews_analysis::{
    parse_direction, parse_measurement, Observation, RateOfSpread, WindSlope, WindSlopeColumn,
};
use optional::Optioned;

pub mod derived_tests;

pub const INPUT_KEYS: [&str; 8] = [
    "observed_eye_level_ws",
    "observed_midflame_ws",
    "observed_slope_contribution",
    "predicted_eye_level_ws",
    "predicted_midflame_ws",
    "predicted_slope_contribution",
    "observed_ros",
    "ros_direction",
];

pub const EXPECTED_KEYS: [&str; 4] = [
    "observed_total_ews",
    "predicted_total_ews",
    "ews_ratio",
    "calculated_ros",
];

#[allow(unused_macros)] // False alarm
macro_rules! check_file_complete {
    ($test_name:ident, $fname:expr) => {
        #[test]
        fn $test_name() {
            let (inputs, expected) = utils::load_test_sections($fname);

            // Make sure all of these keys are in the hashmaps
            for key in utils::INPUT_KEYS.iter() {
                assert!(inputs.contains_key(*key), "missing input {}", key);
            }

            for key in utils::EXPECTED_KEYS.iter() {
                assert!(expected.contains_key(*key), "missing expected {}", key);
            }

            // Make sure there are no extra keys in there being ignored.
            for key in inputs.keys() {
                assert!(
                    utils::INPUT_KEYS.contains(&key.as_str()),
                    "extra input key found"
                );
            }

            for key in expected.keys() {
                assert!(
                    utils::EXPECTED_KEYS.contains(&key.as_str()),
                    "extra expected key found"
                );
            }
        }
    };
}

#[allow(unused_macros)] // False alarm
macro_rules! test_file {
    ($test_mod_name:ident, $fname:expr) => {
        mod $test_mod_name {

            use std::collections::HashMap;

            use crate::utils;
            use ews_analysis::Observation;
            use optional::Optioned;

            fn load_data() -> (Observation, HashMap<String, Optioned<f64>>) {
                utils::load_test_file($fname)
            }

            mod derived {
                use super::load_data;
                use crate::utils::derived_tests;

                #[test]
                fn observed_total_ews() {
                    let (obs, expected) = load_data();
                    derived_tests::test_observed_total_ews(&obs, &expected);
                }

                #[test]
                fn predicted_total_ews() {
                    let (obs, expected) = load_data();
                    derived_tests::test_predicted_total_ews(&obs, &expected);
                }

                #[test]
                fn ews_ratio() {
                    let (obs, expected) = load_data();
                    derived_tests::test_ews_ratio(&obs, &expected);
                }

                #[test]
                fn ews_ratio_is_symmetric() {
                    let (obs, _) = load_data();
                    derived_tests::test_ews_ratio_symmetric(&obs);
                }

                #[test]
                fn calculated_ros() {
                    let (obs, expected) = load_data();
                    derived_tests::test_calculated_ros(&obs, &expected);
                }
            }

            mod record {
                use super::load_data;
                use crate::utils::derived_tests;

                #[test]
                fn inputs_unchanged() {
                    let (obs, _) = load_data();
                    derived_tests::test_inputs_unchanged(&obs);
                }

                #[test]
                fn consistent_after_recompute() {
                    let (obs, _) = load_data();
                    derived_tests::test_consistent_after_recompute(&obs);
                }

                #[test]
                fn passes_validation() {
                    let (obs, _) = load_data();
                    assert!(ews_analysis::validate(&obs).is_ok());
                }
            }
        }
    };
}

/// Load a scenario file, returning the observation built from its inputs (with no derived values)
/// and the expected derived values.
pub fn load_test_file(fname: &str) -> (Observation, HashMap<String, Optioned<f64>>) {
    let (inputs, expected) = load_test_sections(fname);

    let value = |key: &str| -> Optioned<f64> {
        let text = inputs.get(key).map(String::as_str).unwrap_or("");
        parse_measurement(text).unwrap()
    };

    let observed = WindSlopeColumn::new()
        .with_eye_level_ws(value("observed_eye_level_ws"))
        .with_midflame_ws(value("observed_midflame_ws"))
        .with_slope_contribution(value("observed_slope_contribution"));

    let predicted = WindSlopeColumn::new()
        .with_eye_level_ws(value("predicted_eye_level_ws"))
        .with_midflame_ws(value("predicted_midflame_ws"))
        .with_slope_contribution(value("predicted_slope_contribution"));

    let direction = parse_direction(
        inputs
            .get("ros_direction")
            .map(String::as_str)
            .unwrap_or(""),
    )
    .unwrap();

    let ros = RateOfSpread::new()
        .with_observed_ros(value("observed_ros"))
        .with_direction(direction);

    let obs = Observation::new()
        .with_wind_slope(WindSlope::new(observed, predicted))
        .with_ros(ros);

    let expected = expected
        .into_iter()
        .map(|(key, text)| {
            let val = parse_measurement(&text).unwrap();
            (key, val)
        })
        .collect();

    (obs, expected)
}

/// Load the raw key/value text of the input and expected sections of a scenario file.
pub fn load_test_sections(fname: &str) -> (HashMap<String, String>, HashMap<String, String>) {
    let mut test_path = PathBuf::new();
    test_path.push("test_data");
    test_path.push(fname);

    let mut f = File::open(&test_path).expect(&format!("Error opening file: {:#?}", test_path));

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .expect(&format!("Error reading file: {:#?}", test_path));

    let mut inputs = HashMap::new();
    let mut expected = HashMap::new();
    let mut section: Option<&mut HashMap<String, String>> = None;

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with("### Inputs ###") {
            section = Some(&mut inputs);
            continue;
        } else if line.starts_with("### Expected ###") {
            section = Some(&mut expected);
            continue;
        }

        let mut tokens = line.splitn(2, ',');
        let key = tokens.next().unwrap_or("").trim().to_owned();
        let val = tokens.next().unwrap_or("").trim().to_owned();

        if let Some(map) = section.as_mut() {
            map.insert(key, val);
        }
    }

    (inputs, expected)
}

fn approx_equal(tgt: f64, guess: f64, tol: f64) -> bool {
    assert!(tol > 0.0);

    f64::abs(tgt - guess) <= tol
}
