use ews_analysis::{Observation, RateOfSpread, RosDirection, WindSlope, WindSlopeColumn};

const VALUES: [Option<f64>; 4] = [None, Some(0.0), Some(6.0), Some(13.5)];

/// Every combination of missing, zero, and positive wind inputs, with each direction.
pub fn build_inputs() -> Vec<(WindSlope, RateOfSpread)> {
    let columns: Vec<WindSlopeColumn> = VALUES
        .iter()
        .flat_map(|&midflame| {
            VALUES.iter().map(move |&slope| {
                WindSlopeColumn::new()
                    .with_midflame_ws(midflame)
                    .with_slope_contribution(slope)
            })
        })
        .collect();

    let directions = [None, Some(RosDirection::Faster), Some(RosDirection::Slower)];

    let mut inputs = Vec::with_capacity(columns.len() * columns.len() * directions.len());
    for observed in &columns {
        for predicted in &columns {
            for &direction in &directions {
                let ros = RateOfSpread::new()
                    .with_observed_ros(12.0)
                    .with_direction(direction);
                inputs.push((WindSlope::new(*observed, *predicted), ros));
            }
        }
    }

    inputs
}

#[allow(dead_code)] // Not every bench uses every builder.
pub fn build_observations() -> Vec<Observation> {
    build_inputs()
        .into_iter()
        .map(|(wind_slope, ros)| Observation::new().with_wind_slope(wind_slope).with_ros(ros))
        .collect()
}
