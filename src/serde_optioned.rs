//! Serialize `Optioned<f64>` as a nullable number, used with `#[serde(with = "...")]`.
use optional::{none, Optioned};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Derived values left out of a payload are missing.
pub(crate) fn missing() -> Optioned<f64> {
    none()
}

pub(crate) fn serialize<S>(value: &Optioned<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    value.into_option().serialize(serializer)
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Optioned<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(Optioned::from)
}
