//! Serde helpers for loosely typed API fields.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

fn to_f64<E: serde::de::Error>(raw: NumberOrString) -> Result<f64, E> {
    match raw {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| E::custom(format!("expected a number, got {s:?}"))),
    }
}

/// Prices arrive as either `49.99` or `"49.99"` (Postgres NUMERIC).
pub(crate) fn number_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    to_f64(NumberOrString::deserialize(deserializer)?)
}

/// Stock counts are integers but some endpoints send them as strings.
pub(crate) fn int_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let n = to_f64::<D::Error>(NumberOrString::deserialize(deserializer)?)?;
    if n.fract() != 0.0 {
        return Err(serde::de::Error::custom(format!("expected an integer, got {n}")));
    }
    Ok(n as i64)
}
