//! Lenient field deserializers for tabular input records.
//!
//! Spreadsheet readers hand cells over as whatever type they guessed:
//! an ID column may come through as `101`, `101.0`, or `"101"`. These
//! helpers accept any of those spellings and normalize them.

use serde::de::{Deserializer, Error};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Str(s) => s.trim().to_string(),
            Scalar::Int(i) => i.to_string(),
            // `+ 0.0` folds -0 into 0.
            Scalar::Float(f) if f.is_finite() && f.fract() == 0.0 => format!("{:.0}", f + 0.0),
            Scalar::Float(f) => f.to_string(),
        }
    }

    fn into_count<E: Error>(self) -> Result<u32, E> {
        match self {
            Scalar::Int(i) => u32::try_from(i).map_err(|_| E::custom(format!("count out of range: {i}"))),
            Scalar::Float(f) if f.is_finite() && f.fract() == 0.0 && f >= 0.0 && f <= u32::MAX as f64 => {
                Ok(f as u32)
            }
            Scalar::Float(f) => Err(E::custom(format!("expected a whole number, got {f}"))),
            Scalar::Str(s) => s
                .trim()
                .parse::<u32>()
                .map_err(|_| E::custom(format!("expected a whole number, got {s:?}"))),
        }
    }

    fn into_f64<E: Error>(self) -> Result<f64, E> {
        match self {
            Scalar::Int(i) => Ok(i as f64),
            Scalar::Float(f) => Ok(f),
            Scalar::Str(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("expected a number, got {s:?}"))),
        }
    }
}

/// String, integer, or float cell as a `String`.
pub(crate) fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Scalar::deserialize(d).map(Scalar::into_string)
}

/// Optional display cell; `null` and blank strings become `None`.
pub(crate) fn opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Scalar>::deserialize(d)?
        .map(Scalar::into_string)
        .filter(|s| !s.is_empty()))
}

/// Non-negative whole number (`40`, `40.0`, `"40"`).
pub(crate) fn count<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    Scalar::deserialize(d)?.into_count()
}

/// Optional float; missing or `null` reads as `0.0`.
pub(crate) fn opt_f64<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    match Option::<Scalar>::deserialize(d)? {
        Some(Scalar::Str(s)) if s.trim().is_empty() => Ok(0.0),
        Some(v) => v.into_f64(),
        None => Ok(0.0),
    }
}
