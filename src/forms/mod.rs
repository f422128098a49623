//! JSON request bodies and their validated payloads.

use serde::{Deserialize, Deserializer};

pub mod questions;
pub mod quizzes;

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

// Browser clients post select values as strings ("3"), so integer fields
// accept either a JSON number or a numeric string.
pub(crate) fn deserialize_lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrString::Int(value)) => i32::try_from(value)
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("{value} is out of range"))),
        Some(IntOrString::Str(value)) => value.trim().parse::<i32>().map(Some).map_err(|_| {
            serde::de::Error::custom(format!("Wrong value {value}, can not parse to i32"))
        }),
    }
}
