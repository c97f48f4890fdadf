//! Lenient deserializers for values that browser forms submit as strings.
//!
//! Number inputs arrive as `"3"` once edited and date inputs arrive as
//! `"2026-11-30"` or `""`. These helpers accept both the typed JSON value
//! and its form-string rendering. A blank string on an optional field
//! reads as absent.

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::{self, Deserializer};
use serde::Deserialize;

use scholar_core::types::Timestamp;

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrText {
    Int(i32),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FloatOrText {
    Float(f64),
    Text(String),
}

fn parse_text<T: std::str::FromStr, E: de::Error>(text: &str, what: &str) -> Result<T, E> {
    text.trim()
        .parse()
        .map_err(|_| E::custom(format!("invalid {what}: {text:?}")))
}

/// Parse an RFC 3339 timestamp, or a bare `YYYY-MM-DD` date at midnight UTC.
pub fn parse_deadline(text: &str) -> Option<Timestamp> {
    let text = text.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub fn int<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match IntOrText::deserialize(deserializer)? {
        IntOrText::Int(n) => Ok(n),
        IntOrText::Text(text) => parse_text(&text, "integer"),
    }
}

pub fn optional_int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrText::Int(n)) => Ok(Some(n)),
        Some(IntOrText::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(IntOrText::Text(text)) => parse_text(&text, "integer").map(Some),
    }
}

pub fn optional_float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<FloatOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(FloatOrText::Float(n)) => Ok(Some(n)),
        Some(FloatOrText::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(FloatOrText::Text(text)) => parse_text(&text, "number").map(Some),
    }
}

pub fn optional_deadline<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(text) if text.trim().is_empty() => Ok(None),
        Some(text) => parse_deadline(&text)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid deadline: {text:?}"))),
    }
}
