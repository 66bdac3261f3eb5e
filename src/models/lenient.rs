//! Forgiving decoders for values typed into score and fault inputs.
//!
//! Rooms saved by older clients store raw input values: numbers, numeric
//! strings, empty strings or `null`. Everything is coerced to a non-negative
//! integer, anything unreadable counts as zero.

use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

use crate::models::player::PLAYER_COUNT;

/// Coerce one loose JSON value to a non-negative count.
pub fn coerce_count(value: &Value) -> u32 {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u32::try_from(u).unwrap_or(u32::MAX)
            } else if let Some(f) = n.as_f64() {
                if f.is_finite() && f > 0.0 {
                    f.trunc().min(u32::MAX as f64) as u32
                } else {
                    0
                }
            } else {
                0
            }
        }
        Value::String(s) => parse_count(s),
        _ => 0,
    }
}

/// Leading-integer parse of typed input: optional sign, then digits, trailing
/// junk ignored. Negative or unreadable input is zero.
pub fn parse_count(s: &str) -> u32 {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if negative || digits.is_empty() {
        return 0;
    }
    digits.parse::<u64>().map_or(u32::MAX, |v| u32::try_from(v).unwrap_or(u32::MAX))
}

/// Serde `deserialize_with` for a single score.
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_count(&value))
}

/// Serde `deserialize_with` for a per-player fault array. Missing or short
/// arrays are padded with zeros; extra entries are dropped.
pub fn faults<'de, D>(deserializer: D) -> Result<[u32; PLAYER_COUNT], D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Vec<Value>>::deserialize(deserializer)?;
    let mut out = [0; PLAYER_COUNT];
    for (slot, v) in out.iter_mut().zip(value.unwrap_or_default().iter()) {
        *slot = coerce_count(v);
    }
    Ok(out)
}

/// `loserIndex` is stored as `-1` when a round had no result.
pub mod loser_index {
    use super::*;

    pub fn serialize<S>(value: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(i) => serializer.serialize_i64(*i as i64),
            None => serializer.serialize_i64(-1),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value
            .as_i64()
            .and_then(|i| usize::try_from(i).ok())
            .filter(|&i| i < PLAYER_COUNT))
    }
}
