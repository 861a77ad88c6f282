//! Optional-path lookups over loose upstream JSON
//!
//! Every accessor returns a zero value (`0`, `""`, `false`, empty slice)
//! when any step of the path is missing or has the wrong type.

use serde_json::Value;
use std::collections::BTreeMap;

/// Walks `path` from `value`. Numeric segments index into arrays.
pub fn at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(*segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

pub fn u64_at(value: &Value, path: &[&str]) -> u64 {
    at(value, path).and_then(as_u64).unwrap_or(0)
}

pub fn u32_at(value: &Value, path: &[&str]) -> u32 {
    u32::try_from(u64_at(value, path)).unwrap_or(0)
}

pub fn i64_at(value: &Value, path: &[&str]) -> i64 {
    at(value, path).and_then(Value::as_i64).unwrap_or(0)
}

pub fn f64_at(value: &Value, path: &[&str]) -> f64 {
    at(value, path)
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

pub fn bool_at(value: &Value, path: &[&str]) -> bool {
    at(value, path).and_then(Value::as_bool).unwrap_or(false)
}

pub fn string_at(value: &Value, path: &[&str]) -> String {
    at(value, path)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// String or number rendered as a string, e.g. ids that are sent either way.
pub fn id_string_at(value: &Value, path: &[&str]) -> String {
    match at(value, path) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

pub fn array_at<'a>(value: &'a Value, path: &[&str]) -> &'a [Value] {
    at(value, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Object of numbers as a sorted map; non-numeric entries are skipped.
pub fn number_map_at(value: &Value, path: &[&str]) -> BTreeMap<String, f64> {
    at(value, path)
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .filter_map(|(key, v)| v.as_f64().map(|n| (key.clone(), n)))
                .collect()
        })
        .unwrap_or_default()
}

/// Non-negative integers, also accepting whole floats like `3.0`.
fn as_u64(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|n| *n >= 0.0 && n.fract() == 0.0 && *n <= u64::MAX as f64)
            .map(|n| n as u64)
    })
}
