// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Loosely typed payload dictionaries.
//!
//! Push payloads arrive as JSON objects whose fields may be missing or of the
//! wrong type. The accessors here never fail: a field that is absent or does
//! not have the requested type reads as `None`.

use serde_json::{Map, Value};

/// A string-keyed dictionary with opaque values.
pub type Payload = Map<String, Value>;

pub trait PayloadExt {
    fn string(&self, key: &str) -> Option<&str>;

    /// Numbers, and strings holding a number.
    fn number(&self, key: &str) -> Option<f64>;

    fn boolean(&self, key: &str) -> Option<bool>;

    fn object(&self, key: &str) -> Option<&Payload>;

    /// Arrays, keeping only the string elements.
    fn strings(&self, key: &str) -> Option<Vec<String>>;
}

impl PayloadExt for Payload {
    fn string(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    fn number(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Number(number) => number.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn boolean(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            Value::Bool(value) => Some(*value),
            Value::Number(number) => number.as_i64().map(|n| n != 0),
            _ => None,
        }
    }

    fn object(&self, key: &str) -> Option<&Payload> {
        self.get(key)?.as_object()
    }

    fn strings(&self, key: &str) -> Option<Vec<String>> {
        let values = self.get(key)?.as_array()?;
        Some(
            values
                .iter()
                .filter_map(|value| value.as_str().map(ToOwned::to_owned))
                .collect(),
        )
    }
}

/// Converts a number of seconds into a JSON number, preferring an integer
/// representation when no fraction is present.
pub fn seconds_to_value(seconds: f64) -> Value {
    if seconds.fract() == 0.0 && seconds >= 0.0 && seconds <= u64::MAX as f64 {
        Value::from(seconds as u64)
    } else {
        Value::from(seconds)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn typed_access() {
        let payload = payload(json!({
            "alert": "hi",
            "duration": 12.5,
            "duration_str": " 7 ",
            "flag": true,
            "flag_num": 1,
            "display": { "type": "banner" },
            "args": ["a", 1, "b"],
        }));

        assert_eq!(payload.string("alert"), Some("hi"));
        assert_eq!(payload.number("duration"), Some(12.5));
        assert_eq!(payload.number("duration_str"), Some(7.0));
        assert_eq!(payload.boolean("flag"), Some(true));
        assert_eq!(payload.boolean("flag_num"), Some(true));
        assert_eq!(
            payload.object("display").and_then(|d| d.string("type")),
            Some("banner")
        );
        assert_eq!(
            payload.strings("args"),
            Some(vec!["a".to_owned(), "b".to_owned()])
        );
    }

    #[test]
    fn wrong_types_read_as_none() {
        let payload = payload(json!({
            "alert": 5,
            "duration": "soon",
            "display": "banner",
            "args": "a",
        }));

        assert_eq!(payload.string("alert"), None);
        assert_eq!(payload.number("duration"), None);
        assert_eq!(payload.object("display"), None);
        assert_eq!(payload.strings("args"), None);
        assert_eq!(payload.string("missing"), None);
    }

    #[test]
    fn seconds_prefer_integers() {
        assert_eq!(seconds_to_value(15.0), json!(15));
        assert_eq!(seconds_to_value(1.5), json!(1.5));
    }
}
