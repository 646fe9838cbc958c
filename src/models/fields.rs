use chrono::{DateTime, FixedOffset, NaiveDate};
use serde_json::{Map, Value};

use super::FromResponse;
use crate::error::{DeserializeError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Read-only view over one level of a normalized response object.
///
/// A missing or non-object level behaves like an empty object, so chains of
/// [`Fields::child`] never fail and only the final lookup decides whether a
/// field is set. Explicit `null` is treated the same as a missing key.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Fields<'a>(Option<&'a Map<String, Value>>);

impl<'a> Fields<'a> {
    pub fn new(data: &'a Map<String, Value>) -> Self {
        Self(Some(data))
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.0?.get(key).filter(|v| !v.is_null())
    }

    pub fn child(&self, key: &str) -> Fields<'a> {
        Fields(self.get(key).and_then(Value::as_object))
    }

    pub fn string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn int(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn float(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn boolean(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_bool()
    }

    pub fn object(&self, key: &str) -> Option<Map<String, Value>> {
        self.get(key)?.as_object().cloned()
    }

    pub fn list(&self, key: &str) -> Option<Vec<Value>> {
        self.get(key)?.as_array().cloned()
    }

    pub fn entity<T: FromResponse>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key) {
            Some(Value::Object(data)) => T::from_response(data).map(Some),
            _ => Ok(None),
        }
    }

    pub fn entities<T: FromResponse>(&self, key: &str) -> Result<Option<Vec<T>>> {
        match self.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .map(T::from_value)
                .collect::<Result<Vec<T>>>()
                .map(Some),
            _ => Ok(None),
        }
    }

    pub fn date(&self, key: &str) -> Result<Option<NaiveDate>> {
        let Some(raw) = self.raw_text(key) else {
            return Ok(None);
        };
        NaiveDate::parse_from_str(&raw, DATE_FORMAT)
            .map(Some)
            .map_err(|e| DeserializeError::new(key, &raw, e).into())
    }

    pub fn date_time(&self, key: &str) -> Result<Option<DateTime<FixedOffset>>> {
        let Some(raw) = self.raw_text(key) else {
            return Ok(None);
        };
        DateTime::parse_from_rfc3339(&raw)
            .map(Some)
            .map_err(|e| DeserializeError::new(key, &raw, e).into())
    }

    // non-string values are rendered so they fail parsing instead of being dropped
    fn raw_text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
