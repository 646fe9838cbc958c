use serde::Serialize;
use serde_json::{Map, Value};

use super::{FromResponse, Fields};
use crate::error::Result;
use crate::normalize::normalize_keys;

/// One stat group of a person, e.g. `yearByYear` with its season splits.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Stat {
    pub stat_type: Option<String>,
    pub splits: Option<Vec<Value>>,
}

impl FromResponse for Stat {
    fn from_response(data: &Map<String, Value>) -> Result<Self> {
        let data = normalize_keys(data);
        let f = Fields::new(&data);
        Ok(Self {
            stat_type: f.child("type").string("display_name"),
            splits: f.list("splits"),
        })
    }
}
