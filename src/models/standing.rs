use serde::Serialize;
use serde_json::{Map, Value};

use super::{FromResponse, Fields, Team, TeamRecord};
use crate::error::Result;
use crate::normalize::normalize_keys;

/// One standings table, e.g. a single division's regular season standings.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Standing {
    pub standings_type: Option<String>,
    pub league: Option<Map<String, Value>>,
    pub division: Option<Map<String, Value>>,
    pub conference: Option<Map<String, Value>>,
    pub team_records: Option<Vec<Team>>,
}

impl FromResponse for Standing {
    fn from_response(data: &Map<String, Value>) -> Result<Self> {
        let data = normalize_keys(data);
        let f = Fields::new(&data);

        let team_records = match f.get("team_records").and_then(Value::as_array) {
            Some(records) => Some(
                records
                    .iter()
                    .map(standing_team)
                    .collect::<Result<Vec<_>>>()?,
            ),
            None => None,
        };

        Ok(Self {
            standings_type: f.string("standings_type"),
            league: f.object("league"),
            division: f.object("division"),
            conference: f.object("conference"),
            team_records,
        })
    }
}

// Each entry holds a slim `team` reference next to the record fields.
fn standing_team(entry: &Value) -> Result<Team> {
    let record = TeamRecord::from_value(entry)?;
    let entry = entry.as_object().map(normalize_keys).unwrap_or_default();
    let team = Fields::new(&entry).child("team");
    Ok(Team {
        id: team.int("id"),
        name: team.string("name"),
        link: team.string("link"),
        record: Some(record),
        ..Default::default()
    })
}
