use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};

use super::{FromResponse, Fields, Team};
use crate::error::Result;
use crate::normalize::normalize_keys;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Draft {
    pub draft_year: Option<i64>,
    pub rounds: Option<Vec<DraftRound>>,
}

impl FromResponse for Draft {
    fn from_response(data: &Map<String, Value>) -> Result<Self> {
        let data = normalize_keys(data);
        let f = Fields::new(&data);
        Ok(Self {
            draft_year: f.int("draft_year"),
            rounds: f.entities("rounds")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DraftRound {
    pub round_number: Option<i64>,
    pub round: Option<String>,
    pub picks: Option<Vec<DraftPick>>,
}

impl FromResponse for DraftRound {
    fn from_response(data: &Map<String, Value>) -> Result<Self> {
        let data = normalize_keys(data);
        let f = Fields::new(&data);
        Ok(Self {
            round_number: f.int("round_number"),
            round: f.string("round"),
            picks: f.entities("picks")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DraftPick {
    pub year: Option<i64>,
    pub round: Option<String>,
    pub pick_overall: Option<i64>,
    pub pick_in_round: Option<i64>,
    pub team: Option<Team>,
    pub prospect: Option<Prospect>,
}

impl FromResponse for DraftPick {
    fn from_response(data: &Map<String, Value>) -> Result<Self> {
        let data = normalize_keys(data);
        let f = Fields::new(&data);
        Ok(Self {
            year: f.int("year"),
            round: f.string("round"),
            pick_overall: f.int("pick_overall"),
            pick_in_round: f.int("pick_in_round"),
            team: f.entity("team")?,
            prospect: f.entity("prospect")?,
        })
    }
}

/// A drafted or draft-eligible player.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Prospect {
    pub id: Option<i64>,
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub birth_city: Option<String>,
    pub birth_state_province: Option<String>,
    pub birth_country: Option<String>,
    pub height: Option<String>,
    pub weight: Option<i64>,
    pub shoots_catches: Option<String>,
    pub primary_position: Option<Map<String, Value>>,
    pub nhl_player_id: Option<i64>,
    pub draft_status: Option<String>,
    pub prospect_category: Option<Map<String, Value>>,
    pub amateur_team: Option<Team>,
    pub amateur_league: Option<Map<String, Value>>,
    pub ranks: Option<Map<String, Value>>,
}

impl FromResponse for Prospect {
    fn from_response(data: &Map<String, Value>) -> Result<Self> {
        let data = normalize_keys(data);
        let f = Fields::new(&data);
        Ok(Self {
            id: f.int("id"),
            full_name: f.string("full_name"),
            first_name: f.string("first_name"),
            last_name: f.string("last_name"),
            birth_date: f.date("birth_date")?,
            birth_city: f.string("birth_city"),
            birth_state_province: f.string("birth_state_province"),
            birth_country: f.string("birth_country"),
            height: f.string("height"),
            weight: f.int("weight"),
            shoots_catches: f.string("shoots_catches"),
            primary_position: f.object("primary_position"),
            nhl_player_id: f.int("nhl_player_id"),
            draft_status: f.string("draft_status"),
            prospect_category: f.object("prospect_category"),
            amateur_team: f.entity("amateur_team")?,
            amateur_league: f.object("amateur_league"),
            ranks: f.object("ranks"),
        })
    }
}
