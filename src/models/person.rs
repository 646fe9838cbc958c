use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};

use super::{FromResponse, Fields, Stat, Team};
use crate::error::Result;
use crate::normalize::normalize_keys;

/// A player, coach or official from `/people/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Person {
    pub id: Option<i64>,
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub primary_number: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub current_age: Option<i64>,
    pub birth_city: Option<String>,
    pub birth_state_province: Option<String>,
    pub birth_country: Option<String>,
    pub nationality: Option<String>,
    pub height: Option<String>,
    pub weight: Option<i64>,
    pub active: Option<bool>,
    pub alternate_captain: Option<bool>,
    pub captain: Option<bool>,
    pub rookie: Option<bool>,
    pub shoots_catches: Option<String>,
    pub roster_status: Option<String>,
    pub current_team: Option<Team>,
    pub primary_position: Option<Map<String, Value>>,
    pub social: Option<Map<String, Value>>,
    pub stats: Option<Vec<Stat>>,
}

impl FromResponse for Person {
    fn from_response(data: &Map<String, Value>) -> Result<Self> {
        let data = normalize_keys(data);
        let f = Fields::new(&data);
        Ok(Self {
            id: f.int("id"),
            full_name: f.string("full_name"),
            first_name: f.string("first_name"),
            last_name: f.string("last_name"),
            primary_number: f.string("primary_number"),
            birth_date: f.date("birth_date")?,
            current_age: f.int("current_age"),
            birth_city: f.string("birth_city"),
            birth_state_province: f.string("birth_state_province"),
            birth_country: f.string("birth_country"),
            nationality: f.string("nationality"),
            height: f.string("height"),
            weight: f.int("weight"),
            active: f.boolean("active"),
            alternate_captain: f.boolean("alternate_captain"),
            captain: f.boolean("captain"),
            rookie: f.boolean("rookie"),
            shoots_catches: f.string("shoots_catches"),
            roster_status: f.string("roster_status"),
            current_team: f.entity("current_team")?,
            primary_position: f.object("primary_position"),
            social: f.object("social"),
            stats: f.entities("stats")?,
        })
    }
}
