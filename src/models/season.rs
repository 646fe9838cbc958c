use serde::Serialize;
use serde_json::{Map, Value};

use super::{FromResponse, Fields};
use crate::error::Result;
use crate::normalize::normalize_keys;

/// Summary of a season: its dates, length and which standings rules applied.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Season {
    pub season_id: Option<String>,
    pub regular_season_start_date: Option<String>,
    pub regular_season_end_date: Option<String>,
    pub season_end_date: Option<String>,
    pub number_of_games: Option<i64>,
    pub ties_in_use: Option<bool>,
    pub olympics_participation: Option<bool>,
    pub conferences_in_use: Option<bool>,
    pub divisions_in_use: Option<bool>,
    pub wild_card_in_use: Option<bool>,
}

impl FromResponse for Season {
    fn from_response(data: &Map<String, Value>) -> Result<Self> {
        let data = normalize_keys(data);
        let f = Fields::new(&data);
        Ok(Self {
            season_id: f.string("season_id"),
            regular_season_start_date: f.string("regular_season_start_date"),
            regular_season_end_date: f.string("regular_season_end_date"),
            season_end_date: f.string("season_end_date"),
            number_of_games: f.int("number_of_games"),
            ties_in_use: f.boolean("ties_in_use"),
            olympics_participation: f.boolean("olympics_participation"),
            conferences_in_use: f.boolean("conferences_in_use"),
            divisions_in_use: f.boolean("divisions_in_use"),
            wild_card_in_use: f.boolean("wild_card_in_use"),
        })
    }
}
