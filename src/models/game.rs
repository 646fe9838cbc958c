use serde::Serialize;
use serde_json::{Map, Value};

use super::{FromResponse, Fields, Team};
use crate::error::Result;
use crate::normalize::normalize_keys;

/// Full live feed of a single game (`/game/{id}/feed/live`).
///
/// The feed splits into `gameData` (metadata, teams, players) and
/// `liveData` (plays, boxscore, decisions); both are flattened here.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Game {
    pub pk: Option<i64>,
    pub season: Option<String>,
    pub game_type: Option<String>,
    pub date_time: Option<String>,
    pub end_date_time: Option<String>,
    pub abstract_game_state: Option<String>,
    pub coded_game_state: Option<String>,
    pub detailed_state: Option<String>,
    pub status_code: Option<String>,
    pub away_team: Option<Team>,
    pub home_team: Option<Team>,
    pub players: Option<Map<String, Value>>,
    pub venue: Option<Map<String, Value>>,
    pub all_plays: Option<Vec<Play>>,
    pub scoring_plays: Option<Vec<Value>>,
    pub penalty_plays: Option<Vec<Value>>,
    pub plays_by_period: Option<Vec<Value>>,
    pub current_play: Option<Play>,
    pub boxscore: Option<Boxscore>,
    pub decisions: Option<Map<String, Value>>,
}

impl FromResponse for Game {
    fn from_response(data: &Map<String, Value>) -> Result<Self> {
        let data = normalize_keys(data);
        let f = Fields::new(&data);

        let game_data = f.child("game_data");
        let game = game_data.child("game");
        let date_time = game_data.child("datetime");
        let status = game_data.child("status");
        let teams = game_data.child("teams");

        let live_data = f.child("live_data");
        let plays = live_data.child("plays");

        Ok(Self {
            pk: game.int("pk"),
            season: game.string("season"),
            game_type: game.string("type"),
            date_time: date_time.string("date_time"),
            end_date_time: date_time.string("end_date_time"),
            abstract_game_state: status.string("abstract_game_state"),
            coded_game_state: status.string("coded_game_state"),
            detailed_state: status.string("detailed_state"),
            status_code: status.string("status_code"),
            away_team: teams.entity("away")?,
            home_team: teams.entity("home")?,
            players: game_data.object("players"),
            venue: game_data.object("venue"),
            all_plays: plays.entities("all_plays")?,
            scoring_plays: plays.list("scoring_plays"),
            penalty_plays: plays.list("penalty_plays"),
            plays_by_period: plays.list("plays_by_period"),
            current_play: plays.entity("current_play")?,
            boxscore: live_data.entity("boxscore")?,
            decisions: live_data.object("decisions"),
        })
    }
}

/// A single event of a game: faceoff, shot, goal, penalty and so on.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Play {
    pub players: Option<Vec<Value>>,
    pub event: Option<String>,
    pub event_type_id: Option<String>,
    pub description: Option<String>,
    pub secondary_type: Option<String>,
    pub strength_name: Option<String>,
    pub game_winning_goal: Option<bool>,
    pub empty_net: Option<bool>,
    pub penalty_severity: Option<String>,
    pub penalty_minutes: Option<String>,
    pub period: Option<i64>,
    pub period_type: Option<String>,
    pub ordinal_num: Option<String>,
    pub period_time: Option<String>,
    pub period_time_remaining: Option<String>,
    pub date_time: Option<String>,
    pub goals_away: Option<i64>,
    pub goals_home: Option<i64>,
    pub coordinates: Option<Map<String, Value>>,
    pub team: Option<Team>,
}

impl FromResponse for Play {
    fn from_response(data: &Map<String, Value>) -> Result<Self> {
        let data = normalize_keys(data);
        let f = Fields::new(&data);
        let result = f.child("result");
        let about = f.child("about");

        Ok(Self {
            players: f.list("players"),
            event: result.string("event"),
            event_type_id: result.string("event_type_id"),
            description: result.string("description"),
            secondary_type: result.string("secondary_type"),
            strength_name: result.child("strength").string("name"),
            game_winning_goal: result.boolean("game_winning_goal"),
            empty_net: result.boolean("empty_net"),
            penalty_severity: result.string("penalty_severity"),
            penalty_minutes: result.string("penalty_minutes"),
            period: about.int("period"),
            period_type: about.string("period_type"),
            ordinal_num: about.string("ordinal_num"),
            period_time: about.string("period_time"),
            period_time_remaining: about.string("period_time_remaining"),
            date_time: about.string("date_time"),
            goals_away: about.child("goals").int("away"),
            goals_home: about.child("goals").int("home"),
            coordinates: f.object("coordinates"),
            team: f.entity("team")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Boxscore {
    pub away_team: Option<Team>,
    pub away_team_stats: Option<Map<String, Value>>,
    pub away_players: Option<Map<String, Value>>,
    pub away_goalies: Option<Vec<Value>>,
    pub away_skaters: Option<Vec<Value>>,
    pub away_on_ice: Option<Vec<Value>>,
    pub away_scratches: Option<Vec<Value>>,
    pub away_penalty_box: Option<Vec<Value>>,
    pub away_coaches: Option<Vec<Value>>,
    pub home_team: Option<Team>,
    pub home_team_stats: Option<Map<String, Value>>,
    pub home_players: Option<Map<String, Value>>,
    pub home_goalies: Option<Vec<Value>>,
    pub home_skaters: Option<Vec<Value>>,
    pub home_on_ice: Option<Vec<Value>>,
    pub home_scratches: Option<Vec<Value>>,
    pub home_penalty_box: Option<Vec<Value>>,
    pub home_coaches: Option<Vec<Value>>,
    pub officials: Option<Vec<Value>>,
}

impl FromResponse for Boxscore {
    fn from_response(data: &Map<String, Value>) -> Result<Self> {
        let data = normalize_keys(data);
        let f = Fields::new(&data);
        let away = f.child("teams").child("away");
        let home = f.child("teams").child("home");

        Ok(Self {
            away_team: away.entity("team")?,
            away_team_stats: away.child("team_stats").object("team_skater_stats"),
            away_players: away.object("players"),
            away_goalies: away.list("goalies"),
            away_skaters: away.list("skaters"),
            away_on_ice: away.list("on_ice_plus"),
            away_scratches: away.list("scratches"),
            away_penalty_box: away.list("penalty_box"),
            away_coaches: away.list("coaches"),
            home_team: home.entity("team")?,
            home_team_stats: home.child("team_stats").object("team_skater_stats"),
            home_players: home.object("players"),
            home_goalies: home.list("goalies"),
            home_skaters: home.list("skaters"),
            home_on_ice: home.list("on_ice_plus"),
            home_scratches: home.list("scratches"),
            home_penalty_box: home.list("penalty_box"),
            home_coaches: home.list("coaches"),
            officials: f.list("officials"),
        })
    }
}
