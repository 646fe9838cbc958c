//! Endpoint paths, query parameter assembly and response unwrapping.
//!
//! Shared by the blocking and the async API clients so both send the exact
//! same requests and read the same keys out of the responses.

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::{Draft, FromResponse, Person};

pub type Params = Vec<(&'static str, String)>;

pub const TEAMS: &str = "/teams";
pub const LEAGUE_LEADER_TYPES: &str = "/leagueLeaderTypes";
pub const SEASONS: &str = "/seasons";
pub const SCHEDULE: &str = "/schedule";
pub const STANDINGS: &str = "/standings";
pub const STANDINGS_TYPES: &str = "/standingsTypes";
pub const STAT_TYPES: &str = "/statTypes";

const TEAM_EXPANDS: [&str; 3] = ["team.record", "team.leaders", "team.roster"];
const PERSON_EXPANDS: [&str; 2] = ["person.social", "person.stats"];
const PERSON_STATS: [&str; 16] = [
    "yearByYear",
    "yearByYearPlayoffs",
    "careerRegularSeason",
    "careerPlayoffs",
    "gameLog",
    "playoffGameLog",
    "winLoss",
    "winLossPlayoffs",
    "homeAndAway",
    "homeAndAwayPlayoffs",
    "byMonth",
    "byMonthPlayoffs",
    "byDayOfWeek",
    "byDayOfWeekPlayoffs",
    "goalsByGameSituation",
    "goalsByGameSituationPlayoffs",
];

pub fn game_feed(game_id: u64) -> String {
    format!("/game/{game_id}/feed/live")
}

pub fn boxscore(game_id: u64) -> String {
    format!("/game/{game_id}/boxscore")
}

pub fn person(person_id: u64) -> String {
    format!("/people/{person_id}")
}

/// Without a year the API picks its own default draft.
pub fn draft(year: Option<i32>) -> String {
    match year {
        Some(year) => format!("/draft/{year}"),
        None => "/draft".into(),
    }
}

/// Seasons are identified by both of their years, e.g. 2023 -> "20232024".
pub fn season_param(start_year: i32) -> String {
    format!("{}{}", start_year, start_year + 1)
}

pub fn join_ids<T: ToString>(ids: &[T]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Collects query parameters, dropping the ones without a value.
#[derive(Debug, Default)]
struct QueryBuilder(Params);

impl QueryBuilder {
    fn set(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.0.push((key, value.into()));
        self
    }

    fn set_opt(self, key: &'static str, value: Option<String>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    fn build(self) -> Params {
        self.0
    }
}

/// Filters for [`crate::StatsNhlApi::schedule`].
///
/// `None` leaves a filter out of the request. An empty `team_ids` list is
/// still sent, as an empty `teamId`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleFilter {
    pub team_ids: Option<Vec<u32>>,
    pub season: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ScheduleFilter {
    pub fn teams(mut self, team_ids: &[u32]) -> Self {
        self.team_ids = Some(team_ids.to_vec());
        self
    }

    pub fn season(mut self, start_year: i32) -> Self {
        self.season = Some(start_year);
        self
    }

    pub fn dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }
}

pub fn teams_params(team_ids: &[u32], season: Option<i32>, leader_categories: &[String]) -> Params {
    QueryBuilder::default()
        .set("teamId", join_ids(team_ids))
        .set("expand", TEAM_EXPANDS.join(","))
        .set("leaderCategories", leader_categories.join(","))
        .set_opt("season", season.map(season_param))
        .build()
}

pub fn schedule_params(filter: &ScheduleFilter) -> Params {
    let date = |d: NaiveDate| d.format("%Y-%m-%d").to_string();
    QueryBuilder::default()
        .set_opt("teamId", filter.team_ids.as_deref().map(join_ids))
        .set_opt("startDate", filter.start_date.map(date))
        .set_opt("endDate", filter.end_date.map(date))
        .set_opt("season", filter.season.map(season_param))
        .build()
}

pub fn person_params(season: Option<i32>) -> Params {
    QueryBuilder::default()
        .set("expand", PERSON_EXPANDS.join(","))
        .set("stats", PERSON_STATS.join(","))
        .set_opt("season", season.map(season_param))
        .build()
}

pub fn standings_params(standings_type: Option<&str>, season: Option<i32>) -> Params {
    QueryBuilder::default()
        .set_opt("standingsType", standings_type.map(str::to_owned))
        .set_opt("season", season.map(season_param))
        .build()
}

fn list<'a>(body: &'a Value, key: &str) -> &'a [Value] {
    body.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Builds one record per element of the list under `key`, in order.
pub fn records<T: FromResponse>(body: &Value, key: &str) -> Result<Vec<T>> {
    list(body, key).iter().map(T::from_value).collect()
}

/// Collects `field` from every element of a top-level list body.
pub fn names(body: &Value, field: &str) -> Vec<String> {
    body.as_array()
        .map(Vec::as_slice)
        .unwrap_or_default()
        .iter()
        .filter_map(|item| item.get(field).and_then(Value::as_str))
        .map(str::to_owned)
        .collect()
}

pub fn leader_categories(body: &Value) -> Vec<String> {
    names(body, "displayName")
}

pub fn first_person(body: &Value, endpoint: &str) -> Result<Person> {
    match list(body, "people").first() {
        Some(person) => Person::from_value(person),
        None => Err(Error::NoData {
            endpoint: endpoint.into(),
        }),
    }
}

/// `drafts` is a list holding the requested draft; a bare object is accepted too.
pub fn first_draft(body: &Value) -> Result<Draft> {
    match body.get("drafts") {
        Some(Value::Array(drafts)) => match drafts.first() {
            Some(draft) => Draft::from_value(draft),
            None => Ok(Draft::default()),
        },
        Some(draft) => Draft::from_value(draft),
        None => Ok(Draft::default()),
    }
}
