use reqwest::Method;
use serde_json::Value;

use crate::config::Config;
use crate::endpoints::{self, ScheduleFilter};
use crate::error::Result;
use crate::http_client::HttpClient;
use crate::models::*;

/// Blocking client for the NHL Stats API.
///
/// Every call opens its own [`HttpClient`] session and closes it before
/// returning, so one request is in flight at a time.
#[derive(Clone, Debug, Default)]
pub struct StatsNhlApi {
    config: Config,
}

impl StatsNhlApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    // reads NHL_STATS_API_DOMAIN / NHL_STATS_API_VERSION
    pub fn from_env() -> Result<Self> {
        Ok(Self::with_config(Config::from_env()?))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn session(&self) -> Result<HttpClient> {
        HttpClient::from_config(&self.config)
    }

    /// Sends an arbitrary request and returns the decoded JSON body.
    pub fn request(&self, method: Method, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        let client = self.session()?;
        let body = client.request(method, endpoint, params)?.json()?;
        client.close();
        Ok(body)
    }

    pub fn get(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        self.request(Method::GET, endpoint, params)
    }

    /// Teams with their records, leaders and rosters expanded.
    ///
    /// Leader categories are looked up first and requested all at once. An
    /// empty `team_ids` asks for every team; `season` defaults to the
    /// current one.
    pub fn teams(&self, team_ids: &[u32], season: Option<i32>) -> Result<Vec<Team>> {
        let client = self.session()?;
        let leader_types: Value = client.get(endpoints::LEAGUE_LEADER_TYPES, &[])?.json()?;
        let categories = endpoints::leader_categories(&leader_types);
        let params = endpoints::teams_params(team_ids, season, &categories);
        let body: Value = client.get(endpoints::TEAMS, &params)?.json()?;
        client.close();
        endpoints::records(&body, "teams")
    }

    /// Live feed of a game, including plays and boxscore.
    pub fn game(&self, game_id: u64) -> Result<Game> {
        Game::from_value(&self.get(&endpoints::game_feed(game_id), &[])?)
    }

    pub fn boxscore(&self, game_id: u64) -> Result<Boxscore> {
        Boxscore::from_value(&self.get(&endpoints::boxscore(game_id), &[])?)
    }

    pub fn seasons(&self) -> Result<Vec<Season>> {
        endpoints::records(&self.get(endpoints::SEASONS, &[])?, "seasons")
    }

    /// Schedule days matching `filter`; an empty filter means today's games.
    pub fn schedule(&self, filter: &ScheduleFilter) -> Result<Vec<ScheduleDate>> {
        let params = endpoints::schedule_params(filter);
        endpoints::records(&self.get(endpoints::SCHEDULE, &params)?, "dates")
    }

    /// A person with social info and all stat groups for `season`.
    pub fn people(&self, person_id: u64, season: Option<i32>) -> Result<Person> {
        let endpoint = endpoints::person(person_id);
        let body = self.get(&endpoint, &endpoints::person_params(season))?;
        endpoints::first_person(&body, &endpoint)
    }

    /// Standings tables, optionally of one type (see [`Self::standing_types`]).
    pub fn standings(&self, standings_type: Option<&str>, season: Option<i32>) -> Result<Vec<Standing>> {
        let params = endpoints::standings_params(standings_type, season);
        endpoints::records(&self.get(endpoints::STANDINGS, &params)?, "records")
    }

    pub fn draft(&self, year: Option<i32>) -> Result<Draft> {
        endpoints::first_draft(&self.get(&endpoints::draft(year), &[])?)
    }

    pub fn stat_types(&self) -> Result<Vec<String>> {
        Ok(endpoints::names(&self.get(endpoints::STAT_TYPES, &[])?, "displayName"))
    }

    pub fn standing_types(&self) -> Result<Vec<String>> {
        Ok(endpoints::names(&self.get(endpoints::STANDINGS_TYPES, &[])?, "name"))
    }
}
