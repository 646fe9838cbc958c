use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::config::Config;
use crate::endpoints::{self, ScheduleFilter};
use crate::error::Result;
use crate::http_client::AsyncHttpClient;
use crate::models::*;

/// Async access to every NHL Stats API resource.
#[async_trait]
pub trait Client {
    async fn fetch_teams(&self, team_ids: &[u32], season: Option<i32>) -> Result<Vec<Team>>;
    async fn fetch_game(&self, game_id: u64) -> Result<Game>;
    async fn fetch_boxscore(&self, game_id: u64) -> Result<Boxscore>;
    async fn fetch_seasons(&self) -> Result<Vec<Season>>;
    async fn fetch_schedule(&self, filter: &ScheduleFilter) -> Result<Vec<ScheduleDate>>;
    async fn fetch_person(&self, person_id: u64, season: Option<i32>) -> Result<Person>;
    async fn fetch_standings(
        &self,
        standings_type: Option<&str>,
        season: Option<i32>,
    ) -> Result<Vec<Standing>>;
    async fn fetch_draft(&self, year: Option<i32>) -> Result<Draft>;
    async fn fetch_stat_types(&self) -> Result<Vec<String>>;
    async fn fetch_standing_types(&self) -> Result<Vec<String>>;
}

/// Async client sharing one session across calls, so independent fetches
/// can be awaited together.
#[derive(Clone, Debug)]
pub struct AsyncStatsNhlApi {
    http: AsyncHttpClient,
}

impl AsyncStatsNhlApi {
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self {
            http: AsyncHttpClient::from_config(&config)?,
        })
    }

    pub fn http(&self) -> &AsyncHttpClient {
        &self.http
    }

    pub async fn request(&self, method: Method, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        Ok(self.http.request(method, endpoint, params).await?.json().await?)
    }

    pub async fn get(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        self.request(Method::GET, endpoint, params).await
    }

    pub fn close(self) {
        self.http.close();
    }
}

#[async_trait]
impl Client for AsyncStatsNhlApi {
    async fn fetch_teams(&self, team_ids: &[u32], season: Option<i32>) -> Result<Vec<Team>> {
        // the categories shape the teams query, so they must come first
        let leader_types = self.get(endpoints::LEAGUE_LEADER_TYPES, &[]).await?;
        let categories = endpoints::leader_categories(&leader_types);
        let params = endpoints::teams_params(team_ids, season, &categories);
        endpoints::records(&self.get(endpoints::TEAMS, &params).await?, "teams")
    }

    async fn fetch_game(&self, game_id: u64) -> Result<Game> {
        Game::from_value(&self.get(&endpoints::game_feed(game_id), &[]).await?)
    }

    async fn fetch_boxscore(&self, game_id: u64) -> Result<Boxscore> {
        Boxscore::from_value(&self.get(&endpoints::boxscore(game_id), &[]).await?)
    }

    async fn fetch_seasons(&self) -> Result<Vec<Season>> {
        endpoints::records(&self.get(endpoints::SEASONS, &[]).await?, "seasons")
    }

    async fn fetch_schedule(&self, filter: &ScheduleFilter) -> Result<Vec<ScheduleDate>> {
        let params = endpoints::schedule_params(filter);
        endpoints::records(&self.get(endpoints::SCHEDULE, &params).await?, "dates")
    }

    async fn fetch_person(&self, person_id: u64, season: Option<i32>) -> Result<Person> {
        let endpoint = endpoints::person(person_id);
        let body = self.get(&endpoint, &endpoints::person_params(season)).await?;
        endpoints::first_person(&body, &endpoint)
    }

    async fn fetch_standings(
        &self,
        standings_type: Option<&str>,
        season: Option<i32>,
    ) -> Result<Vec<Standing>> {
        let params = endpoints::standings_params(standings_type, season);
        endpoints::records(&self.get(endpoints::STANDINGS, &params).await?, "records")
    }

    async fn fetch_draft(&self, year: Option<i32>) -> Result<Draft> {
        endpoints::first_draft(&self.get(&endpoints::draft(year), &[]).await?)
    }

    async fn fetch_stat_types(&self) -> Result<Vec<String>> {
        Ok(endpoints::names(&self.get(endpoints::STAT_TYPES, &[]).await?, "displayName"))
    }

    async fn fetch_standing_types(&self) -> Result<Vec<String>> {
        Ok(endpoints::names(&self.get(endpoints::STANDINGS_TYPES, &[]).await?, "name"))
    }
}

#[cfg(test)]
mod test {
    use mockito::Matcher;
    use reqwest::StatusCode;

    use crate::client::{AsyncStatsNhlApi, Client};
    use crate::config::Config;
    use crate::endpoints::ScheduleFilter;
    use crate::error::Error;
    use crate::models::{Season, Team};

    fn client(server: &mockito::Server) -> AsyncStatsNhlApi {
        AsyncStatsNhlApi::with_config(Config::new(server.url())).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_teams() {
        let mut server = mockito::Server::new_async().await;

        let leader_types = server
            .mock("GET", "/api/v1/leagueLeaderTypes")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"displayName": "points"}]"#)
            .create_async()
            .await;
        let teams = server
            .mock("GET", "/api/v1/teams")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("teamId".into(), "22".into()),
                Matcher::UrlEncoded("leaderCategories".into(), "points".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"teams": [{"id": 22, "name": "Edmonton Oilers"}]}"#)
            .create_async()
            .await;

        let result = client(&server).fetch_teams(&[22], None).await.unwrap();
        leader_types.assert_async().await;
        teams.assert_async().await;

        assert_eq!(
            result,
            vec![Team {
                id: Some(22),
                name: Some("Edmonton Oilers".into()),
                ..Default::default()
            }]
        );
    }

    #[tokio::test]
    async fn test_concurrent_fetches() {
        let mut server = mockito::Server::new_async().await;

        let seasons = server
            .mock("GET", "/api/v1/seasons")
            .with_status(200)
            .with_body(r#"{"seasons": [{"seasonId": "20222023", "numberOfGames": 82}]}"#)
            .create_async()
            .await;
        let schedule = server
            .mock("GET", "/api/v1/schedule")
            .match_query(Matcher::UrlEncoded("season".into(), "20222023".into()))
            .with_status(200)
            .with_body(r#"{"dates": [{"date": "2022-10-07", "games": [{"gamePk": 2022020001}]}]}"#)
            .create_async()
            .await;
        let stat_types = server
            .mock("GET", "/api/v1/statTypes")
            .with_status(200)
            .with_body(r#"[{"displayName": "yearByYear"}]"#)
            .create_async()
            .await;

        let api = client(&server);
        let filter = ScheduleFilter::default().season(2022);
        let (season_list, dates, types) = tokio::join!(
            api.fetch_seasons(),
            api.fetch_schedule(&filter),
            api.fetch_stat_types(),
        );
        seasons.assert_async().await;
        schedule.assert_async().await;
        stat_types.assert_async().await;

        assert_eq!(
            season_list.unwrap(),
            vec![Season {
                season_id: Some("20222023".into()),
                number_of_games: Some(82),
                ..Default::default()
            }]
        );
        let dates = dates.unwrap();
        assert_eq!(dates[0].games.as_ref().map(|g| g[0].game_pk), Some(Some(2022020001)));
        assert_eq!(types.unwrap(), vec!["yearByYear"]);
        api.close();
    }

    #[tokio::test]
    async fn test_fetch_game_and_draft() {
        let mut server = mockito::Server::new_async().await;
        let game = server
            .mock("GET", "/api/v1/game/2022020001/feed/live")
            .with_status(200)
            .with_body(r#"{"gameData": {"game": {"pk": 2022020001}}, "liveData": {"plays": {"allPlays": []}}}"#)
            .create_async()
            .await;
        let draft = server
            .mock("GET", "/api/v1/draft/2015")
            .with_status(200)
            .with_body(r#"{"drafts": [{"draftYear": 2015, "rounds": []}]}"#)
            .create_async()
            .await;

        let api = client(&server);
        let result = api.fetch_game(2022020001).await.unwrap();
        let drafted = api.fetch_draft(Some(2015)).await.unwrap();
        game.assert_async().await;
        draft.assert_async().await;

        assert_eq!(result.pk, Some(2022020001));
        assert_eq!(result.all_plays, Some(vec![]));
        assert_eq!(drafted.draft_year, Some(2015));
        assert_eq!(drafted.rounds, Some(vec![]));
    }

    #[tokio::test]
    async fn test_server_error() {
        let mut server = mockito::Server::new_async().await;
        let _standings = server
            .mock("GET", "/api/v1/standings")
            .with_status(503)
            .create_async()
            .await;

        let err = client(&server)
            .fetch_standings(None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ServerError { .. }), "got {err:?}");
        assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
    }
}
