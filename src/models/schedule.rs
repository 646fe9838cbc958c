use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Serialize;
use serde_json::{Map, Value};

use super::{FromResponse, Fields, Team};
use crate::error::Result;
use crate::normalize::normalize_keys;

/// One calendar day of the schedule and the games played on it.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ScheduleDate {
    pub date: Option<NaiveDate>,
    pub total_items: Option<i64>,
    pub total_events: Option<i64>,
    pub total_games: Option<i64>,
    pub total_matches: Option<i64>,
    pub games: Option<Vec<ScheduleGame>>,
    pub events: Option<Vec<Value>>,
    pub matches: Option<Vec<Value>>,
}

impl FromResponse for ScheduleDate {
    fn from_response(data: &Map<String, Value>) -> Result<Self> {
        let data = normalize_keys(data);
        let f = Fields::new(&data);
        Ok(Self {
            date: f.date("date")?,
            total_items: f.int("total_items"),
            total_events: f.int("total_events"),
            total_games: f.int("total_games"),
            total_matches: f.int("total_matches"),
            games: f.entities("games")?,
            events: f.list("events"),
            matches: f.list("matches"),
        })
    }
}

/// A game as listed in the schedule.
///
/// Lighter than [`super::Game`], but carries scores and league records
/// that the live feed does not.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ScheduleGame {
    pub game_pk: Option<i64>,
    pub game_type: Option<String>,
    pub season: Option<String>,
    pub game_date: Option<DateTime<FixedOffset>>,
    pub status: Option<Map<String, Value>>,
    pub away_league_record: Option<Map<String, Value>>,
    pub away_score: Option<i64>,
    pub away_team: Option<Team>,
    pub home_league_record: Option<Map<String, Value>>,
    pub home_score: Option<i64>,
    pub home_team: Option<Team>,
    pub venue: Option<Map<String, Value>>,
}

impl FromResponse for ScheduleGame {
    fn from_response(data: &Map<String, Value>) -> Result<Self> {
        let data = normalize_keys(data);
        let f = Fields::new(&data);
        let away = f.child("teams").child("away");
        let home = f.child("teams").child("home");
        Ok(Self {
            game_pk: f.int("game_pk"),
            game_type: f.string("game_type"),
            season: f.string("season"),
            game_date: f.date_time("game_date")?,
            status: f.object("status"),
            away_league_record: away.object("league_record"),
            away_score: away.int("score"),
            away_team: away.entity("team")?,
            home_league_record: home.object("league_record"),
            home_score: home.int("score"),
            home_team: home.entity("team")?,
            venue: f.object("venue"),
        })
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::{ScheduleDate, ScheduleGame};
    use crate::error::Error;
    use crate::models::{FromResponse, Team};

    #[test]
    fn test_schedule_date_from_response() {
        assert_eq!(
            ScheduleDate::from_value(&json!({"date": "2023-01-01"})).unwrap(),
            ScheduleDate {
                date: NaiveDate::from_ymd_opt(2023, 1, 1),
                ..Default::default()
            }
        );
        assert_eq!(
            ScheduleDate::from_value(&json!({})).unwrap(),
            ScheduleDate::default()
        );
    }

    #[test]
    fn test_schedule_date_keeps_game_order() {
        let date = ScheduleDate::from_value(&json!({
            "totalGames": 2,
            "games": [{"gamePk": 1}, {"gamePk": 2}],
        }))
        .unwrap();

        let pks: Vec<_> = date.games.unwrap().iter().map(|g| g.game_pk).collect();
        assert_eq!(pks, vec![Some(1), Some(2)]);
        assert_eq!(date.total_games, Some(2));
    }

    #[test]
    fn test_schedule_date_games_absent_vs_empty() {
        let absent = ScheduleDate::from_value(&json!({"totalGames": 0})).unwrap();
        let empty = ScheduleDate::from_value(&json!({"games": []})).unwrap();

        assert_eq!(absent.games, None);
        assert_eq!(empty.games, Some(vec![]));
    }

    #[test]
    fn test_schedule_game_from_response() {
        let game = ScheduleGame::from_value(&json!({
            "gamePk": 2022020005,
            "gameType": "R",
            "season": "20222023",
            "gameDate": "2022-10-11T23:30:00Z",
            "status": {"abstractGameState": "Final"},
            "teams": {
                "away": {"score": 5, "team": {"id": 14}, "leagueRecord": {"wins": 1}},
                "home": {"score": 1, "team": {"id": 16}},
            },
        }))
        .unwrap();

        assert_eq!(game.game_pk, Some(2022020005));
        assert_eq!(game.game_type.as_deref(), Some("R"));
        assert_eq!(
            game.game_date.map(|d| d.to_rfc3339()).as_deref(),
            Some("2022-10-11T23:30:00+00:00")
        );
        assert_eq!(game.away_score, Some(5));
        assert_eq!(game.home_score, Some(1));
        assert_eq!(
            game.away_team,
            Some(Team {
                id: Some(14),
                ..Default::default()
            })
        );
        assert_eq!(
            game.away_league_record,
            json!({"wins": 1}).as_object().cloned()
        );
        assert_eq!(game.home_league_record, None);
    }

    #[test]
    fn test_schedule_malformed_dates() {
        assert!(matches!(
            ScheduleDate::from_value(&json!({"date": "01/01/2023"})),
            Err(Error::Deserialize(_))
        ));
        assert!(matches!(
            ScheduleDate::from_value(&json!({"games": [{"gameDate": "tonight"}]})),
            Err(Error::Deserialize(_))
        ));
    }
}
