use serde::Serialize;
use serde_json::{Map, Value};

use super::{FromResponse, Fields};
use crate::error::Result;
use crate::normalize::normalize_keys;

/// A franchise as returned by `/teams` and embedded in most other payloads.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Team {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub link: Option<String>,
    pub venue: Option<Map<String, Value>>,
    pub abbreviation: Option<String>,
    pub team_name: Option<String>,
    pub location_name: Option<String>,
    pub first_year_of_play: Option<i64>,
    pub division: Option<Map<String, Value>>,
    pub conference: Option<Map<String, Value>>,
    pub franchise: Option<Map<String, Value>>,
    pub team_stats: Option<Vec<Value>>,
    pub short_name: Option<String>,
    pub official_site_url: Option<String>,
    pub active: Option<bool>,
    pub record: Option<TeamRecord>,
    pub leaders: Option<Vec<TeamLeader>>,
    pub roster: Option<Vec<Value>>,
}

impl FromResponse for Team {
    fn from_response(data: &Map<String, Value>) -> Result<Self> {
        let data = normalize_keys(data);
        let f = Fields::new(&data);
        Ok(Self {
            id: f.int("id"),
            name: f.string("name"),
            link: f.string("link"),
            venue: f.object("venue"),
            abbreviation: f.string("abbreviation"),
            team_name: f.string("team_name"),
            location_name: f.string("location_name"),
            first_year_of_play: f.int("first_year_of_play"),
            division: f.object("division"),
            conference: f.object("conference"),
            franchise: f.object("franchise"),
            team_stats: f.list("team_stats"),
            short_name: f.string("short_name"),
            official_site_url: f.string("official_site_url"),
            active: f.boolean("active"),
            record: f.entity("record")?,
            leaders: f.entities("team_leaders")?,
            // expand=team.roster nests the player list one level down
            roster: f.child("roster").list("roster"),
        })
    }
}

/// A team's standing line: points, ranks and streaks.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TeamRecord {
    pub league_record: Option<Map<String, Value>>,
    pub regulation_wins: Option<i64>,
    pub goals_against: Option<i64>,
    pub goals_scored: Option<i64>,
    pub points: Option<i64>,
    pub division_rank: Option<String>,
    pub division_l10_rank: Option<String>,
    pub division_road_rank: Option<String>,
    pub division_home_rank: Option<String>,
    pub conference_rank: Option<String>,
    pub conference_l10_rank: Option<String>,
    pub conference_road_rank: Option<String>,
    pub conference_home_rank: Option<String>,
    pub league_rank: Option<String>,
    pub league_l10_rank: Option<String>,
    pub league_road_rank: Option<String>,
    pub league_home_rank: Option<String>,
    pub wild_card_rank: Option<String>,
    pub pp_division_rank: Option<String>,
    pub pp_conference_rank: Option<String>,
    pub pp_league_rank: Option<String>,
    pub row: Option<i64>,
    pub games_played: Option<i64>,
    pub streak: Option<Map<String, Value>>,
    pub clinch_indicator: Option<String>,
    pub points_percentage: Option<f64>,
    pub last_updated: Option<String>,
}

impl FromResponse for TeamRecord {
    fn from_response(data: &Map<String, Value>) -> Result<Self> {
        let data = normalize_keys(data);
        let f = Fields::new(&data);
        Ok(Self {
            league_record: f.object("league_record"),
            regulation_wins: f.int("regulation_wins"),
            goals_against: f.int("goals_against"),
            goals_scored: f.int("goals_scored"),
            points: f.int("points"),
            division_rank: f.string("division_rank"),
            division_l10_rank: f.string("division_l10_rank"),
            division_road_rank: f.string("division_road_rank"),
            division_home_rank: f.string("division_home_rank"),
            conference_rank: f.string("conference_rank"),
            conference_l10_rank: f.string("conference_l10_rank"),
            conference_road_rank: f.string("conference_road_rank"),
            conference_home_rank: f.string("conference_home_rank"),
            league_rank: f.string("league_rank"),
            league_l10_rank: f.string("league_l10_rank"),
            league_road_rank: f.string("league_road_rank"),
            league_home_rank: f.string("league_home_rank"),
            wild_card_rank: f.string("wild_card_rank"),
            pp_division_rank: f.string("pp_division_rank"),
            pp_conference_rank: f.string("pp_conference_rank"),
            pp_league_rank: f.string("pp_league_rank"),
            row: f.int("row"),
            games_played: f.int("games_played"),
            streak: f.object("streak"),
            clinch_indicator: f.string("clinch_indicator"),
            points_percentage: f.float("points_percentage"),
            last_updated: f.string("last_updated"),
        })
    }
}

/// One leader category of a team, e.g. goals or assists.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TeamLeader {
    pub leader_category: Option<String>,
    pub depth: Option<String>,
    pub game_type: Option<Map<String, Value>>,
    pub season: Option<String>,
    pub leaders: Option<Vec<Value>>,
}

impl FromResponse for TeamLeader {
    fn from_response(data: &Map<String, Value>) -> Result<Self> {
        let data = normalize_keys(data);
        let f = Fields::new(&data);
        Ok(Self {
            leader_category: f.string("leader_category"),
            depth: f.string("depth"),
            game_type: f.object("game_type"),
            season: f.string("season"),
            leaders: f.list("leaders"),
        })
    }
}

#[cfg(test)]
mod test {
    use serde_json::{json, Value};

    use super::{Team, TeamLeader, TeamRecord};
    use crate::models::FromResponse;

    fn team(value: Value) -> Team {
        Team::from_value(&value).unwrap()
    }

    #[test]
    fn test_team_from_response() {
        assert_eq!(
            team(json!({"id": 1, "name": "The NHL Team"})),
            Team {
                id: Some(1),
                name: Some("The NHL Team".into()),
                ..Default::default()
            }
        );
        assert_eq!(team(json!({})), Team::default());
        assert_eq!(
            team(json!({"teamName": "Team Name", "unknownKey": 7})),
            Team {
                team_name: Some("Team Name".into()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_team_known_fields_round_trip() {
        let result = team(json!({
            "id": 22,
            "name": "Edmonton Oilers",
            "link": "/api/v1/teams/22",
            "venue": {"name": "Rogers Place", "timeZone": {"id": "America/Edmonton"}},
            "abbreviation": "EDM",
            "locationName": "Edmonton",
            "firstYearOfPlay": "1979",
            "division": {"id": 15},
            "shortName": "Edmonton",
            "officialSiteUrl": "http://www.edmontonoilers.com/",
            "active": true,
        }));

        assert_eq!(result.id, Some(22));
        assert_eq!(result.abbreviation.as_deref(), Some("EDM"));
        assert_eq!(result.location_name.as_deref(), Some("Edmonton"));
        assert_eq!(result.first_year_of_play, Some(1979));
        assert_eq!(result.short_name.as_deref(), Some("Edmonton"));
        assert_eq!(
            result.official_site_url.as_deref(),
            Some("http://www.edmontonoilers.com/")
        );
        assert_eq!(result.active, Some(true));
        // nested objects are passed through with normalized keys
        assert_eq!(
            Value::Object(result.venue.unwrap()),
            json!({"name": "Rogers Place", "time_zone": {"id": "America/Edmonton"}})
        );
    }

    #[test]
    fn test_team_expanded_fields() {
        let result = team(json!({
            "id": 22,
            "teamLeaders": [
                {"leaderCategory": "goals", "season": "20222023", "leaders": [{"rank": 1}]},
                {"leaderCategory": "assists"}
            ],
            "roster": {"roster": [{"jerseyNumber": "97"}], "link": "/api/v1/teams/22/roster"},
            "teamStats": [{"type": {"displayName": "statsSingleSeason"}}],
        }));

        assert_eq!(
            result.leaders,
            Some(vec![
                TeamLeader {
                    leader_category: Some("goals".into()),
                    season: Some("20222023".into()),
                    leaders: Some(vec![json!({"rank": 1})]),
                    ..Default::default()
                },
                TeamLeader {
                    leader_category: Some("assists".into()),
                    ..Default::default()
                },
            ])
        );
        assert_eq!(result.roster, Some(vec![json!({"jerseyNumber": "97"})]));
        assert_eq!(result.team_stats.map(|s| s.len()), Some(1));
    }

    #[test]
    fn test_team_record_from_response() {
        let record = TeamRecord::from_value(&json!({
            "leagueRecord": {"wins": 50, "losses": 23, "ot": 9, "type": "league"},
            "points": 109,
            "divisionRank": "2",
            "divisionL10Rank": "1",
            "ppLeagueRank": "0",
            "row": 49,
            "pointsPercentage": 0.6646341463414634,
            "streak": {"streakCode": "W3"},
        }))
        .unwrap();

        assert_eq!(record.points, Some(109));
        assert_eq!(record.division_rank.as_deref(), Some("2"));
        assert_eq!(record.division_l10_rank.as_deref(), Some("1"));
        assert_eq!(record.pp_league_rank.as_deref(), Some("0"));
        assert_eq!(record.row, Some(49));
        assert_eq!(record.points_percentage, Some(0.6646341463414634));
        assert_eq!(
            record.streak.map(Value::Object),
            Some(json!({"streak_code": "W3"}))
        );
        assert_eq!(record.goals_against, None);
    }
}
