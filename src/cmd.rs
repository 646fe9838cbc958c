use chrono::NaiveDate;
use clap::Subcommand;
use serde::Serialize;

use nhl_data::{AsyncStatsNhlApi, Client, Config, ScheduleFilter};

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Teams with records, leaders and rosters
    Teams {
        #[arg(long = "team", value_delimiter = ',')]
        team_ids: Vec<u32>,
        /// First year of the season, e.g. 2022 for 2022-23
        #[arg(long)]
        season: Option<i32>,
    },
    /// Live feed of a game
    Game { game_id: u64 },
    Boxscore { game_id: u64 },
    Seasons,
    Schedule {
        #[arg(long = "team", value_delimiter = ',')]
        team_ids: Option<Vec<u32>>,
        #[arg(long)]
        season: Option<i32>,
        #[arg(long, requires = "end_date")]
        start_date: Option<NaiveDate>,
        #[arg(long, requires = "start_date")]
        end_date: Option<NaiveDate>,
    },
    Person {
        person_id: u64,
        #[arg(long)]
        season: Option<i32>,
    },
    Standings {
        #[arg(long = "type")]
        standings_type: Option<String>,
        #[arg(long)]
        season: Option<i32>,
    },
    Draft { year: Option<i32> },
    StatTypes,
    StandingTypes,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

impl Cmd {
    pub async fn run(self) -> anyhow::Result<()> {
        let api = AsyncStatsNhlApi::with_config(Config::from_env()?)?;

        match self {
            Cmd::Teams { team_ids, season } => {
                print_json(&api.fetch_teams(&team_ids, season).await?)?;
            }
            Cmd::Game { game_id } => print_json(&api.fetch_game(game_id).await?)?,
            Cmd::Boxscore { game_id } => print_json(&api.fetch_boxscore(game_id).await?)?,
            Cmd::Seasons => print_json(&api.fetch_seasons().await?)?,
            Cmd::Schedule {
                team_ids,
                season,
                start_date,
                end_date,
            } => {
                let filter = ScheduleFilter {
                    team_ids,
                    season,
                    start_date,
                    end_date,
                };
                print_json(&api.fetch_schedule(&filter).await?)?;
            }
            Cmd::Person { person_id, season } => {
                print_json(&api.fetch_person(person_id, season).await?)?;
            }
            Cmd::Standings {
                standings_type,
                season,
            } => {
                let standings = api
                    .fetch_standings(standings_type.as_deref(), season)
                    .await?;
                print_json(&standings)?;
            }
            Cmd::Draft { year } => print_json(&api.fetch_draft(year).await?)?,
            Cmd::StatTypes => {
                for name in api.fetch_stat_types().await? {
                    println!("{name}");
                }
            }
            Cmd::StandingTypes => {
                for name in api.fetch_standing_types().await? {
                    println!("{name}");
                }
            }
        }

        api.close();
        Ok(())
    }
}
