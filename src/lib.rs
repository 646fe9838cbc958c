//! Client library for the NHL Stats API.
//!
//! Responses are turned into typed records ([`Team`], [`Game`], [`Person`],
//! [`Standing`], [`Draft`] and friends). Every field of a record is an
//! `Option`, left as `None` when the API omits it.
//!
//! ```rust,no_run
//! use nhl_data::StatsNhlApi;
//!
//! # fn example() -> nhl_data::Result<()> {
//! let api = StatsNhlApi::new();
//! for team in api.teams(&[], Some(2022))? {
//!     println!("{:?}", team.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`AsyncStatsNhlApi`] offers the same resources through the async
//! [`Client`] trait.

pub mod api_client;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http_client;
pub mod models;
pub mod normalize;

pub use api_client::StatsNhlApi;
pub use client::{AsyncStatsNhlApi, Client};
pub use config::Config;
pub use endpoints::ScheduleFilter;
pub use error::{Error, Result};
pub use http_client::{AsyncHttpClient, HttpClient};
pub use models::*;
