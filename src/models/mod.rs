//! Typed records built from NHL Stats API responses.
//!
//! Every record field is optional: a key that is missing from the response,
//! or present as `null`, leaves the field as `None`. Unknown keys are
//! ignored. Records are built through [`FromResponse`], which normalizes
//! the keys of the raw object before reading it.

mod fields;

pub mod draft;
pub mod game;
pub mod person;
pub mod schedule;
pub mod season;
pub mod standing;
pub mod stat;
pub mod team;

use serde_json::{Map, Value};

use crate::error::Result;

pub use draft::{Draft, DraftPick, DraftRound, Prospect};
pub use game::{Boxscore, Game, Play};
pub use person::Person;
pub use schedule::{ScheduleDate, ScheduleGame};
pub use season::Season;
pub use standing::Standing;
pub use stat::Stat;
pub use team::{Team, TeamLeader, TeamRecord};

pub(crate) use fields::Fields;

/// Construction of a record from one raw response object.
pub trait FromResponse: Sized {
    /// Builds the record from a camelCase or already normalized object.
    fn from_response(data: &Map<String, Value>) -> Result<Self>;

    /// Builds the record from any JSON value; non-objects count as empty.
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Object(data) => Self::from_response(data),
            _ => Self::from_response(&Map::new()),
        }
    }
}
