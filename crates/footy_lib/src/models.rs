//! Contains all the models registered in the MySQL/MariaDB database.
//!
//! The types correspond to the raw tables in the database, so relations between models
//! are only represented by a foreign key like an ID. They are plain data records: the
//! repository modules (like [`player`](crate::player) or [`outcome`](crate::outcome))
//! read and write them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::FootyError;

/// A player in the database.
#[derive(Serialize, Deserialize, FromRow, Clone, Debug)]
pub struct Player {
    /// The player ID.
    pub id: u32,
    /// The player login, a unique handle.
    pub login: String,
    /// The player first name.
    pub first_name: String,
    /// The player last name.
    pub last_name: String,
    /// The player email address.
    pub email: Option<String>,
    /// The player birth date.
    pub born: Option<chrono::NaiveDate>,
    /// When the player joined the group.
    pub joined: Option<chrono::NaiveDate>,
    /// When the player retired from the group. A player is active iff this is null.
    pub finished: Option<chrono::NaiveDate>,
    /// An optional free-text comment.
    pub comment: Option<String>,
    /// Whether the player wants their name hidden on the website.
    pub anonymous: bool,
    /// Whether the player administrates the group.
    pub admin: bool,
    /// The ID of the player who introduced them to the group.
    pub introduced_by: Option<u32>,
}

impl Player {
    /// The display name of the player, respecting the anonymous flag.
    pub fn display_name(&self) -> String {
        if self.anonymous {
            "Anonymous".to_owned()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

/// A game day (a single scheduled fixture) in the database.
#[derive(Serialize, Deserialize, FromRow, Clone, Debug)]
pub struct GameDay {
    /// The game day ID. Game days are numbered sequentially from 1.
    pub id: u32,
    /// The date of the fixture.
    pub game_date: Option<chrono::NaiveDateTime>,
    /// Whether a game actually took place that day.
    pub game: bool,
    /// When the invitation mail was sent.
    pub mail_sent: Option<chrono::NaiveDateTime>,
    /// An optional free-text comment.
    pub comment: Option<String>,
    /// Which team wore the bibs.
    pub bibs: Option<Team>,
    /// How many previous games the team picker looked at. Always 5 or 10 when set.
    pub picker_games_history: Option<u8>,
}

/// One player's recorded participation for one game day.
///
/// There is at most one outcome per (game day, player) pair, enforced by the composite
/// primary key.
#[derive(Serialize, Deserialize, FromRow, Clone, Debug)]
pub struct Outcome {
    /// The ID of the game day.
    pub game_day_id: u32,
    /// The ID of the player.
    pub player_id: u32,
    /// The RSVP response, if any was given.
    pub response: Option<Response>,
    /// When the response was given.
    pub response_time: Option<chrono::NaiveDateTime>,
    /// The points scored that day. Null means the player did not play.
    pub points: Option<i32>,
    /// The team the player was assigned to.
    pub team: Option<Team>,
    /// An optional free-text comment.
    pub comment: Option<String>,
    /// Whether the player went to the pub afterwards.
    #[sqlx(rename = "pub")]
    pub r#pub: bool,
    /// Whether the player has paid for the game.
    pub paid: bool,
    /// Whether the player went in goal.
    pub goalie: bool,
}

/// A peer rating of a player by another player, across seven skill dimensions.
///
/// A player may be rated at most once by a given rater, enforced by the composite
/// primary key. Each dimension is an integer between 0 and 10.
#[derive(Serialize, Deserialize, FromRow, Clone, Debug)]
pub struct Arse {
    /// The ID of the rated player.
    pub player_id: u32,
    /// The ID of the player who rates.
    pub rater_id: u32,
    /// The UTC date of the rating.
    pub stamp: chrono::NaiveDateTime,
    /// Goalkeeping.
    pub in_goal: u8,
    /// Running.
    pub running: u8,
    /// Shooting.
    pub shooting: u8,
    /// Passing.
    pub passing: u8,
    /// Ball skill.
    pub ball_skill: u8,
    /// Attacking.
    pub attacking: u8,
    /// Defending.
    pub defending: u8,
}

/// A country in the database. Reference data for nationality display.
#[derive(Serialize, Deserialize, FromRow, Clone, Debug)]
pub struct Country {
    /// The ISO 3166 code, e.g. "FR" or "GB-SCT".
    pub iso_code: String,
    /// The display name.
    pub name: String,
}

/// A club in the database. Reference data for the clubs players support.
#[derive(Serialize, Deserialize, FromRow, Clone, Debug)]
pub struct Club {
    /// The club ID.
    pub id: u32,
    /// The Soccerway ID of the club, used to link to their page.
    pub soccerway_id: Option<u32>,
    /// The club name.
    pub club_name: String,
    /// The URI of the club website.
    pub uri: Option<String>,
    /// The ISO code of the country the club plays in.
    pub country: Option<String>,
}

/// An RSVP response to a game day invitation.
#[derive(Serialize, Deserialize, sqlx::Type, PartialEq, Eq, Clone, Copy, Debug)]
pub enum Response {
    /// The player said they would come.
    Yes,
    /// The player said they would not come.
    No,
    /// The player did not commit either way.
    Dunno,
    /// The player was excused for that day.
    Excused,
    /// The player said yes and did not show up.
    Flaked,
    /// The player was injured.
    Injured,
}

/// A team assignment for a game day.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[repr(u8)]
#[serde(into = "char", try_from = "char")]
pub enum Team {
    /// The A team.
    A = b'A',
    /// The B team.
    B = b'B',
}

impl From<Team> for char {
    fn from(team: Team) -> Self {
        team.to_char()
    }
}

impl TryFrom<char> for Team {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'A' => Ok(Self::A),
            'B' => Ok(Self::B),
            c => Err(format!("invalid character: '{c}', expected 'A' or 'B'")),
        }
    }
}

impl Team {
    /// Converts a [`Team`] into a character (either 'A' or 'B').
    pub fn to_char(self) -> char {
        self as u8 as char
    }

    /// The team name as a static string, as stored in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl FromStr for Team {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.chars().next() {
            Some(c) if s.len() == 1 => Self::try_from(c),
            _ => Err("expected one character, either 'A' or 'B'".to_owned()),
        }
    }
}

impl<'a> sqlx::Decode<'a, sqlx::MySql> for Team {
    fn decode(
        value: <sqlx::MySql as sqlx::Database>::ValueRef<'a>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&'a str as sqlx::Decode<'a, sqlx::MySql>>::decode(value)?;
        Self::from_str(s).map_err(Into::into)
    }
}

impl sqlx::Type<sqlx::MySql> for Team {
    #[inline(always)]
    fn type_info() -> <sqlx::MySql as sqlx::Database>::TypeInfo {
        <str as sqlx::Type<sqlx::MySql>>::type_info()
    }

    #[inline(always)]
    fn compatible(ty: &<sqlx::MySql as sqlx::Database>::TypeInfo) -> bool {
        <str as sqlx::Type<sqlx::MySql>>::compatible(ty)
    }
}

/// The five ranked tables of the group.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    /// Total points scored.
    Points,
    /// Points per game played, for players with enough games.
    Averages,
    /// Games played, rewarding attendance regardless of score.
    Stalwart,
    /// Promptness of RSVP responses, for players with enough replies.
    Speedy,
    /// Pub attendance count.
    Pub,
}

impl FromStr for TableKind {
    type Err = FootyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "points" => Ok(Self::Points),
            "averages" => Ok(Self::Averages),
            "stalwart" => Ok(Self::Stalwart),
            "speedy" => Ok(Self::Speedy),
            "pub" => Ok(Self::Pub),
            other => Err(FootyError::UnknownTable(other.to_owned())),
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Points => "points",
            Self::Averages => "averages",
            Self::Stalwart => "stalwart",
            Self::Speedy => "speedy",
            Self::Pub => "pub",
        };
        f.write_str(name)
    }
}

/// A ranked per-player record for one year, recomputed on read from the outcomes.
///
/// Year 0 denotes the all-time aggregation.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlayerRecord {
    /// The year of the record, 0 for all-time.
    pub year: i32,
    /// The ID of the player.
    pub player_id: u32,
    /// The 1-based rank of the player in the requested table.
    pub rank: u32,
    /// Games played (outcomes with points).
    pub played: u32,
    /// Games won.
    pub won: u32,
    /// Games drawn.
    pub drawn: u32,
    /// Games lost.
    pub lost: u32,
    /// Total points scored.
    pub points: i64,
    /// Points per game played.
    pub averages: f64,
    /// Games played, the stalwart score.
    pub stalwart: u32,
    /// Mean RSVP response interval in seconds, if the player ever replied to an
    /// invitation mail.
    pub speedy: Option<f64>,
    /// Pub attendance count.
    pub r#pub: u32,
}
