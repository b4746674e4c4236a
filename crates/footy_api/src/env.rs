use std::env;
use std::fmt::Display;
use std::str::FromStr;

use anyhow::Context as _;
use footy_lib::table::TableConfig;

/// The configuration of the API program, read once from the environment at startup and
/// passed down explicitly.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// The URL to the MySQL/MariaDB database.
    pub db_url: String,
    /// The port used to expose the API.
    pub port: u16,
    /// The host the website is served from, allowed by CORS in release builds.
    pub host: String,
    /// The qualification thresholds of the partitioned tables.
    pub table: TableConfig,
}

fn parse_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid {name} value `{raw}`: {e}")),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(e).with_context(|| format!("cannot read {name}")),
    }
}

impl ApiConfig {
    /// Reads the configuration from the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            db_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: parse_var("FOOTY_API_PORT", 3000)?,
            host: parse_var("FOOTY_API_HOST", "http://localhost:3000".to_owned())?,
            table: TableConfig {
                min_games_for_averages: parse_var("FOOTY_MIN_GAMES_FOR_AVERAGES", 10)?,
                min_replies_for_speedy: parse_var("FOOTY_MIN_REPLIES_FOR_SPEEDY", 10)?,
            },
        })
    }
}
