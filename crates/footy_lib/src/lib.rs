//! The main crate of the footy stats API infrastructure.
//!
//! This crate is used by all the services related to the API. It contains the models saved
//! in the database, the repository modules that read and write them, and the table
//! (leaderboard) computation.
//!
//! If you wish to see the crate of the server program itself, take a look
//! at the [`footy_api`](../footy_api_lib/index.html) package.

#![warn(missing_docs)]

pub mod arse;
pub mod club;
pub mod country;
pub mod error;
pub mod game_day;
pub mod models;
pub mod must;
pub mod outcome;
pub mod player;
pub mod table;

/// The MySQL/MariaDB pool type.
pub type MySqlPool = sqlx::MySqlPool;

use std::time::Duration;

use error::FootyResult;

/// The embedded schema migrations, applied at startup and by the test harness.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Represents the database of the API, meaning the MariaDB pool.
#[derive(Clone)]
pub struct Database {
    /// The MySQL (more precisely MariaDB) pool.
    pub mysql_pool: MySqlPool,
}

/// Creates and returns the MySQL/MariaDB pool with the provided URL.
pub async fn get_mysql_pool(url: &str) -> FootyResult<MySqlPool> {
    let mysql_pool = sqlx::mysql::MySqlPoolOptions::new()
        .max_connections(100)
        .acquire_timeout(Duration::from_secs(10))
        .connect(url)
        .await?;
    Ok(mysql_pool)
}
