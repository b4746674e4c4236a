//! Test harness for the integration tests: provisions a disposable database per test,
//! applies the migrations, and tears the database down afterwards.
//!
//! The tests need a reachable MariaDB server, located with the `DATABASE_URL`
//! environment variable. On a failing test the database is kept for inspection unless
//! the `--force-drop-db` argument is passed to the test binary.

use std::str::FromStr;
use std::{env, future::Future, panic};

use anyhow::Context as _;
use futures::FutureExt as _;
use rand::Rng as _;
use sqlx::mysql::MySqlConnectOptions;
use sqlx::{Executor as _, MySqlPool};
use tracing_subscriber::fmt::TestWriter;

use footy_lib::Database;

fn is_db_drop_forced() -> bool {
    env::args_os().any(|arg| arg == "--force-drop-db")
}

/// Returns a randomly-generated string with the `len` length. It contains alphanumeric
/// characters.
pub fn gen_random_str(len: usize) -> String {
    rand::rng()
        .sample_iter(rand::distr::Alphanumeric)
        .map(char::from)
        .take(len)
        .collect()
}

pub trait IntoResult {
    type Out;

    fn into_result(self) -> anyhow::Result<Self::Out>;
}

impl IntoResult for () {
    type Out = ();

    fn into_result(self) -> anyhow::Result<Self::Out> {
        Ok(())
    }
}

impl<T, E> IntoResult for Result<T, E>
where
    anyhow::Error: From<E>,
{
    type Out = T;

    fn into_result(self) -> anyhow::Result<Self::Out> {
        self.map_err(From::from)
    }
}

pub fn init_env() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Err(err) if !err.not_found() => return Err(err).context("cannot retrieve .env files"),
        _ => (),
    }

    let _ = tracing_subscriber::fmt()
        .with_writer(TestWriter::new())
        .try_init();

    Ok(())
}

async fn drop_db(master_pool: &MySqlPool, db_name: &str) -> anyhow::Result<()> {
    master_pool
        .execute(sqlx::raw_sql(&format!("drop database {db_name}")))
        .await?;
    Ok(())
}

/// Runs the provided test against a freshly created database.
pub async fn wrap<F, Fut, R>(test: F) -> anyhow::Result<<R as IntoResult>::Out>
where
    F: FnOnce(Database) -> Fut,
    Fut: Future<Output = R>,
    R: IntoResult,
{
    init_env()?;
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let master_pool = MySqlPool::connect(&db_url).await?;

    // On MySQL/MariaDB, using a schema name with some capital letters may produce the
    // error code 1932 (42S02) "Table 'X' doesn't exist in engine" when doing a query.
    let db_name = format!("_test_db_{}", gen_random_str(10).to_lowercase());

    master_pool
        .execute(sqlx::raw_sql(&format!("create database {db_name}")))
        .await?;
    tracing::info!("Created database {db_name}");

    let options = MySqlConnectOptions::from_str(&db_url)?.database(&db_name);
    let pool = MySqlPool::connect_with(options).await?;

    footy_lib::MIGRATOR.run(&pool).await?;

    let r = panic::AssertUnwindSafe(test(Database { mysql_pool: pool }))
        .catch_unwind()
        .await;

    match r {
        Ok(r) => {
            drop_db(&master_pool, &db_name).await?;
            tracing::info!("Database {db_name} deleted");
            r.into_result()
        }
        Err(payload) => {
            if is_db_drop_forced() {
                drop_db(&master_pool, &db_name).await?;
                tracing::info!("Database {db_name} force-deleted");
            } else {
                tracing::warn!("Test failed, keeping database {db_name} for inspection");
            }
            panic::resume_unwind(payload)
        }
    }
}
