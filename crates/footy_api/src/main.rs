//! The footy stats API program.
//!
//! The program also includes a [library](footy_api_lib). Overall, it uses the
//! [`footy_lib`] crate as a main dependency.

use actix_cors::Cors;
use actix_web::{App, HttpServer};
use anyhow::Context;
use footy_api_lib::ApiConfig;
use footy_lib::Database;
use tracing::level_filters::LevelFilter;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// The main entry point.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Err(err) if !err.not_found() => return Err(err).context("cannot retrieve .env files"),
        _ => (),
    }

    tracing_subscriber::fmt()
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let config = ApiConfig::from_env()?;

    let pool = footy_lib::get_mysql_pool(&config.db_url)
        .await
        .context("cannot connect to the database")?;
    footy_lib::MIGRATOR
        .run(&pool)
        .await
        .context("cannot apply the database migrations")?;
    let db = Database { mysql_pool: pool };

    tracing::info!("Listening on 0.0.0.0:{}", config.port);

    let port = config.port;
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec!["accept", "content-type"])
            .max_age(3600);
        #[cfg(debug_assertions)]
        let cors = cors.allow_any_origin();
        #[cfg(not(debug_assertions))]
        let cors = cors.allowed_origin(&config.host);

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .configure(|cfg| {
                footy_api_lib::configure::configure(cfg, db.clone(), config.table.clone())
            })
    })
    .bind(("0.0.0.0", port))
    .context("Cannot bind 0.0.0.0 address")?
    .run()
    .await
    .context("Cannot create actix-web server")?;

    Ok(())
}
