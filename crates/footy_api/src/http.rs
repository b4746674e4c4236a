//! Module used to serve the routes of the footy API. Each submodule is specific for a
//! route segment.

use actix_web::{HttpResponse, Responder, Scope, web};
use serde::Serialize;

mod arse;
mod club;
mod country;
mod game_day;
mod outcome;
mod player;
mod table;

pub fn api_route() -> Scope {
    let json_config = web::JsonConfig::default().limit(1024 * 16);

    web::scope("")
        .app_data(json_config)
        .route("/info", web::get().to(info))
        .route("/players", web::get().to(player::players))
        .route("/gamedays", web::get().to(game_day::game_days))
        .route("/gameyears", web::get().to(game_day::game_years))
        .route(
            "/outcomes/gameday/{game_day_id}",
            web::get().to(outcome::outcomes_by_game_day),
        )
        .route(
            "/outcomes/player/{player_id}",
            web::get().to(outcome::outcomes_by_player),
        )
        .route(
            "/arses/player/{player_id}",
            web::get().to(arse::arses_by_player),
        )
        .route(
            "/arses/rater/{rater_id}",
            web::get().to(arse::arses_by_rater),
        )
        .route("/countries", web::get().to(country::countries))
        .route("/clubs", web::get().to(club::clubs))
        .route("/winners/{table}", web::get().to(table::winners))
        .service(player::player_scope())
        .service(game_day::game_day_scope())
        .service(outcome::outcome_scope())
        .service(arse::arse_scope())
        .service(country::country_scope())
        .service(club::club_scope())
        .service(table::table_scope())
}

#[derive(Serialize)]
struct InfoResponse {
    service_name: &'static str,
    api_version: &'static str,
}

async fn info() -> impl Responder {
    HttpResponse::Ok().json(InfoResponse {
        service_name: "footy-api",
        api_version: env!("CARGO_PKG_VERSION"),
    })
}
