use actix_web::{
    HttpResponse, Responder, Scope,
    web::{self, Data, Json, Query},
};
use footy_lib::error::FootyError;
use footy_lib::{Database, models::Player, must, outcome, player};
use serde::Deserialize;
use tracing_actix_web::RequestId;

use crate::utils::json;
use crate::{FitRequestId as _, FootyErrorKind, FootyResponse};

pub fn player_scope() -> Scope {
    web::scope("/player")
        .service(
            web::resource("")
                .route(web::post().to(create))
                .route(web::put().to(upsert)),
        )
        .service(
            web::resource("/{id_or_login}")
                .route(web::get().to(info))
                .route(web::delete().to(delete)),
        )
        .route("/{id_or_login}/form/{games}", web::get().to(form))
        .route("/{id_or_login}/lastplayed", web::get().to(last_played))
        .route("/{id_or_login}/years", web::get().to(years))
        .route("/{id_or_login}/clubs", web::get().to(clubs))
        .route("/{id_or_login}/countries", web::get().to(countries))
}

#[derive(Deserialize)]
pub struct PlayersQuery {
    active: Option<bool>,
}

pub async fn players(
    req_id: RequestId,
    db: Data<Database>,
    Query(query): Query<PlayersQuery>,
) -> FootyResponse<impl Responder> {
    let players = player::get_all(&db.mysql_pool, query.active.unwrap_or(true))
        .await
        .fit(req_id)?;
    json(players)
}

async fn info(
    req_id: RequestId,
    db: Data<Database>,
    path: web::Path<String>,
) -> FootyResponse<impl Responder> {
    let player = must::have_player(&db.mysql_pool, &path).await.fit(req_id)?;
    json(player)
}

async fn form(
    req_id: RequestId,
    db: Data<Database>,
    path: web::Path<(String, u32)>,
) -> FootyResponse<impl Responder> {
    let (id_or_login, games) = path.into_inner();
    let player = must::have_player(&db.mysql_pool, &id_or_login)
        .await
        .fit(req_id)?;
    let outcomes = outcome::get_player_form(&db.mysql_pool, player.id, 0, games)
        .await
        .fit(req_id)?;
    json(outcomes)
}

async fn last_played(
    req_id: RequestId,
    db: Data<Database>,
    path: web::Path<String>,
) -> FootyResponse<impl Responder> {
    let player = must::have_player(&db.mysql_pool, &path).await.fit(req_id)?;
    let last_played = outcome::get_player_last_played(&db.mysql_pool, player.id)
        .await
        .fit(req_id)?;
    json(last_played)
}

async fn years(
    req_id: RequestId,
    db: Data<Database>,
    path: web::Path<String>,
) -> FootyResponse<impl Responder> {
    let player = must::have_player(&db.mysql_pool, &path).await.fit(req_id)?;
    let years = outcome::get_player_years_active(&db.mysql_pool, player.id)
        .await
        .fit(req_id)?;
    json(years)
}

async fn clubs(
    req_id: RequestId,
    db: Data<Database>,
    path: web::Path<String>,
) -> FootyResponse<impl Responder> {
    let player = must::have_player(&db.mysql_pool, &path).await.fit(req_id)?;
    let clubs = player::get_clubs(&db.mysql_pool, player.id)
        .await
        .fit(req_id)?;
    json(clubs)
}

async fn countries(
    req_id: RequestId,
    db: Data<Database>,
    path: web::Path<String>,
) -> FootyResponse<impl Responder> {
    let player = must::have_player(&db.mysql_pool, &path).await.fit(req_id)?;
    let countries = player::get_countries(&db.mysql_pool, player.id)
        .await
        .fit(req_id)?;
    json(countries)
}

async fn create(
    req_id: RequestId,
    db: Data<Database>,
    Json(body): Json<Player>,
) -> FootyResponse<impl Responder> {
    player::create(&db.mysql_pool, &body).await.fit(req_id)?;
    json(body)
}

async fn upsert(
    req_id: RequestId,
    db: Data<Database>,
    Json(body): Json<Player>,
) -> FootyResponse<impl Responder> {
    player::upsert(&db.mysql_pool, &body).await.fit(req_id)?;
    json(body)
}

async fn delete(
    req_id: RequestId,
    db: Data<Database>,
    path: web::Path<String>,
) -> FootyResponse<impl Responder> {
    let raw = path.into_inner();
    let id: u32 = raw
        .parse()
        .map_err(|_| FootyErrorKind::Lib(FootyError::InvalidField("id", raw.clone())))
        .fit(req_id)?;
    player::delete(&db.mysql_pool, id).await.fit(req_id)?;
    Ok(HttpResponse::Ok().finish())
}
