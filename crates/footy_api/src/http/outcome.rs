use actix_web::{
    HttpResponse, Responder, Scope,
    web::{self, Data, Json},
};
use footy_lib::{Database, models::Outcome, outcome};
use tracing_actix_web::RequestId;

use crate::utils::json;
use crate::{FitRequestId as _, FootyErrorKind, FootyResponse};

pub fn outcome_scope() -> Scope {
    web::scope("/outcome")
        .service(
            web::resource("")
                .route(web::post().to(create))
                .route(web::put().to(upsert)),
        )
        .service(
            web::resource("/{game_day_id}/{player_id}")
                .route(web::get().to(info))
                .route(web::delete().to(delete)),
        )
}

pub async fn outcomes_by_game_day(
    req_id: RequestId,
    db: Data<Database>,
    path: web::Path<u32>,
) -> FootyResponse<impl Responder> {
    let outcomes = outcome::get_by_game_day(&db.mysql_pool, *path)
        .await
        .fit(req_id)?;
    json(outcomes)
}

pub async fn outcomes_by_player(
    req_id: RequestId,
    db: Data<Database>,
    path: web::Path<u32>,
) -> FootyResponse<impl Responder> {
    let outcomes = outcome::get_by_player(&db.mysql_pool, *path)
        .await
        .fit(req_id)?;
    json(outcomes)
}

async fn info(
    req_id: RequestId,
    db: Data<Database>,
    path: web::Path<(u32, u32)>,
) -> FootyResponse<impl Responder> {
    let (game_day_id, player_id) = path.into_inner();
    let outcome = outcome::get(&db.mysql_pool, game_day_id, player_id)
        .await
        .fit(req_id)?
        .ok_or(FootyErrorKind::EndpointNotFound)
        .fit(req_id)?;
    json(outcome)
}

async fn create(
    req_id: RequestId,
    db: Data<Database>,
    Json(body): Json<Outcome>,
) -> FootyResponse<impl Responder> {
    outcome::create(&db.mysql_pool, &body).await.fit(req_id)?;
    json(body)
}

async fn upsert(
    req_id: RequestId,
    db: Data<Database>,
    Json(body): Json<Outcome>,
) -> FootyResponse<impl Responder> {
    outcome::upsert(&db.mysql_pool, &body).await.fit(req_id)?;
    json(body)
}

async fn delete(
    req_id: RequestId,
    db: Data<Database>,
    path: web::Path<(u32, u32)>,
) -> FootyResponse<impl Responder> {
    let (game_day_id, player_id) = path.into_inner();
    outcome::delete(&db.mysql_pool, game_day_id, player_id)
        .await
        .fit(req_id)?;
    Ok(HttpResponse::Ok().finish())
}
