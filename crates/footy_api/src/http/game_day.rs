use actix_web::{
    HttpResponse, Responder, Scope,
    web::{self, Data, Json},
};
use footy_lib::{Database, game_day, models::GameDay};
use tracing_actix_web::RequestId;

use crate::utils::json;
use crate::{FitRequestId as _, FootyErrorKind, FootyResponse};

pub fn game_day_scope() -> Scope {
    web::scope("/gameday")
        .service(
            web::resource("")
                .route(web::post().to(create))
                .route(web::put().to(upsert)),
        )
        .service(
            web::resource("/{id}")
                .route(web::get().to(info))
                .route(web::delete().to(delete)),
        )
}

pub async fn game_days(req_id: RequestId, db: Data<Database>) -> FootyResponse<impl Responder> {
    let game_days = game_day::get_all(&db.mysql_pool).await.fit(req_id)?;
    json(game_days)
}

pub async fn game_years(req_id: RequestId, db: Data<Database>) -> FootyResponse<impl Responder> {
    let years = game_day::get_years(&db.mysql_pool).await.fit(req_id)?;
    json(years)
}

async fn info(
    req_id: RequestId,
    db: Data<Database>,
    path: web::Path<u32>,
) -> FootyResponse<impl Responder> {
    let game_day = game_day::get(&db.mysql_pool, *path)
        .await
        .fit(req_id)?
        .ok_or(FootyErrorKind::EndpointNotFound)
        .fit(req_id)?;
    json(game_day)
}

async fn create(
    req_id: RequestId,
    db: Data<Database>,
    Json(body): Json<GameDay>,
) -> FootyResponse<impl Responder> {
    game_day::create(&db.mysql_pool, &body).await.fit(req_id)?;
    json(body)
}

async fn upsert(
    req_id: RequestId,
    db: Data<Database>,
    Json(body): Json<GameDay>,
) -> FootyResponse<impl Responder> {
    game_day::upsert(&db.mysql_pool, &body).await.fit(req_id)?;
    json(body)
}

async fn delete(
    req_id: RequestId,
    db: Data<Database>,
    path: web::Path<u32>,
) -> FootyResponse<impl Responder> {
    game_day::delete(&db.mysql_pool, *path).await.fit(req_id)?;
    Ok(HttpResponse::Ok().finish())
}
