use actix_web::{
    HttpResponse, Responder, Scope,
    web::{self, Data, Json},
};
use footy_lib::{Database, arse, models::Arse};
use tracing_actix_web::RequestId;

use crate::utils::json;
use crate::{FitRequestId as _, FootyErrorKind, FootyResponse};

pub fn arse_scope() -> Scope {
    web::scope("/arse")
        .service(
            web::resource("")
                .route(web::post().to(create))
                .route(web::put().to(upsert)),
        )
        .service(
            web::resource("/{player_id}/{rater_id}")
                .route(web::get().to(info))
                .route(web::delete().to(delete)),
        )
}

pub async fn arses_by_player(
    req_id: RequestId,
    db: Data<Database>,
    path: web::Path<u32>,
) -> FootyResponse<impl Responder> {
    let arses = arse::get_by_player(&db.mysql_pool, *path).await.fit(req_id)?;
    json(arses)
}

pub async fn arses_by_rater(
    req_id: RequestId,
    db: Data<Database>,
    path: web::Path<u32>,
) -> FootyResponse<impl Responder> {
    let arses = arse::get_by_rater(&db.mysql_pool, *path).await.fit(req_id)?;
    json(arses)
}

async fn info(
    req_id: RequestId,
    db: Data<Database>,
    path: web::Path<(u32, u32)>,
) -> FootyResponse<impl Responder> {
    let (player_id, rater_id) = path.into_inner();
    let arse = arse::get(&db.mysql_pool, player_id, rater_id)
        .await
        .fit(req_id)?
        .ok_or(FootyErrorKind::EndpointNotFound)
        .fit(req_id)?;
    json(arse)
}

async fn create(
    req_id: RequestId,
    db: Data<Database>,
    Json(body): Json<Arse>,
) -> FootyResponse<impl Responder> {
    arse::create(&db.mysql_pool, &body).await.fit(req_id)?;
    json(body)
}

async fn upsert(
    req_id: RequestId,
    db: Data<Database>,
    Json(body): Json<Arse>,
) -> FootyResponse<impl Responder> {
    arse::upsert(&db.mysql_pool, &body).await.fit(req_id)?;
    json(body)
}

async fn delete(
    req_id: RequestId,
    db: Data<Database>,
    path: web::Path<(u32, u32)>,
) -> FootyResponse<impl Responder> {
    let (player_id, rater_id) = path.into_inner();
    arse::delete(&db.mysql_pool, player_id, rater_id)
        .await
        .fit(req_id)?;
    Ok(HttpResponse::Ok().finish())
}
