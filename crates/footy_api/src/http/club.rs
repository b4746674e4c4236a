use actix_web::{
    HttpResponse, Responder, Scope,
    web::{self, Data, Json},
};
use footy_lib::{Database, club, models::Club};
use tracing_actix_web::RequestId;

use crate::utils::json;
use crate::{FitRequestId as _, FootyErrorKind, FootyResponse};

pub fn club_scope() -> Scope {
    web::scope("/club")
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

pub async fn clubs(req_id: RequestId, db: Data<Database>) -> FootyResponse<impl Responder> {
    let clubs = club::get_all(&db.mysql_pool).await.fit(req_id)?;
    json(clubs)
}

async fn info(
    req_id: RequestId,
    db: Data<Database>,
    path: web::Path<u32>,
) -> FootyResponse<impl Responder> {
    let club = club::get(&db.mysql_pool, *path)
        .await
        .fit(req_id)?
        .ok_or(FootyErrorKind::EndpointNotFound)
        .fit(req_id)?;
    json(club)
}

async fn create(
    req_id: RequestId,
    db: Data<Database>,
    Json(body): Json<Club>,
) -> FootyResponse<impl Responder> {
    club::create(&db.mysql_pool, &body).await.fit(req_id)?;
    json(body)
}

async fn upsert(
    req_id: RequestId,
    db: Data<Database>,
    Json(body): Json<Club>,
) -> FootyResponse<impl Responder> {
    club::upsert(&db.mysql_pool, &body).await.fit(req_id)?;
    json(body)
}

async fn delete(
    req_id: RequestId,
    db: Data<Database>,
    path: web::Path<u32>,
) -> FootyResponse<impl Responder> {
    club::delete(&db.mysql_pool, *path).await.fit(req_id)?;
    Ok(HttpResponse::Ok().finish())
}
