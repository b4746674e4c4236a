use actix_web::{
    HttpResponse, Responder, Scope,
    web::{self, Data, Json},
};
use footy_lib::{Database, country, models::Country};
use tracing_actix_web::RequestId;

use crate::utils::json;
use crate::{FitRequestId as _, FootyErrorKind, FootyResponse};

pub fn country_scope() -> Scope {
    web::scope("/country")
        .service(
            web::resource("")
                .route(web::post().to(create))
                .route(web::put().to(upsert)),
        )
        .service(
            web::resource("/{iso_code}")
                .route(web::get().to(info))
                .route(web::delete().to(delete)),
        )
}

pub async fn countries(req_id: RequestId, db: Data<Database>) -> FootyResponse<impl Responder> {
    let countries = country::get_all(&db.mysql_pool).await.fit(req_id)?;
    json(countries)
}

async fn info(
    req_id: RequestId,
    db: Data<Database>,
    path: web::Path<String>,
) -> FootyResponse<impl Responder> {
    let country = country::get(&db.mysql_pool, &path)
        .await
        .fit(req_id)?
        .ok_or(FootyErrorKind::EndpointNotFound)
        .fit(req_id)?;
    json(country)
}

async fn create(
    req_id: RequestId,
    db: Data<Database>,
    Json(body): Json<Country>,
) -> FootyResponse<impl Responder> {
    country::create(&db.mysql_pool, &body).await.fit(req_id)?;
    json(body)
}

async fn upsert(
    req_id: RequestId,
    db: Data<Database>,
    Json(body): Json<Country>,
) -> FootyResponse<impl Responder> {
    country::upsert(&db.mysql_pool, &body).await.fit(req_id)?;
    json(body)
}

async fn delete(
    req_id: RequestId,
    db: Data<Database>,
    path: web::Path<String>,
) -> FootyResponse<impl Responder> {
    country::delete(&db.mysql_pool, &path).await.fit(req_id)?;
    Ok(HttpResponse::Ok().finish())
}
