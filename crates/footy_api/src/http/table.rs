use actix_web::{
    Responder, Scope,
    web::{self, Data, Query},
};
use footy_lib::{
    Database,
    models::TableKind,
    table::{self, TableConfig},
};
use serde::Deserialize;
use tracing_actix_web::RequestId;

use crate::utils::json;
use crate::{FitRequestId as _, FootyResponse};

pub fn table_scope() -> Scope {
    web::scope("/table").route("/{table}/{year}", web::get().to(ranked_table))
}

#[derive(Deserialize)]
struct TableQuery {
    qualified: Option<bool>,
    take: Option<usize>,
}

async fn ranked_table(
    req_id: RequestId,
    db: Data<Database>,
    config: Data<TableConfig>,
    path: web::Path<(String, i32)>,
    Query(query): Query<TableQuery>,
) -> FootyResponse<impl Responder> {
    let (table, year) = path.into_inner();
    let kind = table.parse::<TableKind>().fit(req_id)?;
    let records = table::get_table(
        &db.mysql_pool,
        kind,
        year,
        &config,
        query.qualified,
        query.take,
    )
    .await
    .fit(req_id)?;
    json(records)
}

pub async fn winners(
    req_id: RequestId,
    db: Data<Database>,
    config: Data<TableConfig>,
    path: web::Path<String>,
) -> FootyResponse<impl Responder> {
    let kind = path.parse::<TableKind>().fit(req_id)?;
    let winners = table::get_winners(&db.mysql_pool, kind, &config)
        .await
        .fit(req_id)?;
    json(winners)
}
