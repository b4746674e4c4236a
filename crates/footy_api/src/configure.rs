use actix_web::{
    Responder,
    web::{self, Data},
};
use footy_lib::{Database, table::TableConfig};
use tracing_actix_web::RequestId;

use crate::{FitRequestId as _, FootyErrorKind, FootyResponse};

/// The actix route handler for the Not Found response.
async fn not_found(req_id: RequestId) -> FootyResponse<impl Responder> {
    Err::<String, _>(FootyErrorKind::EndpointNotFound).fit(req_id)
}

/// Registers the API routes and their shared state. Used by both the server binary and
/// the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig, db: Database, table_config: TableConfig) {
    cfg.app_data(Data::new(db))
        .app_data(Data::new(table_config))
        .service(crate::api_route())
        .default_service(web::to(not_found));
}
