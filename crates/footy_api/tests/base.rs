#![allow(dead_code)]

use std::future::Future;

use actix_http::Request;
use actix_web::{
    App, Error,
    body::MessageBody,
    dev::{Service, ServiceResponse},
    test,
};
use footy_lib::{Database, table::TableConfig};
use test_env::IntoResult;
use tracing_actix_web::TracingLogger;

use footy_api_lib::configure;

#[derive(Debug, serde::Deserialize)]
pub struct ErrorResponse {
    pub request_id: String,
    pub r#type: i32,
    pub message: String,
}

pub async fn with_db<F, Fut, R>(test: F) -> anyhow::Result<<R as IntoResult>::Out>
where
    F: FnOnce(Database) -> Fut,
    Fut: Future<Output = R>,
    R: IntoResult,
{
    test_env::wrap(test).await
}

pub async fn get_app(
    db: Database,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(TracingLogger::default())
            .configure(|cfg| configure::configure(cfg, db.clone(), TableConfig::default())),
    )
    .await
}

pub fn try_from_slice<T: serde::de::DeserializeOwned>(slice: &[u8]) -> anyhow::Result<T> {
    serde_json::from_slice(slice).map_err(|e| {
        anyhow::anyhow!(
            "invalid JSON returned by the API: {e}\n{}",
            String::from_utf8_lossy(slice)
        )
    })
}
