mod base;

use actix_http::StatusCode;
use actix_web::test;

#[tokio::test]
#[ignore = "requires a running MariaDB (set DATABASE_URL)"]
async fn test_not_found() -> anyhow::Result<()> {
    base::with_db(|db| async move {
        let app = base::get_app(db).await;
        let req = test::TestRequest::get().uri("/nothing/here").to_request();

        let resp = test::call_service(&app, req).await;
        let status_code = resp.status();

        let body = test::read_body(resp).await;
        let error: base::ErrorResponse = base::try_from_slice(&body)?;

        assert_eq!(status_code, StatusCode::NOT_FOUND);
        assert_eq!(error.r#type, 301);
        assert_eq!(error.message, "not found");
        assert!(!error.request_id.is_empty());

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
#[ignore = "requires a running MariaDB (set DATABASE_URL)"]
async fn test_info() -> anyhow::Result<()> {
    #[derive(serde::Deserialize)]
    struct InfoResponse {
        service_name: String,
        api_version: String,
    }

    base::with_db(|db| async move {
        let app = base::get_app(db).await;
        let req = test::TestRequest::get().uri("/info").to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();

        let body = test::read_body(resp).await;
        let body: InfoResponse = base::try_from_slice(&body)?;

        assert_eq!(status, 200);
        assert_eq!(body.service_name, "footy-api");
        assert!(!body.api_version.is_empty());

        anyhow::Ok(())
    })
    .await
}
