mod base;

use actix_http::StatusCode;
use actix_web::test;
use footy_lib::models::{Arse, Player};
use footy_lib::{arse, player};

fn make_player(id: u32) -> Player {
    Player {
        id,
        login: format!("player_{id}"),
        first_name: format!("Player{id}"),
        last_name: "Tester".to_owned(),
        email: None,
        born: None,
        joined: None,
        finished: None,
        comment: None,
        anonymous: false,
        admin: false,
        introduced_by: None,
    }
}

fn make_arse(player_id: u32, rater_id: u32) -> Arse {
    Arse {
        player_id,
        rater_id,
        stamp: chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap(),
        in_goal: 3,
        running: 7,
        shooting: 5,
        passing: 6,
        ball_skill: 5,
        attacking: 4,
        defending: 8,
    }
}

#[tokio::test]
#[ignore = "requires a running MariaDB (set DATABASE_URL)"]
async fn test_arse_crud() -> anyhow::Result<()> {
    base::with_db(|db| async move {
        for id in 1..=3 {
            player::create(&db.mysql_pool, &make_player(id)).await?;
        }
        arse::create(&db.mysql_pool, &make_arse(1, 2)).await?;
        arse::create(&db.mysql_pool, &make_arse(1, 3)).await?;
        arse::create(&db.mysql_pool, &make_arse(2, 3)).await?;

        assert_eq!(arse::get_all(&db.mysql_pool).await?.len(), 3);
        assert_eq!(arse::get_by_player(&db.mysql_pool, 1).await?.len(), 2);
        assert_eq!(arse::get_by_rater(&db.mysql_pool, 3).await?.len(), 2);

        let app = base::get_app(db).await;

        let req = test::TestRequest::get().uri("/arse/1/2").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body = test::read_body(resp).await;
        let rating: Arse = base::try_from_slice(&body)?;
        assert_eq!(rating.defending, 8);

        let req = test::TestRequest::get().uri("/arse/3/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        // A dimension outside 0..=10 is rejected with a validation error.
        let invalid = Arse {
            shooting: 11,
            ..make_arse(3, 1)
        };
        let req = test::TestRequest::post()
            .uri("/arse")
            .set_json(invalid)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        let error: base::ErrorResponse = base::try_from_slice(&body)?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error.r#type, 303);

        // A rater only gets one row per player: upserting replaces it.
        let revised = Arse {
            running: 2,
            ..make_arse(1, 2)
        };
        let req = test::TestRequest::put()
            .uri("/arse")
            .set_json(revised)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let req = test::TestRequest::get().uri("/arse/1/2").to_request();
        let resp = test::call_service(&app, req).await;
        let body = test::read_body(resp).await;
        let rating: Arse = base::try_from_slice(&body)?;
        assert_eq!(rating.running, 2);

        // Deleting a rating that does not exist is a no-op.
        let req = test::TestRequest::delete().uri("/arse/3/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        anyhow::Ok(())
    })
    .await
}
