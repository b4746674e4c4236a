mod base;

use footy_lib::error::FootyError;
use footy_lib::models::{GameDay, Outcome, Player, Response, Team};
use footy_lib::{game_day, outcome, player};

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

fn make_game_day(id: u32) -> GameDay {
    GameDay {
        id,
        game_date: chrono::NaiveDate::from_ymd_opt(2023, 1, id)
            .map(|d| d.and_hms_opt(18, 0, 0).unwrap()),
        game: true,
        mail_sent: None,
        comment: None,
        bibs: None,
        picker_games_history: None,
    }
}

fn make_outcome(game_day_id: u32, player_id: u32) -> Outcome {
    Outcome {
        game_day_id,
        player_id,
        response: Some(Response::Yes),
        response_time: None,
        points: Some(3),
        team: Some(Team::A),
        comment: Some("Test comment".to_owned()),
        r#pub: true,
        paid: false,
        goalie: false,
    }
}

/// Seeds 100 outcomes spread across 10 players and 10 game days.
async fn seed_grid(db: &footy_lib::Database) -> anyhow::Result<()> {
    for id in 1..=10 {
        player::create(&db.mysql_pool, &make_player(id)).await?;
        game_day::create(&db.mysql_pool, &make_game_day(id)).await?;
    }
    for game_day_id in 1..=10 {
        for player_id in 1..=10 {
            outcome::create(&db.mysql_pool, &make_outcome(game_day_id, player_id)).await?;
        }
    }
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running MariaDB (set DATABASE_URL)"]
async fn test_outcomes_by_player_and_game_day() -> anyhow::Result<()> {
    base::with_db(|db| async move {
        seed_grid(&db).await?;

        let by_player = outcome::get_by_player(&db.mysql_pool, 1).await?;
        assert_eq!(by_player.len(), 10);
        assert!(by_player.iter().all(|o| o.player_id == 1));

        let by_player = outcome::get_by_player(&db.mysql_pool, 11).await?;
        assert!(by_player.is_empty());

        let by_game_day = outcome::get_by_game_day(&db.mysql_pool, 1).await?;
        assert_eq!(by_game_day.len(), 10);
        assert!(by_game_day.iter().all(|o| o.game_day_id == 1));

        assert_eq!(outcome::get_all(&db.mysql_pool).await?.len(), 100);

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
#[ignore = "requires a running MariaDB (set DATABASE_URL)"]
async fn test_player_form_window() -> anyhow::Result<()> {
    base::with_db(|db| async move {
        seed_grid(&db).await?;

        // The three outcomes strictly before game day 5, most recent first.
        let form = outcome::get_player_form(&db.mysql_pool, 1, 5, 3).await?;
        let game_days: Vec<_> = form.iter().map(|o| o.game_day_id).collect();
        assert_eq!(game_days, vec![4, 3, 2]);

        // No qualifying outcome before the first game day.
        let form = outcome::get_player_form(&db.mysql_pool, 2, 1, 5).await?;
        assert!(form.is_empty());

        // A boundary of 0 means no boundary.
        let form = outcome::get_player_form(&db.mysql_pool, 1, 0, 3).await?;
        let game_days: Vec<_> = form.iter().map(|o| o.game_day_id).collect();
        assert_eq!(game_days, vec![10, 9, 8]);

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
#[ignore = "requires a running MariaDB (set DATABASE_URL)"]
async fn test_last_played_and_years_active() -> anyhow::Result<()> {
    base::with_db(|db| async move {
        seed_grid(&db).await?;
        player::create(&db.mysql_pool, &make_player(11)).await?;

        let last_played = outcome::get_player_last_played(&db.mysql_pool, 1).await?;
        assert_eq!(last_played.map(|o| o.game_day_id), Some(10));

        let last_played = outcome::get_player_last_played(&db.mysql_pool, 11).await?;
        assert!(last_played.is_none());

        let years = outcome::get_player_years_active(&db.mysql_pool, 1).await?;
        assert_eq!(years, vec![2023]);

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
#[ignore = "requires a running MariaDB (set DATABASE_URL)"]
async fn test_create_upsert_and_delete_semantics() -> anyhow::Result<()> {
    base::with_db(|db| async move {
        seed_grid(&db).await?;

        // `get` on a non-existent pair is an absent result, never an error.
        assert!(outcome::get(&db.mysql_pool, 7, 16).await?.is_none());

        // `create` on an existing pair reports a duplicate.
        let result = outcome::create(&db.mysql_pool, &make_outcome(1, 1)).await;
        assert!(matches!(result, Err(FootyError::AlreadyExists("outcome"))));

        // `upsert` on the same pair replaces the row.
        let updated = Outcome {
            response: Some(Response::No),
            comment: Some("Updated comment".to_owned()),
            ..make_outcome(1, 1)
        };
        outcome::upsert(&db.mysql_pool, &updated).await?;
        let row = outcome::get(&db.mysql_pool, 1, 1).await?.unwrap();
        assert_eq!(row.response, Some(Response::No));
        assert_eq!(row.comment.as_deref(), Some("Updated comment"));

        // Deleting a non-existent pair is a no-op.
        outcome::delete(&db.mysql_pool, 7, 16).await?;
        assert_eq!(outcome::get_all(&db.mysql_pool).await?.len(), 100);

        outcome::delete(&db.mysql_pool, 1, 1).await?;
        assert!(outcome::get(&db.mysql_pool, 1, 1).await?.is_none());

        outcome::delete_all(&db.mysql_pool).await?;
        assert!(outcome::get_all(&db.mysql_pool).await?.is_empty());

        anyhow::Ok(())
    })
    .await
}
