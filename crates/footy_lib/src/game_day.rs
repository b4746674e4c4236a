//! The game days repository.

use sqlx::MySqlPool;

use crate::error::{FootyError, FootyResult};
use crate::models::GameDay;

fn validate(game_day: &GameDay) -> FootyResult {
    if game_day.id == 0 {
        return Err(FootyError::InvalidField("id", game_day.id.to_string()));
    }
    if let Some(history) = game_day.picker_games_history {
        if history != 5 && history != 10 {
            return Err(FootyError::InvalidField(
                "picker_games_history",
                history.to_string(),
            ));
        }
    }
    Ok(())
}

/// Returns the optional game day from the provided ID.
pub async fn get(pool: &MySqlPool, id: u32) -> FootyResult<Option<GameDay>> {
    let r = sqlx::query_as("SELECT * FROM game_days WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(r)
}

/// Returns all game days, ordered by ID.
pub async fn get_all(pool: &MySqlPool) -> FootyResult<Vec<GameDay>> {
    let r = sqlx::query_as("SELECT * FROM game_days ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(r)
}

/// Returns the distinct years in which a game was played, ascending. This drives the
/// year-selection controls of the tables.
pub async fn get_years(pool: &MySqlPool) -> FootyResult<Vec<i32>> {
    let years: Vec<i64> = sqlx::query_scalar(
        "SELECT DISTINCT CAST(YEAR(game_date) AS SIGNED) FROM game_days
        WHERE game = TRUE AND game_date IS NOT NULL
        ORDER BY 1",
    )
    .fetch_all(pool)
    .await?;
    Ok(years.into_iter().map(|year| year as i32).collect())
}

/// Validates then inserts a new game day. Fails with
/// [`AlreadyExists`](FootyError::AlreadyExists) if the ID is already taken.
pub async fn create(pool: &MySqlPool, game_day: &GameDay) -> FootyResult {
    validate(game_day)?;
    sqlx::query(
        "INSERT INTO game_days
        (id, game_date, game, mail_sent, comment, bibs, picker_games_history)
        VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(game_day.id)
    .bind(game_day.game_date)
    .bind(game_day.game)
    .bind(game_day.mail_sent)
    .bind(&game_day.comment)
    .bind(game_day.bibs.map(|t| t.as_str()))
    .bind(game_day.picker_games_history)
    .execute(pool)
    .await
    .map_err(|e| FootyError::from_insert("game day", e))?;
    Ok(())
}

/// Validates then inserts or replaces a game day, keyed on its ID.
pub async fn upsert(pool: &MySqlPool, game_day: &GameDay) -> FootyResult {
    validate(game_day)?;
    sqlx::query(
        "INSERT INTO game_days
        (id, game_date, game, mail_sent, comment, bibs, picker_games_history)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        ON DUPLICATE KEY UPDATE
        game_date = VALUES(game_date), game = VALUES(game),
        mail_sent = VALUES(mail_sent), comment = VALUES(comment), bibs = VALUES(bibs),
        picker_games_history = VALUES(picker_games_history)",
    )
    .bind(game_day.id)
    .bind(game_day.game_date)
    .bind(game_day.game)
    .bind(game_day.mail_sent)
    .bind(&game_day.comment)
    .bind(game_day.bibs.map(|t| t.as_str()))
    .bind(game_day.picker_games_history)
    .execute(pool)
    .await?;
    Ok(())
}

/// Deletes the game day with the provided ID. Deleting a non-existent game day is a
/// no-op.
pub async fn delete(pool: &MySqlPool, id: u32) -> FootyResult {
    sqlx::query("DELETE FROM game_days WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Deletes all game days.
pub async fn delete_all(pool: &MySqlPool) -> FootyResult {
    sqlx::query("DELETE FROM game_days").execute(pool).await?;
    Ok(())
}
