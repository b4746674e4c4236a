//! The outcomes repository.
//!
//! An outcome is one player's recorded participation for one game day. The composite
//! (game day, player) key means `create` rejects a second row for the same pair while
//! `upsert` replaces it.

use sqlx::MySqlPool;

use crate::error::{FootyError, FootyResult};
use crate::models::Outcome;

fn validate(outcome: &Outcome) -> FootyResult {
    if outcome.game_day_id == 0 {
        return Err(FootyError::InvalidField(
            "game_day_id",
            outcome.game_day_id.to_string(),
        ));
    }
    if outcome.player_id == 0 {
        return Err(FootyError::InvalidField(
            "player_id",
            outcome.player_id.to_string(),
        ));
    }
    if let Some(points) = outcome.points {
        if points < 0 {
            return Err(FootyError::InvalidField("points", points.to_string()));
        }
    }
    Ok(())
}

/// Returns the optional outcome of the provided player on the provided game day.
pub async fn get(pool: &MySqlPool, game_day_id: u32, player_id: u32) -> FootyResult<Option<Outcome>> {
    let r = sqlx::query_as("SELECT * FROM outcomes WHERE game_day_id = ? AND player_id = ?")
        .bind(game_day_id)
        .bind(player_id)
        .fetch_optional(pool)
        .await?;
    Ok(r)
}

/// Returns all outcomes.
pub async fn get_all(pool: &MySqlPool) -> FootyResult<Vec<Outcome>> {
    let r = sqlx::query_as("SELECT * FROM outcomes ORDER BY game_day_id, player_id")
        .fetch_all(pool)
        .await?;
    Ok(r)
}

/// Returns all outcomes recorded for the provided game day.
pub async fn get_by_game_day(pool: &MySqlPool, game_day_id: u32) -> FootyResult<Vec<Outcome>> {
    let r = sqlx::query_as("SELECT * FROM outcomes WHERE game_day_id = ? ORDER BY player_id")
        .bind(game_day_id)
        .fetch_all(pool)
        .await?;
    Ok(r)
}

/// Returns all outcomes recorded for the provided player.
pub async fn get_by_player(pool: &MySqlPool, player_id: u32) -> FootyResult<Vec<Outcome>> {
    let r = sqlx::query_as("SELECT * FROM outcomes WHERE player_id = ? ORDER BY game_day_id")
        .bind(player_id)
        .fetch_all(pool)
        .await?;
    Ok(r)
}

/// Returns the player's form: their most recent outcomes strictly before the game day
/// with the ID `until_game_day_id`, most recent first, at most `limit` of them.
///
/// An `until_game_day_id` of 0 means no boundary, which gives the player's current form.
pub async fn get_player_form(
    pool: &MySqlPool,
    player_id: u32,
    until_game_day_id: u32,
    limit: u32,
) -> FootyResult<Vec<Outcome>> {
    let r = sqlx::query_as(
        "SELECT * FROM outcomes
        WHERE player_id = ? AND (? = 0 OR game_day_id < ?)
        ORDER BY game_day_id DESC
        LIMIT ?",
    )
    .bind(player_id)
    .bind(until_game_day_id)
    .bind(until_game_day_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(r)
}

/// Returns the most recent outcome in which the provided player actually played, or
/// `None` if they never played.
pub async fn get_player_last_played(
    pool: &MySqlPool,
    player_id: u32,
) -> FootyResult<Option<Outcome>> {
    let r = sqlx::query_as(
        "SELECT * FROM outcomes
        WHERE player_id = ? AND points IS NOT NULL
        ORDER BY game_day_id DESC
        LIMIT 1",
    )
    .bind(player_id)
    .fetch_optional(pool)
    .await?;
    Ok(r)
}

/// Returns the distinct years in which the provided player played a game, ascending.
pub async fn get_player_years_active(pool: &MySqlPool, player_id: u32) -> FootyResult<Vec<i32>> {
    let years: Vec<i64> = sqlx::query_scalar(
        "SELECT DISTINCT CAST(YEAR(g.game_date) AS SIGNED)
        FROM outcomes o
        INNER JOIN game_days g ON g.id = o.game_day_id
        WHERE o.player_id = ? AND o.points IS NOT NULL AND g.game_date IS NOT NULL
        ORDER BY 1",
    )
    .bind(player_id)
    .fetch_all(pool)
    .await?;
    Ok(years.into_iter().map(|year| year as i32).collect())
}

/// Validates then inserts a new outcome. Fails with
/// [`AlreadyExists`](FootyError::AlreadyExists) if the (game day, player) pair already
/// has one.
pub async fn create(pool: &MySqlPool, outcome: &Outcome) -> FootyResult {
    validate(outcome)?;
    sqlx::query(
        "INSERT INTO outcomes
        (game_day_id, player_id, response, response_time, points, team, comment,
         `pub`, paid, goalie)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(outcome.game_day_id)
    .bind(outcome.player_id)
    .bind(outcome.response)
    .bind(outcome.response_time)
    .bind(outcome.points)
    .bind(outcome.team.map(|t| t.as_str()))
    .bind(&outcome.comment)
    .bind(outcome.r#pub)
    .bind(outcome.paid)
    .bind(outcome.goalie)
    .execute(pool)
    .await
    .map_err(|e| FootyError::from_insert("outcome", e))?;
    Ok(())
}

/// Validates then inserts or replaces an outcome, keyed on the (game day, player) pair.
pub async fn upsert(pool: &MySqlPool, outcome: &Outcome) -> FootyResult {
    validate(outcome)?;
    sqlx::query(
        "INSERT INTO outcomes
        (game_day_id, player_id, response, response_time, points, team, comment,
         `pub`, paid, goalie)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON DUPLICATE KEY UPDATE
        response = VALUES(response), response_time = VALUES(response_time),
        points = VALUES(points), team = VALUES(team), comment = VALUES(comment),
        `pub` = VALUES(`pub`), paid = VALUES(paid), goalie = VALUES(goalie)",
    )
    .bind(outcome.game_day_id)
    .bind(outcome.player_id)
    .bind(outcome.response)
    .bind(outcome.response_time)
    .bind(outcome.points)
    .bind(outcome.team.map(|t| t.as_str()))
    .bind(&outcome.comment)
    .bind(outcome.r#pub)
    .bind(outcome.paid)
    .bind(outcome.goalie)
    .execute(pool)
    .await?;
    Ok(())
}

/// Deletes the outcome of the provided player on the provided game day. Deleting a
/// non-existent outcome is a no-op.
pub async fn delete(pool: &MySqlPool, game_day_id: u32, player_id: u32) -> FootyResult {
    sqlx::query("DELETE FROM outcomes WHERE game_day_id = ? AND player_id = ?")
        .bind(game_day_id)
        .bind(player_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Deletes all outcomes.
pub async fn delete_all(pool: &MySqlPool) -> FootyResult {
    sqlx::query("DELETE FROM outcomes").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::error::FootyError;
    use crate::models::{Outcome, Response, Team};

    fn default_outcome() -> Outcome {
        Outcome {
            game_day_id: 1,
            player_id: 12,
            response: Some(Response::Yes),
            response_time: None,
            points: Some(3),
            team: Some(Team::A),
            comment: None,
            r#pub: true,
            paid: false,
            goalie: false,
        }
    }

    #[test]
    fn accepts_a_valid_outcome() {
        assert!(validate(&default_outcome()).is_ok());
    }

    #[test]
    fn accepts_an_outcome_without_points() {
        let outcome = Outcome {
            points: None,
            ..default_outcome()
        };
        assert!(validate(&outcome).is_ok());
    }

    #[test]
    fn rejects_negative_points() {
        let outcome = Outcome {
            points: Some(-1),
            ..default_outcome()
        };
        assert!(matches!(
            validate(&outcome),
            Err(FootyError::InvalidField("points", _))
        ));
    }

    #[test]
    fn rejects_zero_ids() {
        let outcome = Outcome {
            game_day_id: 0,
            ..default_outcome()
        };
        assert!(validate(&outcome).is_err());

        let outcome = Outcome {
            player_id: 0,
            ..default_outcome()
        };
        assert!(validate(&outcome).is_err());
    }
}
