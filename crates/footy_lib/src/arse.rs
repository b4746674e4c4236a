//! The arse (peer rating) repository.
//!
//! An arse is a rating of one player by another across seven skill dimensions, each
//! between 0 and 10. The composite (player, rater) key means a player can be rated at
//! most once by a given rater. Rating yourself is allowed.

use sqlx::MySqlPool;

use crate::error::{FootyError, FootyResult};
use crate::models::Arse;

const RATING_RANGE: std::ops::RangeInclusive<u8> = 0..=10;

fn validate(arse: &Arse) -> FootyResult {
    if arse.player_id == 0 {
        return Err(FootyError::InvalidField(
            "player_id",
            arse.player_id.to_string(),
        ));
    }
    if arse.rater_id == 0 {
        return Err(FootyError::InvalidField(
            "rater_id",
            arse.rater_id.to_string(),
        ));
    }
    let dimensions = [
        ("in_goal", arse.in_goal),
        ("running", arse.running),
        ("shooting", arse.shooting),
        ("passing", arse.passing),
        ("ball_skill", arse.ball_skill),
        ("attacking", arse.attacking),
        ("defending", arse.defending),
    ];
    for (field, value) in dimensions {
        if !RATING_RANGE.contains(&value) {
            return Err(FootyError::InvalidField(field, value.to_string()));
        }
    }
    Ok(())
}

/// Returns the optional rating of the provided player by the provided rater.
pub async fn get(pool: &MySqlPool, player_id: u32, rater_id: u32) -> FootyResult<Option<Arse>> {
    let r = sqlx::query_as("SELECT * FROM arses WHERE player_id = ? AND rater_id = ?")
        .bind(player_id)
        .bind(rater_id)
        .fetch_optional(pool)
        .await?;
    Ok(r)
}

/// Returns all ratings.
pub async fn get_all(pool: &MySqlPool) -> FootyResult<Vec<Arse>> {
    let r = sqlx::query_as("SELECT * FROM arses ORDER BY player_id, rater_id")
        .fetch_all(pool)
        .await?;
    Ok(r)
}

/// Returns all ratings received by the provided player.
pub async fn get_by_player(pool: &MySqlPool, player_id: u32) -> FootyResult<Vec<Arse>> {
    let r = sqlx::query_as("SELECT * FROM arses WHERE player_id = ? ORDER BY rater_id")
        .bind(player_id)
        .fetch_all(pool)
        .await?;
    Ok(r)
}

/// Returns all ratings given by the provided rater.
pub async fn get_by_rater(pool: &MySqlPool, rater_id: u32) -> FootyResult<Vec<Arse>> {
    let r = sqlx::query_as("SELECT * FROM arses WHERE rater_id = ? ORDER BY player_id")
        .bind(rater_id)
        .fetch_all(pool)
        .await?;
    Ok(r)
}

/// Validates then inserts a new rating. Fails with
/// [`AlreadyExists`](FootyError::AlreadyExists) if the rater has already rated the
/// player.
pub async fn create(pool: &MySqlPool, arse: &Arse) -> FootyResult {
    validate(arse)?;
    sqlx::query(
        "INSERT INTO arses
        (player_id, rater_id, stamp, in_goal, running, shooting, passing, ball_skill,
         attacking, defending)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(arse.player_id)
    .bind(arse.rater_id)
    .bind(arse.stamp)
    .bind(arse.in_goal)
    .bind(arse.running)
    .bind(arse.shooting)
    .bind(arse.passing)
    .bind(arse.ball_skill)
    .bind(arse.attacking)
    .bind(arse.defending)
    .execute(pool)
    .await
    .map_err(|e| FootyError::from_insert("arse", e))?;
    Ok(())
}

/// Validates then inserts or replaces a rating, keyed on the (player, rater) pair.
pub async fn upsert(pool: &MySqlPool, arse: &Arse) -> FootyResult {
    validate(arse)?;
    sqlx::query(
        "INSERT INTO arses
        (player_id, rater_id, stamp, in_goal, running, shooting, passing, ball_skill,
         attacking, defending)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON DUPLICATE KEY UPDATE
        stamp = VALUES(stamp), in_goal = VALUES(in_goal), running = VALUES(running),
        shooting = VALUES(shooting), passing = VALUES(passing),
        ball_skill = VALUES(ball_skill), attacking = VALUES(attacking),
        defending = VALUES(defending)",
    )
    .bind(arse.player_id)
    .bind(arse.rater_id)
    .bind(arse.stamp)
    .bind(arse.in_goal)
    .bind(arse.running)
    .bind(arse.shooting)
    .bind(arse.passing)
    .bind(arse.ball_skill)
    .bind(arse.attacking)
    .bind(arse.defending)
    .execute(pool)
    .await?;
    Ok(())
}

/// Deletes the rating of the provided player by the provided rater. Deleting a
/// non-existent rating is a no-op.
pub async fn delete(pool: &MySqlPool, player_id: u32, rater_id: u32) -> FootyResult {
    sqlx::query("DELETE FROM arses WHERE player_id = ? AND rater_id = ?")
        .bind(player_id)
        .bind(rater_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Deletes all ratings.
pub async fn delete_all(pool: &MySqlPool) -> FootyResult {
    sqlx::query("DELETE FROM arses").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::error::FootyError;
    use crate::models::Arse;

    fn default_arse() -> Arse {
        Arse {
            player_id: 12,
            rater_id: 12,
            stamp: chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(20, 0, 0)
                .unwrap(),
            in_goal: 10,
            running: 10,
            shooting: 10,
            passing: 10,
            ball_skill: 10,
            attacking: 10,
            defending: 10,
        }
    }

    #[test]
    fn accepts_a_valid_arse() {
        assert!(validate(&default_arse()).is_ok());
    }

    #[test]
    fn accepts_a_self_rating() {
        let arse = default_arse();
        assert_eq!(arse.player_id, arse.rater_id);
        assert!(validate(&arse).is_ok());
    }

    #[test]
    fn rejects_a_dimension_above_10() {
        let arse = Arse {
            shooting: 11,
            ..default_arse()
        };
        assert!(matches!(
            validate(&arse),
            Err(FootyError::InvalidField("shooting", _))
        ));
    }

    #[test]
    fn rejects_zero_ids() {
        let arse = Arse {
            player_id: 0,
            ..default_arse()
        };
        assert!(validate(&arse).is_err());

        let arse = Arse {
            rater_id: 0,
            ..default_arse()
        };
        assert!(validate(&arse).is_err());
    }
}
