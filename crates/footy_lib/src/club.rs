//! The clubs repository. Reference data for the clubs players support.

use sqlx::MySqlPool;

use crate::error::{FootyError, FootyResult};
use crate::models::Club;

fn validate(club: &Club) -> FootyResult {
    if club.club_name.is_empty() {
        return Err(FootyError::InvalidField("club_name", club.club_name.clone()));
    }
    Ok(())
}

/// Returns the optional club from the provided ID.
pub async fn get(pool: &MySqlPool, id: u32) -> FootyResult<Option<Club>> {
    let r = sqlx::query_as("SELECT * FROM clubs WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(r)
}

/// Returns all clubs, ordered by ID.
pub async fn get_all(pool: &MySqlPool) -> FootyResult<Vec<Club>> {
    let r = sqlx::query_as("SELECT * FROM clubs ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(r)
}

/// Validates then inserts a new club. Fails with
/// [`AlreadyExists`](FootyError::AlreadyExists) if the ID is already taken.
pub async fn create(pool: &MySqlPool, club: &Club) -> FootyResult {
    validate(club)?;
    sqlx::query(
        "INSERT INTO clubs (id, soccerway_id, club_name, uri, country)
        VALUES (?, ?, ?, ?, ?)",
    )
    .bind(club.id)
    .bind(club.soccerway_id)
    .bind(&club.club_name)
    .bind(&club.uri)
    .bind(&club.country)
    .execute(pool)
    .await
    .map_err(|e| FootyError::from_insert("club", e))?;
    Ok(())
}

/// Validates then inserts or replaces a club, keyed on its ID.
pub async fn upsert(pool: &MySqlPool, club: &Club) -> FootyResult {
    validate(club)?;
    sqlx::query(
        "INSERT INTO clubs (id, soccerway_id, club_name, uri, country)
        VALUES (?, ?, ?, ?, ?)
        ON DUPLICATE KEY UPDATE
        soccerway_id = VALUES(soccerway_id), club_name = VALUES(club_name),
        uri = VALUES(uri), country = VALUES(country)",
    )
    .bind(club.id)
    .bind(club.soccerway_id)
    .bind(&club.club_name)
    .bind(&club.uri)
    .bind(&club.country)
    .execute(pool)
    .await?;
    Ok(())
}

/// Deletes the club with the provided ID. Deleting a non-existent club is a no-op.
pub async fn delete(pool: &MySqlPool, id: u32) -> FootyResult {
    sqlx::query("DELETE FROM clubs WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Deletes all clubs.
pub async fn delete_all(pool: &MySqlPool) -> FootyResult {
    sqlx::query("DELETE FROM clubs").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::error::FootyError;
    use crate::models::Club;

    #[test]
    fn rejects_an_empty_club_name() {
        let club = Club {
            id: 1,
            soccerway_id: None,
            club_name: String::new(),
            uri: None,
            country: None,
        };
        assert!(matches!(
            validate(&club),
            Err(FootyError::InvalidField("club_name", _))
        ));
    }
}
