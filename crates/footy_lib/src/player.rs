//! The players repository.
//!
//! Players are never hard-deleted in normal operation: retirement sets the `finished`
//! date, and the `active` filter of [`get_all`] excludes retired players.

use sqlx::MySqlPool;

use crate::error::{FootyError, FootyResult};
use crate::models::{Club, Country, Player};

fn validate(player: &Player) -> FootyResult {
    if player.id == 0 {
        return Err(FootyError::InvalidField("id", player.id.to_string()));
    }
    if player.login.is_empty() {
        return Err(FootyError::InvalidField("login", player.login.clone()));
    }
    Ok(())
}

/// Returns the optional player from the provided ID.
pub async fn get(pool: &MySqlPool, id: u32) -> FootyResult<Option<Player>> {
    let r = sqlx::query_as("SELECT * FROM players WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(r)
}

/// Returns the optional player from the provided login.
pub async fn get_by_login(pool: &MySqlPool, login: &str) -> FootyResult<Option<Player>> {
    let r = sqlx::query_as("SELECT * FROM players WHERE login = ?")
        .bind(login)
        .fetch_optional(pool)
        .await?;
    Ok(r)
}

/// Returns the optional player from a string that holds either a player ID or a login.
pub async fn get_by_id_or_login(pool: &MySqlPool, id_or_login: &str) -> FootyResult<Option<Player>> {
    match id_or_login.parse::<u32>() {
        Ok(id) => get(pool, id).await,
        Err(_) => get_by_login(pool, id_or_login).await,
    }
}

/// Returns all players. When `active` is true, only the players with no `finished` date
/// are returned.
pub async fn get_all(pool: &MySqlPool, active: bool) -> FootyResult<Vec<Player>> {
    let query = if active {
        "SELECT * FROM players WHERE finished IS NULL ORDER BY id"
    } else {
        "SELECT * FROM players ORDER BY id"
    };
    let r = sqlx::query_as(query).fetch_all(pool).await?;
    Ok(r)
}

/// Validates then inserts a new player. Fails with
/// [`AlreadyExists`](FootyError::AlreadyExists) if a player with the same ID or login
/// is already registered.
pub async fn create(pool: &MySqlPool, player: &Player) -> FootyResult {
    validate(player)?;
    sqlx::query(
        "INSERT INTO players
        (id, login, first_name, last_name, email, born, joined, finished, comment,
         anonymous, admin, introduced_by)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(player.id)
    .bind(&player.login)
    .bind(&player.first_name)
    .bind(&player.last_name)
    .bind(&player.email)
    .bind(player.born)
    .bind(player.joined)
    .bind(player.finished)
    .bind(&player.comment)
    .bind(player.anonymous)
    .bind(player.admin)
    .bind(player.introduced_by)
    .execute(pool)
    .await
    .map_err(|e| FootyError::from_insert("player", e))?;
    Ok(())
}

/// Validates then inserts or replaces a player, keyed on its ID.
pub async fn upsert(pool: &MySqlPool, player: &Player) -> FootyResult {
    validate(player)?;
    sqlx::query(
        "INSERT INTO players
        (id, login, first_name, last_name, email, born, joined, finished, comment,
         anonymous, admin, introduced_by)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON DUPLICATE KEY UPDATE
        login = VALUES(login), first_name = VALUES(first_name),
        last_name = VALUES(last_name), email = VALUES(email), born = VALUES(born),
        joined = VALUES(joined), finished = VALUES(finished), comment = VALUES(comment),
        anonymous = VALUES(anonymous), admin = VALUES(admin),
        introduced_by = VALUES(introduced_by)",
    )
    .bind(player.id)
    .bind(&player.login)
    .bind(&player.first_name)
    .bind(&player.last_name)
    .bind(&player.email)
    .bind(player.born)
    .bind(player.joined)
    .bind(player.finished)
    .bind(&player.comment)
    .bind(player.anonymous)
    .bind(player.admin)
    .bind(player.introduced_by)
    .execute(pool)
    .await?;
    Ok(())
}

/// Deletes the player with the provided ID. Deleting a non-existent player is a no-op.
pub async fn delete(pool: &MySqlPool, id: u32) -> FootyResult {
    sqlx::query("DELETE FROM players WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Deletes all players.
pub async fn delete_all(pool: &MySqlPool) -> FootyResult {
    sqlx::query("DELETE FROM players").execute(pool).await?;
    Ok(())
}

/// Returns the clubs supported by the player with the provided ID.
pub async fn get_clubs(pool: &MySqlPool, player_id: u32) -> FootyResult<Vec<Club>> {
    let r = sqlx::query_as(
        "SELECT c.* FROM clubs c
        INNER JOIN player_clubs pc ON pc.club_id = c.id
        WHERE pc.player_id = ?
        ORDER BY c.id",
    )
    .bind(player_id)
    .fetch_all(pool)
    .await?;
    Ok(r)
}

/// Returns the nationalities of the player with the provided ID.
pub async fn get_countries(pool: &MySqlPool, player_id: u32) -> FootyResult<Vec<Country>> {
    let r = sqlx::query_as(
        "SELECT c.* FROM countries c
        INNER JOIN player_countries pc ON pc.iso_code = c.iso_code
        WHERE pc.player_id = ?
        ORDER BY c.iso_code",
    )
    .bind(player_id)
    .fetch_all(pool)
    .await?;
    Ok(r)
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::error::FootyError;
    use crate::models::Player;

    fn default_player() -> Player {
        Player {
            id: 1,
            login: "gary".to_owned(),
            first_name: "Gary".to_owned(),
            last_name: "Player".to_owned(),
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

    #[test]
    fn accepts_a_valid_player() {
        assert!(validate(&default_player()).is_ok());
    }

    #[test]
    fn rejects_a_zero_id() {
        let player = Player {
            id: 0,
            ..default_player()
        };
        assert!(matches!(
            validate(&player),
            Err(FootyError::InvalidField("id", _))
        ));
    }

    #[test]
    fn rejects_an_empty_login() {
        let player = Player {
            login: String::new(),
            ..default_player()
        };
        assert!(matches!(
            validate(&player),
            Err(FootyError::InvalidField("login", _))
        ));
    }

    #[test]
    fn anonymous_players_have_no_name() {
        let player = Player {
            anonymous: true,
            ..default_player()
        };
        assert_eq!(player.display_name(), "Anonymous");
        assert_eq!(default_player().display_name(), "Gary Player");
    }
}
