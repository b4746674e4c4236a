//! This module contains utility functions used to retrieve some objects from the
//! database, that must exist. This is why it is called `must`.
//!
//! Unlike the Rust conventions, when such an object doesn't exist, the returned value
//! isn't `Option::None` but the corresponding error (for example,
//! `FootyError::PlayerNotFound`). This makes the code cleaner at the points where a
//! route is called with a reference to something that should already be registered.

use sqlx::MySqlPool;

use crate::error::{FootyError, FootyResult};
use crate::models::Player;
use crate::player;

/// Returns the player in the database bound to the provided ID or login.
pub async fn have_player(pool: &MySqlPool, id_or_login: &str) -> FootyResult<Player> {
    player::get_by_id_or_login(pool, id_or_login)
        .await?
        .ok_or_else(|| FootyError::PlayerNotFound(id_or_login.to_owned()))
}
