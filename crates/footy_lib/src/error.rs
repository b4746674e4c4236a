//! A module containing the [`FootyError`] struct, which contains various basic error types.

/// Represents any type of error that could happen when using this crate.
#[derive(thiserror::Error, Debug)]
#[rustfmt::skip]
pub enum FootyError {
    // --------
    // --- Internal server errors
    // --------

    /// An error that happened when interacting with the MySQL/MariaDB database.
    #[error(transparent)]
    MySql(#[from] sqlx::Error),

    // --------
    // --- Logical errors
    // --------

    /// A field of an entity was rejected by validation before a write.
    #[error("invalid {0} value: `{1}`")]
    InvalidField(
        /// The name of the field.
        &'static str,
        /// The rejected value, formatted for display.
        String,
    ),
    /// A `create` collided with an entity that already has the same natural key.
    #[error("{0} already exists")]
    AlreadyExists(
        /// The entity name.
        &'static str,
    ),
    /// The player with the provided ID or login was not found.
    #[error("player `{0}` not found in database")]
    PlayerNotFound(
        /// The player ID or login.
        String,
    ),
    /// The provided table kind is not one of the five known tables.
    #[error("unknown table `{0}`")]
    UnknownTable(
        /// The requested table name.
        String,
    ),
}

impl FootyError {
    /// Maps an insertion error, turning a unique-key violation into
    /// [`AlreadyExists`](Self::AlreadyExists) and forwarding anything else untouched.
    pub fn from_insert(entity: &'static str, err: sqlx::Error) -> Self {
        match err.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => Self::AlreadyExists(entity),
            _ => {
                tracing::error!("error inserting {entity}: {err}");
                Self::MySql(err)
            }
        }
    }
}

/// Represents the result of a computation that could return a [`FootyError`].
pub type FootyResult<T = ()> = Result<T, FootyError>;
