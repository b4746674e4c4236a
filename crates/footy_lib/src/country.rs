//! The countries repository. Reference data for nationality display.

use sqlx::MySqlPool;

use crate::error::{FootyError, FootyResult};
use crate::models::Country;

/// The GB home-nation codes the group uses on top of plain ISO 3166-1 alpha-2.
const HOME_NATIONS: [&str; 4] = ["GB-ENG", "GB-NIR", "GB-SCT", "GB-WLS"];

/// Returns whether the provided ISO code is recognized: either a plain ISO 3166-1
/// alpha-2 code (two uppercase ASCII letters) or one of the GB home-nation codes.
pub fn is_recognized_code(iso_code: &str) -> bool {
    HOME_NATIONS.contains(&iso_code)
        || (iso_code.len() == 2 && iso_code.bytes().all(|b| b.is_ascii_uppercase()))
}

fn validate(country: &Country) -> FootyResult {
    if !is_recognized_code(&country.iso_code) {
        return Err(FootyError::InvalidField(
            "iso_code",
            country.iso_code.clone(),
        ));
    }
    Ok(())
}

/// Returns the optional country from the provided ISO code.
pub async fn get(pool: &MySqlPool, iso_code: &str) -> FootyResult<Option<Country>> {
    let r = sqlx::query_as("SELECT * FROM countries WHERE iso_code = ?")
        .bind(iso_code)
        .fetch_optional(pool)
        .await?;
    Ok(r)
}

/// Returns all countries, ordered by ISO code.
pub async fn get_all(pool: &MySqlPool) -> FootyResult<Vec<Country>> {
    let r = sqlx::query_as("SELECT * FROM countries ORDER BY iso_code")
        .fetch_all(pool)
        .await?;
    Ok(r)
}

/// Validates then inserts a new country. Fails with
/// [`AlreadyExists`](FootyError::AlreadyExists) if the ISO code is already registered.
pub async fn create(pool: &MySqlPool, country: &Country) -> FootyResult {
    validate(country)?;
    sqlx::query("INSERT INTO countries (iso_code, name) VALUES (?, ?)")
        .bind(&country.iso_code)
        .bind(&country.name)
        .execute(pool)
        .await
        .map_err(|e| FootyError::from_insert("country", e))?;
    Ok(())
}

/// Validates then inserts or replaces a country, keyed on its ISO code.
pub async fn upsert(pool: &MySqlPool, country: &Country) -> FootyResult {
    validate(country)?;
    sqlx::query(
        "INSERT INTO countries (iso_code, name) VALUES (?, ?)
        ON DUPLICATE KEY UPDATE name = VALUES(name)",
    )
    .bind(&country.iso_code)
    .bind(&country.name)
    .execute(pool)
    .await?;
    Ok(())
}

/// Deletes the country with the provided ISO code. Deleting a non-existent country is
/// a no-op.
pub async fn delete(pool: &MySqlPool, iso_code: &str) -> FootyResult {
    sqlx::query("DELETE FROM countries WHERE iso_code = ?")
        .bind(iso_code)
        .execute(pool)
        .await?;
    Ok(())
}

/// Deletes all countries.
pub async fn delete_all(pool: &MySqlPool) -> FootyResult {
    sqlx::query("DELETE FROM countries").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{is_recognized_code, validate};
    use crate::error::FootyError;
    use crate::models::Country;

    #[test]
    fn recognizes_home_nations_and_alpha2_codes() {
        for code in ["GB-ENG", "GB-NIR", "GB-SCT", "GB-WLS", "FR", "DE", "BR"] {
            assert!(is_recognized_code(code), "{code} should be recognized");
        }
    }

    #[test]
    fn rejects_unrecognized_codes() {
        for code in ["ZZZ", "fr", "G", "", "GB-LDN", "F1"] {
            assert!(!is_recognized_code(code), "{code} should not be recognized");
        }
    }

    #[test]
    fn validation_rejects_an_unrecognized_code() {
        let country = Country {
            iso_code: "ZZZ".to_owned(),
            name: "Nowhere".to_owned(),
        };
        assert!(matches!(
            validate(&country),
            Err(FootyError::InvalidField("iso_code", _))
        ));
    }
}
