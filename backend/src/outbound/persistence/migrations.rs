//! Embedded schema migrations.

use diesel::Connection;
use diesel_async::AsyncPgConnection;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Failure while applying migrations.
#[derive(Debug, thiserror::Error)]
#[error("database migration failed: {message}")]
pub struct MigrationError {
    message: String,
}

impl MigrationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Apply every pending migration to the database at `database_url`.
///
/// The migration harness is synchronous, so the work runs on a blocking
/// thread through diesel-async's connection wrapper.
///
/// # Errors
///
/// Returns [`MigrationError`] when the connection fails or a migration
/// cannot be applied.
pub async fn run_migrations(database_url: &str) -> Result<(), MigrationError> {
    let url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || -> Result<usize, MigrationError> {
        let mut conn = AsyncConnectionWrapper::<AsyncPgConnection>::establish(&url)
            .map_err(|err| MigrationError::new(err.to_string()))?;
        let versions = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| MigrationError::new(err.to_string()))?;
        Ok(versions.len())
    })
    .await
    .map_err(|err| MigrationError::new(err.to_string()))??;

    info!(applied, "database migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    const CREATE_PERSONS: &str =
        include_str!("../../../migrations/2024-05-01-000000_create_persons/up.sql");

    #[rstest]
    fn person_names_use_bytewise_collation() {
        assert!(CREATE_PERSONS.contains(r#"name VARCHAR(50) COLLATE "C" NOT NULL"#));
    }
}
