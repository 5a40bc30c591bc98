//! Shared test setup: an in-memory database carrying the seed data.

use ludoteca::{config::Config, database, state::AppState};
use migration::{Migrator, MigratorTrait};

/// Fresh application state over its own in-memory SQLite database,
/// migrated and seeded exactly like a first startup.
pub async fn test_state() -> AppState {
    let db = database::connection::establish_connection("sqlite::memory:")
        .await
        .expect("in-memory database");
    Migrator::up(&db, None).await.expect("migrations");
    database::seed::seed_if_empty(&db).await.expect("seed data");

    AppState {
        db,
        config: Config {
            port: 0,
            database_url: "sqlite::memory:".to_string(),
        },
    }
}
