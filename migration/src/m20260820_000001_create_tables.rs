use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::TransactionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        let txn = conn.begin().await?;
        create_catalog_tables(&txn).await?;
        create_user_tables(&txn).await?;
        create_indexes(&txn).await?;
        txn.commit().await?;

        Ok(())
    }
}

/// Catalog side: genres, developers and the videogames that reference them.
async fn create_catalog_tables<C>(conn: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"CREATE TABLE "genres" (
            "id" INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            "name" TEXT NOT NULL,
            "description" TEXT NOT NULL,
            "image_url" TEXT,
            "created_at" INTEGER DEFAULT (strftime('%s', 'now')),
            "updated_at" INTEGER DEFAULT (strftime('%s', 'now'))
        )"#,
    ))
    .await?;

    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"CREATE TABLE "developers" (
            "id" INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            "name" TEXT NOT NULL,
            "image_url" TEXT,
            "created_at" INTEGER DEFAULT (strftime('%s', 'now')),
            "updated_at" INTEGER DEFAULT (strftime('%s', 'now'))
        )"#,
    ))
    .await?;

    // Deleting a genre or developer orphans its games instead of removing them.
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"CREATE TABLE "videogames" (
            "id" INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            "title" TEXT NOT NULL,
            "description" TEXT,
            "cover_url" TEXT,
            "genre_id" INTEGER,
            "developer_id" INTEGER,
            "created_at" INTEGER DEFAULT (strftime('%s', 'now')),
            "updated_at" INTEGER DEFAULT (strftime('%s', 'now')),
            FOREIGN KEY("genre_id") REFERENCES "genres"("id") ON DELETE SET NULL,
            FOREIGN KEY("developer_id") REFERENCES "developers"("id") ON DELETE SET NULL
        )"#,
    ))
    .await?;

    Ok(())
}

/// User side: accounts, reviews and the owned-games link table.
async fn create_user_tables<C>(conn: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"CREATE TABLE "users" (
            "id" INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            "nick" TEXT NOT NULL,
            "email" TEXT NOT NULL,
            "nif" TEXT,
            "password_hash" TEXT NOT NULL,
            "created_at" INTEGER DEFAULT (strftime('%s', 'now')),
            "updated_at" INTEGER DEFAULT (strftime('%s', 'now'))
        )"#,
    ))
    .await?;

    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"CREATE TABLE "reviews" (
            "id" INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            "rating" REAL NOT NULL,
            "comment" TEXT,
            "user_id" INTEGER NOT NULL,
            "videogame_id" INTEGER NOT NULL,
            "created_at" INTEGER DEFAULT (strftime('%s', 'now')),
            "updated_at" INTEGER DEFAULT (strftime('%s', 'now')),
            FOREIGN KEY("user_id") REFERENCES "users"("id") ON DELETE CASCADE,
            FOREIGN KEY("videogame_id") REFERENCES "videogames"("id") ON DELETE CASCADE
        )"#,
    ))
    .await?;

    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"CREATE TABLE "user_games" (
            "user_id" INTEGER NOT NULL,
            "videogame_id" INTEGER NOT NULL,
            "created_at" INTEGER DEFAULT (strftime('%s', 'now')),
            PRIMARY KEY ("user_id", "videogame_id"),
            FOREIGN KEY("user_id") REFERENCES "users"("id") ON DELETE CASCADE,
            FOREIGN KEY("videogame_id") REFERENCES "videogames"("id") ON DELETE CASCADE
        )"#,
    ))
    .await?;

    Ok(())
}

async fn create_indexes<C>(conn: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    // One review per user per game, enforced at the schema level.
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"CREATE UNIQUE INDEX "idx_reviews_user_videogame" ON "reviews" ("user_id", "videogame_id")"#,
    ))
    .await?;

    let indexes = [
        ("idx_videogames_genre_id", "videogames", "genre_id"),
        ("idx_videogames_developer_id", "videogames", "developer_id"),
        ("idx_reviews_videogame_id", "reviews", "videogame_id"),
        ("idx_user_games_videogame_id", "user_games", "videogame_id"),
    ];

    for (index_name, table_name, column_name) in &indexes {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            format!(
                r#"CREATE INDEX IF NOT EXISTS "{}" ON "{}" ("{}")"#,
                index_name, table_name, column_name
            ),
        ))
        .await?;
    }

    Ok(())
}
