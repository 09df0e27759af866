//! Database module providing connection management, migrations, and queries.

pub mod fotos;
pub mod inspetores;
pub mod laudos;

pub use fotos::FotoEntry;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use crate::error::{AppError, AppResult};
use crate::migration::Migrator;

/// Database connection wrapper. SeaORM's `DatabaseConnection` is itself
/// a pool, so this is cheap to clone into handlers and services.
#[derive(Clone)]
pub struct DbPool {
    conn: DatabaseConnection,
}

impl DbPool {
    /// Connect to the database (PostgreSQL in production, SQLite in tests).
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        let mut options = ConnectOptions::new(database_url);

        // An in-memory sqlite database exists per connection; a pool of
        // more than one would hand out empty databases.
        if database_url.starts_with("sqlite") {
            options.max_connections(1);
        }

        let conn = Database::connect(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to database: {}", e)))?;

        Ok(DbPool { conn })
    }

    /// Apply all pending migrations.
    pub async fn migrate(&self) -> AppResult<()> {
        Migrator::up(&self.conn, None)
            .await
            .map_err(|e| AppError::Database(format!("Failed to run migrations: {}", e)))?;
        Ok(())
    }

    /// Get access to the underlying connection for executing queries.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }
}
