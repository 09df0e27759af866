//! SeaORM database migrations.
//!
//! Written with the portable schema DSL so they run on PostgreSQL in
//! production and SQLite in tests.

pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_inspetores;
mod m20260301_000002_create_laudos;
mod m20260301_000003_create_fotos_laudo;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_inspetores::Migration),
            Box::new(m20260301_000002_create_laudos::Migration),
            Box::new(m20260301_000003_create_fotos_laudo::Migration),
        ]
    }
}
