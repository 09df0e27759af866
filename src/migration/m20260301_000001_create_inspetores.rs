//! Create inspetores table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inspetores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Inspetores::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Inspetores::Nome).string().not_null())
                    .col(
                        ColumnDef::new(Inspetores::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Inspetores::SenhaHash).string().not_null())
                    .col(ColumnDef::new(Inspetores::SenhaSalt).string().not_null())
                    .col(
                        ColumnDef::new(Inspetores::Ativo)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Inspetores::CriadoEm)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Inspetores::AtualizadoEm)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inspetores::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Inspetores {
    Table,
    Id,
    Nome,
    Email,
    SenhaHash,
    SenhaSalt,
    Ativo,
    CriadoEm,
    AtualizadoEm,
}
