//! Create fotos_laudo table.
//!
//! Foreign key cascades so deleting a laudo removes its photo metadata.

use sea_orm_migration::prelude::*;

use super::m20260301_000002_create_laudos::Laudos;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FotosLaudo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FotosLaudo::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FotosLaudo::LaudoId).integer().not_null())
                    .col(ColumnDef::new(FotosLaudo::NomeArquivo).string().not_null())
                    .col(
                        ColumnDef::new(FotosLaudo::CaminhoArquivo)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FotosLaudo::TamanhoArquivo)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(FotosLaudo::TipoMime).string())
                    .col(ColumnDef::new(FotosLaudo::Descricao).text())
                    .col(
                        ColumnDef::new(FotosLaudo::CriadoEm)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fotos_laudo_laudo_id")
                            .from(FotosLaudo::Table, FotosLaudo::LaudoId)
                            .to(Laudos::Table, Laudos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_fotos_laudo_laudo_id")
                    .table(FotosLaudo::Table)
                    .col(FotosLaudo::LaudoId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FotosLaudo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FotosLaudo {
    Table,
    Id,
    LaudoId,
    NomeArquivo,
    CaminhoArquivo,
    TamanhoArquivo,
    TipoMime,
    Descricao,
    CriadoEm,
}
