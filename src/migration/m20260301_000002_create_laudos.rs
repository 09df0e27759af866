//! Create laudos table.
//!
//! Checklist columns default to the "no defect found" baseline so a row
//! created with no answered fields scores 100.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Laudos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Laudos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // Identificação do veículo
                    .col(ColumnDef::new(Laudos::Placa).string().not_null())
                    .col(ColumnDef::new(Laudos::Vin).string().not_null())
                    .col(ColumnDef::new(Laudos::Motor).string())
                    .col(ColumnDef::new(Laudos::AnoModelo).string())
                    .col(
                        ColumnDef::new(Laudos::CrlvOk)
                            .string()
                            .not_null()
                            .default("Sim"),
                    )
                    .col(
                        ColumnDef::new(Laudos::HistoricoRisco)
                            .string()
                            .not_null()
                            .default("Não"),
                    )
                    // Estrutura física
                    .col(
                        ColumnDef::new(Laudos::Longarinas)
                            .string()
                            .not_null()
                            .default("Íntegra"),
                    )
                    .col(
                        ColumnDef::new(Laudos::Colunas)
                            .string()
                            .not_null()
                            .default("Íntegra"),
                    )
                    .col(
                        ColumnDef::new(Laudos::Cortafogo)
                            .string()
                            .not_null()
                            .default("Original"),
                    )
                    .col(
                        ColumnDef::new(Laudos::ColisaoGrave)
                            .string()
                            .not_null()
                            .default("Não"),
                    )
                    .col(ColumnDef::new(Laudos::ObsEstrutura).text())
                    // Carroceria e pintura
                    .col(ColumnDef::new(Laudos::PinturaEsp).double())
                    .col(
                        ColumnDef::new(Laudos::Tonalidade)
                            .string()
                            .not_null()
                            .default("Não"),
                    )
                    .col(
                        ColumnDef::new(Laudos::VidrosOrig)
                            .string()
                            .not_null()
                            .default("Sim"),
                    )
                    .col(
                        ColumnDef::new(Laudos::FaroisOrig)
                            .string()
                            .not_null()
                            .default("Sim"),
                    )
                    .col(ColumnDef::new(Laudos::ObsPintura).text())
                    // Anti-enchente
                    .col(
                        ColumnDef::new(Laudos::Oxidacao)
                            .string()
                            .not_null()
                            .default("Não"),
                    )
                    .col(
                        ColumnDef::new(Laudos::Carpetes)
                            .string()
                            .not_null()
                            .default("Íntegros"),
                    )
                    .col(
                        ColumnDef::new(Laudos::Odor)
                            .string()
                            .not_null()
                            .default("Não"),
                    )
                    .col(
                        ColumnDef::new(Laudos::EletricoGeral)
                            .string()
                            .not_null()
                            .default("Ok"),
                    )
                    // OBD
                    .col(
                        ColumnDef::new(Laudos::FalhasObd)
                            .string()
                            .not_null()
                            .default("Não"),
                    )
                    .col(ColumnDef::new(Laudos::KmObd).big_integer())
                    .col(
                        ColumnDef::new(Laudos::ConsistenciaKm)
                            .string()
                            .not_null()
                            .default("Sim"),
                    )
                    .col(
                        ColumnDef::new(Laudos::Airbags)
                            .string()
                            .not_null()
                            .default("Ativos"),
                    )
                    .col(ColumnDef::new(Laudos::ObsObd).text())
                    // Mecânica
                    .col(
                        ColumnDef::new(Laudos::Vazamentos)
                            .string()
                            .not_null()
                            .default("Não"),
                    )
                    .col(
                        ColumnDef::new(Laudos::Pneus)
                            .string()
                            .not_null()
                            .default("Uniforme"),
                    )
                    .col(
                        ColumnDef::new(Laudos::Suspensao)
                            .string()
                            .not_null()
                            .default("Ok"),
                    )
                    // Testes funcionais
                    .col(
                        ColumnDef::new(Laudos::Direcao)
                            .string()
                            .not_null()
                            .default("Normal"),
                    )
                    .col(
                        ColumnDef::new(Laudos::Freios)
                            .string()
                            .not_null()
                            .default("Normal"),
                    )
                    .col(
                        ColumnDef::new(Laudos::SistemaEletrico)
                            .string()
                            .not_null()
                            .default("Ok"),
                    )
                    // Conclusão
                    .col(
                        ColumnDef::new(Laudos::StatusVeiculo)
                            .string()
                            .not_null()
                            .default("Sem restrições relevantes"),
                    )
                    .col(ColumnDef::new(Laudos::Inspetor).string().not_null())
                    .col(ColumnDef::new(Laudos::ObservacoesFinais).text())
                    // IPA (computed)
                    .col(ColumnDef::new(Laudos::IpaScore).integer().not_null())
                    .col(ColumnDef::new(Laudos::IpaBadge).string().not_null())
                    .col(ColumnDef::new(Laudos::IpaNotas).json().not_null())
                    // Optimistic concurrency token
                    .col(
                        ColumnDef::new(Laudos::Versao)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Laudos::CriadoEm)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Laudos::AtualizadoEm)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_laudos_placa")
                    .table(Laudos::Table)
                    .col(Laudos::Placa)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_laudos_criado_em")
                    .table(Laudos::Table)
                    .col(Laudos::CriadoEm)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Laudos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Laudos {
    Table,
    Id,
    Placa,
    Vin,
    Motor,
    AnoModelo,
    CrlvOk,
    HistoricoRisco,
    Longarinas,
    Colunas,
    Cortafogo,
    ColisaoGrave,
    ObsEstrutura,
    PinturaEsp,
    Tonalidade,
    VidrosOrig,
    FaroisOrig,
    ObsPintura,
    Oxidacao,
    Carpetes,
    Odor,
    EletricoGeral,
    FalhasObd,
    KmObd,
    ConsistenciaKm,
    Airbags,
    ObsObd,
    Vazamentos,
    Pneus,
    Suspensao,
    Direcao,
    Freios,
    SistemaEletrico,
    StatusVeiculo,
    Inspetor,
    ObservacoesFinais,
    IpaScore,
    IpaBadge,
    IpaNotas,
    Versao,
    CriadoEm,
    AtualizadoEm,
}
