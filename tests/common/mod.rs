//! Shared test fixtures: in-memory database plus a temporary uploads
//! directory.

// Each test binary uses a different subset of the fixtures
#![allow(dead_code)]

use serde_json::{Value, json};
use tempfile::TempDir;

use laudo_server_lib::db::DbPool;
use laudo_server_lib::services::{FotoService, LaudoService, Storage};

pub struct TestCtx {
    pub pool: DbPool,
    pub storage: Storage,
    pub laudos: LaudoService,
    pub fotos: FotoService,
    // Held so the uploads directory outlives the test
    #[allow(dead_code)]
    pub uploads: TempDir,
}

pub async fn setup() -> TestCtx {
    let pool = DbPool::connect("sqlite::memory:")
        .await
        .expect("connect in-memory database");
    pool.migrate().await.expect("run migrations");

    let uploads = TempDir::new().expect("create uploads dir");
    let storage = Storage::new(uploads.path()).await.expect("init storage");

    TestCtx {
        laudos: LaudoService::new(pool.clone(), storage.clone()),
        fotos: FotoService::new(pool.clone(), storage.clone()),
        pool,
        storage,
        uploads,
    }
}

/// A fully clean checklist: every answer at its baseline, score 100.
pub fn laudo_limpo() -> Value {
    json!({
        "placa": "ABC1D23",
        "vin": "9BWZZZ377VT004251",
        "inspetor": "Carlos Pereira",
        "crlvOk": "Sim",
        "historicoRisco": "Não",
        "longarinas": "Íntegra",
        "colunas": "Íntegra",
        "cortafogo": "Original",
        "colisaoGrave": "Não",
        "tonalidade": "Não",
        "vidrosOrig": "Sim",
        "faroisOrig": "Sim",
        "pinturaEsp": 120,
        "oxidacao": "Não",
        "carpetes": "Íntegros",
        "odor": "Não",
        "eletricoGeral": "Ok",
        "falhasObd": "Não",
        "kmObd": 45000,
        "consistenciaKm": "Sim",
        "airbags": "Ativos",
        "vazamentos": "Não",
        "pneus": "Uniforme",
        "suspensao": "Ok",
        "direcao": "Normal",
        "freios": "Normal",
        "sistemaEletrico": "Ok",
        "statusVeiculo": "Sem restrições relevantes"
    })
}
