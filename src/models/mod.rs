//! Domain models and DTOs.

pub mod auth;
pub mod foto;
pub mod inspetor;
pub mod laudo;

pub use auth::{Claims, LoginRequest, LoginResponse};
pub use foto::{FalhaUpload, FotoResponse, UploadOutcome, UploadedFoto};
pub use inspetor::{AtualizarInspetorRequest, CriarInspetorRequest, InspetorResponse};
pub use laudo::{IpaBadge, IpaResult, LaudoData, LaudoResponse};
