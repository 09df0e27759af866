//! Business logic services.

pub mod auth;
pub mod bootstrap;
pub mod foto;
pub mod inspetor;
pub mod laudo;
pub mod sanitize;
pub mod scoring;
pub mod storage;
pub mod validation;

pub use foto::FotoService;
pub use laudo::LaudoService;
pub use storage::Storage;
