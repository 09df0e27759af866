//! SeaORM entity definitions for the laudo database.

pub mod foto_laudo;
pub mod inspetor;
pub mod laudo;
