//! Inspetor entity: credentialed inspector accounts.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "inspetores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nome: String,
    #[sea_orm(unique)]
    pub email: String,

    // Salted SHA-256, hex encoded; never serialized to clients
    pub senha_hash: String,
    pub senha_salt: String,

    pub ativo: bool,
    pub criado_em: DateTimeUtc,
    pub atualizado_em: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
