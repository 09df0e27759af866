//! FotoLaudo entity: photo metadata attached to a laudo.
//!
//! Many photos belong to exactly one laudo; deleting the laudo cascades.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fotos_laudo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub laudo_id: i32,

    // File info
    pub nome_arquivo: String,
    /// Storage location reference, relative to the uploads root
    pub caminho_arquivo: String,
    pub tamanho_arquivo: i64,
    pub tipo_mime: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub descricao: Option<String>,

    pub criado_em: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::laudo::Entity",
        from = "Column::LaudoId",
        to = "super::laudo::Column::Id",
        on_delete = "Cascade"
    )]
    Laudo,
}

impl Related<super::laudo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Laudo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
