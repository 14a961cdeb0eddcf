use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "embassy_verification")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub document_id: i32,
    pub status: String,
    #[sea_orm(unique)]
    pub verification_code: String,
    pub reviewer_id: Option<i32>,
    pub notes: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::compliance_document::Entity",
        from = "Column::DocumentId",
        to = "super::compliance_document::Column::Id"
    )]
    ComplianceDocument,
}

impl Related<super::compliance_document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ComplianceDocument.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
