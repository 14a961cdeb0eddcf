use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "compliance_document")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub player_id: i32,
    pub period_start: Date,
    pub period_end: Date,
    /// JSON encoded eligibility scores captured at generation time
    #[sea_orm(column_type = "Text")]
    pub eligibility_snapshot: String,
    pub status: String,
    pub created_by: i32,
    pub created_at: DateTime,
    pub submitted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id"
    )]
    Player,
    #[sea_orm(has_one = "super::embassy_verification::Entity")]
    EmbassyVerification,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl Related<super::embassy_verification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmbassyVerification.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
