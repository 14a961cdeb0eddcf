use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "scouting_message")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub inquiry_id: i32,
    pub sender_id: i32,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::scouting_inquiry::Entity",
        from = "Column::InquiryId",
        to = "super::scouting_inquiry::Column::Id"
    )]
    ScoutingInquiry,
}

impl Related<super::scouting_inquiry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScoutingInquiry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
