use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "token_account")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: i32,
    pub balance: i64,
    pub lifetime_purchased: i64,
    pub lifetime_spent: i64,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pitchpass_user::Entity",
        from = "Column::UserId",
        to = "super::pitchpass_user::Column::Id"
    )]
    PitchpassUser,
}

impl Related<super::pitchpass_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PitchpassUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
