use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "pitchpass_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub display_name: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::token_account::Entity")]
    TokenAccount,
}

impl Related<super::token_account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TokenAccount.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
