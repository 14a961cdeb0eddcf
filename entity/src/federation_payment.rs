use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "federation_payment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub federation: String,
    pub description: String,
    /// Amount in minor currency units
    pub amount: i64,
    pub currency: String,
    pub paid_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
