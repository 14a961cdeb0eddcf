use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    pub date_of_birth: Date,
    pub nationality: String,
    pub current_club: String,
    pub current_league: String,
    /// League strength tier, 1 (strongest) through 5
    pub league_band: i16,
    pub international_caps: i32,
    pub minutes_played: i32,
    pub medical_available: bool,
    pub gps_available: bool,
    pub score_schengen: i16,
    pub score_uk_gbe: i16,
    pub score_us_p1: i16,
    pub score_canada_work_permit: i16,
    pub score_uae_residence: i16,
    pub score_japan_specified_skilled: i16,
    pub overall_score: i16,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::video::Entity")]
    Video,
    #[sea_orm(has_many = "super::compliance_document::Entity")]
    ComplianceDocument,
    #[sea_orm(has_many = "super::scouting_inquiry::Entity")]
    ScoutingInquiry,
    #[sea_orm(has_many = "super::federation_letter::Entity")]
    FederationLetter,
}

impl Related<super::video::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Video.def()
    }
}

impl Related<super::compliance_document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ComplianceDocument.def()
    }
}

impl Related<super::scouting_inquiry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScoutingInquiry.def()
    }
}

impl Related<super::federation_letter::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FederationLetter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
