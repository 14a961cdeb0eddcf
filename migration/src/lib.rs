pub use sea_orm_migration::prelude::*;

mod m20260901_000001_pitchpass_user;
mod m20260901_000002_player;
mod m20260901_000003_video;
mod m20260901_000004_upload_slot;
mod m20260901_000005_compliance_document;
mod m20260901_000006_embassy_verification;
mod m20260901_000007_scouting;
mod m20260901_000008_token;
mod m20260901_000009_federation_letter;
mod m20260901_000010_admin_records;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260901_000001_pitchpass_user::Migration),
            Box::new(m20260901_000002_player::Migration),
            Box::new(m20260901_000003_video::Migration),
            Box::new(m20260901_000004_upload_slot::Migration),
            Box::new(m20260901_000005_compliance_document::Migration),
            Box::new(m20260901_000006_embassy_verification::Migration),
            Box::new(m20260901_000007_scouting::Migration),
            Box::new(m20260901_000008_token::Migration),
            Box::new(m20260901_000009_federation_letter::Migration),
            Box::new(m20260901_000010_admin_records::Migration),
        ]
    }
}
