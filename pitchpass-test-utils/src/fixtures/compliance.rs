use chrono::{Duration, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::factory, TestSetup};

impl TestSetup {
    pub fn compliance<'a>(&'a mut self) -> ComplianceFixtures<'a> {
        ComplianceFixtures { setup: self }
    }
}

pub struct ComplianceFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> ComplianceFixtures<'a> {
    /// Inserts a document covering the last 90 days with every visa scored at 50
    pub async fn insert_document(
        &self,
        player_id: i32,
        created_by: i32,
        status: &str,
    ) -> Result<entity::compliance_document::Model, TestError> {
        let now = Utc::now().naive_utc();
        let submitted_at = (status != "draft").then_some(now);

        Ok(entity::prelude::ComplianceDocument::insert(
            entity::compliance_document::ActiveModel {
                player_id: ActiveValue::Set(player_id),
                period_start: ActiveValue::Set(now.date() - Duration::days(90)),
                period_end: ActiveValue::Set(now.date()),
                eligibility_snapshot: ActiveValue::Set(factory::eligibility_snapshot(50)),
                status: ActiveValue::Set(status.to_string()),
                created_by: ActiveValue::Set(created_by),
                created_at: ActiveValue::Set(now),
                submitted_at: ActiveValue::Set(submitted_at),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    /// Inserts a verification for a new submitted document, creating its player as well
    pub async fn insert_verification(
        &mut self,
        status: &str,
    ) -> Result<entity::embassy_verification::Model, TestError> {
        let player = self
            .setup
            .player()
            .insert_player("Verified Player", "Ghana")
            .await?;
        let document = self.insert_document(player.id, 1, "submitted").await?;
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::EmbassyVerification::insert(
            entity::embassy_verification::ActiveModel {
                document_id: ActiveValue::Set(document.id),
                status: ActiveValue::Set(status.to_string()),
                verification_code: ActiveValue::Set(format!("PP{:08}", document.id)),
                reviewer_id: ActiveValue::Set(None),
                notes: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }
}
