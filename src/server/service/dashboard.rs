use sea_orm::DatabaseConnection;

use crate::{
    model::{
        dashboard::DashboardStatsDto,
        status::{DocumentStatus, VerificationStatus},
    },
    server::{
        data::{
            compliance::ComplianceDocumentRepository, embassy::EmbassyVerificationRepository,
            player::PlayerRepository, scouting::ScoutingRepository, token::TokenRepository,
            video::VideoRepository,
        },
        error::Error,
        service::retry::RetryContext,
    },
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Headline counts for the team dashboard plus the caller's token balance
    pub async fn stats(&self, user_id: i32) -> Result<DashboardStatsDto, Error> {
        let ctx = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry("dashboard stats", || {
            let db = db.clone();

            Box::pin(async move {
                let videos = VideoRepository::new(&db);
                let token_balance = TokenRepository::new(&db)
                    .get_account(user_id)
                    .await?
                    .map(|account| account.balance)
                    .unwrap_or_default();

                Ok(DashboardStatsDto {
                    players: PlayerRepository::new(&db).count().await?,
                    videos: videos.count().await?,
                    unprocessed_videos: videos.count_unprocessed().await?,
                    draft_documents: ComplianceDocumentRepository::new(&db)
                        .count_by_status(DocumentStatus::Draft)
                        .await?,
                    pending_verifications: EmbassyVerificationRepository::new(&db)
                        .count_by_status(VerificationStatus::Pending)
                        .await?,
                    open_inquiries: ScoutingRepository::new(&db).count_open().await?,
                    token_balance,
                })
            })
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    mod stats {
        use pitchpass_test_utils::prelude::*;

        use crate::server::service::dashboard::DashboardService;

        /// Expect zeroes and no balance on an empty database
        #[tokio::test]
        async fn empty_database() -> Result<(), TestError> {
            let test = test_setup_with_all_tables!()?;

            let stats = DashboardService::new(&test.state.db).stats(1).await.unwrap();

            assert_eq!(stats, Default::default());

            Ok(())
        }

        /// Expect counts to reflect stored records
        #[tokio::test]
        async fn counts_records() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let user = test.user().insert_user("team", "team").await?;
            let player = test.player().insert_player("Kwame Mensah", "Ghana").await?;
            test.video().insert_video(player.id, "videos/a/one.mp4").await?;
            test.compliance()
                .insert_document(player.id, user.id, "draft")
                .await?;
            test.scouting()
                .insert_inquiry(player.id, user.id, "closed")
                .await?;
            test.token().insert_account(user.id, 42).await?;

            let stats = DashboardService::new(&test.state.db)
                .stats(user.id)
                .await
                .unwrap();

            assert_eq!(stats.players, 1);
            assert_eq!(stats.videos, 1);
            assert_eq!(stats.unprocessed_videos, 1);
            assert_eq!(stats.draft_documents, 1);
            assert_eq!(stats.open_inquiries, 0);
            assert_eq!(stats.token_balance, 42);

            Ok(())
        }
    }
}
