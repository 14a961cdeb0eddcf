use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::status::{VerificationStatus, Workflow};

pub struct EmbassyVerificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EmbassyVerificationRepository<'a, C> {
    /// Creates a new instance of [`EmbassyVerificationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a pending verification for a submitted document
    pub async fn create(
        &self,
        document_id: i32,
        verification_code: &str,
    ) -> Result<entity::embassy_verification::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let verification = entity::embassy_verification::ActiveModel {
            document_id: ActiveValue::Set(document_id),
            status: ActiveValue::Set(VerificationStatus::Pending.as_str().to_string()),
            verification_code: ActiveValue::Set(verification_code.to_string()),
            reviewer_id: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        verification.insert(self.db).await
    }

    pub async fn get(
        &self,
        verification_id: i32,
    ) -> Result<Option<entity::embassy_verification::Model>, DbErr> {
        entity::prelude::EmbassyVerification::find_by_id(verification_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_code(
        &self,
        verification_code: &str,
    ) -> Result<Option<entity::embassy_verification::Model>, DbErr> {
        entity::prelude::EmbassyVerification::find()
            .filter(entity::embassy_verification::Column::VerificationCode.eq(verification_code))
            .one(self.db)
            .await
    }

    /// Oldest first so the review queue reads top-down
    pub async fn list(&self) -> Result<Vec<entity::embassy_verification::Model>, DbErr> {
        entity::prelude::EmbassyVerification::find()
            .order_by_asc(entity::embassy_verification::Column::CreatedAt)
            .order_by_asc(entity::embassy_verification::Column::Id)
            .all(self.db)
            .await
    }

    /// Moves a verification from `from` to `to`, recording the reviewer and optional notes
    ///
    /// Returns `false` when the verification is not currently in `from`.
    pub async fn transition(
        &self,
        verification_id: i32,
        from: VerificationStatus,
        to: VerificationStatus,
        reviewer_id: i32,
        notes: Option<String>,
    ) -> Result<bool, DbErr> {
        let mut update = entity::prelude::EmbassyVerification::update_many()
            .col_expr(
                entity::embassy_verification::Column::Status,
                Expr::value(to.as_str()),
            )
            .col_expr(
                entity::embassy_verification::Column::ReviewerId,
                Expr::value(Some(reviewer_id)),
            )
            .col_expr(
                entity::embassy_verification::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::embassy_verification::Column::Id.eq(verification_id))
            .filter(entity::embassy_verification::Column::Status.eq(from.as_str()));

        if let Some(notes) = notes {
            update = update.col_expr(
                entity::embassy_verification::Column::Notes,
                Expr::value(Some(notes)),
            );
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected == 1)
    }

    pub async fn count_by_status(&self, status: VerificationStatus) -> Result<u64, DbErr> {
        entity::prelude::EmbassyVerification::find()
            .filter(entity::embassy_verification::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod transition {
        use pitchpass_test_utils::prelude::*;

        use crate::{
            model::status::VerificationStatus,
            server::data::embassy::EmbassyVerificationRepository,
        };

        /// Expect reviewer and notes to be stored with the new status
        #[tokio::test]
        async fn records_reviewer_and_notes() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let verification = test.compliance().insert_verification("under_review").await?;

            let repository = EmbassyVerificationRepository::new(&test.state.db);
            let moved = repository
                .transition(
                    verification.id,
                    VerificationStatus::UnderReview,
                    VerificationStatus::Approved,
                    7,
                    Some("Documents in order".to_string()),
                )
                .await?;

            assert!(moved);
            let stored = repository.get(verification.id).await?.unwrap();
            assert_eq!(stored.status, "approved");
            assert_eq!(stored.reviewer_id, Some(7));
            assert_eq!(stored.notes.as_deref(), Some("Documents in order"));

            Ok(())
        }

        /// Expect no change when the verification is in another status
        #[tokio::test]
        async fn refuses_unexpected_status() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let verification = test.compliance().insert_verification("pending").await?;

            let moved = EmbassyVerificationRepository::new(&test.state.db)
                .transition(
                    verification.id,
                    VerificationStatus::UnderReview,
                    VerificationStatus::Approved,
                    7,
                    None,
                )
                .await?;

            assert!(!moved);

            Ok(())
        }
    }
}
