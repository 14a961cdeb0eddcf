use chrono::{NaiveDate, NaiveDateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::status::{DocumentStatus, Workflow};

pub struct ComplianceDocumentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ComplianceDocumentRepository<'a, C> {
    /// Creates a new instance of [`ComplianceDocumentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a draft document holding `eligibility_snapshot` as JSON
    pub async fn create(
        &self,
        player_id: i32,
        period_start: NaiveDate,
        period_end: NaiveDate,
        eligibility_snapshot: String,
        created_by: i32,
    ) -> Result<entity::compliance_document::Model, DbErr> {
        let document = entity::compliance_document::ActiveModel {
            player_id: ActiveValue::Set(player_id),
            period_start: ActiveValue::Set(period_start),
            period_end: ActiveValue::Set(period_end),
            eligibility_snapshot: ActiveValue::Set(eligibility_snapshot),
            status: ActiveValue::Set(DocumentStatus::Draft.as_str().to_string()),
            created_by: ActiveValue::Set(created_by),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            submitted_at: ActiveValue::Set(None),
            ..Default::default()
        };

        document.insert(self.db).await
    }

    pub async fn get(
        &self,
        document_id: i32,
    ) -> Result<Option<entity::compliance_document::Model>, DbErr> {
        entity::prelude::ComplianceDocument::find_by_id(document_id)
            .one(self.db)
            .await
    }

    pub async fn get_many(
        &self,
        document_ids: &[i32],
    ) -> Result<Vec<entity::compliance_document::Model>, DbErr> {
        entity::prelude::ComplianceDocument::find()
            .filter(entity::compliance_document::Column::Id.is_in(document_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Newest first, with the related player
    pub async fn list(
        &self,
    ) -> Result<
        Vec<(
            entity::compliance_document::Model,
            Option<entity::player::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::ComplianceDocument::find()
            .find_also_related(entity::player::Entity)
            .order_by_desc(entity::compliance_document::Column::CreatedAt)
            .order_by_desc(entity::compliance_document::Column::Id)
            .all(self.db)
            .await
    }

    /// Moves a document from `from` to `to`
    ///
    /// Returns `false` when the document is not currently in `from`. `submitted_at` is only
    /// written when provided.
    pub async fn transition(
        &self,
        document_id: i32,
        from: DocumentStatus,
        to: DocumentStatus,
        submitted_at: Option<NaiveDateTime>,
    ) -> Result<bool, DbErr> {
        let mut update = entity::prelude::ComplianceDocument::update_many()
            .col_expr(
                entity::compliance_document::Column::Status,
                Expr::value(to.as_str()),
            )
            .filter(entity::compliance_document::Column::Id.eq(document_id))
            .filter(entity::compliance_document::Column::Status.eq(from.as_str()));

        if let Some(submitted_at) = submitted_at {
            update = update.col_expr(
                entity::compliance_document::Column::SubmittedAt,
                Expr::value(Some(submitted_at)),
            );
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected == 1)
    }

    pub async fn count_by_status(&self, status: DocumentStatus) -> Result<u64, DbErr> {
        entity::prelude::ComplianceDocument::find()
            .filter(entity::compliance_document::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod transition {
        use pitchpass_test_utils::prelude::*;

        use crate::{
            model::status::DocumentStatus,
            server::data::compliance::ComplianceDocumentRepository,
        };

        /// Expect the transition to apply only from the expected status
        #[tokio::test]
        async fn applies_only_from_expected_status() -> Result<(), TestError> {
            let mut test = test_setup_with_tables!(
                entity::prelude::Player,
                entity::prelude::ComplianceDocument
            )?;
            let player = test.player().insert_player("Kwame Mensah", "Ghana").await?;
            let document = test
                .compliance()
                .insert_document(player.id, 1, "draft")
                .await?;

            let repository = ComplianceDocumentRepository::new(&test.state.db);

            let moved = repository
                .transition(
                    document.id,
                    DocumentStatus::Draft,
                    DocumentStatus::Submitted,
                    Some(chrono::Utc::now().naive_utc()),
                )
                .await?;
            assert!(moved);

            let repeated = repository
                .transition(
                    document.id,
                    DocumentStatus::Draft,
                    DocumentStatus::Submitted,
                    None,
                )
                .await?;
            assert!(!repeated);

            let stored = repository.get(document.id).await?.unwrap();
            assert_eq!(stored.status, "submitted");
            assert!(stored.submitted_at.is_some());

            Ok(())
        }
    }
}
