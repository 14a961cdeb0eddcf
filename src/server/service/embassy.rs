//! Embassy review of submitted compliance documents.
//!
//! A verification decision is mirrored onto its document in the same transaction: approving
//! marks the document `verified`, rejecting marks it `rejected`.

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        embassy::EmbassyVerificationDto,
        status::{DocumentStatus, VerificationStatus, Workflow},
    },
    server::{
        data::{
            compliance::ComplianceDocumentRepository, embassy::EmbassyVerificationRepository,
            player::PlayerRepository,
        },
        error::Error,
        service::{
            audit,
            retry::RetryContext,
            workflow::{ensure_applied, ensure_transition, parse_status},
        },
    },
};

pub struct EmbassyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmbassyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Review queue, oldest first
    pub async fn list(&self) -> Result<Vec<EmbassyVerificationDto>, Error> {
        let ctx = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry("list embassy verifications", || {
            let db = db.clone();

            Box::pin(async move {
                let verifications = EmbassyVerificationRepository::new(&db).list().await?;
                let names = player_names(&db, &verifications).await?;

                verifications
                    .into_iter()
                    .map(|verification| {
                        let player_name = names
                            .get(&verification.document_id)
                            .cloned()
                            .unwrap_or_default();

                        verification_dto(verification, player_name)
                    })
                    .collect()
            })
        })
        .await
    }

    /// Public lookup by the code printed on a submitted document
    pub async fn lookup(&self, code: &str) -> Result<EmbassyVerificationDto, Error> {
        let code = code.trim().to_ascii_uppercase();

        let verification = EmbassyVerificationRepository::new(self.db)
            .find_by_code(&code)
            .await?
            .ok_or_else(|| Error::NotFound("Verification".to_string()))?;

        let player_name = player_names(self.db, std::slice::from_ref(&verification))
            .await?
            .remove(&verification.document_id)
            .unwrap_or_default();

        verification_dto(verification, player_name)
    }

    /// Moves a verification to `to` on behalf of `reviewer_id`
    ///
    /// # Returns
    /// - `Ok(EmbassyVerificationDto)` - The updated verification
    /// - `Err(Error::NotFound)` - No verification with `verification_id`
    /// - `Err(Error::WorkflowError)` - `to` is not a legal next step
    pub async fn transition(
        &self,
        reviewer_id: i32,
        verification_id: i32,
        to: VerificationStatus,
        notes: Option<String>,
    ) -> Result<EmbassyVerificationDto, Error> {
        let notes = notes
            .map(|notes| notes.trim().to_string())
            .filter(|notes| !notes.is_empty());

        let txn = self.db.begin().await?;

        let repository = EmbassyVerificationRepository::new(&txn);
        let verification = repository
            .get(verification_id)
            .await?
            .ok_or_else(|| Error::NotFound("Verification".to_string()))?;

        let from: VerificationStatus = parse_status(&verification.status)?;
        ensure_transition("verification", from, to)?;

        let applied = repository
            .transition(verification_id, from, to, reviewer_id, notes)
            .await?;
        ensure_applied(applied, "verification", from, to)?;

        let document_status = match to {
            VerificationStatus::Approved => Some(DocumentStatus::Verified),
            VerificationStatus::Rejected => Some(DocumentStatus::Rejected),
            VerificationStatus::Pending | VerificationStatus::UnderReview => None,
        };

        if let Some(document_status) = document_status {
            let documents = ComplianceDocumentRepository::new(&txn);
            let document = documents
                .get(verification.document_id)
                .await?
                .ok_or_else(|| Error::NotFound("Compliance document".to_string()))?;

            let current: DocumentStatus = parse_status(&document.status)?;
            ensure_transition("compliance document", current, document_status)?;

            let applied = documents
                .transition(document.id, current, document_status, None)
                .await?;
            ensure_applied(applied, "compliance document", current, document_status)?;
        }

        audit::record(
            &txn,
            reviewer_id,
            &format!("embassy.{}", to.as_str()),
            "embassy_verification",
            verification_id,
            None,
        )
        .await?;

        let verification = repository
            .get(verification_id)
            .await?
            .ok_or_else(|| Error::NotFound("Verification".to_string()))?;
        let player_name = player_names(&txn, std::slice::from_ref(&verification))
            .await?
            .remove(&verification.document_id)
            .unwrap_or_default();

        txn.commit().await?;

        verification_dto(verification, player_name)
    }
}

/// Player names keyed by document id
async fn player_names<C: ConnectionTrait>(
    conn: &C,
    verifications: &[entity::embassy_verification::Model],
) -> Result<HashMap<i32, String>, Error> {
    let document_ids: Vec<i32> = verifications.iter().map(|v| v.document_id).collect();
    if document_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let documents = ComplianceDocumentRepository::new(conn)
        .get_many(&document_ids)
        .await?;

    let player_ids: Vec<i32> = documents.iter().map(|d| d.player_id).collect();
    let players: HashMap<i32, String> = PlayerRepository::new(conn)
        .get_many(&player_ids)
        .await?
        .into_iter()
        .map(|p| (p.id, p.full_name))
        .collect();

    Ok(documents
        .into_iter()
        .filter_map(|d| players.get(&d.player_id).map(|name| (d.id, name.clone())))
        .collect())
}

fn verification_dto(
    verification: entity::embassy_verification::Model,
    player_name: String,
) -> Result<EmbassyVerificationDto, Error> {
    Ok(EmbassyVerificationDto {
        id: verification.id,
        document_id: verification.document_id,
        player_name,
        status: parse_status(&verification.status)?,
        verification_code: verification.verification_code,
        notes: verification.notes,
        created_at: verification.created_at,
        updated_at: verification.updated_at,
    })
}

#[cfg(test)]
mod tests {
    mod transition {
        use pitchpass_test_utils::prelude::*;
        use sea_orm::EntityTrait;

        use crate::{
            model::status::VerificationStatus,
            server::{
                error::{workflow::WorkflowError, Error},
                service::embassy::EmbassyService,
            },
        };

        /// Expect approval to verify the underlying document
        #[tokio::test]
        async fn approval_verifies_document() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let verification = test.compliance().insert_verification("under_review").await?;

            let updated = EmbassyService::new(&test.state.db)
                .transition(
                    1,
                    verification.id,
                    VerificationStatus::Approved,
                    Some("  Papers in order ".to_string()),
                )
                .await
                .unwrap();

            assert_eq!(updated.status, VerificationStatus::Approved);
            assert_eq!(updated.notes.as_deref(), Some("Papers in order"));

            let document = entity::prelude::ComplianceDocument::find_by_id(verification.document_id)
                .one(&test.state.db)
                .await?
                .unwrap();
            assert_eq!(document.status, "verified");

            Ok(())
        }

        /// Expect rejection to reject the underlying document
        #[tokio::test]
        async fn rejection_rejects_document() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let verification = test.compliance().insert_verification("under_review").await?;

            EmbassyService::new(&test.state.db)
                .transition(1, verification.id, VerificationStatus::Rejected, None)
                .await
                .unwrap();

            let document = entity::prelude::ComplianceDocument::find_by_id(verification.document_id)
                .one(&test.state.db)
                .await?
                .unwrap();
            assert_eq!(document.status, "rejected");

            Ok(())
        }

        /// Expect a pending verification to require review before a decision
        #[tokio::test]
        async fn pending_cannot_be_approved() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let verification = test.compliance().insert_verification("pending").await?;

            let service = EmbassyService::new(&test.state.db);
            let result = service
                .transition(1, verification.id, VerificationStatus::Approved, None)
                .await;

            assert!(matches!(
                result,
                Err(Error::WorkflowError(WorkflowError::InvalidTransition { .. }))
            ));

            let reviewed = service
                .transition(1, verification.id, VerificationStatus::UnderReview, None)
                .await
                .unwrap();
            assert_eq!(reviewed.status, VerificationStatus::UnderReview);

            Ok(())
        }

        /// Expect decided verifications to accept nothing further
        #[tokio::test]
        async fn terminal_status_is_final() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let verification = test.compliance().insert_verification("approved").await?;

            let result = EmbassyService::new(&test.state.db)
                .transition(1, verification.id, VerificationStatus::Rejected, None)
                .await;

            assert!(matches!(result, Err(Error::WorkflowError(_))));

            Ok(())
        }
    }

    mod lookup {
        use pitchpass_test_utils::prelude::*;

        use crate::server::{error::Error, service::embassy::EmbassyService};

        /// Expect lookups to ignore case and report the player's name
        #[tokio::test]
        async fn finds_by_code() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let verification = test.compliance().insert_verification("pending").await?;

            let service = EmbassyService::new(&test.state.db);
            let found = service
                .lookup(&verification.verification_code.to_ascii_lowercase())
                .await
                .unwrap();

            assert_eq!(found.id, verification.id);
            assert!(!found.player_name.is_empty());

            let missing = service.lookup("NOPE").await;
            assert!(matches!(missing, Err(Error::NotFound(_))));

            Ok(())
        }
    }
}
