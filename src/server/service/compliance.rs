//! Compliance documents: eligibility snapshots submitted for embassy review.

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        compliance::{ComplianceDocumentDto, GenerateDocumentDto},
        player::EligibilityScores,
        status::DocumentStatus,
        token::TokenAction,
    },
    server::{
        data::{
            compliance::ComplianceDocumentRepository, embassy::EmbassyVerificationRepository,
            player::PlayerRepository,
        },
        error::Error,
        service::{
            audit, player,
            retry::RetryContext,
            token,
            workflow::{ensure_applied, ensure_transition, parse_status},
        },
        util::random::verification_code,
    },
};

/// Length of the code an embassy uses to look up a submitted document
const VERIFICATION_CODE_LENGTH: usize = 10;

pub struct ComplianceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComplianceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<ComplianceDocumentDto>, Error> {
        let ctx = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry("list compliance documents", || {
            let db = db.clone();

            Box::pin(async move {
                let documents = ComplianceDocumentRepository::new(&db).list().await?;

                documents
                    .into_iter()
                    .map(|(document, player)| {
                        let player_name = player.map(|p| p.full_name).unwrap_or_default();

                        document_dto(document, player_name)
                    })
                    .collect()
            })
        })
        .await
    }

    /// Captures the player's current scores into a new draft document
    ///
    /// Charges the compliance report cost; nothing is stored when the balance is short.
    pub async fn generate(
        &self,
        user_id: i32,
        request: &GenerateDocumentDto,
    ) -> Result<ComplianceDocumentDto, Error> {
        if request.period_end < request.period_start {
            return Err(Error::Validation(
                "Period end must not be before period start".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let player = PlayerRepository::new(&txn)
            .get(request.player_id)
            .await?
            .ok_or_else(|| Error::NotFound("Player".to_string()))?;

        let snapshot = player::scores(&player);

        let document = ComplianceDocumentRepository::new(&txn)
            .create(
                player.id,
                request.period_start,
                request.period_end,
                serde_json::to_string(&snapshot)?,
                user_id,
            )
            .await?;

        let reference = format!("document:{}", document.id);
        token::charge(
            &txn,
            user_id,
            TokenAction::ComplianceReport,
            Some(&reference),
        )
        .await?;
        audit::record(
            &txn,
            user_id,
            "compliance.generate",
            "compliance_document",
            document.id,
            None,
        )
        .await?;

        txn.commit().await?;

        document_dto(document, player.full_name)
    }

    /// Submits a draft for embassy review and opens its verification
    pub async fn submit(
        &self,
        user_id: i32,
        document_id: i32,
    ) -> Result<ComplianceDocumentDto, Error> {
        let txn = self.db.begin().await?;

        let repository = ComplianceDocumentRepository::new(&txn);
        let document = repository
            .get(document_id)
            .await?
            .ok_or_else(|| Error::NotFound("Compliance document".to_string()))?;

        let from: DocumentStatus = parse_status(&document.status)?;
        ensure_transition("compliance document", from, DocumentStatus::Submitted)?;

        let now = Utc::now().naive_utc();
        let applied = repository
            .transition(document_id, from, DocumentStatus::Submitted, Some(now))
            .await?;
        ensure_applied(applied, "compliance document", from, DocumentStatus::Submitted)?;

        let verification = EmbassyVerificationRepository::new(&txn)
            .create(document_id, &verification_code(VERIFICATION_CODE_LENGTH))
            .await?;

        audit::record(
            &txn,
            user_id,
            "compliance.submit",
            "compliance_document",
            document_id,
            Some(format!("verification:{}", verification.id)),
        )
        .await?;

        let document = repository
            .get(document_id)
            .await?
            .ok_or_else(|| Error::NotFound("Compliance document".to_string()))?;
        let player_name = PlayerRepository::new(&txn)
            .get(document.player_id)
            .await?
            .map(|p| p.full_name)
            .unwrap_or_default();

        txn.commit().await?;

        tracing::debug!(
            "Submitted compliance document {} as verification {}",
            document_id,
            verification.id
        );

        document_dto(document, player_name)
    }
}

pub fn document_dto(
    document: entity::compliance_document::Model,
    player_name: String,
) -> Result<ComplianceDocumentDto, Error> {
    let snapshot: EligibilityScores = serde_json::from_str(&document.eligibility_snapshot)?;

    Ok(ComplianceDocumentDto {
        id: document.id,
        player_id: document.player_id,
        player_name,
        period_start: document.period_start,
        period_end: document.period_end,
        snapshot,
        status: parse_status(&document.status)?,
        created_at: document.created_at,
        submitted_at: document.submitted_at,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::model::compliance::GenerateDocumentDto;

    pub fn request(player_id: i32) -> GenerateDocumentDto {
        GenerateDocumentDto {
            player_id,
            period_start: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            period_end: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        }
    }

    mod generate {
        use pitchpass_test_utils::prelude::*;

        use crate::{
            model::status::DocumentStatus,
            server::{
                error::{token::TokenError, Error},
                service::compliance::{tests::request, ComplianceService},
            },
        };

        /// Expect a draft with the player's scores and a 10 token charge
        #[tokio::test]
        async fn creates_draft_and_charges() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let user = test.user().insert_user("team", "team").await?;
            let player = test.player().insert_player("Kwame Mensah", "Ghana").await?;
            test.token().insert_account(user.id, 12).await?;

            let document = ComplianceService::new(&test.state.db)
                .generate(user.id, &request(player.id))
                .await
                .unwrap();

            assert_eq!(document.status, DocumentStatus::Draft);
            assert_eq!(document.player_name, "Kwame Mensah");

            let account = test.token().get_account(user.id).await?.unwrap();
            assert_eq!(account.balance, 2);

            Ok(())
        }

        /// Expect nothing stored when the balance cannot cover the report
        #[tokio::test]
        async fn refuses_short_balance() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let user = test.user().insert_user("team", "team").await?;
            let player = test.player().insert_player("Kwame Mensah", "Ghana").await?;
            test.token().insert_account(user.id, 9).await?;

            let service = ComplianceService::new(&test.state.db);
            let result = service.generate(user.id, &request(player.id)).await;

            assert!(matches!(
                result,
                Err(Error::TokenError(TokenError::InsufficientTokens {
                    cost: 10,
                    balance: 9
                }))
            ));
            assert!(service.list().await.unwrap().is_empty());

            Ok(())
        }

        /// Expect an inverted period to be refused
        #[tokio::test]
        async fn rejects_inverted_period() -> Result<(), TestError> {
            let test = test_setup_with_all_tables!()?;

            let mut inverted = request(1);
            std::mem::swap(&mut inverted.period_start, &mut inverted.period_end);
            let result = ComplianceService::new(&test.state.db)
                .generate(1, &inverted)
                .await;

            assert!(matches!(result, Err(Error::Validation(_))));

            Ok(())
        }
    }

    mod submit {
        use pitchpass_test_utils::prelude::*;
        use sea_orm::EntityTrait;

        use crate::{
            model::status::DocumentStatus,
            server::{
                error::{workflow::WorkflowError, Error},
                service::compliance::ComplianceService,
            },
        };

        /// Expect a draft to move to submitted with a pending verification
        #[tokio::test]
        async fn opens_verification() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let user = test.user().insert_user("team", "team").await?;
            let player = test.player().insert_player("Kwame Mensah", "Ghana").await?;
            let document = test
                .compliance()
                .insert_document(player.id, user.id, "draft")
                .await?;

            let submitted = ComplianceService::new(&test.state.db)
                .submit(user.id, document.id)
                .await
                .unwrap();

            assert_eq!(submitted.status, DocumentStatus::Submitted);
            assert!(submitted.submitted_at.is_some());

            let verifications = entity::prelude::EmbassyVerification::find()
                .all(&test.state.db)
                .await?;
            assert_eq!(verifications.len(), 1);
            assert_eq!(verifications[0].status, "pending");
            assert_eq!(verifications[0].verification_code.len(), 10);

            Ok(())
        }

        /// Expect a second submission to be refused
        #[tokio::test]
        async fn refuses_resubmission() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let user = test.user().insert_user("team", "team").await?;
            let player = test.player().insert_player("Kwame Mensah", "Ghana").await?;
            let document = test
                .compliance()
                .insert_document(player.id, user.id, "submitted")
                .await?;

            let result = ComplianceService::new(&test.state.db)
                .submit(user.id, document.id)
                .await;

            assert!(matches!(
                result,
                Err(Error::WorkflowError(WorkflowError::InvalidTransition { .. }))
            ));

            Ok(())
        }
    }
}
