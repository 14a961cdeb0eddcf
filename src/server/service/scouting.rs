use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        scouting::{CreateInquiryDto, ScoutingInquiryDto, ScoutingMessageDto},
        status::{InquiryStatus, Workflow},
        token::TokenAction,
    },
    server::{
        data::{player::PlayerRepository, scouting::ScoutingRepository},
        error::{workflow::WorkflowError, Error},
        service::{
            audit,
            retry::RetryContext,
            token,
            workflow::{ensure_applied, ensure_transition, parse_status},
        },
    },
};

/// Longest message body accepted, in characters
const MAX_MESSAGE_LENGTH: usize = 2000;

pub struct ScoutingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScoutingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<ScoutingInquiryDto>, Error> {
        let ctx = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry("list scouting inquiries", || {
            let db = db.clone();

            Box::pin(async move {
                let inquiries = ScoutingRepository::new(&db).list_inquiries().await?;

                inquiries
                    .into_iter()
                    .map(|(inquiry, player)| {
                        let player_name = player.map(|p| p.full_name).unwrap_or_default();

                        inquiry_dto(inquiry, player_name)
                    })
                    .collect()
            })
        })
        .await
    }

    /// Opens a transfer inquiry, charging the inquiry cost
    pub async fn create(
        &self,
        user_id: i32,
        inquiry: &CreateInquiryDto,
    ) -> Result<ScoutingInquiryDto, Error> {
        if inquiry.buying_club.trim().is_empty() || inquiry.selling_club.trim().is_empty() {
            return Err(Error::Validation(
                "Buying and selling club are required".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let player = PlayerRepository::new(&txn)
            .get(inquiry.player_id)
            .await?
            .ok_or_else(|| Error::NotFound("Player".to_string()))?;

        let created = ScoutingRepository::new(&txn)
            .create_inquiry(inquiry, user_id)
            .await?;

        let reference = format!("inquiry:{}", created.id);
        token::charge(&txn, user_id, TokenAction::InquiryCreate, Some(&reference)).await?;
        audit::record(
            &txn,
            user_id,
            "scouting.create",
            "scouting_inquiry",
            created.id,
            None,
        )
        .await?;

        txn.commit().await?;

        inquiry_dto(created, player.full_name)
    }

    /// Moves an inquiry one step forward
    pub async fn advance(
        &self,
        user_id: i32,
        inquiry_id: i32,
        to: InquiryStatus,
    ) -> Result<ScoutingInquiryDto, Error> {
        let txn = self.db.begin().await?;

        let repository = ScoutingRepository::new(&txn);
        let inquiry = repository
            .get_inquiry(inquiry_id)
            .await?
            .ok_or_else(|| Error::NotFound("Inquiry".to_string()))?;

        let from: InquiryStatus = parse_status(&inquiry.status)?;
        ensure_transition("inquiry", from, to)?;

        let applied = repository.transition(inquiry_id, from, to).await?;
        ensure_applied(applied, "inquiry", from, to)?;

        audit::record(
            &txn,
            user_id,
            "scouting.advance",
            "scouting_inquiry",
            inquiry_id,
            Some(format!("{} -> {}", from, to)),
        )
        .await?;

        let inquiry = repository
            .get_inquiry(inquiry_id)
            .await?
            .ok_or_else(|| Error::NotFound("Inquiry".to_string()))?;
        let player_name = PlayerRepository::new(&txn)
            .get(inquiry.player_id)
            .await?
            .map(|p| p.full_name)
            .unwrap_or_default();

        txn.commit().await?;

        inquiry_dto(inquiry, player_name)
    }

    pub async fn list_messages(&self, inquiry_id: i32) -> Result<Vec<ScoutingMessageDto>, Error> {
        let repository = ScoutingRepository::new(self.db);

        if repository.get_inquiry(inquiry_id).await?.is_none() {
            return Err(Error::NotFound("Inquiry".to_string()));
        }

        let messages = repository.list_messages(inquiry_id).await?;

        Ok(messages.into_iter().map(message_dto).collect())
    }

    /// Appends a message to an open inquiry, charging the messaging cost
    pub async fn post_message(
        &self,
        sender_id: i32,
        inquiry_id: i32,
        body: &str,
    ) -> Result<ScoutingMessageDto, Error> {
        let body = body.trim();
        if body.is_empty() {
            return Err(Error::Validation("Message cannot be empty".to_string()));
        }
        if body.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(Error::Validation(format!(
                "Message cannot exceed {} characters",
                MAX_MESSAGE_LENGTH
            )));
        }

        let txn = self.db.begin().await?;

        let repository = ScoutingRepository::new(&txn);
        let inquiry = repository
            .get_inquiry(inquiry_id)
            .await?
            .ok_or_else(|| Error::NotFound("Inquiry".to_string()))?;

        let status: InquiryStatus = parse_status(&inquiry.status)?;
        if status.is_terminal() {
            return Err(WorkflowError::Closed {
                subject: "inquiry",
                status: status.as_str(),
            }
            .into());
        }

        let message = repository
            .create_message(inquiry_id, sender_id, body)
            .await?;

        let reference = format!("inquiry:{}", inquiry_id);
        token::charge(&txn, sender_id, TokenAction::Messaging, Some(&reference)).await?;

        txn.commit().await?;

        Ok(message_dto(message))
    }
}

fn inquiry_dto(
    inquiry: entity::scouting_inquiry::Model,
    player_name: String,
) -> Result<ScoutingInquiryDto, Error> {
    Ok(ScoutingInquiryDto {
        id: inquiry.id,
        player_id: inquiry.player_id,
        player_name,
        buying_club: inquiry.buying_club,
        selling_club: inquiry.selling_club,
        status: parse_status(&inquiry.status)?,
        created_at: inquiry.created_at,
        updated_at: inquiry.updated_at,
    })
}

fn message_dto(message: entity::scouting_message::Model) -> ScoutingMessageDto {
    ScoutingMessageDto {
        id: message.id,
        inquiry_id: message.inquiry_id,
        sender_id: message.sender_id,
        body: message.body,
        created_at: message.created_at,
    }
}

#[cfg(test)]
mod tests {
    use crate::model::scouting::CreateInquiryDto;

    pub fn inquiry(player_id: i32) -> CreateInquiryDto {
        CreateInquiryDto {
            player_id,
            buying_club: "Club Brugge".to_string(),
            selling_club: "Asante Kotoko".to_string(),
        }
    }

    mod create {
        use pitchpass_test_utils::prelude::*;

        use crate::{
            model::status::InquiryStatus,
            server::{
                error::{token::TokenError, Error},
                service::scouting::{tests::inquiry, ScoutingService},
            },
        };

        /// Expect a new inquiry and a 3 token charge
        #[tokio::test]
        async fn opens_inquiry_and_charges() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let user = test.user().insert_user("scout", "scout").await?;
            let player = test.player().insert_player("Kwame Mensah", "Ghana").await?;
            test.token().insert_account(user.id, 3).await?;

            let created = ScoutingService::new(&test.state.db)
                .create(user.id, &inquiry(player.id))
                .await
                .unwrap();

            assert_eq!(created.status, InquiryStatus::Inquiry);
            assert_eq!(created.player_name, "Kwame Mensah");

            let account = test.token().get_account(user.id).await?.unwrap();
            assert_eq!(account.balance, 0);

            Ok(())
        }

        /// Expect no inquiry when the balance is short
        #[tokio::test]
        async fn short_balance_rolls_back() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let user = test.user().insert_user("scout", "scout").await?;
            let player = test.player().insert_player("Kwame Mensah", "Ghana").await?;
            test.token().insert_account(user.id, 2).await?;

            let service = ScoutingService::new(&test.state.db);
            let result = service.create(user.id, &inquiry(player.id)).await;

            assert!(matches!(
                result,
                Err(Error::TokenError(TokenError::InsufficientTokens { .. }))
            ));
            assert!(service.list().await.unwrap().is_empty());

            Ok(())
        }
    }

    mod advance {
        use pitchpass_test_utils::prelude::*;

        use crate::{
            model::status::InquiryStatus,
            server::{
                error::{workflow::WorkflowError, Error},
                service::scouting::ScoutingService,
            },
        };

        /// Expect each forward step to succeed in order
        #[tokio::test]
        async fn moves_forward_one_step() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let user = test.user().insert_user("agent", "agent").await?;
            let player = test.player().insert_player("Kwame Mensah", "Ghana").await?;
            let inquiry = test
                .scouting()
                .insert_inquiry(player.id, user.id, "inquiry")
                .await?;

            let service = ScoutingService::new(&test.state.db);

            for to in [
                InquiryStatus::Negotiation,
                InquiryStatus::DueDiligence,
                InquiryStatus::Closed,
            ] {
                let advanced = service.advance(user.id, inquiry.id, to).await.unwrap();
                assert_eq!(advanced.status, to);
            }

            Ok(())
        }

        /// Expect closing before due diligence to be refused as a skipped step
        #[tokio::test]
        async fn refuses_skipping_to_closed() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let user = test.user().insert_user("agent", "agent").await?;
            let player = test.player().insert_player("Kwame Mensah", "Ghana").await?;
            let inquiry = test
                .scouting()
                .insert_inquiry(player.id, user.id, "inquiry")
                .await?;

            let service = ScoutingService::new(&test.state.db);
            let result = service
                .advance(user.id, inquiry.id, InquiryStatus::Closed)
                .await;

            assert!(matches!(
                result,
                Err(Error::WorkflowError(WorkflowError::InvalidTransition { .. }))
            ));

            let negotiating = service
                .advance(user.id, inquiry.id, InquiryStatus::Negotiation)
                .await
                .unwrap();
            assert_eq!(negotiating.status, InquiryStatus::Negotiation);

            let result = service
                .advance(user.id, inquiry.id, InquiryStatus::Closed)
                .await;
            assert!(matches!(result, Err(Error::WorkflowError(_))));

            Ok(())
        }

        /// Expect backwards steps to be refused
        #[tokio::test]
        async fn refuses_backwards_step() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let user = test.user().insert_user("agent", "agent").await?;
            let player = test.player().insert_player("Kwame Mensah", "Ghana").await?;
            let inquiry = test
                .scouting()
                .insert_inquiry(player.id, user.id, "due_diligence")
                .await?;

            let result = ScoutingService::new(&test.state.db)
                .advance(user.id, inquiry.id, InquiryStatus::Negotiation)
                .await;

            assert!(matches!(result, Err(Error::WorkflowError(_))));

            Ok(())
        }
    }

    mod post_message {
        use pitchpass_test_utils::prelude::*;

        use crate::server::{
            error::{workflow::WorkflowError, Error},
            service::scouting::ScoutingService,
        };

        /// Expect messages to be stored in posting order and charged
        #[tokio::test]
        async fn appends_to_thread() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let user = test.user().insert_user("scout", "scout").await?;
            let player = test.player().insert_player("Kwame Mensah", "Ghana").await?;
            let inquiry = test
                .scouting()
                .insert_inquiry(player.id, user.id, "negotiation")
                .await?;
            test.token().insert_account(user.id, 4).await?;

            let service = ScoutingService::new(&test.state.db);
            service
                .post_message(user.id, inquiry.id, "Opening offer sent")
                .await
                .unwrap();
            service
                .post_message(user.id, inquiry.id, " Awaiting reply ")
                .await
                .unwrap();

            let thread = service.list_messages(inquiry.id).await.unwrap();
            assert_eq!(thread.len(), 2);
            assert_eq!(thread[0].body, "Opening offer sent");
            assert_eq!(thread[1].body, "Awaiting reply");

            let account = test.token().get_account(user.id).await?.unwrap();
            assert_eq!(account.balance, 0);

            Ok(())
        }

        /// Expect closed inquiries to refuse new messages without charging
        #[tokio::test]
        async fn refuses_closed_inquiry() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let user = test.user().insert_user("scout", "scout").await?;
            let player = test.player().insert_player("Kwame Mensah", "Ghana").await?;
            let inquiry = test
                .scouting()
                .insert_inquiry(player.id, user.id, "closed")
                .await?;
            test.token().insert_account(user.id, 10).await?;

            let result = ScoutingService::new(&test.state.db)
                .post_message(user.id, inquiry.id, "Anyone there?")
                .await;

            assert!(matches!(
                result,
                Err(Error::WorkflowError(WorkflowError::Closed { .. }))
            ));

            let account = test.token().get_account(user.id).await?.unwrap();
            assert_eq!(account.balance, 10);

            Ok(())
        }
    }
}
