use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::{
    scouting::CreateInquiryDto,
    status::{InquiryStatus, Workflow},
};

pub struct ScoutingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ScoutingRepository<'a, C> {
    /// Creates a new instance of [`ScoutingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create_inquiry(
        &self,
        inquiry: &CreateInquiryDto,
        created_by: i32,
    ) -> Result<entity::scouting_inquiry::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let inquiry = entity::scouting_inquiry::ActiveModel {
            player_id: ActiveValue::Set(inquiry.player_id),
            buying_club: ActiveValue::Set(inquiry.buying_club.trim().to_string()),
            selling_club: ActiveValue::Set(inquiry.selling_club.trim().to_string()),
            status: ActiveValue::Set(InquiryStatus::Inquiry.as_str().to_string()),
            created_by: ActiveValue::Set(created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        inquiry.insert(self.db).await
    }

    pub async fn get_inquiry(
        &self,
        inquiry_id: i32,
    ) -> Result<Option<entity::scouting_inquiry::Model>, DbErr> {
        entity::prelude::ScoutingInquiry::find_by_id(inquiry_id)
            .one(self.db)
            .await
    }

    /// Most recently updated first, with the related player
    pub async fn list_inquiries(
        &self,
    ) -> Result<
        Vec<(
            entity::scouting_inquiry::Model,
            Option<entity::player::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::ScoutingInquiry::find()
            .find_also_related(entity::player::Entity)
            .order_by_desc(entity::scouting_inquiry::Column::UpdatedAt)
            .order_by_desc(entity::scouting_inquiry::Column::Id)
            .all(self.db)
            .await
    }

    /// Moves an inquiry from `from` to `to`
    ///
    /// Returns `false` when the inquiry is not currently in `from`.
    pub async fn transition(
        &self,
        inquiry_id: i32,
        from: InquiryStatus,
        to: InquiryStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::ScoutingInquiry::update_many()
            .col_expr(
                entity::scouting_inquiry::Column::Status,
                Expr::value(to.as_str()),
            )
            .col_expr(
                entity::scouting_inquiry::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::scouting_inquiry::Column::Id.eq(inquiry_id))
            .filter(entity::scouting_inquiry::Column::Status.eq(from.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    pub async fn count_open(&self) -> Result<u64, DbErr> {
        entity::prelude::ScoutingInquiry::find()
            .filter(entity::scouting_inquiry::Column::Status.ne(InquiryStatus::Closed.as_str()))
            .count(self.db)
            .await
    }

    pub async fn create_message(
        &self,
        inquiry_id: i32,
        sender_id: i32,
        body: &str,
    ) -> Result<entity::scouting_message::Model, DbErr> {
        let message = entity::scouting_message::ActiveModel {
            inquiry_id: ActiveValue::Set(inquiry_id),
            sender_id: ActiveValue::Set(sender_id),
            body: ActiveValue::Set(body.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        message.insert(self.db).await
    }

    /// Thread in the order messages were posted
    pub async fn list_messages(
        &self,
        inquiry_id: i32,
    ) -> Result<Vec<entity::scouting_message::Model>, DbErr> {
        entity::prelude::ScoutingMessage::find()
            .filter(entity::scouting_message::Column::InquiryId.eq(inquiry_id))
            .order_by_asc(entity::scouting_message::Column::CreatedAt)
            .order_by_asc(entity::scouting_message::Column::Id)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod count_open {
        use pitchpass_test_utils::prelude::*;

        use crate::server::data::scouting::ScoutingRepository;

        /// Expect closed inquiries to be excluded
        #[tokio::test]
        async fn excludes_closed_inquiries() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let player = test.player().insert_player("Kwame Mensah", "Ghana").await?;
            test.scouting().insert_inquiry(player.id, 1, "inquiry").await?;
            test.scouting().insert_inquiry(player.id, 1, "due_diligence").await?;
            test.scouting().insert_inquiry(player.id, 1, "closed").await?;

            let open = ScoutingRepository::new(&test.state.db).count_open().await?;

            assert_eq!(open, 2);

            Ok(())
        }
    }

    mod list_messages {
        use pitchpass_test_utils::prelude::*;

        use crate::server::data::scouting::ScoutingRepository;

        /// Expect only the inquiry's own messages, oldest first
        #[tokio::test]
        async fn lists_thread_in_posting_order() -> Result<(), TestError> {
            let mut test = test_setup_with_all_tables!()?;
            let player = test.player().insert_player("Kwame Mensah", "Ghana").await?;
            let inquiry = test.scouting().insert_inquiry(player.id, 1, "inquiry").await?;
            let other = test.scouting().insert_inquiry(player.id, 1, "inquiry").await?;

            let repository = ScoutingRepository::new(&test.state.db);
            repository.create_message(inquiry.id, 1, "First").await?;
            repository.create_message(other.id, 1, "Elsewhere").await?;
            repository.create_message(inquiry.id, 2, "Second").await?;

            let thread = repository.list_messages(inquiry.id).await?;
            let bodies: Vec<&str> = thread.iter().map(|m| m.body.as_str()).collect();

            assert_eq!(bodies, vec!["First", "Second"]);

            Ok(())
        }
    }
}
