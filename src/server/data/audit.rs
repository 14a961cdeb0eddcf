use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect,
};

pub struct AuditLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

/// One audit trail entry
///
/// `action` is a dotted verb such as `video.create`; `subject_type` names the table the subject
/// lives in.
pub struct AuditEntry<'s> {
    pub actor_id: Option<i32>,
    pub action: &'s str,
    pub subject_type: &'s str,
    pub subject_id: Option<i32>,
    pub detail: Option<String>,
}

impl<'a, C: ConnectionTrait> AuditLogRepository<'a, C> {
    /// Creates a new instance of [`AuditLogRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn record(&self, entry: AuditEntry<'_>) -> Result<entity::audit_log::Model, DbErr> {
        let log = entity::audit_log::ActiveModel {
            actor_id: ActiveValue::Set(entry.actor_id),
            action: ActiveValue::Set(entry.action.to_string()),
            subject_type: ActiveValue::Set(entry.subject_type.to_string()),
            subject_id: ActiveValue::Set(entry.subject_id),
            detail: ActiveValue::Set(entry.detail),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        log.insert(self.db).await
    }

    /// Newest first, up to `limit`
    pub async fn list(&self, limit: u64) -> Result<Vec<entity::audit_log::Model>, DbErr> {
        entity::prelude::AuditLog::find()
            .order_by_desc(entity::audit_log::Column::CreatedAt)
            .order_by_desc(entity::audit_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use pitchpass_test_utils::prelude::*;

    use crate::server::data::audit::{AuditEntry, AuditLogRepository};

    /// Expect entries to be listed newest first and capped at the limit
    #[tokio::test]
    async fn lists_newest_entries_first() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::AuditLog)?;
        let repository = AuditLogRepository::new(&test.state.db);

        for action in ["player.create", "player.update", "video.create"] {
            repository
                .record(AuditEntry {
                    actor_id: Some(1),
                    action,
                    subject_type: "player",
                    subject_id: Some(1),
                    detail: None,
                })
                .await?;
        }

        let logs = repository.list(2).await?;
        let actions: Vec<&str> = logs.iter().map(|l| l.action.as_str()).collect();

        assert_eq!(actions, vec!["video.create", "player.update"]);

        Ok(())
    }
}
