use sea_orm::ConnectionTrait;

use crate::server::{
    data::audit::{AuditEntry, AuditLogRepository},
    error::Error,
};

/// Appends an audit row for a mutation performed by `actor_id`
///
/// Callers pass their open transaction so the audit row commits or rolls back with the change.
pub async fn record<C: ConnectionTrait>(
    conn: &C,
    actor_id: i32,
    action: &str,
    subject_type: &str,
    subject_id: i32,
    detail: Option<String>,
) -> Result<(), Error> {
    AuditLogRepository::new(conn)
        .record(AuditEntry {
            actor_id: Some(actor_id),
            action,
            subject_type,
            subject_id: Some(subject_id),
            detail,
        })
        .await?;

    Ok(())
}
