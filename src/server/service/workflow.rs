use crate::{
    model::status::Workflow,
    server::error::{workflow::WorkflowError, Error},
};

/// Parses a status column, treating unknown values as corrupt data
pub fn parse_status<S: Workflow>(value: &str) -> Result<S, Error> {
    S::parse(value).ok_or_else(|| Error::ParseError(format!("unknown status {:?}", value)))
}

/// Refuses any step that is not a legal forward transition
pub fn ensure_transition<S: Workflow>(subject: &'static str, from: S, to: S) -> Result<(), Error> {
    if from.can_transition_to(to) {
        return Ok(());
    }

    Err(WorkflowError::InvalidTransition {
        subject,
        from: from.as_str().to_string(),
        to: to.as_str().to_string(),
    }
    .into())
}

/// Fails when a conditional status update matched no row because another request moved the
/// record first
pub fn ensure_applied<S: Workflow>(
    applied: bool,
    subject: &'static str,
    from: S,
    to: S,
) -> Result<(), Error> {
    if applied {
        return Ok(());
    }

    Err(WorkflowError::InvalidTransition {
        subject,
        from: from.as_str().to_string(),
        to: to.as_str().to_string(),
    }
    .into())
}
