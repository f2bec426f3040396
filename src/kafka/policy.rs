//! Error classification for topic mutations
//!
//! Creating a topic that already exists and deleting one that is already
//! gone both count as success.

use crate::aiven::envelope::Envelope;
use crate::aiven::error::AivenError;
use reqwest::StatusCode;

/// Topic mutations whose outcome is classified from the response envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicOperation {
    Create,
    Delete,
}

impl TopicOperation {
    /// The status meaning "already in the desired state"
    pub fn acceptable_status(self) -> StatusCode {
        match self {
            TopicOperation::Create => StatusCode::CONFLICT,
            TopicOperation::Delete => StatusCode::NOT_FOUND,
        }
    }
}

/// Whether an error entry with `status` counts as success for `operation`
pub fn is_acceptable(status: u16, operation: TopicOperation) -> bool {
    status == operation.acceptable_status().as_u16()
}

/// Classify a decoded envelope. The first error entry decides the outcome:
/// an acceptable status is success, anything else fails with its message.
pub fn classify(operation: TopicOperation, envelope: &Envelope) -> Result<(), AivenError> {
    match envelope.errors.first() {
        None => Ok(()),
        Some(e) if is_acceptable(e.status, operation) => {
            tracing::debug!("{:?} treated as success: {} ({})", operation, e.message, e.status);
            Ok(())
        }
        Some(e) => Err(AivenError::Business(e.message.clone())),
    }
}
