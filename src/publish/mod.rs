pub mod simulated;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::draft::PetitionDraft;
use crate::error::PublishError;
use crate::wallet::AccountId;

pub use simulated::SimulatedLedger;

/// Opaque token returned by a publish endpoint proving the draft was
/// recorded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfirmationId(String);

impl ConfirmationId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConfirmationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The record of one try at finalizing a draft into a published petition.
///
/// `Idle → Publishing → Published` is the success path; `Failed` may retry
/// back through `Publishing`. `Published` is terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PublishAttempt {
    #[default]
    Idle,
    Publishing,
    Published(ConfirmationId),
    Failed(String),
}

impl PublishAttempt {
    pub fn is_publishing(&self) -> bool {
        matches!(self, Self::Publishing)
    }

    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published(_))
    }

    /// Present only when `Published`.
    pub fn confirmation_id(&self) -> Option<&ConfirmationId> {
        match self {
            Self::Published(id) => Some(id),
            _ => None,
        }
    }

    /// Present only when `Failed`.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn status_label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Publishing => "publishing",
            Self::Published(_) => "published",
            Self::Failed(_) => "failed",
        }
    }
}

/// Boundary for recording a finalized petition.
///
/// The bundled [`SimulatedLedger`] fabricates confirmations; a production
/// implementation performs a durable write and returns a real identifier,
/// with no change to the caller's contract.
#[async_trait]
pub trait PublishEndpoint: Send + Sync {
    async fn publish(
        &self,
        draft: &PetitionDraft,
        account: &AccountId,
    ) -> Result<ConfirmationId, PublishError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempt_starts_idle() {
        assert_eq!(PublishAttempt::default(), PublishAttempt::Idle);
    }

    #[test]
    fn confirmation_only_when_published() {
        let id = ConfirmationId::new("0xfeed");
        assert_eq!(
            PublishAttempt::Published(id.clone()).confirmation_id(),
            Some(&id)
        );
        assert_eq!(PublishAttempt::Publishing.confirmation_id(), None);
        assert_eq!(PublishAttempt::Idle.error_message(), None);
    }

    #[test]
    fn failure_carries_its_message() {
        let attempt = PublishAttempt::Failed("node unreachable".into());
        assert_eq!(attempt.error_message(), Some("node unreachable"));
        assert_eq!(attempt.status_label(), "failed");
    }
}
