use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::registry::application::domain::channel::{Channel, ChannelStatus};

#[derive(Debug, Clone, PartialEq)]
pub enum ChannelRepositoryError {
    ChannelNotFound,
    InvalidTransition {
        from: ChannelStatus,
        to: ChannelStatus,
    },
    DatabaseError(String),
}

impl std::fmt::Display for ChannelRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChannelNotFound => write!(f, "channel not found"),
            Self::InvalidTransition { from, to } => write!(
                f,
                "invalid status transition: {} -> {}",
                from.as_str(),
                to.as_str()
            ),
            Self::DatabaseError(msg) => write!(f, "database error: {msg}"),
        }
    }
}

impl std::error::Error for ChannelRepositoryError {}

/// A validated status change. The constructors are the only way to build
/// one, so the verified/verified_at coupling cannot be violated by callers.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusUpdate {
    pub status: ChannelStatus,
    pub verified_at: Option<DateTime<Utc>>,
    pub metadata: serde_json::Value,
}

impl StatusUpdate {
    pub fn verified(at: DateTime<Utc>, metadata: serde_json::Value) -> Self {
        Self {
            status: ChannelStatus::Verified,
            verified_at: Some(at),
            metadata,
        }
    }

    pub fn failed(metadata: serde_json::Value) -> Self {
        Self {
            status: ChannelStatus::Failed,
            verified_at: None,
            metadata,
        }
    }
}

#[async_trait]
pub trait ChannelRepository: Send + Sync {
    async fn insert(&self, channel: Channel) -> Result<Channel, ChannelRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Channel>, ChannelRepositoryError>;

    /// Channels of one company in insertion order.
    async fn list_by_company(
        &self,
        company_id: Uuid,
    ) -> Result<Vec<Channel>, ChannelRepositoryError>;

    /// The subset of `ids` that is owned by `company_id` and still
    /// unverified, in insertion order. Unknown, foreign and terminal ids
    /// are silently absent from the result.
    async fn find_unverified_owned(
        &self,
        ids: &[Uuid],
        company_id: Uuid,
    ) -> Result<Vec<Channel>, ChannelRepositoryError>;

    /// Single-row status update. Fails with `ChannelNotFound` for unknown
    /// ids and with `InvalidTransition` when the record is already in a
    /// terminal state.
    async fn update_status(
        &self,
        id: Uuid,
        update: StatusUpdate,
    ) -> Result<Channel, ChannelRepositoryError>;

    /// Owner-scoped delete. Removing an id that does not exist or belongs
    /// to another company is a no-op, not an error.
    async fn delete(&self, company_id: Uuid, id: Uuid) -> Result<(), ChannelRepositoryError>;
}
