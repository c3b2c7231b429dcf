use async_trait::async_trait;
use uuid::Uuid;

use crate::registry::application::ports::outgoing::{ChannelRepository, ChannelRepositoryError};

#[derive(Debug, Clone, PartialEq)]
pub enum RemoveChannelError {
    RepositoryError(ChannelRepositoryError),
}

impl std::fmt::Display for RemoveChannelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RepositoryError(e) => write!(f, "repository error: {e}"),
        }
    }
}

impl std::error::Error for RemoveChannelError {}

#[async_trait]
pub trait IRemoveChannelUseCase: Send + Sync {
    async fn execute(&self, company_id: Uuid, channel_id: Uuid) -> Result<(), RemoveChannelError>;
}

/// Owner-scoped, idempotent removal. Deleting an unknown id (or one owned
/// by another company) succeeds without effect, so the endpoint reveals
/// nothing about foreign records.
#[derive(Debug, Clone)]
pub struct RemoveChannelUseCase<R>
where
    R: ChannelRepository,
{
    repository: R,
}

impl<R> RemoveChannelUseCase<R>
where
    R: ChannelRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IRemoveChannelUseCase for RemoveChannelUseCase<R>
where
    R: ChannelRepository,
{
    async fn execute(&self, company_id: Uuid, channel_id: Uuid) -> Result<(), RemoveChannelError> {
        self.repository
            .delete(company_id, channel_id)
            .await
            .map_err(RemoveChannelError::RepositoryError)
    }
}
