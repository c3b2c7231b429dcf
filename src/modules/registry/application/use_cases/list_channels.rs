use async_trait::async_trait;
use uuid::Uuid;

use crate::registry::application::domain::channel::Channel;
use crate::registry::application::ports::outgoing::{ChannelRepository, ChannelRepositoryError};

#[derive(Debug, Clone, PartialEq)]
pub enum ListChannelsError {
    RepositoryError(ChannelRepositoryError),
}

impl std::fmt::Display for ListChannelsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RepositoryError(e) => write!(f, "repository error: {e}"),
        }
    }
}

impl std::error::Error for ListChannelsError {}

#[async_trait]
pub trait IListChannelsUseCase: Send + Sync {
    async fn execute(&self, company_id: Uuid) -> Result<Vec<Channel>, ListChannelsError>;
}

#[derive(Debug, Clone)]
pub struct ListChannelsUseCase<R>
where
    R: ChannelRepository,
{
    repository: R,
}

impl<R> ListChannelsUseCase<R>
where
    R: ChannelRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IListChannelsUseCase for ListChannelsUseCase<R>
where
    R: ChannelRepository,
{
    async fn execute(&self, company_id: Uuid) -> Result<Vec<Channel>, ListChannelsError> {
        self.repository
            .list_by_company(company_id)
            .await
            .map_err(ListChannelsError::RepositoryError)
    }
}
