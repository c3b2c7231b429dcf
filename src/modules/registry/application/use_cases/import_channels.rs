use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::registry::application::domain::channel::Channel;
use crate::registry::application::ports::outgoing::{ChannelRepository, ChannelRepositoryError};
use crate::registry::application::use_cases::create_channel::{
    CreateChannelError, CreateChannelInput, EmployeeInfoInput,
};

/// One row of an already-parsed CSV upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRecord {
    pub channel: String,
    pub channel_type: String,
    pub description: Option<String>,
    pub is_employee_channel: bool,
    pub employee_info: Option<EmployeeInfoInput>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImportChannelsError {
    EmptyBatch,
    InvalidRecord {
        index: usize,
        reason: CreateChannelError,
    },
    RepositoryError(ChannelRepositoryError),
}

impl std::fmt::Display for ImportChannelsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyBatch => write!(f, "batch contains no records"),
            Self::InvalidRecord { index, reason } => {
                write!(f, "record {index} is invalid: {reason}")
            }
            Self::RepositoryError(e) => write!(f, "repository error: {e}"),
        }
    }
}

impl std::error::Error for ImportChannelsError {}

#[async_trait]
pub trait IImportChannelsUseCase: Send + Sync {
    async fn execute(
        &self,
        company_id: Uuid,
        records: Vec<ImportRecord>,
    ) -> Result<Vec<Channel>, ImportChannelsError>;
}

/// Bulk import: validates the whole batch up front and writes nothing when
/// any record is malformed. Valid batches are materialized as unverified
/// channels in input order.
#[derive(Debug, Clone)]
pub struct ImportChannelsUseCase<R>
where
    R: ChannelRepository,
{
    repository: R,
}

impl<R> ImportChannelsUseCase<R>
where
    R: ChannelRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IImportChannelsUseCase for ImportChannelsUseCase<R>
where
    R: ChannelRepository,
{
    async fn execute(
        &self,
        company_id: Uuid,
        records: Vec<ImportRecord>,
    ) -> Result<Vec<Channel>, ImportChannelsError> {
        if records.is_empty() {
            return Err(ImportChannelsError::EmptyBatch);
        }

        // Validation pass first; the batch is all-or-nothing here.
        let mut drafts = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let input = CreateChannelInput {
                channel_type: record.channel_type.clone(),
                value: record.channel.clone(),
                description: record.description.clone(),
                is_employee_channel: record.is_employee_channel,
                employee_info: record.employee_info.clone(),
            };
            let (channel_type, value, kind) = input
                .validate()
                .map_err(|reason| ImportChannelsError::InvalidRecord { index, reason })?;
            drafts.push((channel_type, value, kind, record.description.clone()));
        }

        let uploaded_at = Utc::now();
        let mut created = Vec::with_capacity(drafts.len());
        for (channel_type, value, kind, description) in drafts {
            let channel = Channel::new_unverified(
                company_id,
                channel_type,
                value,
                description,
                kind,
                serde_json::json!({
                    "source": "csv_upload",
                    "uploaded_at": uploaded_at.to_rfc3339(),
                }),
            );
            let channel = self
                .repository
                .insert(channel)
                .await
                .map_err(ImportChannelsError::RepositoryError)?;
            created.push(channel);
        }

        Ok(created)
    }
}
