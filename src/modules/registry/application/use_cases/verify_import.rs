use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{error, warn};
use uuid::Uuid;

use crate::registry::application::domain::channel::Channel;
use crate::registry::application::ports::outgoing::{
    ChannelRepository, ChannelRepositoryError, OwnershipCheck, StatusUpdate,
};

const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq)]
pub enum VerifyImportError {
    NoEligibleRecords,
    RepositoryError(ChannelRepositoryError),
}

impl std::fmt::Display for VerifyImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoEligibleRecords => write!(f, "no unverified records found"),
            Self::RepositoryError(e) => write!(f, "repository error: {e}"),
        }
    }
}

impl std::error::Error for VerifyImportError {}

#[async_trait]
pub trait IVerifyImportUseCase: Send + Sync {
    async fn execute(
        &self,
        company_id: Uuid,
        channel_ids: Vec<Uuid>,
    ) -> Result<Vec<Channel>, VerifyImportError>;
}

/// Runs one ownership-check attempt per eligible record, concurrently.
///
/// Records that are unknown, foreign-owned or already terminal are skipped.
/// A failed, errored or timed-out attempt moves only that record to
/// `failed`; it never fails the batch. Ids are de-duplicated so a channel
/// is attempted at most once per call.
pub struct VerifyImportUseCase<R>
where
    R: ChannelRepository,
{
    repository: Arc<R>,
    checker: Arc<dyn OwnershipCheck>,
    attempt_timeout: Duration,
}

impl<R> VerifyImportUseCase<R>
where
    R: ChannelRepository,
{
    pub fn new(repository: Arc<R>, checker: Arc<dyn OwnershipCheck>) -> Self {
        Self {
            repository,
            checker,
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
        }
    }

    pub fn with_attempt_timeout(mut self, attempt_timeout: Duration) -> Self {
        self.attempt_timeout = attempt_timeout;
        self
    }

    async fn attempt(&self, channel: Channel) -> Option<Channel> {
        let attempted_at = Utc::now();
        let outcome = timeout(self.attempt_timeout, self.checker.prove(&channel)).await;

        let update = match outcome {
            Ok(Ok(true)) => StatusUpdate::verified(
                Utc::now(),
                attempt_metadata(&channel.metadata, "success", attempted_at, None),
            ),
            Ok(Ok(false)) => StatusUpdate::failed(attempt_metadata(
                &channel.metadata,
                "failure",
                attempted_at,
                None,
            )),
            Ok(Err(e)) => {
                warn!(channel_id = %channel.id, error = %e, "ownership check errored");
                StatusUpdate::failed(attempt_metadata(
                    &channel.metadata,
                    "error",
                    attempted_at,
                    Some(e.to_string()),
                ))
            }
            Err(_) => {
                warn!(channel_id = %channel.id, "ownership check timed out");
                StatusUpdate::failed(attempt_metadata(
                    &channel.metadata,
                    "timeout",
                    attempted_at,
                    None,
                ))
            }
        };

        match self.repository.update_status(channel.id, update).await {
            Ok(updated) => Some(updated),
            Err(e) => {
                error!(channel_id = %channel.id, error = %e, "failed to record verification outcome");
                None
            }
        }
    }
}

/// Carries the original metadata forward and appends the attempt outcome.
fn attempt_metadata(
    base: &serde_json::Value,
    result: &str,
    attempted_at: DateTime<Utc>,
    error: Option<String>,
) -> serde_json::Value {
    let mut map = match base {
        serde_json::Value::Object(map) => map.clone(),
        _ => serde_json::Map::new(),
    };
    map.insert(
        "verification_attempted_at".to_string(),
        serde_json::Value::String(attempted_at.to_rfc3339()),
    );
    map.insert(
        "verification_result".to_string(),
        serde_json::Value::String(result.to_string()),
    );
    if let Some(error) = error {
        map.insert(
            "verification_error".to_string(),
            serde_json::Value::String(error),
        );
    }
    serde_json::Value::Object(map)
}

#[async_trait]
impl<R> IVerifyImportUseCase for VerifyImportUseCase<R>
where
    R: ChannelRepository,
{
    async fn execute(
        &self,
        company_id: Uuid,
        channel_ids: Vec<Uuid>,
    ) -> Result<Vec<Channel>, VerifyImportError> {
        // Each channel is attempted at most once per call, however often the
        // caller repeated its id.
        let mut seen = HashSet::new();
        let ids: Vec<Uuid> = channel_ids
            .into_iter()
            .filter(|id| seen.insert(*id))
            .collect();

        let eligible = self
            .repository
            .find_unverified_owned(&ids, company_id)
            .await
            .map_err(VerifyImportError::RepositoryError)?;

        if eligible.is_empty() {
            return Err(VerifyImportError::NoEligibleRecords);
        }

        let attempts = eligible.into_iter().map(|channel| self.attempt(channel));
        let results: Vec<Channel> = join_all(attempts).await.into_iter().flatten().collect();

        Ok(results)
    }
}
