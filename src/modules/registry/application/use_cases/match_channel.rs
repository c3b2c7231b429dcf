use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::registry::application::domain::matcher::{match_input, MatchConfidence};
use crate::registry::application::ports::outgoing::{
    VerifiedChannelQuery, VerifiedChannelQueryError,
};
use crate::registry::application::services::stats::VerificationStats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Verified {
        company: String,
        confidence: MatchConfidence,
    },
    NotVerified,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MatchChannelError {
    QueryError(VerifiedChannelQueryError),
}

impl std::fmt::Display for MatchChannelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QueryError(e) => write!(f, "query error: {e}"),
        }
    }
}

impl std::error::Error for MatchChannelError {}

#[async_trait]
pub trait IMatchChannelUseCase: Send + Sync {
    async fn execute(&self, input_value: &str) -> Result<MatchOutcome, MatchChannelError>;
}

/// The public verification matcher. Pure read: scans the verified channels
/// in registry order and reports the owning company of the first hit. Every
/// attempt is logged and counted, nothing is mutated.
pub struct MatchChannelUseCase<Q>
where
    Q: VerifiedChannelQuery,
{
    query: Q,
    stats: Arc<VerificationStats>,
}

impl<Q> MatchChannelUseCase<Q>
where
    Q: VerifiedChannelQuery,
{
    pub fn new(query: Q, stats: Arc<VerificationStats>) -> Self {
        Self { query, stats }
    }
}

#[async_trait]
impl<Q> IMatchChannelUseCase for MatchChannelUseCase<Q>
where
    Q: VerifiedChannelQuery,
{
    async fn execute(&self, input_value: &str) -> Result<MatchOutcome, MatchChannelError> {
        let candidates = self
            .query
            .list_verified()
            .await
            .map_err(MatchChannelError::QueryError)?;

        let hit = match_input(input_value, &candidates);
        self.stats.record(hit.is_some());

        match hit {
            Some(hit) => {
                info!(
                    input = %input_value,
                    company = %hit.channel.company_name,
                    confidence = ?hit.confidence,
                    "verification attempt matched"
                );
                Ok(MatchOutcome::Verified {
                    company: hit.channel.company_name.clone(),
                    confidence: hit.confidence,
                })
            }
            None => {
                info!(input = %input_value, "verification attempt found no match");
                Ok(MatchOutcome::NotVerified)
            }
        }
    }
}
