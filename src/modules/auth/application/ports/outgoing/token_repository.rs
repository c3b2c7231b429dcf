use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenRepositoryError {
    ConnectionError(String),
    OperationFailed(String),
}

impl std::fmt::Display for TokenRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConnectionError(msg) => write!(f, "token store connection error: {msg}"),
            Self::OperationFailed(msg) => write!(f, "token store operation failed: {msg}"),
        }
    }
}

impl std::error::Error for TokenRepositoryError {}

/// Store of revoked access tokens. Entries live exactly as long as the
/// token would have, so lookups stay O(1) and cleanup is the store's TTL.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    async fn blacklist_token(
        &self,
        token_hash: &str,
        company_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError>;

    async fn is_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError>;
}
