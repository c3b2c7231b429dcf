use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{TokenRepository, TokenRepositoryError};

/// Redis-backed blacklist of revoked access tokens.
///
/// One key per token hash:
/// ```text
/// auth:blacklist:token:{token_hash} -> "{company_id}"
/// ```
/// Key exists ⇒ token is revoked. The TTL equals the token's remaining
/// lifetime, so Redis expiry is the only cleanup mechanism.
#[derive(Clone)]
pub struct RedisTokenRepository {
    pool: Arc<Pool>,
}

impl RedisTokenRepository {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn token_key(token_hash: &str) -> String {
        format!("auth:blacklist:token:{token_hash}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, TokenRepositoryError> {
        self.pool
            .get()
            .await
            .map_err(|e| TokenRepositoryError::ConnectionError(e.to_string()))
    }
}

#[async_trait]
impl TokenRepository for RedisTokenRepository {
    async fn blacklist_token(
        &self,
        token_hash: &str,
        company_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError> {
        let ttl = (expires_at - Utc::now()).num_seconds().max(1) as u64;
        let mut conn = self.get_conn().await?;

        conn.set_ex::<_, _, ()>(Self::token_key(token_hash), company_id.to_string(), ttl)
            .await
            .map_err(|e| TokenRepositoryError::OperationFailed(e.to_string()))
    }

    async fn is_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError> {
        let mut conn = self.get_conn().await?;

        conn.exists(Self::token_key(token_hash))
            .await
            .map_err(|e| TokenRepositoryError::OperationFailed(e.to_string()))
    }
}
