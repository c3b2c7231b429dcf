use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{
    TokenError, TokenProvider, TokenRepository, TokenRepositoryError,
};

#[derive(Debug, Clone, PartialEq)]
pub enum LogoutCompanyError {
    InvalidToken(TokenError),
    RepositoryError(TokenRepositoryError),
}

impl std::fmt::Display for LogoutCompanyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidToken(e) => write!(f, "invalid token: {e}"),
            Self::RepositoryError(e) => write!(f, "repository error: {e}"),
        }
    }
}

impl std::error::Error for LogoutCompanyError {}

#[async_trait]
pub trait ILogoutCompanyUseCase: Send + Sync {
    async fn execute(&self, access_token: &str) -> Result<(), LogoutCompanyError>;
}

/// Revokes the presented access token by blacklisting its hash until the
/// token would have expired anyway. Only the hash is stored.
pub struct LogoutCompanyUseCase<T>
where
    T: TokenRepository,
{
    token_repository: T,
    token_provider: Arc<dyn TokenProvider>,
}

impl<T> LogoutCompanyUseCase<T>
where
    T: TokenRepository,
{
    pub fn new(token_repository: T, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            token_repository,
            token_provider,
        }
    }

    pub fn hash_token(token: &str) -> String {
        let digest = Sha256::digest(token.as_bytes());
        digest.iter().map(|b| format!("{b:02x}")).collect()
    }
}

#[async_trait]
impl<T> ILogoutCompanyUseCase for LogoutCompanyUseCase<T>
where
    T: TokenRepository,
{
    async fn execute(&self, access_token: &str) -> Result<(), LogoutCompanyError> {
        let claims = self
            .token_provider
            .verify_token(access_token)
            .map_err(LogoutCompanyError::InvalidToken)?;

        if claims.token_type != "access" {
            return Err(LogoutCompanyError::InvalidToken(
                TokenError::InvalidTokenType("access".to_string()),
            ));
        }

        let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0).unwrap_or_else(Utc::now);

        self.token_repository
            .blacklist_token(&Self::hash_token(access_token), claims.sub, expires_at)
            .await
            .map_err(LogoutCompanyError::RepositoryError)
    }
}
