use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{TokenError, TokenProvider};

#[derive(Debug, Clone, PartialEq)]
pub enum RefreshTokenError {
    InvalidToken(TokenError),
}

impl std::fmt::Display for RefreshTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidToken(e) => write!(f, "invalid refresh token: {e}"),
        }
    }
}

impl std::error::Error for RefreshTokenError {}

#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(&self, refresh_token: &str) -> Result<String, RefreshTokenError>;
}

pub struct RefreshTokenUseCase {
    token_provider: Arc<dyn TokenProvider>,
}

impl RefreshTokenUseCase {
    pub fn new(token_provider: Arc<dyn TokenProvider>) -> Self {
        Self { token_provider }
    }
}

#[async_trait]
impl IRefreshTokenUseCase for RefreshTokenUseCase {
    async fn execute(&self, refresh_token: &str) -> Result<String, RefreshTokenError> {
        self.token_provider
            .refresh_access_token(refresh_token)
            .map_err(RefreshTokenError::InvalidToken)
    }
}
