use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Company;

#[derive(Debug, Clone, PartialEq)]
pub enum CompanyQueryError {
    DatabaseError(String),
}

impl std::fmt::Display for CompanyQueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "database error: {msg}"),
        }
    }
}

impl std::error::Error for CompanyQueryError {}

#[async_trait]
pub trait CompanyQuery: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, CompanyQueryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Company>, CompanyQueryError>;

    async fn find_by_verification_token(
        &self,
        token: &str,
    ) -> Result<Option<Company>, CompanyQueryError>;

    async fn find_by_reset_token(&self, token: &str)
        -> Result<Option<Company>, CompanyQueryError>;
}
