use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::Company;

#[derive(Debug, Clone, PartialEq)]
pub enum CompanyRepositoryError {
    EmailAlreadyExists,
    CompanyNotFound,
    DatabaseError(String),
}

impl std::fmt::Display for CompanyRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmailAlreadyExists => write!(f, "email already in use"),
            Self::CompanyNotFound => write!(f, "company not found"),
            Self::DatabaseError(msg) => write!(f, "database error: {msg}"),
        }
    }
}

impl std::error::Error for CompanyRepositoryError {}

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn create_company(&self, company: Company) -> Result<Company, CompanyRepositoryError>;

    /// Marks the email as verified and clears the verification token, which
    /// makes token redemption single-use.
    async fn activate_company(&self, id: Uuid) -> Result<Company, CompanyRepositoryError>;

    async fn set_reset_token(
        &self,
        id: Uuid,
        token: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), CompanyRepositoryError>;

    /// Replaces the password hash and clears any outstanding reset token.
    async fn update_password(
        &self,
        id: Uuid,
        new_password_hash: String,
    ) -> Result<(), CompanyRepositoryError>;
}
