use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::entities::Company;
use crate::auth::application::ports::outgoing::{
    CompanyQuery, CompanyQueryError, CompanyRepository, CompanyRepositoryError,
};

#[derive(Debug, Clone, PartialEq)]
pub enum VerifyCompanyEmailError {
    TokenInvalid,
    TokenExpired,
    QueryError(CompanyQueryError),
    RepositoryError(CompanyRepositoryError),
}

impl std::fmt::Display for VerifyCompanyEmailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TokenInvalid => write!(f, "Invalid verification token"),
            Self::TokenExpired => write!(f, "Verification token has expired"),
            Self::QueryError(e) => write!(f, "query error: {e}"),
            Self::RepositoryError(e) => write!(f, "repository error: {e}"),
        }
    }
}

impl std::error::Error for VerifyCompanyEmailError {}

#[async_trait]
pub trait IVerifyCompanyEmailUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<Company, VerifyCompanyEmailError>;
}

/// Redeems an email-verification token. Activation clears the stored token,
/// so a link can only be used once.
pub struct VerifyCompanyEmailUseCase<Q, R>
where
    Q: CompanyQuery,
    R: CompanyRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> VerifyCompanyEmailUseCase<Q, R>
where
    Q: CompanyQuery,
    R: CompanyRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IVerifyCompanyEmailUseCase for VerifyCompanyEmailUseCase<Q, R>
where
    Q: CompanyQuery,
    R: CompanyRepository,
{
    async fn execute(&self, token: &str) -> Result<Company, VerifyCompanyEmailError> {
        let company = self
            .query
            .find_by_verification_token(token)
            .await
            .map_err(VerifyCompanyEmailError::QueryError)?
            .ok_or(VerifyCompanyEmailError::TokenInvalid)?;

        if !company.verification_token_valid_at(Utc::now()) {
            return Err(VerifyCompanyEmailError::TokenExpired);
        }

        self.repository
            .activate_company(company.id)
            .await
            .map_err(VerifyCompanyEmailError::RepositoryError)
    }
}
