use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{error, info};

use crate::auth::application::ports::outgoing::{
    CompanyQuery, CompanyQueryError, CompanyRepository, CompanyRepositoryError,
};
use crate::auth::application::services::opaque_token;
use crate::email::application::ports::outgoing::CompanyEmailNotifier;

const RESET_TOKEN_HOURS: i64 = 24;

#[derive(Debug, Clone, PartialEq)]
pub enum ForgotPasswordError {
    QueryError(CompanyQueryError),
    RepositoryError(CompanyRepositoryError),
}

impl std::fmt::Display for ForgotPasswordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QueryError(e) => write!(f, "query error: {e}"),
            Self::RepositoryError(e) => write!(f, "repository error: {e}"),
        }
    }
}

impl std::error::Error for ForgotPasswordError {}

#[async_trait]
pub trait IForgotPasswordUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<(), ForgotPasswordError>;
}

/// Issues a reset token when the email is known and does nothing otherwise.
/// Either way the caller sees the same outcome, so the endpoint never
/// reveals which addresses have accounts.
pub struct ForgotPasswordUseCase<Q, R>
where
    Q: CompanyQuery,
    R: CompanyRepository,
{
    query: Q,
    repository: R,
    notifier: Arc<dyn CompanyEmailNotifier>,
}

impl<Q, R> ForgotPasswordUseCase<Q, R>
where
    Q: CompanyQuery,
    R: CompanyRepository,
{
    pub fn new(query: Q, repository: R, notifier: Arc<dyn CompanyEmailNotifier>) -> Self {
        Self {
            query,
            repository,
            notifier,
        }
    }
}

#[async_trait]
impl<Q, R> IForgotPasswordUseCase for ForgotPasswordUseCase<Q, R>
where
    Q: CompanyQuery,
    R: CompanyRepository,
{
    async fn execute(&self, email: &str) -> Result<(), ForgotPasswordError> {
        let email = email.trim().to_lowercase();

        let company = match self
            .query
            .find_by_email(&email)
            .await
            .map_err(ForgotPasswordError::QueryError)?
        {
            Some(company) => company,
            None => {
                info!("password reset requested for unknown email");
                return Ok(());
            }
        };

        let token = opaque_token::generate();
        let expires_at = Utc::now() + Duration::hours(RESET_TOKEN_HOURS);

        self.repository
            .set_reset_token(company.id, token.clone(), expires_at)
            .await
            .map_err(ForgotPasswordError::RepositoryError)?;

        // The token is persisted; a lost email only costs the user another
        // forgot-password round trip.
        if let Err(e) = self
            .notifier
            .send_password_reset_email(&company.email, &token)
            .await
        {
            error!(company_id = %company.id, error = %e, "failed to send password reset email");
        }

        Ok(())
    }
}
