use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::Company;
use crate::auth::application::ports::outgoing::{
    CompanyQuery, CompanyQueryError, HashError, PasswordHasher, TokenError, TokenProvider,
};

#[derive(Debug, Clone)]
pub enum LoginCompanyError {
    /// Unknown email and wrong password are indistinguishable on purpose.
    InvalidCredentials,
    EmailNotVerified,
    VerificationFailed(HashError),
    TokenGenerationFailed(TokenError),
    QueryError(CompanyQueryError),
}

impl std::fmt::Display for LoginCompanyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "Invalid credentials"),
            Self::EmailNotVerified => {
                write!(f, "Please verify your email before logging in")
            }
            Self::VerificationFailed(e) => write!(f, "password verification failed: {e}"),
            Self::TokenGenerationFailed(e) => write!(f, "token generation failed: {e}"),
            Self::QueryError(e) => write!(f, "query error: {e}"),
        }
    }
}

impl std::error::Error for LoginCompanyError {}

#[derive(Debug, Clone)]
pub struct LoginCompanyOutput {
    pub access_token: String,
    pub refresh_token: String,
    pub company: Company,
}

#[async_trait]
pub trait ILoginCompanyUseCase: Send + Sync {
    async fn execute(
        &self,
        email: &str,
        password: &str,
    ) -> Result<LoginCompanyOutput, LoginCompanyError>;
}

pub struct LoginCompanyUseCase<Q>
where
    Q: CompanyQuery,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q> LoginCompanyUseCase<Q>
where
    Q: CompanyQuery,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginCompanyUseCase for LoginCompanyUseCase<Q>
where
    Q: CompanyQuery,
{
    async fn execute(
        &self,
        email: &str,
        password: &str,
    ) -> Result<LoginCompanyOutput, LoginCompanyError> {
        let email = email.trim().to_lowercase();

        let company = self
            .query
            .find_by_email(&email)
            .await
            .map_err(LoginCompanyError::QueryError)?
            .ok_or(LoginCompanyError::InvalidCredentials)?;

        if !company.is_verified {
            return Err(LoginCompanyError::EmailNotVerified);
        }

        let password_ok = self
            .password_hasher
            .verify_password(password, &company.password_hash)
            .await
            .map_err(LoginCompanyError::VerificationFailed)?;

        if !password_ok {
            return Err(LoginCompanyError::InvalidCredentials);
        }

        let access_token = self
            .token_provider
            .generate_access_token(company.id)
            .map_err(LoginCompanyError::TokenGenerationFailed)?;
        let refresh_token = self
            .token_provider
            .generate_refresh_token(company.id)
            .map_err(LoginCompanyError::TokenGenerationFailed)?;

        Ok(LoginCompanyOutput {
            access_token,
            refresh_token,
            company,
        })
    }
}
