use async_trait::async_trait;
use chrono::{Duration, Utc};
use email_address::EmailAddress;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Company, SubscriptionStatus};
use crate::auth::application::ports::outgoing::{
    CompanyQuery, CompanyQueryError, CompanyRepository, CompanyRepositoryError, HashError,
    PasswordHasher,
};
use crate::auth::application::services::opaque_token;

const VERIFICATION_TOKEN_HOURS: i64 = 24;
const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone)]
pub struct RegisterCompanyInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// What registration hands back: enough for the caller to respond and for
/// the orchestrator to send the verification email. The password never
/// leaves the use case.
#[derive(Debug, Clone)]
pub struct RegisterCompanyOutput {
    pub company_id: Uuid,
    pub name: String,
    pub email: String,
    pub verification_token: String,
}

#[derive(Debug, Clone)]
pub enum RegisterCompanyError {
    InvalidName(String),
    InvalidEmail(String),
    InvalidPassword(String),
    EmailAlreadyExists,
    HashingFailed(HashError),
    QueryError(CompanyQueryError),
    RepositoryError(CompanyRepositoryError),
}

impl std::fmt::Display for RegisterCompanyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(msg) => write!(f, "{msg}"),
            Self::InvalidEmail(msg) => write!(f, "{msg}"),
            Self::InvalidPassword(msg) => write!(f, "{msg}"),
            Self::EmailAlreadyExists => write!(f, "Email already in use"),
            Self::HashingFailed(e) => write!(f, "hashing failed: {e}"),
            Self::QueryError(e) => write!(f, "query error: {e}"),
            Self::RepositoryError(e) => write!(f, "repository error: {e}"),
        }
    }
}

impl std::error::Error for RegisterCompanyError {}

#[async_trait]
pub trait IRegisterCompanyUseCase: Send + Sync {
    async fn execute(
        &self,
        input: RegisterCompanyInput,
    ) -> Result<RegisterCompanyOutput, RegisterCompanyError>;
}

pub struct RegisterCompanyUseCase<Q, R>
where
    Q: CompanyQuery,
    R: CompanyRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> RegisterCompanyUseCase<Q, R>
where
    Q: CompanyQuery,
    R: CompanyRepository,
{
    pub fn new(query: Q, repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }

    fn validate(input: &RegisterCompanyInput) -> Result<(String, String), RegisterCompanyError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(RegisterCompanyError::InvalidName(
                "Company name is required".to_string(),
            ));
        }

        let email = input.email.trim().to_lowercase();
        if email.is_empty() || !EmailAddress::is_valid(&email) {
            return Err(RegisterCompanyError::InvalidEmail(
                "Invalid email format".to_string(),
            ));
        }

        if input.password.len() < MIN_PASSWORD_LEN {
            return Err(RegisterCompanyError::InvalidPassword(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        Ok((name.to_string(), email))
    }
}

#[async_trait]
impl<Q, R> IRegisterCompanyUseCase for RegisterCompanyUseCase<Q, R>
where
    Q: CompanyQuery,
    R: CompanyRepository,
{
    async fn execute(
        &self,
        input: RegisterCompanyInput,
    ) -> Result<RegisterCompanyOutput, RegisterCompanyError> {
        let (name, email) = Self::validate(&input)?;

        match self.query.find_by_email(&email).await {
            Ok(Some(_)) => return Err(RegisterCompanyError::EmailAlreadyExists),
            Ok(None) => {}
            Err(e) => return Err(RegisterCompanyError::QueryError(e)),
        }

        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(RegisterCompanyError::HashingFailed)?;

        let verification_token = opaque_token::generate();
        let now = Utc::now();
        let company = Company {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            is_verified: false,
            verification_token: Some(verification_token.clone()),
            verification_token_expires: Some(now + Duration::hours(VERIFICATION_TOKEN_HOURS)),
            reset_token: None,
            reset_token_expires: None,
            subscription_status: SubscriptionStatus::Trial,
            created_at: now,
            updated_at: now,
        };

        let company = self
            .repository
            .create_company(company)
            .await
            .map_err(|e| match e {
                CompanyRepositoryError::EmailAlreadyExists => {
                    RegisterCompanyError::EmailAlreadyExists
                }
                other => RegisterCompanyError::RepositoryError(other),
            })?;

        Ok(RegisterCompanyOutput {
            company_id: company.id,
            name: company.name,
            email: company.email,
            verification_token,
        })
    }
}
