use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{
    CompanyQuery, CompanyQueryError, CompanyRepository, CompanyRepositoryError, HashError,
    PasswordHasher,
};

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub enum ResetPasswordError {
    TokenInvalid,
    TokenExpired,
    InvalidPassword(String),
    HashingFailed(HashError),
    QueryError(CompanyQueryError),
    RepositoryError(CompanyRepositoryError),
}

impl std::fmt::Display for ResetPasswordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TokenInvalid => write!(f, "Invalid or expired reset token"),
            Self::TokenExpired => write!(f, "Invalid or expired reset token"),
            Self::InvalidPassword(msg) => write!(f, "{msg}"),
            Self::HashingFailed(e) => write!(f, "hashing failed: {e}"),
            Self::QueryError(e) => write!(f, "query error: {e}"),
            Self::RepositoryError(e) => write!(f, "repository error: {e}"),
        }
    }
}

impl std::error::Error for ResetPasswordError {}

#[async_trait]
pub trait IResetPasswordUseCase: Send + Sync {
    async fn execute(&self, token: &str, new_password: &str) -> Result<(), ResetPasswordError>;
}

/// Redeems a reset token: replaces the password hash and clears the token
/// in the same repository operation, so the link is single-use.
pub struct ResetPasswordUseCase<Q, R>
where
    Q: CompanyQuery,
    R: CompanyRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> ResetPasswordUseCase<Q, R>
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
}

#[async_trait]
impl<Q, R> IResetPasswordUseCase for ResetPasswordUseCase<Q, R>
where
    Q: CompanyQuery,
    R: CompanyRepository,
{
    async fn execute(&self, token: &str, new_password: &str) -> Result<(), ResetPasswordError> {
        if new_password.len() < MIN_PASSWORD_LEN {
            return Err(ResetPasswordError::InvalidPassword(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        let company = self
            .query
            .find_by_reset_token(token)
            .await
            .map_err(ResetPasswordError::QueryError)?
            .ok_or(ResetPasswordError::TokenInvalid)?;

        if !company.reset_token_valid_at(Utc::now()) {
            return Err(ResetPasswordError::TokenExpired);
        }

        let new_hash = self
            .password_hasher
            .hash_password(new_password)
            .await
            .map_err(ResetPasswordError::HashingFailed)?;

        self.repository
            .update_password(company.id, new_hash)
            .await
            .map_err(ResetPasswordError::RepositoryError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{Company, SubscriptionStatus};
    use chrono::{DateTime, Duration};
    use std::sync::Mutex;
    use uuid::Uuid;

    fn company_with_reset(token: &str, expires: DateTime<Utc>) -> Company {
        Company {
            id: Uuid::new_v4(),
            name: "Acme".to_string(),
            email: "ops@acme.example".to_string(),
            password_hash: "old_hash".to_string(),
            is_verified: true,
            verification_token: None,
            verification_token_expires: None,
            reset_token: Some(token.to_string()),
            reset_token_expires: Some(expires),
            subscription_status: SubscriptionStatus::Trial,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    struct MockQuery {
        company: Option<Company>,
    }

    #[async_trait]
    impl CompanyQuery for MockQuery {
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Company>, CompanyQueryError> {
            Ok(None)
        }

        async fn find_by_email(
            &self,
            _email: &str,
        ) -> Result<Option<Company>, CompanyQueryError> {
            Ok(None)
        }

        async fn find_by_verification_token(
            &self,
            _token: &str,
        ) -> Result<Option<Company>, CompanyQueryError> {
            Ok(None)
        }

        async fn find_by_reset_token(
            &self,
            token: &str,
        ) -> Result<Option<Company>, CompanyQueryError> {
            Ok(self
                .company
                .as_ref()
                .filter(|c| c.reset_token.as_deref() == Some(token))
                .cloned())
        }
    }

    #[derive(Default)]
    struct MockRepository {
        updated_hash: Mutex<Option<String>>,
    }

    #[async_trait]
    impl CompanyRepository for MockRepository {
        async fn create_company(
            &self,
            _company: Company,
        ) -> Result<Company, CompanyRepositoryError> {
            unimplemented!()
        }

        async fn activate_company(&self, _id: Uuid) -> Result<Company, CompanyRepositoryError> {
            unimplemented!()
        }

        async fn set_reset_token(
            &self,
            _id: Uuid,
            _token: String,
            _expires_at: DateTime<Utc>,
        ) -> Result<(), CompanyRepositoryError> {
            unimplemented!()
        }

        async fn update_password(
            &self,
            _id: Uuid,
            new_password_hash: String,
        ) -> Result<(), CompanyRepositoryError> {
            *self.updated_hash.lock().unwrap() = Some(new_password_hash);
            Ok(())
        }
    }

    struct MockHasher;

    #[async_trait]
    impl PasswordHasher for MockHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError> {
            Ok(format!("hashed:{password}"))
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            Ok(true)
        }
    }

    #[tokio::test]
    async fn valid_token_replaces_the_password() {
        let use_case = ResetPasswordUseCase::new(
            MockQuery {
                company: Some(company_with_reset("tok", Utc::now() + Duration::hours(1))),
            },
            MockRepository::default(),
            Arc::new(MockHasher),
        );

        use_case.execute("tok", "NewSecurePass1").await.unwrap();

        assert_eq!(
            use_case.repository.updated_hash.lock().unwrap().as_deref(),
            Some("hashed:NewSecurePass1")
        );
    }

    #[tokio::test]
    async fn unknown_token_is_invalid() {
        let use_case = ResetPasswordUseCase::new(
            MockQuery { company: None },
            MockRepository::default(),
            Arc::new(MockHasher),
        );

        let result = use_case.execute("nope", "NewSecurePass1").await;

        assert!(matches!(result, Err(ResetPasswordError::TokenInvalid)));
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let use_case = ResetPasswordUseCase::new(
            MockQuery {
                company: Some(company_with_reset("tok", Utc::now() - Duration::hours(1))),
            },
            MockRepository::default(),
            Arc::new(MockHasher),
        );

        let result = use_case.execute("tok", "NewSecurePass1").await;

        assert!(matches!(result, Err(ResetPasswordError::TokenExpired)));
        assert!(use_case.repository.updated_hash.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn short_password_is_rejected_before_lookup() {
        let use_case = ResetPasswordUseCase::new(
            MockQuery { company: None },
            MockRepository::default(),
            Arc::new(MockHasher),
        );

        let result = use_case.execute("tok", "short").await;

        assert!(matches!(result, Err(ResetPasswordError::InvalidPassword(_))));
    }
}
