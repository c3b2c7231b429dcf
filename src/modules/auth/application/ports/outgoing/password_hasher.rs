use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashError {
    HashFailed,
    VerifyFailed,
    TaskFailed,
}

impl std::fmt::Display for HashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HashFailed => write!(f, "password hashing failed"),
            Self::VerifyFailed => write!(f, "password verification failed"),
            Self::TaskFailed => write!(f, "hashing task failed"),
        }
    }
}

impl std::error::Error for HashError {}

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// Ok(false) is a wrong password; Err is an unusable hash.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
