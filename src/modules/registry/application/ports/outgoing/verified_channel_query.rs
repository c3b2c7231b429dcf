use async_trait::async_trait;

use crate::registry::application::domain::matcher::VerifiedChannel;

#[derive(Debug, Clone, PartialEq)]
pub enum VerifiedChannelQueryError {
    DatabaseError(String),
}

impl std::fmt::Display for VerifiedChannelQueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "database error: {msg}"),
        }
    }
}

impl std::error::Error for VerifiedChannelQueryError {}

/// Read model for the public matcher: every verified channel with its
/// owning company's name, in registry insertion order.
#[async_trait]
pub trait VerifiedChannelQuery: Send + Sync {
    async fn list_verified(&self) -> Result<Vec<VerifiedChannel>, VerifiedChannelQueryError>;
}
