use async_trait::async_trait;

use crate::registry::application::domain::channel::Channel;

#[derive(Debug, Clone, PartialEq)]
pub enum OwnershipCheckError {
    Unavailable(String),
}

impl std::fmt::Display for OwnershipCheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "ownership check unavailable: {msg}"),
        }
    }
}

impl std::error::Error for OwnershipCheckError {}

/// Proof that the importing company actually controls a channel.
///
/// The bulk pipeline only depends on this trait; swapping the placeholder
/// prover for a DNS-TXT or OAuth challenge is an adapter change.
#[async_trait]
pub trait OwnershipCheck: Send + Sync {
    async fn prove(&self, channel: &Channel) -> Result<bool, OwnershipCheckError>;
}
