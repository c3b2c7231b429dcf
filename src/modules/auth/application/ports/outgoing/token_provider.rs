use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub token_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    TokenExpired,
    TokenNotYetValid,
    InvalidSignature,
    MalformedToken,
    InvalidTokenType(String),
    EncodingError(String),
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TokenExpired => write!(f, "Token has expired"),
            Self::TokenNotYetValid => write!(f, "Token is not yet valid"),
            Self::InvalidSignature => write!(f, "Invalid token signature"),
            Self::MalformedToken => write!(f, "Malformed token"),
            Self::InvalidTokenType(expected) => {
                write!(f, "Invalid token type, expected: {expected}")
            }
            Self::EncodingError(msg) => write!(f, "Token encoding error: {msg}"),
        }
    }
}

impl std::error::Error for TokenError {}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, company_id: Uuid) -> Result<String, TokenError>;

    fn generate_refresh_token(&self, company_id: Uuid) -> Result<String, TokenError>;

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;

    /// Exchange a valid refresh token for a fresh access token.
    fn refresh_access_token(&self, refresh_token: &str) -> Result<String, TokenError>;
}
