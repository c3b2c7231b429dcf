pub mod company_query;
pub mod company_repository;
pub mod password_hasher;
pub mod token_provider;
pub mod token_repository;

pub use company_query::{CompanyQuery, CompanyQueryError};
pub use company_repository::{CompanyRepository, CompanyRepositoryError};
pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
pub use token_repository::{TokenRepository, TokenRepositoryError};
