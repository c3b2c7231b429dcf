pub mod app_state_builder;
pub mod stubs;

use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;

/// A real JWT service plus a valid access token for handler tests that go
/// through the `AuthenticatedCompany` extractor.
pub fn test_token_provider() -> (web::Data<Arc<dyn TokenProvider>>, String) {
    let service = JwtTokenService::new(JwtConfig {
        secret_key: "FAKE_JWT_SECRET_DO_NOT_USE_0123456789".to_string(),
        issuer: "test".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 86400,
    });

    let token = service
        .generate_access_token(Uuid::new_v4())
        .expect("test token generation");

    let provider: Arc<dyn TokenProvider> = Arc::new(service);
    (web::Data::new(provider), token)
}

pub fn auth_header(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}
