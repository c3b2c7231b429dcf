use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::TokenProvider;
use crate::shared::api::ApiResponse;

/// The authenticated company behind a Bearer access token. All
/// channel-mutating and CSV endpoints extract this; the public verification
/// endpoint does not.
#[derive(Debug, Clone)]
pub struct AuthenticatedCompany {
    pub company_id: Uuid,
}

fn auth_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedCompany {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider>>>() {
                Some(provider) => provider,
                None => {
                    return ready(Err(auth_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_bearer_token(req) {
            Some(t) => t,
            None => {
                return ready(Err(auth_error(ApiResponse::unauthorized(
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match token_provider.verify_token(&token) {
            Ok(claims) if claims.token_type == "access" => ready(Ok(AuthenticatedCompany {
                company_id: claims.sub,
            })),
            Ok(_) => ready(Err(auth_error(ApiResponse::unauthorized(
                "Invalid token type",
            )))),
            Err(_) => ready(Err(auth_error(ApiResponse::unauthorized(
                "Invalid or expired token",
            )))),
        }
    }
}

pub fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
