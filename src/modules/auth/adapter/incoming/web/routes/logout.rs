use actix_web::{post, web, HttpRequest, Responder};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::{
    extract_bearer_token, AuthenticatedCompany,
};
use crate::auth::application::use_cases::logout_company::LogoutCompanyError;
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

/// Revoke the presented access token.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Token revoked", body = LogoutResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/auth/logout")]
pub async fn logout_company_handler(
    req: HttpRequest,
    company: AuthenticatedCompany,
    data: web::Data<AppState>,
) -> impl Responder {
    // The extractor already validated the header, so this always succeeds.
    let token = match extract_bearer_token(&req) {
        Some(token) => token,
        None => return ApiResponse::unauthorized("Missing or invalid authorization header"),
    };

    match data.logout_company_use_case.execute(&token).await {
        Ok(()) => {
            info!(company_id = %company.company_id, "company logged out");
            ApiResponse::ok(LogoutResponse {
                success: true,
                message: "Logged out successfully".to_string(),
            })
        }
        Err(LogoutCompanyError::InvalidToken(_)) => {
            ApiResponse::unauthorized("Invalid or expired token")
        }
        Err(e) => {
            error!(company_id = %company.company_id, error = %e, "logout failed");
            ApiResponse::internal_error()
        }
    }
}
