use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::auth::application::use_cases::verify_company_email::VerifyCompanyEmailError;
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;

#[derive(Deserialize)]
pub struct VerifyEmailQuery {
    pub token: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct VerifyEmailResponse {
    pub success: bool,
    #[schema(example = "Email verified successfully. You can now log in.")]
    pub message: String,
}

/// Redeem an email-verification token from the signup mail.
#[utoipa::path(
    get,
    path = "/api/auth/verify-email",
    tag = "auth",
    params(("token" = String, Query, description = "Verification token from the email link")),
    responses(
        (status = 200, description = "Email verified", body = VerifyEmailResponse),
        (status = 400, description = "Missing, unknown or expired token", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody),
    )
)]
#[get("/api/auth/verify-email")]
pub async fn verify_email_handler(
    query: web::Query<VerifyEmailQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let token = match &query.token {
        Some(token) if !token.is_empty() => token,
        _ => return ApiResponse::bad_request("Verification token is required"),
    };

    match data.verify_company_email_use_case.execute(token).await {
        Ok(company) => {
            info!(company_id = %company.id, "company email verified");
            ApiResponse::ok(VerifyEmailResponse {
                success: true,
                message: "Email verified successfully. You can now log in.".to_string(),
            })
        }
        Err(VerifyCompanyEmailError::TokenInvalid | VerifyCompanyEmailError::TokenExpired) => {
            warn!("email verification with invalid or expired token");
            ApiResponse::bad_request("Invalid or expired verification token")
        }
        Err(e) => {
            error!(error = %e, "email verification failed");
            ApiResponse::internal_error()
        }
    }
}
