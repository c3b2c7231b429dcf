use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::auth::application::use_cases::reset_password::ResetPasswordError;
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct ResetPasswordRequest {
    pub token: Option<String>,
    #[schema(example = "NewSecurePass1")]
    pub password: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ResetPasswordResponse {
    pub success: bool,
    pub message: String,
}

/// Redeem a reset token and set a new password.
#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    tag = "auth",
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password replaced", body = ResetPasswordResponse),
        (status = 400, description = "Missing fields or bad token", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody),
    )
)]
#[post("/api/auth/reset-password")]
pub async fn reset_password_handler(
    body: web::Json<ResetPasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (token, password) = match (&body.token, &body.password) {
        (Some(token), Some(password)) => (token, password),
        _ => return ApiResponse::bad_request("Token and new password are required"),
    };

    match data
        .reset_password_use_case
        .execute(token, password)
        .await
    {
        Ok(()) => ApiResponse::ok(ResetPasswordResponse {
            success: true,
            message:
                "Password has been reset successfully. You can now log in with your new password."
                    .to_string(),
        }),
        Err(ResetPasswordError::TokenInvalid | ResetPasswordError::TokenExpired) => {
            warn!("password reset with invalid or expired token");
            ApiResponse::bad_request("Invalid or expired reset token")
        }
        Err(ResetPasswordError::InvalidPassword(msg)) => ApiResponse::bad_request(&msg),
        Err(e) => {
            error!(error = %e, "password reset failed");
            ApiResponse::internal_error()
        }
    }
}
