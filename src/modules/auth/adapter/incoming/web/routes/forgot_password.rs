use actix_web::{post, web, HttpRequest, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct ForgotPasswordRequest {
    #[schema(example = "ops@acme.example")]
    pub email: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ForgotPasswordResponse {
    pub success: bool,
    pub message: String,
}

/// Request a password-reset link. The response never reveals whether the
/// email has an account.
#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    tag = "auth",
    request_body = ForgotPasswordRequest,
    responses(
        (status = 200, description = "Accepted (regardless of whether the email exists)", body = ForgotPasswordResponse),
        (status = 400, description = "Missing email", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody),
    )
)]
#[post("/api/auth/forgot-password")]
pub async fn forgot_password_handler(
    req: HttpRequest,
    body: web::Json<ForgotPasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Some(ip) = req.peer_addr().map(|addr| addr.ip()) {
        if !data.rate_limits.check_api(ip) {
            return ApiResponse::too_many_requests(
                "Too many requests from this IP, please try again later.",
            );
        }
    }

    let email = match &body.email {
        Some(email) if !email.trim().is_empty() => email,
        _ => return ApiResponse::bad_request("Email is required"),
    };

    match data.forgot_password_use_case.execute(email).await {
        Ok(()) => ApiResponse::ok(ForgotPasswordResponse {
            success: true,
            message: "If your email exists in our system, you will receive a password reset link"
                .to_string(),
        }),
        Err(e) => {
            error!(error = %e, "forgot-password failed");
            ApiResponse::internal_error()
        }
    }
}
