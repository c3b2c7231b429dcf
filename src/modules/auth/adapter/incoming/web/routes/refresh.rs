use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::auth::application::use_cases::refresh_token::RefreshTokenError;
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct RefreshRequest {
    pub refresh_token: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RefreshResponse {
    pub token: String,
}

/// Exchange a refresh token for a fresh access token.
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body = RefreshRequest,
    responses(
        (status = 200, description = "New access token", body = RefreshResponse),
        (status = 400, description = "Missing refresh token", body = ErrorBody),
        (status = 401, description = "Invalid refresh token", body = ErrorBody),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    body: web::Json<RefreshRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let refresh_token = match &body.refresh_token {
        Some(token) if !token.is_empty() => token,
        _ => return ApiResponse::bad_request("Refresh token is required"),
    };

    match data.refresh_token_use_case.execute(refresh_token).await {
        Ok(token) => ApiResponse::ok(RefreshResponse { token }),
        Err(RefreshTokenError::InvalidToken(e)) => {
            warn!(error = %e, "refresh with invalid token");
            ApiResponse::unauthorized("Invalid or expired refresh token")
        }
    }
}
