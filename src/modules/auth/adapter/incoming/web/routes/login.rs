use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::auth::application::use_cases::login_company::LoginCompanyError;
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "ops@acme.example")]
    pub email: Option<String>,
    #[schema(example = "SecurePass123")]
    pub password: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct LoginCompanyJson {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subscription_status: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub refresh_token: String,
    pub company: LoginCompanyJson,
}

/// Log a company in and issue access + refresh tokens.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 400, description = "Missing fields", body = ErrorBody),
        (status = 401, description = "Invalid credentials or unverified email", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody),
    )
)]
#[post("/api/auth/login")]
pub async fn login_company_handler(
    req: HttpRequest,
    body: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Some(ip) = req.peer_addr().map(|addr| addr.ip()) {
        if !data.rate_limits.check_api(ip) {
            return ApiResponse::too_many_requests(
                "Too many requests from this IP, please try again later.",
            );
        }
    }

    let (email, password) = match (&body.email, &body.password) {
        (Some(email), Some(password)) => (email.clone(), password.clone()),
        _ => return ApiResponse::bad_request("Email and password are required"),
    };

    match data.login_company_use_case.execute(&email, &password).await {
        Ok(output) => {
            info!(company_id = %output.company.id, "company logged in");
            ApiResponse::ok(LoginResponse {
                success: true,
                token: output.access_token,
                refresh_token: output.refresh_token,
                company: LoginCompanyJson {
                    id: output.company.id.to_string(),
                    name: output.company.name,
                    email: output.company.email,
                    subscription_status: output.company.subscription_status.as_str().to_string(),
                },
            })
        }
        Err(LoginCompanyError::InvalidCredentials) => {
            warn!(email = %email, "login with invalid credentials");
            ApiResponse::unauthorized("Invalid credentials")
        }
        Err(LoginCompanyError::EmailNotVerified) => {
            warn!(email = %email, "login before email verification");
            // Carries an extra flag so the frontend can offer to resend the
            // verification mail.
            HttpResponse::Unauthorized().json(serde_json::json!({
                "error": true,
                "message": "Please verify your email before logging in",
                "needs_verification": true,
            }))
        }
        Err(e) => {
            error!(email = %email, error = %e, "login failed");
            ApiResponse::internal_error()
        }
    }
}
