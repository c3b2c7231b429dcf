use actix_web::{post, web, HttpRequest, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::auth::application::orchestrator::company_registration::CompanyRegistrationError;
use crate::auth::application::use_cases::register_company::{
    RegisterCompanyError, RegisterCompanyInput,
};
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterCompanyRequest {
    #[schema(example = "Acme")]
    pub name: Option<String>,
    #[schema(example = "ops@acme.example")]
    pub email: Option<String>,
    #[schema(example = "SecurePass123")]
    pub password: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterCompanyResponse {
    pub success: bool,
    #[schema(
        example = "Registration successful. Please check your email to verify your account."
    )]
    pub message: String,
}

/// Register a new company account and send the verification email.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterCompanyRequest,
    responses(
        (status = 201, description = "Company registered", body = RegisterCompanyResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody),
        (status = 429, description = "Rate limited", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody),
    )
)]
#[post("/api/auth/register")]
pub async fn register_company_handler(
    req: HttpRequest,
    body: web::Json<RegisterCompanyRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Some(ip) = req.peer_addr().map(|addr| addr.ip()) {
        if !data.rate_limits.check_api(ip) {
            return ApiResponse::too_many_requests(
                "Too many requests from this IP, please try again later.",
            );
        }
    }

    let (name, email, password) = match (&body.name, &body.email, &body.password) {
        (Some(name), Some(email), Some(password)) => {
            (name.clone(), email.clone(), password.clone())
        }
        _ => return ApiResponse::bad_request("All fields are required"),
    };

    info!(email = %email, "company registration attempt");

    let result = data
        .register_company_orchestrator
        .register(RegisterCompanyInput {
            name,
            email: email.clone(),
            password,
        })
        .await;

    match result {
        Ok(output) => {
            info!(company_id = %output.company_id, "company registered");
            ApiResponse::created(RegisterCompanyResponse {
                success: true,
                message: output.message,
            })
        }
        Err(CompanyRegistrationError::RegisterFailed(e)) => match e {
            RegisterCompanyError::InvalidName(msg)
            | RegisterCompanyError::InvalidEmail(msg)
            | RegisterCompanyError::InvalidPassword(msg) => {
                warn!(email = %email, message = %msg, "invalid registration input");
                ApiResponse::bad_request(&msg)
            }
            RegisterCompanyError::EmailAlreadyExists => {
                warn!(email = %email, "registration with existing email");
                ApiResponse::bad_request("Email already in use")
            }
            other => {
                error!(email = %email, error = %other, "company registration failed");
                ApiResponse::internal_error()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::orchestrator::company_registration::CompanyRegistrationOrchestrator;
    use crate::auth::application::use_cases::register_company::{
        IRegisterCompanyUseCase, RegisterCompanyOutput,
    };
    use crate::email::application::ports::outgoing::{
        CompanyEmailNotifier, CompanyNotificationError,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;
    use uuid::Uuid;

    struct MockRegister {
        result: Result<RegisterCompanyOutput, RegisterCompanyError>,
    }

    #[async_trait]
    impl IRegisterCompanyUseCase for MockRegister {
        async fn execute(
            &self,
            _input: RegisterCompanyInput,
        ) -> Result<RegisterCompanyOutput, RegisterCompanyError> {
            self.result.clone()
        }
    }

    struct NoopNotifier;

    #[async_trait]
    impl CompanyEmailNotifier for NoopNotifier {
        async fn send_verification_email(
            &self,
            _email: &str,
            _company_name: &str,
            _token: &str,
        ) -> Result<(), CompanyNotificationError> {
            Ok(())
        }

        async fn send_password_reset_email(
            &self,
            _email: &str,
            _token: &str,
        ) -> Result<(), CompanyNotificationError> {
            Ok(())
        }
    }

    fn orchestrator(
        result: Result<RegisterCompanyOutput, RegisterCompanyError>,
    ) -> Arc<CompanyRegistrationOrchestrator> {
        Arc::new(CompanyRegistrationOrchestrator::new(
            Arc::new(MockRegister { result }),
            Arc::new(NoopNotifier),
        ))
    }

    fn registered() -> RegisterCompanyOutput {
        RegisterCompanyOutput {
            company_id: Uuid::new_v4(),
            name: "Acme".to_string(),
            email: "ops@acme.example".to_string(),
            verification_token: "tok".to_string(),
        }
    }

    #[actix_web::test]
    async fn register_success_returns_201() {
        let app_state = TestAppStateBuilder::default()
            .with_register_company_orchestrator(orchestrator(Ok(registered())))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(register_company_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "name": "Acme",
                "email": "ops@acme.example",
                "password": "SecurePass123"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert!(body["message"].as_str().unwrap().contains("check your email"));
    }

    #[actix_web::test]
    async fn missing_fields_are_a_400() {
        let app_state = TestAppStateBuilder::default()
            .with_register_company_orchestrator(orchestrator(Ok(registered())))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(register_company_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({ "email": "ops@acme.example" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], true);
        assert_eq!(body["message"], "All fields are required");
    }

    #[actix_web::test]
    async fn duplicate_email_is_a_400() {
        let app_state = TestAppStateBuilder::default()
            .with_register_company_orchestrator(orchestrator(Err(
                RegisterCompanyError::EmailAlreadyExists,
            )))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(register_company_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "name": "Acme",
                "email": "ops@acme.example",
                "password": "SecurePass123"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Email already in use");
    }
}
