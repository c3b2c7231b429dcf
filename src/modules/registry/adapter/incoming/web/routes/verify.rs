use actix_web::{post, web, HttpRequest, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::registry::application::domain::matcher::MatchConfidence;
use crate::registry::application::use_cases::match_channel::MatchOutcome;
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::shared::security::bot_screen;
use crate::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct VerifyRequest {
    /// Free-text handle, URL, email address or phone number to check.
    #[schema(example = "@AcmeCorp")]
    pub input_value: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct VerifyResponse {
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Acme")]
    pub company: Option<String>,
    /// "exact" when the registered value matched verbatim, "containment"
    /// for the lenient substring policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "exact")]
    pub confidence: Option<MatchConfidence>,
}

/// Check whether a handle belongs to a verified company channel. Public,
/// rate limited and screened for obvious automation.
#[utoipa::path(
    post,
    path = "/api/verify",
    tag = "verification",
    request_body = VerifyRequest,
    responses(
        (status = 200, description = "Match result", body = VerifyResponse),
        (status = 400, description = "Missing or empty input value", body = ErrorBody),
        (status = 403, description = "Automated access denied", body = ErrorBody),
        (status = 429, description = "Rate limited", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody),
    )
)]
#[post("/api/verify")]
pub async fn verify_handler(
    req: HttpRequest,
    body: web::Json<VerifyRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Some(ip) = req.peer_addr().map(|addr| addr.ip()) {
        if !data.rate_limits.check_verify(ip) {
            return ApiResponse::too_many_requests(
                "Too many verification attempts, please try again later.",
            );
        }
    }

    if bot_screen::is_automated(&req) {
        return ApiResponse::forbidden("This endpoint is not available for automated access.");
    }

    let input_value = match &body.input_value {
        Some(value) if !value.trim().is_empty() => value,
        _ => return ApiResponse::bad_request("Input value is required"),
    };

    match data.match_channel_use_case.execute(input_value).await {
        Ok(MatchOutcome::Verified {
            company,
            confidence,
        }) => ApiResponse::ok(VerifyResponse {
            verified: true,
            company: Some(company),
            confidence: Some(confidence),
        }),
        Ok(MatchOutcome::NotVerified) => ApiResponse::ok(VerifyResponse {
            verified: false,
            company: None,
            confidence: None,
        }),
        Err(e) => {
            error!(error = %e, "verification lookup failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::application::use_cases::match_channel::{
        IMatchChannelUseCase, MatchChannelError,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct MockMatch {
        result: Result<MatchOutcome, MatchChannelError>,
    }

    #[async_trait]
    impl IMatchChannelUseCase for MockMatch {
        async fn execute(&self, _input_value: &str) -> Result<MatchOutcome, MatchChannelError> {
            self.result.clone()
        }
    }

    fn browser_request(body: serde_json::Value) -> actix_web::test::TestRequest {
        test::TestRequest::post()
            .uri("/api/verify")
            .insert_header(("user-agent", "Mozilla/5.0 (X11; Linux x86_64)"))
            .insert_header(("accept", "application/json"))
            .insert_header(("accept-language", "en-US"))
            .set_json(body)
    }

    async fn call(
        result: Result<MatchOutcome, MatchChannelError>,
        req: actix_web::test::TestRequest,
    ) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_match_channel_use_case(Arc::new(MockMatch { result }))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(verify_handler)).await;

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status().as_u16();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn matched_input_reports_the_company() {
        let (status, body) = call(
            Ok(MatchOutcome::Verified {
                company: "Acme".to_string(),
                confidence: MatchConfidence::Exact,
            }),
            browser_request(serde_json::json!({ "input_value": "@AcmeCorp" })),
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["verified"], true);
        assert_eq!(body["company"], "Acme");
        assert_eq!(body["confidence"], "exact");
    }

    #[actix_web::test]
    async fn unmatched_input_has_no_company_field() {
        let (status, body) = call(
            Ok(MatchOutcome::NotVerified),
            browser_request(serde_json::json!({ "input_value": "initech.io" })),
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["verified"], false);
        assert!(body.get("company").is_none());
    }

    #[actix_web::test]
    async fn missing_input_value_is_a_400() {
        let (status, body) = call(
            Ok(MatchOutcome::NotVerified),
            browser_request(serde_json::json!({})),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"], true);
        assert_eq!(body["message"], "Input value is required");
    }

    #[actix_web::test]
    async fn blank_input_value_is_a_400() {
        let (status, _) = call(
            Ok(MatchOutcome::NotVerified),
            browser_request(serde_json::json!({ "input_value": "   " })),
        )
        .await;

        assert_eq!(status, 400);
    }

    #[actix_web::test]
    async fn bot_user_agents_are_denied() {
        let req = test::TestRequest::post()
            .uri("/api/verify")
            .insert_header(("user-agent", "curl/8.4.0"))
            .insert_header(("accept", "*/*"))
            .set_json(serde_json::json!({ "input_value": "@AcmeCorp" }));

        let (status, body) = call(Ok(MatchOutcome::NotVerified), req).await;

        assert_eq!(status, 403);
        assert_eq!(body["error"], true);
    }

    #[actix_web::test]
    async fn query_failure_is_a_500() {
        let (status, _) = call(
            Err(MatchChannelError::QueryError(
                crate::registry::application::ports::outgoing::VerifiedChannelQueryError::DatabaseError(
                    "down".to_string(),
                ),
            )),
            browser_request(serde_json::json!({ "input_value": "@AcmeCorp" })),
        )
        .await;

        assert_eq!(status, 500);
    }
}
