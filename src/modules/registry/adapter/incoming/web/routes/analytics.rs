use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedCompany;
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct AnalyticsWindows {
    pub today: u64,
    pub week: u64,
    pub month: u64,
}

#[derive(Serialize, ToSchema)]
pub struct AnalyticsResponse {
    pub total_verifications: u64,
    pub verified_count: u64,
    pub stats: AnalyticsWindows,
}

/// Verification-attempt counters for the dashboard.
#[utoipa::path(
    get,
    path = "/api/analytics",
    tag = "verification",
    responses(
        (status = 200, description = "Attempt counters", body = AnalyticsResponse),
        (status = 401, description = "Unauthenticated", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/analytics")]
pub async fn analytics_handler(
    _company: AuthenticatedCompany,
    data: web::Data<AppState>,
) -> impl Responder {
    let snapshot = data.verification_stats.snapshot();

    ApiResponse::ok(AnalyticsResponse {
        total_verifications: snapshot.total_verifications,
        verified_count: snapshot.verified_count,
        stats: AnalyticsWindows {
            today: snapshot.today,
            week: snapshot.week,
            month: snapshot.month,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::application::services::stats::VerificationStats;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::{auth_header, test_token_provider};
    use actix_web::{test, App};
    use std::sync::Arc;

    #[actix_web::test]
    async fn reports_recorded_attempts() {
        let stats = Arc::new(VerificationStats::new());
        stats.record(true);
        stats.record(false);

        let (provider, token) = test_token_provider();
        let app_state = TestAppStateBuilder::default()
            .with_verification_stats(stats)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(provider)
                .service(analytics_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/analytics")
            .insert_header(auth_header(&token))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["total_verifications"], 2);
        assert_eq!(body["verified_count"], 1);
        assert_eq!(body["stats"]["today"], 2);
    }
}
