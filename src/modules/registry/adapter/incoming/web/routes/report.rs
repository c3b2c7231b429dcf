use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::shared::api::{ApiResponse, ErrorBody};

#[derive(Deserialize, ToSchema)]
pub struct ReportRequest {
    pub reporter_name: Option<String>,
    #[schema(example = "@acme-support-team")]
    pub reported_channel: Option<String>,
    pub reason: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ReportResponse {
    pub success: bool,
}

/// Report a suspicious channel. Reports are recorded in the logs for manual
/// review; there is no automated takedown.
#[utoipa::path(
    post,
    path = "/api/reports",
    tag = "verification",
    request_body = ReportRequest,
    responses(
        (status = 200, description = "Report recorded", body = ReportResponse),
        (status = 400, description = "Missing fields", body = ErrorBody),
    )
)]
#[post("/api/reports")]
pub async fn report_channel_handler(body: web::Json<ReportRequest>) -> impl Responder {
    let (reporter_name, reported_channel, reason) =
        match (&body.reporter_name, &body.reported_channel, &body.reason) {
            (Some(reporter), Some(channel), Some(reason))
                if !reporter.trim().is_empty()
                    && !channel.trim().is_empty()
                    && !reason.trim().is_empty() =>
            {
                (reporter, channel, reason)
            }
            _ => return ApiResponse::bad_request("All fields are required"),
        };

    info!(
        reporter = %reporter_name,
        channel = %reported_channel,
        reason = %reason,
        "channel report received"
    );

    ApiResponse::ok(ReportResponse { success: true })
}
