use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedCompany;
use crate::registry::application::use_cases::verify_import::VerifyImportError;
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;

use super::ChannelJson;

#[derive(Deserialize, ToSchema)]
pub struct VerifyCsvRequest {
    /// Ids of previously imported records to verify.
    #[serde(alias = "verificationIds")]
    pub verification_ids: Option<Vec<Uuid>>,
}

#[derive(Serialize, ToSchema)]
pub struct VerifyCsvResponse {
    #[schema(example = "Verification process completed")]
    pub message: String,
    pub results: Vec<ChannelJson>,
}

/// Run ownership checks on imported records. Each record settles
/// independently as verified or failed; the call only errors when none of
/// the ids resolve to an unverified record owned by the caller.
#[utoipa::path(
    post,
    path = "/api/csv/verify",
    tag = "csv",
    request_body = VerifyCsvRequest,
    responses(
        (status = 200, description = "Per-record outcomes", body = VerifyCsvResponse),
        (status = 400, description = "Missing id list", body = ErrorBody),
        (status = 401, description = "Unauthenticated", body = ErrorBody),
        (status = 404, description = "No unverified records found", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/csv/verify")]
pub async fn verify_csv_handler(
    company: AuthenticatedCompany,
    body: web::Json<VerifyCsvRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ids = match &body.verification_ids {
        Some(ids) if !ids.is_empty() => ids.clone(),
        _ => return ApiResponse::bad_request("Invalid verification IDs"),
    };

    match data
        .verify_import_use_case
        .execute(company.company_id, ids)
        .await
    {
        Ok(results) => {
            info!(
                company_id = %company.company_id,
                count = results.len(),
                "csv verification batch completed"
            );
            ApiResponse::ok(VerifyCsvResponse {
                message: "Verification process completed".to_string(),
                results: results.iter().map(ChannelJson::from).collect(),
            })
        }
        Err(VerifyImportError::NoEligibleRecords) => {
            warn!(company_id = %company.company_id, "csv verification with no eligible records");
            ApiResponse::not_found("No unverified records found")
        }
        Err(VerifyImportError::RepositoryError(e)) => {
            tracing::error!(company_id = %company.company_id, error = %e, "csv verification failed");
            ApiResponse::internal_error()
        }
    }
}
