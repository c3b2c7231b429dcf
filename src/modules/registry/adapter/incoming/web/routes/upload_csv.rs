use actix_web::{post, web, Responder};
use serde::Deserialize;
use serde::Serialize;
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedCompany;
use crate::registry::application::use_cases::create_channel::EmployeeInfoInput;
use crate::registry::application::use_cases::import_channels::{
    ImportChannelsError, ImportRecord,
};
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;

use super::ChannelJson;

#[derive(Deserialize, ToSchema)]
pub struct ImportEmployeeInfoRequest {
    pub name: String,
    pub role: String,
    pub department: Option<String>,
}

/// One parsed CSV row. The CSV itself is parsed client-side; the API gets
/// the structured rows.
#[derive(Deserialize, ToSchema)]
pub struct ImportRecordRequest {
    #[schema(example = "acmecorp.com")]
    pub channel: String,
    #[serde(rename = "type")]
    #[schema(example = "website")]
    pub channel_type: String,
    pub description: Option<String>,
    #[serde(default)]
    pub is_employee_channel: bool,
    pub employee_info: Option<ImportEmployeeInfoRequest>,
}

#[derive(Deserialize, ToSchema)]
pub struct UploadCsvRequest {
    pub channels: Vec<ImportRecordRequest>,
}

#[derive(Serialize, ToSchema)]
pub struct UploadCsvResponse {
    #[schema(example = "CSV data uploaded successfully")]
    pub message: String,
    pub count: usize,
    pub verifications: Vec<ChannelJson>,
}

/// Bulk-import channel records. Validation is all-or-nothing: one bad row
/// rejects the whole batch and nothing is written.
#[utoipa::path(
    post,
    path = "/api/csv/upload",
    tag = "csv",
    request_body = UploadCsvRequest,
    responses(
        (status = 200, description = "Batch imported as unverified records", body = UploadCsvResponse),
        (status = 400, description = "Empty batch or invalid record", body = ErrorBody),
        (status = 401, description = "Unauthenticated", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/csv/upload")]
pub async fn upload_csv_handler(
    company: AuthenticatedCompany,
    body: web::Json<UploadCsvRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let records: Vec<ImportRecord> = body
        .channels
        .iter()
        .map(|record| ImportRecord {
            channel: record.channel.clone(),
            channel_type: record.channel_type.clone(),
            description: record.description.clone(),
            is_employee_channel: record.is_employee_channel,
            employee_info: record.employee_info.as_ref().map(|info| EmployeeInfoInput {
                name: info.name.clone(),
                role: info.role.clone(),
                department: info.department.clone(),
            }),
        })
        .collect();

    match data
        .import_channels_use_case
        .execute(company.company_id, records)
        .await
    {
        Ok(created) => {
            info!(
                company_id = %company.company_id,
                count = created.len(),
                "csv batch imported"
            );
            ApiResponse::ok(UploadCsvResponse {
                message: "CSV data uploaded successfully".to_string(),
                count: created.len(),
                verifications: created.iter().map(ChannelJson::from).collect(),
            })
        }
        Err(e @ (ImportChannelsError::EmptyBatch | ImportChannelsError::InvalidRecord { .. })) => {
            warn!(company_id = %company.company_id, error = %e, "csv batch rejected");
            ApiResponse::bad_request(&format!("Invalid CSV data format: {e}"))
        }
        Err(ImportChannelsError::RepositoryError(e)) => {
            tracing::error!(company_id = %company.company_id, error = %e, "csv import failed");
            ApiResponse::internal_error()
        }
    }
}
