use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedCompany;
use crate::registry::application::use_cases::create_channel::{
    CreateChannelError, CreateChannelInput, EmployeeInfoInput,
};
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;

use super::ChannelJson;

#[derive(Deserialize, ToSchema)]
pub struct EmployeeInfoRequest {
    pub name: String,
    pub role: String,
    pub department: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateChannelRequest {
    #[serde(rename = "type")]
    #[schema(example = "x")]
    pub channel_type: Option<String>,
    #[schema(example = "@AcmeCorp")]
    pub value: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub is_employee_channel: bool,
    pub employee_info: Option<EmployeeInfoRequest>,
}

/// Register a new channel for the authenticated company. Channels start
/// unverified.
#[utoipa::path(
    post,
    path = "/api/channels",
    tag = "channels",
    request_body = CreateChannelRequest,
    responses(
        (status = 201, description = "Channel created", body = ChannelJson),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody),
        (status = 401, description = "Unauthenticated", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/channels")]
pub async fn create_channel_handler(
    company: AuthenticatedCompany,
    body: web::Json<CreateChannelRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (channel_type, value) = match (&body.channel_type, &body.value) {
        (Some(channel_type), Some(value)) => (channel_type.clone(), value.clone()),
        _ => return ApiResponse::bad_request("Type and value are required"),
    };

    let input = CreateChannelInput {
        channel_type,
        value,
        description: body.description.clone(),
        is_employee_channel: body.is_employee_channel,
        employee_info: body.employee_info.as_ref().map(|info| EmployeeInfoInput {
            name: info.name.clone(),
            role: info.role.clone(),
            department: info.department.clone(),
        }),
    };

    match data
        .create_channel_use_case
        .execute(company.company_id, input)
        .await
    {
        Ok(channel) => {
            info!(
                company_id = %company.company_id,
                channel_id = %channel.id,
                channel_type = %channel.channel_type.as_str(),
                "channel registered"
            );
            ApiResponse::created(ChannelJson::from(&channel))
        }
        Err(
            e @ (CreateChannelError::InvalidType(_)
            | CreateChannelError::EmptyValue
            | CreateChannelError::MissingEmployeeInfo(_)),
        ) => {
            warn!(company_id = %company.company_id, error = %e, "invalid channel input");
            ApiResponse::bad_request(&e.to_string())
        }
        Err(CreateChannelError::RepositoryError(e)) => {
            tracing::error!(company_id = %company.company_id, error = %e, "channel insert failed");
            ApiResponse::internal_error()
        }
    }
}
