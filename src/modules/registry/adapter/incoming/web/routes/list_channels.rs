use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedCompany;
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;

use super::ChannelJson;

#[derive(Serialize, ToSchema)]
pub struct ListChannelsResponse {
    pub channels: Vec<ChannelJson>,
}

/// List the authenticated company's channels in registration order.
#[utoipa::path(
    get,
    path = "/api/channels",
    tag = "channels",
    responses(
        (status = 200, description = "Channels of the caller", body = ListChannelsResponse),
        (status = 401, description = "Unauthenticated", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/channels")]
pub async fn list_channels_handler(
    company: AuthenticatedCompany,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .list_channels_use_case
        .execute(company.company_id)
        .await
    {
        Ok(channels) => ApiResponse::ok(ListChannelsResponse {
            channels: channels.iter().map(ChannelJson::from).collect(),
        }),
        Err(e) => {
            error!(company_id = %company.company_id, error = %e, "channel listing failed");
            ApiResponse::internal_error()
        }
    }
}
