pub mod analytics;
pub mod create_channel;
pub mod delete_channel;
pub mod list_channels;
pub mod report;
pub mod upload_csv;
pub mod verify;
pub mod verify_csv;

pub use analytics::analytics_handler;
pub use create_channel::create_channel_handler;
pub use delete_channel::delete_channel_handler;
pub use list_channels::list_channels_handler;
pub use report::report_channel_handler;
pub use upload_csv::upload_csv_handler;
pub use verify::verify_handler;
pub use verify_csv::verify_csv_handler;

use serde::Serialize;
use utoipa::ToSchema;

use crate::registry::application::domain::channel::Channel;

#[derive(Serialize, ToSchema)]
pub struct EmployeeInfoJson {
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[schema(example = "pending")]
    pub status: String,
}

/// Wire shape shared by every endpoint that returns channels.
#[derive(Serialize, ToSchema)]
pub struct ChannelJson {
    pub id: String,
    pub company_id: String,
    #[serde(rename = "type")]
    #[schema(example = "website")]
    pub channel_type: String,
    #[schema(example = "acmecorp.com")]
    pub value: String,
    #[schema(example = "unverified")]
    pub status: String,
    pub verified_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_employee_channel: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_info: Option<EmployeeInfoJson>,
}

impl From<&Channel> for ChannelJson {
    fn from(channel: &Channel) -> Self {
        Self {
            id: channel.id.to_string(),
            company_id: channel.company_id.to_string(),
            channel_type: channel.channel_type.as_str().to_string(),
            value: channel.value.clone(),
            status: channel.status.as_str().to_string(),
            verified_at: channel.verified_at.map(|t| t.to_rfc3339()),
            description: channel.description.clone(),
            is_employee_channel: channel.kind.is_employee(),
            employee_info: channel.kind.employee_info().map(|info| EmployeeInfoJson {
                name: info.name.clone(),
                role: info.role.clone(),
                department: info.department.clone(),
                status: info.status.as_str().to_string(),
            }),
        }
    }
}
