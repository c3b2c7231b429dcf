use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::auth::adapter::incoming::web::routes as auth_routes;
use crate::registry::adapter::incoming::web::routes as registry_routes;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Verify.me API",
        description = "Channel registration and verification for companies."
    ),
    paths(
        crate::health::health,
        registry_routes::verify::verify_handler,
        registry_routes::create_channel::create_channel_handler,
        registry_routes::list_channels::list_channels_handler,
        registry_routes::delete_channel::delete_channel_handler,
        registry_routes::upload_csv::upload_csv_handler,
        registry_routes::verify_csv::verify_csv_handler,
        registry_routes::report::report_channel_handler,
        registry_routes::analytics::analytics_handler,
        auth_routes::register::register_company_handler,
        auth_routes::verify_email::verify_email_handler,
        auth_routes::login::login_company_handler,
        auth_routes::forgot_password::forgot_password_handler,
        auth_routes::reset_password::reset_password_handler,
        auth_routes::logout::logout_company_handler,
        auth_routes::refresh::refresh_token_handler,
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "verification", description = "Public verification lookups"),
        (name = "channels", description = "Channel registry management"),
        (name = "csv", description = "Bulk import and verification"),
        (name = "auth", description = "Company accounts and sessions"),
        (name = "ops", description = "Health and readiness"),
    )
)]
pub struct ApiDoc;
