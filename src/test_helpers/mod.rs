//! Routes that exist only for end-to-end test environments, behind the
//! `test-helpers` cargo feature. `main` refuses to boot with them in
//! production.

use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::registry::adapter::outgoing::sea_orm_entity::channels::{
    ActiveModel as ChannelActiveModel, Entity as ChannelEntity,
};

#[derive(Deserialize)]
pub struct ForceVerifyRequest {
    channel_id: Uuid,
}

#[derive(Serialize)]
pub struct ForceVerifyResponse {
    channel_id: Uuid,
    status: String,
}

/// Mark a channel verified without an ownership check, so end-to-end tests
/// can drive the public matcher deterministically.
/// POST /test/channels/force-verify
pub async fn force_verify_channel(
    body: web::Json<ForceVerifyRequest>,
    db: web::Data<Arc<DatabaseConnection>>,
) -> Result<HttpResponse> {
    let model = match ChannelEntity::find_by_id(body.channel_id)
        .one(db.get_ref().as_ref())
        .await
    {
        Ok(Some(model)) => model,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(serde_json::json!({
                "error": true,
                "message": "Channel not found",
            })))
        }
        Err(e) => {
            return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": true,
                "message": e.to_string(),
            })))
        }
    };

    let mut active: ChannelActiveModel = model.into();
    active.status = Set("verified".to_string());
    active.verified_at = Set(Some(Utc::now().into()));

    match active.update(db.get_ref().as_ref()).await {
        Ok(updated) => Ok(HttpResponse::Ok().json(ForceVerifyResponse {
            channel_id: updated.id,
            status: updated.status,
        })),
        Err(e) => Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "error": true,
            "message": e.to_string(),
        }))),
    }
}

#[derive(Serialize)]
pub struct TestHealthResponse {
    status: String,
    environment: String,
}

/// GET /test/health
pub async fn test_health() -> Result<HttpResponse> {
    let environment = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    Ok(HttpResponse::Ok().json(TestHealthResponse {
        status: "ok".to_string(),
        environment,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/test/channels/force-verify",
        web::post().to(force_verify_channel),
    );
    cfg.route("/test/health", web::get().to(test_health));
}
