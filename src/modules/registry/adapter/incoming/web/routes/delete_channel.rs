use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedCompany;
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;

/// Remove a channel. Idempotent: deleting an unknown id (or one owned by a
/// different company) is still a 204.
#[utoipa::path(
    delete,
    path = "/api/channels/{id}",
    tag = "channels",
    params(("id" = Uuid, Path, description = "Channel id")),
    responses(
        (status = 204, description = "Removed (or never existed)"),
        (status = 401, description = "Unauthenticated", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/channels/{id}")]
pub async fn delete_channel_handler(
    company: AuthenticatedCompany,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let channel_id = path.into_inner();

    match data
        .remove_channel_use_case
        .execute(company.company_id, channel_id)
        .await
    {
        Ok(()) => {
            info!(company_id = %company.company_id, channel_id = %channel_id, "channel removed");
            ApiResponse::no_content()
        }
        Err(e) => {
            error!(company_id = %company.company_id, channel_id = %channel_id, error = %e, "channel removal failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::application::use_cases::remove_channel::{
        IRemoveChannelUseCase, RemoveChannelError,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::{auth_header, test_token_provider};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct MockRemove;

    #[async_trait]
    impl IRemoveChannelUseCase for MockRemove {
        async fn execute(
            &self,
            _company_id: Uuid,
            _channel_id: Uuid,
        ) -> Result<(), RemoveChannelError> {
            Ok(())
        }
    }

    #[actix_web::test]
    async fn delete_is_a_204_even_for_unknown_ids() {
        let (provider, token) = test_token_provider();
        let app_state = TestAppStateBuilder::default()
            .with_remove_channel_use_case(Arc::new(MockRemove))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(provider)
                .service(delete_channel_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/channels/{}", Uuid::new_v4()))
            .insert_header(auth_header(&token))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 204);
    }

    #[actix_web::test]
    async fn unauthenticated_delete_is_a_401() {
        let (provider, _token) = test_token_provider();
        let app_state = TestAppStateBuilder::default()
            .with_remove_channel_use_case(Arc::new(MockRemove))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(provider)
                .service(delete_channel_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/channels/{}", Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
