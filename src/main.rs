pub mod modules;
pub use modules::auth;
pub use modules::email;
pub use modules::registry;
pub mod api;
pub mod health;
pub mod shared;

// Test helpers module - only compiled with feature flag
#[cfg(feature = "test-helpers")]
mod test_helpers;

use crate::auth::adapter::outgoing::company_query_postgres::CompanyQueryPostgres;
use crate::auth::adapter::outgoing::company_repository_postgres::CompanyRepositoryPostgres;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::token_repository_redis::RedisTokenRepository;
use crate::auth::application::orchestrator::company_registration::CompanyRegistrationOrchestrator;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::{
    forgot_password::{ForgotPasswordUseCase, IForgotPasswordUseCase},
    login_company::{ILoginCompanyUseCase, LoginCompanyUseCase},
    logout_company::{ILogoutCompanyUseCase, LogoutCompanyUseCase},
    refresh_token::{IRefreshTokenUseCase, RefreshTokenUseCase},
    register_company::{IRegisterCompanyUseCase, RegisterCompanyUseCase},
    reset_password::{IResetPasswordUseCase, ResetPasswordUseCase},
    verify_company_email::{IVerifyCompanyEmailUseCase, VerifyCompanyEmailUseCase},
};
use crate::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::email::application::ports::outgoing::CompanyEmailNotifier;
use crate::email::application::services::CompanyMailer;
use crate::registry::adapter::outgoing::channel_repository_postgres::ChannelRepositoryPostgres;
use crate::registry::adapter::outgoing::random_ownership_check::RandomOwnershipCheck;
use crate::registry::adapter::outgoing::verified_channel_query_postgres::VerifiedChannelQueryPostgres;
use crate::registry::application::ports::outgoing::OwnershipCheck;
use crate::registry::application::services::stats::VerificationStats;
use crate::registry::application::use_cases::{
    create_channel::{CreateChannelUseCase, ICreateChannelUseCase},
    import_channels::{IImportChannelsUseCase, ImportChannelsUseCase},
    list_channels::{IListChannelsUseCase, ListChannelsUseCase},
    match_channel::{IMatchChannelUseCase, MatchChannelUseCase},
    remove_channel::{IRemoveChannelUseCase, RemoveChannelUseCase},
    verify_import::{IVerifyImportUseCase, VerifyImportUseCase},
};
use crate::shared::security::RateLimitManager;

use actix_web::{middleware, web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub match_channel_use_case: Arc<dyn IMatchChannelUseCase>,
    pub create_channel_use_case: Arc<dyn ICreateChannelUseCase>,
    pub list_channels_use_case: Arc<dyn IListChannelsUseCase>,
    pub remove_channel_use_case: Arc<dyn IRemoveChannelUseCase>,
    pub import_channels_use_case: Arc<dyn IImportChannelsUseCase>,
    pub verify_import_use_case: Arc<dyn IVerifyImportUseCase>,
    pub register_company_orchestrator: Arc<CompanyRegistrationOrchestrator>,
    pub verify_company_email_use_case: Arc<dyn IVerifyCompanyEmailUseCase>,
    pub login_company_use_case: Arc<dyn ILoginCompanyUseCase>,
    pub forgot_password_use_case: Arc<dyn IForgotPasswordUseCase>,
    pub reset_password_use_case: Arc<dyn IResetPasswordUseCase>,
    pub logout_company_use_case: Arc<dyn ILogoutCompanyUseCase>,
    pub refresh_token_use_case: Arc<dyn IRefreshTokenUseCase>,
    pub verification_stats: Arc<VerificationStats>,
    pub rate_limits: Arc<RateLimitManager>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Refuse test hooks outside dev/test environments.
    #[cfg(feature = "test-helpers")]
    {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if env == "production" {
            panic!("FATAL: test-helpers feature enabled in production environment!");
        }
        tracing::warn!("test helper routes are ENABLED for environment: {}", env);
    }

    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{env_name}");
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");
    let frontend_url =
        env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

    // SMTP setup
    let from_email = env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let smtp_sender = if env_name == "test" {
        // Local Mailpit
        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let smtp_port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&smtp_host, smtp_port, &from_email)
    } else {
        let smtp_server = env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
            .expect("Failed to build SMTP transport")
    };

    let server_url = format!("{host}:{port}");
    info!("Server listening on {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");
    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");
    let redis_arc = Arc::new(redis_pool);

    // Registry wiring
    let channel_repo = ChannelRepositoryPostgres::new(Arc::clone(&db_arc));
    let verified_query = VerifiedChannelQueryPostgres::new(Arc::clone(&db_arc));
    let verification_stats = Arc::new(VerificationStats::new());

    let success_rate: f64 = env::var("OWNERSHIP_CHECK_SUCCESS_RATE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(0.8);
    let ownership_check: Arc<dyn OwnershipCheck> =
        Arc::new(RandomOwnershipCheck::new(success_rate));

    let match_channel_use_case =
        MatchChannelUseCase::new(verified_query, Arc::clone(&verification_stats));
    let create_channel_use_case = CreateChannelUseCase::new(channel_repo.clone());
    let list_channels_use_case = ListChannelsUseCase::new(channel_repo.clone());
    let remove_channel_use_case = RemoveChannelUseCase::new(channel_repo.clone());
    let import_channels_use_case = ImportChannelsUseCase::new(channel_repo.clone());
    let verify_import_use_case =
        VerifyImportUseCase::new(Arc::new(channel_repo), ownership_check);

    // Auth wiring
    let company_repo = CompanyRepositoryPostgres::new(Arc::clone(&db_arc));
    let company_query = CompanyQueryPostgres::new(Arc::clone(&db_arc));
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::from_env());
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let redis_token_repo = RedisTokenRepository::new(Arc::clone(&redis_arc));

    let mailer = CompanyMailer::new(Arc::new(smtp_sender), frontend_url);
    let notifier: Arc<dyn CompanyEmailNotifier> = Arc::new(mailer);

    let register_company_use_case = RegisterCompanyUseCase::new(
        company_query.clone(),
        company_repo.clone(),
        Arc::clone(&password_hasher),
    );
    let register_uc_arc: Arc<dyn IRegisterCompanyUseCase> = Arc::new(register_company_use_case);
    let register_company_orchestrator =
        CompanyRegistrationOrchestrator::new(register_uc_arc, Arc::clone(&notifier));

    let verify_company_email_use_case =
        VerifyCompanyEmailUseCase::new(company_query.clone(), company_repo.clone());
    let login_company_use_case = LoginCompanyUseCase::new(
        company_query.clone(),
        Arc::clone(&password_hasher),
        Arc::new(jwt_service.clone()),
    );
    let forgot_password_use_case =
        ForgotPasswordUseCase::new(company_query.clone(), company_repo.clone(), notifier);
    let reset_password_use_case =
        ResetPasswordUseCase::new(company_query, company_repo, password_hasher);
    let logout_company_use_case =
        LogoutCompanyUseCase::new(redis_token_repo, Arc::new(jwt_service.clone()));
    let refresh_token_use_case = RefreshTokenUseCase::new(Arc::new(jwt_service.clone()));

    let state = AppState {
        match_channel_use_case: Arc::new(match_channel_use_case),
        create_channel_use_case: Arc::new(create_channel_use_case),
        list_channels_use_case: Arc::new(list_channels_use_case),
        remove_channel_use_case: Arc::new(remove_channel_use_case),
        import_channels_use_case: Arc::new(import_channels_use_case),
        verify_import_use_case: Arc::new(verify_import_use_case),
        register_company_orchestrator: Arc::new(register_company_orchestrator),
        verify_company_email_use_case: Arc::new(verify_company_email_use_case),
        login_company_use_case: Arc::new(login_company_use_case),
        forgot_password_use_case: Arc::new(forgot_password_use_case),
        reset_password_use_case: Arc::new(reset_password_use_case),
        logout_company_use_case: Arc::new(logout_company_use_case),
        refresh_token_use_case: Arc::new(refresh_token_use_case),
        verification_stats,
        rate_limits: Arc::new(RateLimitManager::default()),
    };

    let token_provider_arc: Arc<dyn TokenProvider> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .wrap(
                middleware::DefaultHeaders::new()
                    .add(("X-Frame-Options", "DENY"))
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Referrer-Policy", "strict-origin-when-cross-origin"))
                    .add((
                        "Content-Security-Policy",
                        "default-src 'self'; img-src 'self' data: https:; \
                         connect-src 'self' https://api.verify.me;",
                    )),
            )
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            );

        #[cfg(feature = "test-helpers")]
        {
            app = app.configure(test_helpers::configure_routes);
        }

        app
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Public verification
    cfg.service(crate::registry::adapter::incoming::web::routes::verify_handler);
    cfg.service(crate::registry::adapter::incoming::web::routes::report_channel_handler);
    // Channel registry
    cfg.service(crate::registry::adapter::incoming::web::routes::create_channel_handler);
    cfg.service(crate::registry::adapter::incoming::web::routes::list_channels_handler);
    cfg.service(crate::registry::adapter::incoming::web::routes::delete_channel_handler);
    cfg.service(crate::registry::adapter::incoming::web::routes::analytics_handler);
    // Bulk import
    cfg.service(crate::registry::adapter::incoming::web::routes::upload_csv_handler);
    cfg.service(crate::registry::adapter::incoming::web::routes::verify_csv_handler);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_company_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::verify_email_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_company_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::forgot_password_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::reset_password_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_company_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
