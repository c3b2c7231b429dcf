use actix_web::web;
use std::sync::Arc;

use crate::auth::application::orchestrator::company_registration::CompanyRegistrationOrchestrator;
use crate::auth::application::use_cases::forgot_password::IForgotPasswordUseCase;
use crate::auth::application::use_cases::login_company::ILoginCompanyUseCase;
use crate::auth::application::use_cases::logout_company::ILogoutCompanyUseCase;
use crate::auth::application::use_cases::refresh_token::IRefreshTokenUseCase;
use crate::auth::application::use_cases::reset_password::IResetPasswordUseCase;
use crate::auth::application::use_cases::verify_company_email::IVerifyCompanyEmailUseCase;
use crate::email::application::ports::outgoing::{
    CompanyEmailNotifier, CompanyNotificationError,
};
use crate::registry::application::services::stats::VerificationStats;
use crate::registry::application::use_cases::create_channel::ICreateChannelUseCase;
use crate::registry::application::use_cases::import_channels::IImportChannelsUseCase;
use crate::registry::application::use_cases::list_channels::IListChannelsUseCase;
use crate::registry::application::use_cases::match_channel::IMatchChannelUseCase;
use crate::registry::application::use_cases::remove_channel::IRemoveChannelUseCase;
use crate::registry::application::use_cases::verify_import::IVerifyImportUseCase;
use crate::shared::security::RateLimitManager;
use crate::AppState;

use super::stubs;

struct NoopNotifier;

#[async_trait::async_trait]
impl CompanyEmailNotifier for NoopNotifier {
    async fn send_verification_email(
        &self,
        _email: &str,
        _company_name: &str,
        _token: &str,
    ) -> Result<(), CompanyNotificationError> {
        Ok(())
    }

    async fn send_password_reset_email(
        &self,
        _email: &str,
        _token: &str,
    ) -> Result<(), CompanyNotificationError> {
        Ok(())
    }
}

/// Builds an `AppState` for handler tests. Every slot defaults to a
/// panicking stub; tests wire only the use cases they exercise.
pub struct TestAppStateBuilder {
    state: AppState,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            state: AppState {
                match_channel_use_case: Arc::new(stubs::UnwiredMatchChannel),
                create_channel_use_case: Arc::new(stubs::UnwiredCreateChannel),
                list_channels_use_case: Arc::new(stubs::UnwiredListChannels),
                remove_channel_use_case: Arc::new(stubs::UnwiredRemoveChannel),
                import_channels_use_case: Arc::new(stubs::UnwiredImportChannels),
                verify_import_use_case: Arc::new(stubs::UnwiredVerifyImport),
                register_company_orchestrator: Arc::new(CompanyRegistrationOrchestrator::new(
                    Arc::new(stubs::UnwiredRegisterCompany),
                    Arc::new(NoopNotifier),
                )),
                verify_company_email_use_case: Arc::new(stubs::UnwiredVerifyCompanyEmail),
                login_company_use_case: Arc::new(stubs::UnwiredLoginCompany),
                forgot_password_use_case: Arc::new(stubs::UnwiredForgotPassword),
                reset_password_use_case: Arc::new(stubs::UnwiredResetPassword),
                logout_company_use_case: Arc::new(stubs::UnwiredLogoutCompany),
                refresh_token_use_case: Arc::new(stubs::UnwiredRefreshToken),
                verification_stats: Arc::new(VerificationStats::new()),
                rate_limits: Arc::new(RateLimitManager::default()),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_match_channel_use_case(mut self, uc: Arc<dyn IMatchChannelUseCase>) -> Self {
        self.state.match_channel_use_case = uc;
        self
    }

    pub fn with_create_channel_use_case(mut self, uc: Arc<dyn ICreateChannelUseCase>) -> Self {
        self.state.create_channel_use_case = uc;
        self
    }

    pub fn with_list_channels_use_case(mut self, uc: Arc<dyn IListChannelsUseCase>) -> Self {
        self.state.list_channels_use_case = uc;
        self
    }

    pub fn with_remove_channel_use_case(mut self, uc: Arc<dyn IRemoveChannelUseCase>) -> Self {
        self.state.remove_channel_use_case = uc;
        self
    }

    pub fn with_import_channels_use_case(mut self, uc: Arc<dyn IImportChannelsUseCase>) -> Self {
        self.state.import_channels_use_case = uc;
        self
    }

    pub fn with_verify_import_use_case(mut self, uc: Arc<dyn IVerifyImportUseCase>) -> Self {
        self.state.verify_import_use_case = uc;
        self
    }

    pub fn with_register_company_orchestrator(
        mut self,
        orchestrator: Arc<CompanyRegistrationOrchestrator>,
    ) -> Self {
        self.state.register_company_orchestrator = orchestrator;
        self
    }

    pub fn with_verify_company_email_use_case(
        mut self,
        uc: Arc<dyn IVerifyCompanyEmailUseCase>,
    ) -> Self {
        self.state.verify_company_email_use_case = uc;
        self
    }

    pub fn with_login_company_use_case(mut self, uc: Arc<dyn ILoginCompanyUseCase>) -> Self {
        self.state.login_company_use_case = uc;
        self
    }

    pub fn with_forgot_password_use_case(mut self, uc: Arc<dyn IForgotPasswordUseCase>) -> Self {
        self.state.forgot_password_use_case = uc;
        self
    }

    pub fn with_reset_password_use_case(mut self, uc: Arc<dyn IResetPasswordUseCase>) -> Self {
        self.state.reset_password_use_case = uc;
        self
    }

    pub fn with_logout_company_use_case(mut self, uc: Arc<dyn ILogoutCompanyUseCase>) -> Self {
        self.state.logout_company_use_case = uc;
        self
    }

    pub fn with_refresh_token_use_case(mut self, uc: Arc<dyn IRefreshTokenUseCase>) -> Self {
        self.state.refresh_token_use_case = uc;
        self
    }

    pub fn with_verification_stats(mut self, stats: Arc<VerificationStats>) -> Self {
        self.state.verification_stats = stats;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(self.state)
    }
}
