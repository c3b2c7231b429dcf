//! Panicking placeholders for `AppState` slots a handler test does not
//! exercise. Touching one is a test-wiring bug, so they fail loudly.

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::use_cases::forgot_password::{
    ForgotPasswordError, IForgotPasswordUseCase,
};
use crate::auth::application::use_cases::login_company::{
    ILoginCompanyUseCase, LoginCompanyError, LoginCompanyOutput,
};
use crate::auth::application::use_cases::logout_company::{
    ILogoutCompanyUseCase, LogoutCompanyError,
};
use crate::auth::application::use_cases::refresh_token::{IRefreshTokenUseCase, RefreshTokenError};
use crate::auth::application::use_cases::register_company::{
    IRegisterCompanyUseCase, RegisterCompanyError, RegisterCompanyInput, RegisterCompanyOutput,
};
use crate::auth::application::use_cases::reset_password::{
    IResetPasswordUseCase, ResetPasswordError,
};
use crate::auth::application::use_cases::verify_company_email::{
    IVerifyCompanyEmailUseCase, VerifyCompanyEmailError,
};
use crate::auth::application::domain::entities::Company;
use crate::registry::application::domain::channel::Channel;
use crate::registry::application::use_cases::create_channel::{
    CreateChannelError, CreateChannelInput, ICreateChannelUseCase,
};
use crate::registry::application::use_cases::import_channels::{
    IImportChannelsUseCase, ImportChannelsError, ImportRecord,
};
use crate::registry::application::use_cases::list_channels::{
    IListChannelsUseCase, ListChannelsError,
};
use crate::registry::application::use_cases::match_channel::{
    IMatchChannelUseCase, MatchChannelError, MatchOutcome,
};
use crate::registry::application::use_cases::remove_channel::{
    IRemoveChannelUseCase, RemoveChannelError,
};
use crate::registry::application::use_cases::verify_import::{
    IVerifyImportUseCase, VerifyImportError,
};

pub struct UnwiredMatchChannel;

#[async_trait]
impl IMatchChannelUseCase for UnwiredMatchChannel {
    async fn execute(&self, _input_value: &str) -> Result<MatchOutcome, MatchChannelError> {
        panic!("match_channel_use_case not wired in this test")
    }
}

pub struct UnwiredCreateChannel;

#[async_trait]
impl ICreateChannelUseCase for UnwiredCreateChannel {
    async fn execute(
        &self,
        _company_id: Uuid,
        _input: CreateChannelInput,
    ) -> Result<Channel, CreateChannelError> {
        panic!("create_channel_use_case not wired in this test")
    }
}

pub struct UnwiredListChannels;

#[async_trait]
impl IListChannelsUseCase for UnwiredListChannels {
    async fn execute(&self, _company_id: Uuid) -> Result<Vec<Channel>, ListChannelsError> {
        panic!("list_channels_use_case not wired in this test")
    }
}

pub struct UnwiredRemoveChannel;

#[async_trait]
impl IRemoveChannelUseCase for UnwiredRemoveChannel {
    async fn execute(
        &self,
        _company_id: Uuid,
        _channel_id: Uuid,
    ) -> Result<(), RemoveChannelError> {
        panic!("remove_channel_use_case not wired in this test")
    }
}

pub struct UnwiredImportChannels;

#[async_trait]
impl IImportChannelsUseCase for UnwiredImportChannels {
    async fn execute(
        &self,
        _company_id: Uuid,
        _records: Vec<ImportRecord>,
    ) -> Result<Vec<Channel>, ImportChannelsError> {
        panic!("import_channels_use_case not wired in this test")
    }
}

pub struct UnwiredVerifyImport;

#[async_trait]
impl IVerifyImportUseCase for UnwiredVerifyImport {
    async fn execute(
        &self,
        _company_id: Uuid,
        _channel_ids: Vec<Uuid>,
    ) -> Result<Vec<Channel>, VerifyImportError> {
        panic!("verify_import_use_case not wired in this test")
    }
}

pub struct UnwiredRegisterCompany;

#[async_trait]
impl IRegisterCompanyUseCase for UnwiredRegisterCompany {
    async fn execute(
        &self,
        _input: RegisterCompanyInput,
    ) -> Result<RegisterCompanyOutput, RegisterCompanyError> {
        panic!("register_company_use_case not wired in this test")
    }
}

pub struct UnwiredVerifyCompanyEmail;

#[async_trait]
impl IVerifyCompanyEmailUseCase for UnwiredVerifyCompanyEmail {
    async fn execute(&self, _token: &str) -> Result<Company, VerifyCompanyEmailError> {
        panic!("verify_company_email_use_case not wired in this test")
    }
}

pub struct UnwiredLoginCompany;

#[async_trait]
impl ILoginCompanyUseCase for UnwiredLoginCompany {
    async fn execute(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<LoginCompanyOutput, LoginCompanyError> {
        panic!("login_company_use_case not wired in this test")
    }
}

pub struct UnwiredForgotPassword;

#[async_trait]
impl IForgotPasswordUseCase for UnwiredForgotPassword {
    async fn execute(&self, _email: &str) -> Result<(), ForgotPasswordError> {
        panic!("forgot_password_use_case not wired in this test")
    }
}

pub struct UnwiredResetPassword;

#[async_trait]
impl IResetPasswordUseCase for UnwiredResetPassword {
    async fn execute(&self, _token: &str, _new_password: &str) -> Result<(), ResetPasswordError> {
        panic!("reset_password_use_case not wired in this test")
    }
}

pub struct UnwiredLogoutCompany;

#[async_trait]
impl ILogoutCompanyUseCase for UnwiredLogoutCompany {
    async fn execute(&self, _access_token: &str) -> Result<(), LogoutCompanyError> {
        panic!("logout_company_use_case not wired in this test")
    }
}

pub struct UnwiredRefreshToken;

#[async_trait]
impl IRefreshTokenUseCase for UnwiredRefreshToken {
    async fn execute(&self, _refresh_token: &str) -> Result<String, RefreshTokenError> {
        panic!("refresh_token_use_case not wired in this test")
    }
}
