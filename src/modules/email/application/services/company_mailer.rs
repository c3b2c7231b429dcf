use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::email::application::ports::outgoing::{
    CompanyEmailNotifier, CompanyNotificationError, EmailSender,
};

/// Renders the account-lifecycle mails and pushes them through whatever
/// sender is wired in. Links point at the frontend, which calls the API
/// back with the embedded token.
#[derive(Clone)]
pub struct CompanyMailer {
    sender: Arc<dyn EmailSender>,
    frontend_url: String,
}

impl fmt::Debug for CompanyMailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompanyMailer")
            .field("sender", &"<dyn EmailSender>")
            .field("frontend_url", &self.frontend_url)
            .finish()
    }
}

impl CompanyMailer {
    pub fn new(sender: Arc<dyn EmailSender>, frontend_url: String) -> Self {
        Self {
            sender,
            frontend_url: frontend_url.trim_end_matches('/').to_string(),
        }
    }

    fn verification_body(&self, company_name: &str, token: &str) -> String {
        let verification_url = format!("{}/verify-email?token={}", self.frontend_url, token);
        format!(
            r#"
            <h1>Welcome to Verify.me!</h1>
            <p>Hi {company_name},</p>
            <p>Thank you for registering. Please verify your email by clicking the link below:</p>
            <p><a href="{verification_url}">Verify Email</a></p>
            <p>This link will expire in 24 hours.</p>
            <p>If you did not register for Verify.me, please ignore this email.</p>
            "#
        )
    }

    fn reset_body(&self, token: &str) -> String {
        let reset_url = format!("{}/reset-password?token={}", self.frontend_url, token);
        format!(
            r#"
            <h1>Password Reset Request</h1>
            <p>You requested a password reset. Please click the link below to reset your password:</p>
            <p><a href="{reset_url}">Reset Password</a></p>
            <p>This link will expire in 24 hours.</p>
            <p>If you did not request a password reset, please ignore this email.</p>
            "#
        )
    }
}

#[async_trait]
impl CompanyEmailNotifier for CompanyMailer {
    async fn send_verification_email(
        &self,
        email: &str,
        company_name: &str,
        token: &str,
    ) -> Result<(), CompanyNotificationError> {
        self.sender
            .send_email(
                email,
                "Verify Your Email Address",
                &self.verification_body(company_name, token),
            )
            .await
            .map_err(CompanyNotificationError::EmailSendingFailed)
    }

    async fn send_password_reset_email(
        &self,
        email: &str,
        token: &str,
    ) -> Result<(), CompanyNotificationError> {
        self.sender
            .send_email(email, "Reset Your Password", &self.reset_body(token))
            .await
            .map_err(CompanyNotificationError::EmailSendingFailed)
    }
}
