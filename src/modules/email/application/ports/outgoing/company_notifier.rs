use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyNotificationError {
    EmailSendingFailed(String),
}

impl std::fmt::Display for CompanyNotificationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmailSendingFailed(msg) => write!(f, "email sending failed: {msg}"),
        }
    }
}

impl std::error::Error for CompanyNotificationError {}

/// The two account-lifecycle mails the auth module needs sent.
#[async_trait]
pub trait CompanyEmailNotifier: Send + Sync {
    async fn send_verification_email(
        &self,
        email: &str,
        company_name: &str,
        token: &str,
    ) -> Result<(), CompanyNotificationError>;

    async fn send_password_reset_email(
        &self,
        email: &str,
        token: &str,
    ) -> Result<(), CompanyNotificationError>;
}
