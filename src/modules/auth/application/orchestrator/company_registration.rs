use std::sync::Arc;
use std::time::Duration;

use crate::auth::application::use_cases::register_company::{
    IRegisterCompanyUseCase, RegisterCompanyError, RegisterCompanyInput, RegisterCompanyOutput,
};
use crate::email::application::ports::outgoing::CompanyEmailNotifier;

#[derive(Debug)]
pub struct CompanyRegistrationOutput {
    pub company_id: uuid::Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<RegisterCompanyOutput> for CompanyRegistrationOutput {
    fn from(output: RegisterCompanyOutput) -> Self {
        Self {
            company_id: output.company_id,
            name: output.name,
            email: output.email,
            message:
                "Registration successful. Please check your email to verify your account."
                    .to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CompanyRegistrationError {
    #[error("Company registration failed: {0}")]
    RegisterFailed(#[from] RegisterCompanyError),
}

/// Registration plus the verification email. The account is committed
/// first; the mail goes out as a background task with bounded retries, so
/// an SMTP outage never rolls back a signup.
#[derive(Clone)]
pub struct CompanyRegistrationOrchestrator {
    register_use_case: Arc<dyn IRegisterCompanyUseCase>,
    notifier: Arc<dyn CompanyEmailNotifier>,
}

impl CompanyRegistrationOrchestrator {
    pub fn new(
        register_use_case: Arc<dyn IRegisterCompanyUseCase>,
        notifier: Arc<dyn CompanyEmailNotifier>,
    ) -> Self {
        Self {
            register_use_case,
            notifier,
        }
    }

    pub async fn register(
        &self,
        input: RegisterCompanyInput,
    ) -> Result<CompanyRegistrationOutput, CompanyRegistrationError> {
        let output = self.register_use_case.execute(input).await?;

        let notifier = Arc::clone(&self.notifier);
        let email = output.email.clone();
        let name = output.name.clone();
        let token = output.verification_token.clone();
        let company_id = output.company_id;

        tokio::spawn(async move {
            let max_retries = 3;
            for attempt in 1..=max_retries {
                match notifier.send_verification_email(&email, &name, &token).await {
                    Ok(_) => return,
                    Err(e) if attempt < max_retries => {
                        tracing::warn!(
                            company_id = %company_id,
                            attempt,
                            max_retries,
                            error = %e,
                            "verification email attempt failed, retrying"
                        );
                        tokio::time::sleep(Duration::from_secs(2_u64.pow(attempt))).await;
                    }
                    Err(e) => {
                        tracing::error!(
                            company_id = %company_id,
                            error = %e,
                            "all verification email attempts failed"
                        );
                    }
                }
            }
        });

        Ok(output.into())
    }
}
