pub mod company_notifier;
pub mod email_sender;

pub use company_notifier::{CompanyEmailNotifier, CompanyNotificationError};
pub use email_sender::EmailSender;
