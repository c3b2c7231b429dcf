pub mod company_mailer;

pub use company_mailer::CompanyMailer;
