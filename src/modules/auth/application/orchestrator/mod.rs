pub mod company_registration;
