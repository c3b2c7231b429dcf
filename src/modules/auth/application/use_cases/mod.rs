pub mod forgot_password;
pub mod login_company;
pub mod logout_company;
pub mod refresh_token;
pub mod register_company;
pub mod reset_password;
pub mod verify_company_email;
