pub mod forgot_password;
pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;
pub mod reset_password;
pub mod verify_email;

pub use forgot_password::forgot_password_handler;
pub use login::login_company_handler;
pub use logout::logout_company_handler;
pub use refresh::refresh_token_handler;
pub use register::register_company_handler;
pub use reset_password::reset_password_handler;
pub use verify_email::verify_email_handler;
