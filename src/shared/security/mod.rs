pub mod bot_screen;
pub mod rate_limit;

pub use rate_limit::{RateLimitManager, RateLimitSettings};
