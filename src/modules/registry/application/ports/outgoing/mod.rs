pub mod channel_repository;
pub mod ownership_check;
pub mod verified_channel_query;

pub use channel_repository::{ChannelRepository, ChannelRepositoryError, StatusUpdate};
pub use ownership_check::{OwnershipCheck, OwnershipCheckError};
pub use verified_channel_query::{VerifiedChannelQuery, VerifiedChannelQueryError};
