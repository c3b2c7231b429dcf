pub mod create_channel;
pub mod import_channels;
pub mod list_channels;
pub mod match_channel;
pub mod remove_channel;
pub mod verify_import;
