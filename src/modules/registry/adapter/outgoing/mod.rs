pub mod channel_repository_postgres;
pub mod random_ownership_check;
pub mod sea_orm_entity;
pub mod verified_channel_query_postgres;
