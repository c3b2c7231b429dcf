use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Companies::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Companies::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Companies::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Companies::PasswordHash)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Companies::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Companies::VerificationToken).string_len(64))
                    .col(
                        ColumnDef::new(Companies::VerificationTokenExpires)
                            .timestamp_with_time_zone(),
                    )
                    .col(ColumnDef::new(Companies::ResetToken).string_len(64))
                    .col(ColumnDef::new(Companies::ResetTokenExpires).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Companies::SubscriptionStatus)
                            .string_len(20)
                            .not_null()
                            .default("TRIAL"),
                    )
                    .col(
                        ColumnDef::new(Companies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Companies::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Token lookups happen on every email-verification and password-reset
        // redemption; both columns are nullable so plain indexes suffice.
        manager
            .create_index(
                Index::create()
                    .name("idx_companies_verification_token")
                    .table(Companies::Table)
                    .col(Companies::VerificationToken)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_companies_reset_token")
                    .table(Companies::Table)
                    .col(Companies::ResetToken)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Companies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Companies {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    IsVerified,
    VerificationToken,
    VerificationTokenExpires,
    ResetToken,
    ResetTokenExpires,
    SubscriptionStatus,
    CreatedAt,
    UpdatedAt,
}
