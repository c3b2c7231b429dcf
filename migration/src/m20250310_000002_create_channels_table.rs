use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Channels::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Channels::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Channels::CompanyId).uuid().not_null())
                    .col(
                        ColumnDef::new(Channels::ChannelType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Channels::Value).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Channels::Status)
                            .string_len(20)
                            .not_null()
                            .default("unverified"),
                    )
                    .col(ColumnDef::new(Channels::VerifiedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Channels::Description).string_len(500))
                    .col(
                        ColumnDef::new(Channels::IsEmployeeChannel)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Channels::EmployeeName).string_len(100))
                    .col(ColumnDef::new(Channels::EmployeeRole).string_len(100))
                    .col(ColumnDef::new(Channels::EmployeeDepartment).string_len(100))
                    .col(ColumnDef::new(Channels::EmployeeStatus).string_len(20))
                    .col(ColumnDef::new(Channels::Metadata).json_binary())
                    .col(
                        ColumnDef::new(Channels::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Channels::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_channels_company")
                            .from(Channels::Table, Channels::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Dashboard listing is always scoped to one company.
        manager
            .create_index(
                Index::create()
                    .name("idx_channels_company_id")
                    .table(Channels::Table)
                    .col(Channels::CompanyId)
                    .to_owned(),
            )
            .await?;

        // The matcher scans verified channels only.
        manager
            .create_index(
                Index::create()
                    .name("idx_channels_status")
                    .table(Channels::Table)
                    .col(Channels::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Channels::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Channels {
    Table,
    Id,
    CompanyId,
    ChannelType,
    Value,
    Status,
    VerifiedAt,
    Description,
    IsEmployeeChannel,
    EmployeeName,
    EmployeeRole,
    EmployeeDepartment,
    EmployeeStatus,
    Metadata,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Companies {
    Table,
    Id,
}
