use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_auto(Orders::Id))
                    .col(string_uniq(Orders::OrderNumber))
                    .col(integer(Orders::CustomerId))
                    .col(string(Orders::OrderType))
                    .col(string(Orders::Status).default("pending"))
                    .col(string(Orders::PaymentStatus).default("pending"))
                    .col(double(Orders::Subtotal))
                    .col(double(Orders::TaxAmount))
                    .col(double(Orders::ServiceCharge))
                    .col(double(Orders::TotalAmount))
                    .col(text_null(Orders::DeliveryAddress))
                    .col(text_null(Orders::DeliveryNotes))
                    .col(string_null(Orders::TableNumber))
                    .col(timestamp_with_time_zone_null(Orders::EstimatedReadyTime))
                    .col(
                        timestamp_with_time_zone(Orders::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Orders::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_customer_id")
                            .from(Orders::Table, Orders::CustomerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_order_customer_id")
                    .table(Orders::Table)
                    .col(Orders::CustomerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Orders {
    Table,
    Id,
    OrderNumber,
    CustomerId,
    OrderType,
    Status,
    PaymentStatus,
    Subtotal,
    TaxAmount,
    ServiceCharge,
    TotalAmount,
    DeliveryAddress,
    DeliveryNotes,
    TableNumber,
    EstimatedReadyTime,
    CreatedAt,
    UpdatedAt,
}
