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
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservations::Id))
                    .col(integer(Reservations::CustomerId))
                    .col(timestamp_with_time_zone(Reservations::ReservationDate))
                    .col(integer(Reservations::PartySize))
                    .col(string(Reservations::Status).default("pending"))
                    .col(string_null(Reservations::TableNumber))
                    .col(text_null(Reservations::SpecialRequests))
                    .col(string_null(Reservations::Occasion))
                    .col(
                        timestamp_with_time_zone(Reservations::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Reservations::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_customer_id")
                            .from(Reservations::Table, Reservations::CustomerId)
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
                    .name("idx_reservation_date")
                    .table(Reservations::Table)
                    .col(Reservations::ReservationDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservations {
    Table,
    Id,
    CustomerId,
    ReservationDate,
    PartySize,
    Status,
    TableNumber,
    SpecialRequests,
    Occasion,
    CreatedAt,
    UpdatedAt,
}
