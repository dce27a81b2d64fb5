use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InventoryItems::Table)
                    .if_not_exists()
                    .col(pk_auto(InventoryItems::Id))
                    .col(string(InventoryItems::Name))
                    .col(string_uniq(InventoryItems::Sku))
                    .col(string(InventoryItems::Category))
                    .col(string_null(InventoryItems::Supplier))
                    .col(double(InventoryItems::UnitCost))
                    .col(integer(InventoryItems::QuantityOnHand).default(0))
                    .col(integer(InventoryItems::ParLevel).default(0))
                    .col(boolean(InventoryItems::AutoReorder).default(false))
                    .col(
                        timestamp_with_time_zone(InventoryItems::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(InventoryItems::UpdatedAt))
                    .check(Expr::col(InventoryItems::QuantityOnHand).gte(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InventoryItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum InventoryItems {
    Table,
    Id,
    Name,
    Sku,
    Category,
    Supplier,
    UnitCost,
    QuantityOnHand,
    ParLevel,
    AutoReorder,
    CreatedAt,
    UpdatedAt,
}
