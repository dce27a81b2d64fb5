use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000002_create_categories_table::Categories;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItems::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuItems::Id))
                    .col(integer(MenuItems::CategoryId))
                    .col(string(MenuItems::Name))
                    .col(text_null(MenuItems::Description))
                    .col(double(MenuItems::Price))
                    .col(string_null(MenuItems::ImageUrl))
                    .col(boolean(MenuItems::IsAvailable).default(true))
                    .col(boolean(MenuItems::IsFeatured).default(false))
                    .col(integer_null(MenuItems::Calories))
                    .col(integer_null(MenuItems::PreparationTime))
                    .col(
                        timestamp_with_time_zone(MenuItems::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(MenuItems::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_item_category_id")
                            .from(MenuItems::Table, MenuItems::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuItems {
    Table,
    Id,
    CategoryId,
    Name,
    Description,
    Price,
    ImageUrl,
    IsAvailable,
    IsFeatured,
    Calories,
    PreparationTime,
    CreatedAt,
    UpdatedAt,
}
