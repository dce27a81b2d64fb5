pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_users_table;
mod m20261001_000002_create_categories_table;
mod m20261001_000003_create_menu_items_table;
mod m20261001_000004_create_orders_table;
mod m20261001_000005_create_order_items_table;
mod m20261001_000006_create_payments_table;
mod m20261001_000007_create_reservations_table;
mod m20261001_000008_create_inventory_items_table;
mod m20261001_000009_create_settings_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_users_table::Migration),
            Box::new(m20261001_000002_create_categories_table::Migration),
            Box::new(m20261001_000003_create_menu_items_table::Migration),
            Box::new(m20261001_000004_create_orders_table::Migration),
            Box::new(m20261001_000005_create_order_items_table::Migration),
            Box::new(m20261001_000006_create_payments_table::Migration),
            Box::new(m20261001_000007_create_reservations_table::Migration),
            Box::new(m20261001_000008_create_inventory_items_table::Migration),
            Box::new(m20261001_000009_create_settings_table::Migration),
        ]
    }
}
