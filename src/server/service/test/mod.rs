mod inventory;
mod menu_item;
mod report;
mod user;
