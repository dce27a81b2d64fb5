mod category;
mod inventory_item;
mod menu_item;
mod order;
mod payment;
mod report;
mod reservation;
mod setting;
mod user;
