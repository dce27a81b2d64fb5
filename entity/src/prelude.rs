pub use super::category::Entity as Category;
pub use super::inventory_item::Entity as InventoryItem;
pub use super::menu_item::Entity as MenuItem;
pub use super::order::Entity as Order;
pub use super::order_item::Entity as OrderItem;
pub use super::payment::Entity as Payment;
pub use super::reservation::Entity as Reservation;
pub use super::setting::Entity as Setting;
pub use super::user::Entity as User;
