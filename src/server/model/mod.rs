//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entities into these types with `from_entity`, services
//! operate on them, and controllers turn them into wire DTOs with `into_dto`. Parameter
//! types carry the validated input for create and update operations.

pub mod availability;
pub mod category;
pub mod inventory;
pub mod menu_item;
pub mod order;
pub mod payment;
pub mod report;
pub mod reservation;
pub mod setting;
pub mod user;

/// One page of a paginated listing with its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Requested page size.
    pub per_page: u64,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u64 {
        if self.per_page > 0 {
            self.total.div_ceil(self.per_page)
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_total_pages() {
        let page = Page::<i32> {
            items: vec![],
            total: 21,
            page: 0,
            per_page: 10,
        };
        assert_eq!(page.total_pages(), 3);

        let empty = Page::<i32> {
            items: vec![],
            total: 0,
            page: 0,
            per_page: 10,
        };
        assert_eq!(empty.total_pages(), 0);
    }
}
