//! Order domain models and parameters.
//!
//! An order owns its line items. Each line snapshots the menu item's name and price at
//! the time of ordering, so later menu edits or deletions never change past orders.

use chrono::{DateTime, Utc};

use crate::{
    model::order::{
        CreateOrderDto, OrderDto, OrderItemDto, OrderStatus, OrderType, PaginatedOrdersDto,
        PaymentStatus, UpdateOrderDto,
    },
    server::{error::AppError, model::Page, util::parse::parse_stored},
};

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub menu_item_id: Option<i32>,
    pub item_name: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub total_price: f64,
    pub special_instructions: Option<String>,
}

impl OrderItem {
    pub fn from_entity(entity: entity::order_item::Model) -> Self {
        Self {
            id: entity.id,
            order_id: entity.order_id,
            menu_item_id: entity.menu_item_id,
            item_name: entity.item_name,
            quantity: entity.quantity,
            unit_price: entity.unit_price,
            total_price: entity.total_price,
            special_instructions: entity.special_instructions,
        }
    }

    pub fn into_dto(self) -> OrderItemDto {
        OrderItemDto {
            id: self.id,
            menu_item_id: self.menu_item_id,
            item_name: self.item_name,
            quantity: self.quantity,
            unit_price: self.unit_price,
            total_price: self.total_price,
            special_instructions: self.special_instructions,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    /// `ORD-` followed by eight upper-case hex digits.
    pub order_number: String,
    pub customer_id: i32,
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub service_charge: f64,
    pub total_amount: f64,
    pub delivery_address: Option<String>,
    pub delivery_notes: Option<String>,
    pub table_number: Option<String>,
    pub estimated_ready_time: Option<DateTime<Utc>>,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Converts an order entity and its item entities to a domain model.
    ///
    /// # Returns
    /// - `Ok(Order)` - The converted order with items
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - A stored enum column is unknown
    pub fn from_entity(
        entity: entity::order::Model,
        items: Vec<entity::order_item::Model>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            order_number: entity.order_number,
            customer_id: entity.customer_id,
            order_type: parse_stored("order_type", entity.order_type)?,
            status: parse_stored("status", entity.status)?,
            payment_status: parse_stored("payment_status", entity.payment_status)?,
            subtotal: entity.subtotal,
            tax_amount: entity.tax_amount,
            service_charge: entity.service_charge,
            total_amount: entity.total_amount,
            delivery_address: entity.delivery_address,
            delivery_notes: entity.delivery_notes,
            table_number: entity.table_number,
            estimated_ready_time: entity.estimated_ready_time,
            items: items.into_iter().map(OrderItem::from_entity).collect(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            order_number: self.order_number,
            customer_id: self.customer_id,
            order_type: self.order_type,
            status: self.status,
            payment_status: self.payment_status,
            subtotal: self.subtotal,
            tax_amount: self.tax_amount,
            service_charge: self.service_charge,
            total_amount: self.total_amount,
            delivery_address: self.delivery_address,
            delivery_notes: self.delivery_notes,
            table_number: self.table_number,
            estimated_ready_time: self.estimated_ready_time,
            items: self.items.into_iter().map(OrderItem::into_dto).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Page<Order> {
    pub fn into_dto(self) -> PaginatedOrdersDto {
        let total_pages = self.total_pages();
        PaginatedOrdersDto {
            orders: self.items.into_iter().map(Order::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages,
        }
    }
}

/// One requested line of a new order.
#[derive(Debug, Clone)]
pub struct OrderLineRequest {
    pub menu_item_id: i32,
    pub quantity: i32,
    pub special_instructions: Option<String>,
}

/// Customer request to place an order, before prices are resolved.
#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub customer_id: i32,
    pub order_type: OrderType,
    pub lines: Vec<OrderLineRequest>,
    pub delivery_address: Option<String>,
    pub delivery_notes: Option<String>,
    pub table_number: Option<String>,
}

impl CreateOrderParams {
    pub fn from_dto(customer_id: i32, dto: CreateOrderDto) -> Self {
        Self {
            customer_id,
            order_type: dto.order_type,
            lines: dto
                .items
                .into_iter()
                .map(|item| OrderLineRequest {
                    menu_item_id: item.menu_item_id,
                    quantity: item.quantity,
                    special_instructions: item.special_instructions,
                })
                .collect(),
            delivery_address: dto.delivery_address,
            delivery_notes: dto.delivery_notes,
            table_number: dto.table_number,
        }
    }
}

/// A priced order line ready for insertion.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub menu_item_id: i32,
    pub item_name: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub total_price: f64,
    pub special_instructions: Option<String>,
}

/// A fully priced order ready for insertion.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub order_number: String,
    pub customer_id: i32,
    pub order_type: OrderType,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub service_charge: f64,
    pub total_amount: f64,
    pub delivery_address: Option<String>,
    pub delivery_notes: Option<String>,
    pub table_number: Option<String>,
    pub estimated_ready_time: Option<DateTime<Utc>>,
    pub items: Vec<NewOrderItem>,
}

/// Staff-side order update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateOrderParams {
    pub status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub table_number: Option<String>,
    pub estimated_ready_time: Option<DateTime<Utc>>,
}

impl From<UpdateOrderDto> for UpdateOrderParams {
    fn from(dto: UpdateOrderDto) -> Self {
        Self {
            status: dto.status,
            payment_status: dto.payment_status,
            table_number: dto.table_number,
            estimated_ready_time: dto.estimated_ready_time,
        }
    }
}
