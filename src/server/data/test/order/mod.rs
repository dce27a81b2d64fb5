use crate::{
    model::order::{OrderStatus, OrderType, PaymentStatus},
    server::{
        data::order::{OrderFilter, OrderRepository},
        error::AppError,
        model::order::{NewOrder, NewOrderItem, UpdateOrderParams},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod update;

fn new_order(customer_id: i32, menu_item: &entity::menu_item::Model) -> NewOrder {
    NewOrder {
        order_number: format!("ORD-{:08X}", factory::helpers::next_id()),
        customer_id,
        order_type: OrderType::DineIn,
        subtotal: 25.98,
        tax_amount: 2.08,
        service_charge: 2.60,
        total_amount: 30.66,
        delivery_address: None,
        delivery_notes: None,
        table_number: Some("Table 4".to_string()),
        estimated_ready_time: None,
        items: vec![NewOrderItem {
            menu_item_id: menu_item.id,
            item_name: menu_item.name.clone(),
            quantity: 2,
            unit_price: 12.99,
            total_price: 25.98,
            special_instructions: Some("extra pepper".to_string()),
        }],
    }
}
