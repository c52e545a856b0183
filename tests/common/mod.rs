#![allow(dead_code)]

use std::sync::Arc;

use storefront_admin::{
    models::{LineItem, Order, OrderStatus},
    session::{AdminCredentials, FlagSessionProvider, StaticCredentials},
    state::AppState,
    store::MemoryStore,
};

pub const ADMIN_EMAIL: &str = "admin@shop.test";
pub const ADMIN_PASSWORD: &str = "hunter2";

pub fn order(id: &str, status: Option<OrderStatus>, total: f64) -> Order {
    Order {
        id: id.to_string(),
        first_name: "Jane".into(),
        last_name: "Doe".into(),
        phone: "555-0100".into(),
        email: "jane@example.com".into(),
        address: "1 Main St".into(),
        city: "Springfield".into(),
        zip_code: "12345".into(),
        total,
        discount: 0.0,
        order_date: "2025-01-20T10:15:00.000Z".into(),
        status,
        cart_items: vec![LineItem {
            product_name: "Desk Lamp".into(),
            image: Some("https://cdn.example.com/lamp.png".into()),
        }],
    }
}

pub fn sessions() -> FlagSessionProvider {
    FlagSessionProvider::new(StaticCredentials(AdminCredentials {
        email: ADMIN_EMAIL.into(),
        password: ADMIN_PASSWORD.into(),
    }))
}

pub fn app_state(store: Arc<MemoryStore>) -> AppState {
    AppState::new(store, Arc::new(sessions()))
}
