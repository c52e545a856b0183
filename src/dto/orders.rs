use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    models::{LineItem, Order, OrderStatus, StatusFilter},
    workbench::{ConfirmPrompt, Notice, WorkbenchState},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetFilterRequest {
    pub filter: StatusFilter,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FilterTab {
    pub value: StatusFilter,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusOption {
    pub value: OrderStatus,
    pub label: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderDetails {
    pub phone: String,
    pub email: String,
    pub city: String,
    pub zip_code: String,
    pub discount: f64,
    pub items: Vec<LineItem>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderRow {
    pub id: String,
    pub customer: String,
    pub address: String,
    pub date: String,
    pub total: String,
    pub status: Option<OrderStatus>,
    pub expanded: bool,
    /// Present only on the expanded row.
    pub details: Option<OrderDetails>,
}

/// Everything the order table needs to draw itself.
#[derive(Debug, Serialize, ToSchema)]
pub struct WorkbenchView {
    pub filter: StatusFilter,
    pub tabs: Vec<FilterTab>,
    /// Orders held locally, whatever the filter.
    pub total_orders: usize,
    pub visible_count: usize,
    pub status_options: Vec<StatusOption>,
    pub rows: Vec<OrderRow>,
}

impl WorkbenchView {
    pub fn render(state: &WorkbenchState) -> Self {
        let tabs = StatusFilter::TABS
            .iter()
            .map(|tab| FilterTab {
                value: *tab,
                label: tab.label(),
                active: *tab == state.filter,
            })
            .collect();

        let status_options = OrderStatus::ALL
            .iter()
            .map(|status| StatusOption {
                value: *status,
                label: status.option_label().to_string(),
            })
            .collect();

        let rows: Vec<OrderRow> = state
            .visible()
            .into_iter()
            .map(|order| order_row(order, state.is_expanded(&order.id)))
            .collect();

        Self {
            filter: state.filter,
            tabs,
            total_orders: state.orders.len(),
            visible_count: rows.len(),
            status_options,
            rows,
        }
    }
}

fn order_row(order: &Order, expanded: bool) -> OrderRow {
    let details = expanded.then(|| OrderDetails {
        phone: order.phone.clone(),
        email: order.email.clone(),
        city: order.city.clone(),
        zip_code: order.zip_code.clone(),
        discount: order.discount,
        items: order.cart_items.clone(),
    });

    OrderRow {
        id: order.id.clone(),
        customer: order.customer_name(),
        address: order.address.clone(),
        date: display_date(&order.order_date),
        total: display_amount(order.total),
        status: order.status,
        expanded,
        details,
    }
}

/// `M/D/YYYY` for parseable timestamps, otherwise the stored string.
pub fn display_date(raw: &str) -> String {
    const FORMAT: &str = "%-m/%-d/%Y";
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(FORMAT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(FORMAT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(FORMAT).to_string();
    }
    raw.to_string()
}

/// Whole amounts print without decimals: `$50`, `$49.5`.
pub fn display_amount(amount: f64) -> String {
    format!("${amount}")
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusChange {
    pub id: String,
    pub status: OrderStatus,
    pub notice: Option<Notice>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResult {
    pub id: String,
    pub deleted: bool,
    pub notice: Option<Notice>,
    /// Returned instead of deleting when the request was not confirmed.
    pub prompt: Option<ConfirmPrompt>,
}
