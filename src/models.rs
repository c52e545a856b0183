use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Fulfillment stage of an order, stored remotely as the literal strings
/// `pending`, `dispatch` and `success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Dispatch,
    Success,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::Dispatch,
        OrderStatus::Success,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Dispatch => "dispatch",
            OrderStatus::Success => "success",
        }
    }

    /// Label shown in the status selector.
    pub fn option_label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Dispatch => "Dispatch",
            OrderStatus::Success => "Completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "dispatch" => Ok(OrderStatus::Dispatch),
            "success" => Ok(OrderStatus::Success),
            other => Err(format!("unknown order status `{other}`")),
        }
    }
}

/// Status tab of the order table. `All` disables filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum StatusFilter {
    #[default]
    All,
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "dispatch")]
    Dispatch,
    #[serde(rename = "success")]
    Success,
}

impl StatusFilter {
    pub const TABS: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Pending,
        StatusFilter::Dispatch,
        StatusFilter::Success,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Pending => "pending",
            StatusFilter::Dispatch => "dispatch",
            StatusFilter::Success => "success",
        }
    }

    /// Tab caption: the raw value with its first letter upper-cased.
    pub fn label(&self) -> String {
        let raw = self.as_str();
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn matches(&self, status: Option<OrderStatus>) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == Some(OrderStatus::Pending),
            StatusFilter::Dispatch => status == Some(OrderStatus::Dispatch),
            StatusFilter::Success => status == Some(OrderStatus::Success),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub product_name: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// A customer order as returned by the content store projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub last_name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub phone: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub address: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub city: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub zip_code: String,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub total: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub discount: f64,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub order_date: String,
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<OrderStatus>,
    #[serde(default, deserialize_with = "dereferenced_items")]
    pub cart_items: Vec<LineItem>,
}

impl Order {
    pub fn customer_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

// Legacy documents may carry no status or a value outside the closed set.
fn lenient_status<'de, D>(deserializer: D) -> Result<Option<OrderStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value.parse::<OrderStatus>() {
        Ok(status) => Some(status),
        Err(err) => {
            tracing::debug!(error = %err, "ignoring unrecognised order status");
            None
        }
    }))
}

// Broken references expand to null entries; the whole array may be null too.
fn dereferenced_items<'de, D>(deserializer: D) -> Result<Vec<LineItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<Option<LineItem>>>::deserialize(deserializer)?;
    Ok(items.unwrap_or_default().into_iter().flatten().collect())
}
