use serde::{Deserialize, Serialize};

/// A menu row from the `Menu` sheet. Read-mostly reference data; not owned
/// by any cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: i64,
    pub image_url: String,
    pub available: bool,
    pub description: String,
}

/// One confirmed order line, snapshotted before the cart is reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub item_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: i64,
}

impl OrderLine {
    pub fn line_total(&self) -> i64 {
        self.unit_price * self.quantity as i64
    }
}

/// Result of a confirmed order. The cart itself only retains the order id;
/// the lines and total here are the pre-reset snapshot used to render the
/// receipt.
#[derive(Debug, Clone)]
pub struct ConfirmedOrder {
    pub order_id: String,
    pub lines: Vec<OrderLine>,
    pub total: i64,
}

/// A row appended to the `Orders` sheet.
#[derive(Debug, Clone)]
pub struct OrderRow {
    pub timestamp: String,
    pub user_id: String,
    pub item_summary: String,
    pub total: i64,
    pub status: String,
    pub payment_status: String,
    pub order_id: String,
}
