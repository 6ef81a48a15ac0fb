use chrono::Utc;
use rand::Rng;

use crate::{
    cart::Cart,
    effects::best_effort,
    error::{AppError, AppResult},
    models::{ConfirmedOrder, OrderLine, OrderRow},
    services::menu_service,
    state::AppState,
};

/// Confirms the user's cart as an order.
///
/// The cart stays locked for the whole operation, so rapid double-taps of
/// the confirm button serialize instead of double-submitting. The kitchen
/// notification and the order-log append are best-effort and independent;
/// either can fail without blocking the confirmation, so a persisted order
/// row is not guaranteed. The cart is always reset afterwards, keeping only
/// the order id for the receipt. There is no rollback once the empty check
/// passes.
pub async fn confirm_order(state: &AppState, user_id: &str) -> AppResult<ConfirmedOrder> {
    let cart = state.carts.entry(user_id);
    let mut cart = cart.lock().await;

    if cart.is_empty() {
        return Err(AppError::EmptyCart);
    }

    let order_id = generate_order_id();
    let lines = lines_from_cart(&cart);
    let total = cart.total();
    let summary = cart.summary(menu_service::item_name);

    best_effort(
        "kitchen notify",
        state
            .notify
            .send(&format!("📋 ออเดอร์ใหม่!\nOrder ID: {order_id}\n{summary}")),
    )
    .await;

    let row = OrderRow {
        timestamp: Utc::now().to_rfc3339(),
        user_id: user_id.to_string(),
        item_summary: lines
            .iter()
            .map(|line| format!("{} x{}", line.name, line.quantity))
            .collect::<Vec<_>>()
            .join(", "),
        total,
        status: "pending".to_string(),
        payment_status: "unpaid".to_string(),
        order_id: order_id.clone(),
    };
    best_effort("order log append", state.sheets.append_order(&row)).await;

    cart.last_order_id = Some(order_id.clone());
    cart.items.clear();

    Ok(ConfirmedOrder {
        order_id,
        lines,
        total,
    })
}

/// Snapshot of the cart as order lines, in insertion order.
pub fn lines_from_cart(cart: &Cart) -> Vec<OrderLine> {
    cart.items
        .iter()
        .map(|(item_id, entry)| OrderLine {
            item_id: item_id.clone(),
            name: menu_service::item_name(item_id),
            quantity: entry.quantity,
            unit_price: entry.unit_price,
        })
        .collect()
}

/// `ORDER<YYYYMMDD><3-digit-random>`, date in UTC. The random suffix makes
/// ids collision-tolerant, not unique; this is not a cryptographic
/// identifier.
pub fn generate_order_id() -> String {
    let date = Utc::now().format("%Y%m%d");
    let suffix = rand::rng().random_range(0..1000);
    format!("ORDER{date}{suffix:03}")
}
