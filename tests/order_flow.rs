use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use line_restaurant_bot::{
    cart::{CartStore, MemoryCartStore},
    config::AppConfig,
    error::AppError,
    line::client::MessagingClient,
    notify::NotifyClient,
    services::{menu_service, order_service},
    sheets::{ServiceAccountKey, SheetsClient},
    state::AppState,
};

// State wired to unreachable endpoints: every outbound side effect fails,
// which is exactly the degraded mode the confirm flow must survive.
fn state_with_dead_collaborators() -> anyhow::Result<AppState> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()?;
    let key = ServiceAccountKey {
        client_email: "bot@example.iam.gserviceaccount.com".to_string(),
        private_key: "not a pem".to_string(),
        token_uri: "http://127.0.0.1:9/token".to_string(),
    };

    Ok(AppState {
        config: Arc::new(AppConfig {
            channel_access_token: "channel-token".to_string(),
            channel_secret: "channel-secret".to_string(),
            notify_token: "notify-token".to_string(),
            spreadsheet_id: "sheet-id".to_string(),
            service_account_file: "./service-account.json".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
        }),
        carts: Arc::new(MemoryCartStore::default()),
        line: MessagingClient::with_endpoint(http.clone(), "channel-token", "http://127.0.0.1:9/reply"),
        notify: NotifyClient::with_endpoint(http.clone(), "notify-token", "http://127.0.0.1:9/notify"),
        sheets: SheetsClient::with_base_url(http, key, "sheet-id", "http://127.0.0.1:9/v4"),
    })
}

#[tokio::test]
async fn confirm_resets_cart_even_when_side_effects_fail() -> anyhow::Result<()> {
    let state = state_with_dead_collaborators()?;

    {
        let cart = state.carts.entry("user-1");
        let mut cart = cart.lock().await;
        cart.add_item("padthai", 60);
        cart.add_item("padthai", 60);
        cart.add_item("icedtea", 25);
    }

    let order = order_service::confirm_order(&state, "user-1").await?;

    assert_eq!(order.total, 145);
    assert_eq!(order.lines.len(), 2);
    assert_eq!(order.lines[0].quantity, 2);

    let cart = state.carts.entry("user-1");
    let cart = cart.lock().await;
    assert!(cart.is_empty());
    assert_eq!(cart.total(), 0);
    assert_eq!(cart.last_order_id.as_deref(), Some(order.order_id.as_str()));

    Ok(())
}

#[tokio::test]
async fn confirming_an_empty_cart_is_rejected() -> anyhow::Result<()> {
    let state = state_with_dead_collaborators()?;

    let result = order_service::confirm_order(&state, "user-1").await;
    assert!(matches!(result, Err(AppError::EmptyCart)));

    // The rejection must not have minted an order id.
    let cart = state.carts.entry("user-1");
    let cart = cart.lock().await;
    assert!(cart.last_order_id.is_none());

    Ok(())
}

#[test]
fn order_ids_carry_the_utc_date_and_a_three_digit_suffix() {
    let order_id = order_service::generate_order_id();

    assert!(order_id.starts_with("ORDER"), "id was: {order_id}");
    assert_eq!(order_id.len(), "ORDER".len() + 8 + 3);

    let date_segment = &order_id[5..13];
    assert_eq!(date_segment, Utc::now().format("%Y%m%d").to_string());

    let suffix = &order_id[13..];
    assert!(
        suffix.chars().all(|c| c.is_ascii_digit()),
        "id was: {order_id}"
    );
}

#[tokio::test]
async fn unreachable_menu_source_degrades_to_no_items() -> anyhow::Result<()> {
    let state = state_with_dead_collaborators()?;

    let items = menu_service::menu_by_category(&state, "ต้ม/แกง").await;
    assert!(items.is_empty());

    // Downstream rendering turns the empty lookup into a "no items" text
    // reply rather than failing.
    let message = line_restaurant_bot::line::flex::menu_carousel(&items);
    assert_eq!(message["type"], "text");

    Ok(())
}
