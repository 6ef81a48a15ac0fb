use chrono::{FixedOffset, Utc};

use crate::{
    commands::{self, Command},
    effects::best_effort,
    error::{AppError, AppResult},
    line::{
        events::{Event, MessageContent, PostbackData},
        flex,
    },
    services::{menu_service, order_service},
    state::AppState,
};

const DEFAULT_PROMPT: &str = "กรุณาเลือกเมนูจาก Rich Menu ด้านล่างค่ะ 😊";
const EMPTY_CART_PROMPT: &str = "ตะกร้าของคุณยังว่างเปล่าค่ะ 🛒\nกรุณาเลือกเมนูก่อนนะคะ";

/// Routes one inbound event. Events without a user source, non-text
/// messages, and unsupported kinds resolve to a no-op.
pub async fn handle_event(state: &AppState, event: Event) -> AppResult<()> {
    match event {
        Event::Follow { reply_token, .. } => {
            state.line.reply(&reply_token, vec![flex::welcome()]).await
        }
        Event::Message {
            reply_token,
            source,
            message,
        } => {
            let Some(user_id) = source.user_id else {
                return Ok(());
            };
            match message {
                MessageContent::Text { text } => {
                    handle_text(state, &user_id, &reply_token, &text).await
                }
                MessageContent::Other => Ok(()),
            }
        }
        Event::Postback {
            reply_token,
            source,
            postback,
        } => {
            let Some(user_id) = source.user_id else {
                return Ok(());
            };
            handle_postback(state, &user_id, &reply_token, &postback.data).await
        }
        Event::Unsupported => Ok(()),
    }
}

async fn handle_text(
    state: &AppState,
    user_id: &str,
    reply_token: &str,
    text: &str,
) -> AppResult<()> {
    tracing::debug!(user_id, text, "text message");

    let messages = match commands::parse(text) {
        Some(Command::Order) => vec![flex::categories()],
        Some(Command::Promotions) => vec![flex::promotions()],
        Some(Command::Recommended) => vec![flex::recommended()],
        Some(Command::ContactStaff) => {
            best_effort(
                "staff notify",
                state
                    .notify
                    .send(&format!("มีลูกค้าต้องการติดต่อ! UserID: {user_id}")),
            )
            .await;
            vec![flex::text_message(
                "เราได้แจ้งพนักงานแล้ว จะติดต่อกลับโดยเร็วที่สุดค่ะ 😊",
            )]
        }
        Some(Command::ViewCart) => {
            let cart = state.carts.entry(user_id);
            let cart = cart.lock().await;
            let lines = order_service::lines_from_cart(&cart);
            vec![flex::cart_view(&lines, cart.total())]
        }
        Some(Command::ViewBill) => {
            let cart = state.carts.entry(user_id);
            let cart = cart.lock().await;
            let lines = order_service::lines_from_cart(&cart);
            let order_id = cart
                .last_order_id
                .clone()
                .unwrap_or_else(|| "N/A".to_string());
            vec![flex::bill(&lines, cart.total(), &order_id, &bill_timestamp())]
        }
        Some(Command::Category(label)) => {
            let items = menu_service::menu_by_category(state, &label).await;
            vec![flex::menu_carousel(&items)]
        }
        None => vec![flex::text_message(DEFAULT_PROMPT)],
    };

    state.line.reply(reply_token, messages).await
}

async fn handle_postback(
    state: &AppState,
    user_id: &str,
    reply_token: &str,
    data: &str,
) -> AppResult<()> {
    let Some(postback) = PostbackData::parse(data) else {
        return Ok(());
    };

    match postback.action.as_str() {
        "add" | "increase" => {
            let Some(item) = postback.item else {
                return Ok(());
            };
            {
                let cart = state.carts.entry(user_id);
                let mut cart = cart.lock().await;
                cart.add_item(&item, menu_service::item_price(&item));
            }
            state
                .line
                .reply(
                    reply_token,
                    vec![flex::text_message(format!(
                        "เพิ่ม {} แล้วค่ะ ✅",
                        menu_service::item_name(&item)
                    ))],
                )
                .await
        }
        "remove" | "decrease" => {
            let Some(item) = postback.item else {
                return Ok(());
            };
            {
                let cart = state.carts.entry(user_id);
                let mut cart = cart.lock().await;
                cart.remove_item(&item);
            }
            state
                .line
                .reply(
                    reply_token,
                    vec![flex::text_message(format!(
                        "ลด {} แล้วค่ะ ✅",
                        menu_service::item_name(&item)
                    ))],
                )
                .await
        }
        "confirm_order" => match order_service::confirm_order(state, user_id).await {
            Ok(order) => {
                state
                    .line
                    .reply(
                        reply_token,
                        vec![
                            flex::text_message(
                                "ยืนยันคำสั่งซื้อเรียบร้อยแล้วค่ะ ✅\nกำลังส่งไปยังห้องครัว...",
                            ),
                            flex::bill(&order.lines, order.total, &order.order_id, &bill_timestamp()),
                        ],
                    )
                    .await
            }
            Err(AppError::EmptyCart) => {
                state
                    .line
                    .reply(reply_token, vec![flex::text_message(EMPTY_CART_PROMPT)])
                    .await
            }
            Err(err) => Err(err),
        },
        _ => Ok(()),
    }
}

/// Receipt timestamp in Bangkok local time.
fn bill_timestamp() -> String {
    let bangkok = FixedOffset::east_opt(7 * 3600).expect("UTC+7 is a valid offset");
    Utc::now()
        .with_timezone(&bangkok)
        .format("%d/%m/%Y %H:%M")
        .to_string()
}
