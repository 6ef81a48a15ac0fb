use line_restaurant_bot::commands::{self, Command};
use line_restaurant_bot::line::events::{Event, MessageContent, PostbackData, WebhookPayload};
use line_restaurant_bot::line::signature;

#[test]
fn command_vocabulary_matches_thai_and_english_phrases() {
    assert_eq!(commands::parse("สั่งอาหาร"), Some(Command::Order));
    assert_eq!(commands::parse("order"), Some(Command::Order));
    assert_eq!(commands::parse("โปร"), Some(Command::Promotions));
    assert_eq!(commands::parse("เมนูแนะนำ"), Some(Command::Recommended));
    assert_eq!(commands::parse("help"), Some(Command::ContactStaff));
    assert_eq!(commands::parse("cart"), Some(Command::ViewCart));
    assert_eq!(commands::parse("ดูตะกร้า"), Some(Command::ViewCart));
    assert_eq!(commands::parse("เช็คบิล"), Some(Command::ViewBill));
}

#[test]
fn command_matching_is_case_insensitive_and_trimmed() {
    assert_eq!(commands::parse("  ORDER "), Some(Command::Order));
    assert_eq!(commands::parse("Cart"), Some(Command::ViewCart));
}

#[test]
fn category_phrases_match_as_substrings_and_keep_the_full_text() {
    // Category buttons send labels like "ต้ม/แกง"; the full text is the
    // category label looked up in the sheet, not the matched phrase.
    assert_eq!(
        commands::parse("ต้ม/แกง"),
        Some(Command::Category("ต้ม/แกง".to_string()))
    );
    assert_eq!(
        commands::parse("สลัด/ยำ"),
        Some(Command::Category("สลัด/ยำ".to_string()))
    );
}

#[test]
fn exact_commands_win_over_category_substrings() {
    // "สั่งอาหาร" contains no category phrase, but a message matching an
    // exact rule earlier in the table must never fall through to the
    // category rule.
    assert_eq!(commands::parse("เมนูแนะนำ"), Some(Command::Recommended));
}

#[test]
fn unknown_text_resolves_to_no_command() {
    assert_eq!(commands::parse("สวัสดีค่ะ"), None);
    assert_eq!(commands::parse(""), None);
}

#[test]
fn postback_data_parses_action_and_item() {
    assert_eq!(
        PostbackData::parse("action=add&item=padthai"),
        Some(PostbackData {
            action: "add".to_string(),
            item: Some("padthai".to_string()),
        })
    );
    assert_eq!(
        PostbackData::parse("action=confirm_order"),
        Some(PostbackData {
            action: "confirm_order".to_string(),
            item: None,
        })
    );
}

#[test]
fn malformed_postback_data_is_none() {
    assert_eq!(PostbackData::parse("item=padthai"), None);
    assert_eq!(PostbackData::parse("%%%"), None);
}

#[test]
fn webhook_payload_deserializes_known_and_unknown_events() {
    let raw = r#"{
        "destination": "U_bot",
        "events": [
            {
                "type": "message",
                "replyToken": "reply-1",
                "source": { "type": "user", "userId": "U_customer" },
                "message": { "type": "text", "id": "1", "text": "สั่งอาหาร" }
            },
            {
                "type": "postback",
                "replyToken": "reply-2",
                "source": { "type": "user", "userId": "U_customer" },
                "postback": { "data": "action=add&item=padthai" }
            },
            {
                "type": "follow",
                "replyToken": "reply-3",
                "source": { "type": "user", "userId": "U_customer" }
            },
            {
                "type": "unfollow",
                "source": { "type": "user", "userId": "U_customer" }
            }
        ]
    }"#;

    let payload: WebhookPayload = serde_json::from_str(raw).expect("payload");
    assert_eq!(payload.events.len(), 4);

    match &payload.events[0] {
        Event::Message {
            reply_token,
            source,
            message: MessageContent::Text { text },
        } => {
            assert_eq!(reply_token, "reply-1");
            assert_eq!(source.user_id.as_deref(), Some("U_customer"));
            assert_eq!(text, "สั่งอาหาร");
        }
        other => panic!("expected text message event, got {other:?}"),
    }
    assert!(matches!(&payload.events[1], Event::Postback { .. }));
    assert!(matches!(&payload.events[2], Event::Follow { .. }));
    assert!(matches!(&payload.events[3], Event::Unsupported));
}

#[test]
fn non_text_messages_deserialize_to_other_content() {
    let raw = r#"{
        "type": "message",
        "replyToken": "reply-1",
        "source": { "type": "user", "userId": "U_customer" },
        "message": { "type": "sticker", "id": "1", "packageId": "1", "stickerId": "2" }
    }"#;

    let event: Event = serde_json::from_str(raw).expect("event");
    assert!(matches!(
        event,
        Event::Message {
            message: MessageContent::Other,
            ..
        }
    ));
}

#[test]
fn signatures_verify_and_reject_tampering() {
    let secret = "channel-secret";
    let body = br#"{"events":[]}"#;

    let signature = signature::sign(secret, body).expect("sign");
    assert!(signature::verify(secret, &signature, body).is_ok());

    assert!(signature::verify(secret, &signature, br#"{"events":[{}]}"#).is_err());
    assert!(signature::verify("other-secret", &signature, body).is_err());
    assert!(signature::verify(secret, "not base64!!", body).is_err());
}
