//! Flex-message builders. Pure view formatting: every function renders
//! already-derived state into the platform's message JSON.

use serde_json::{Value, json};

use crate::models::{MenuItem, OrderLine};

const ACCENT: &str = "#FF6B6B";
const ACCENT_ALT: &str = "#4ECDC4";

/// Plain one-line text reply.
pub fn text_message(text: impl Into<String>) -> Value {
    json!({ "type": "text", "text": text.into() })
}

fn message_button(label: &str, text: &str, style: &str, color: Option<&str>) -> Value {
    let mut action = json!({
        "type": "button",
        "action": { "type": "message", "label": label, "text": text },
        "style": style,
    });
    if let Some(color) = color {
        action["color"] = json!(color);
    }
    action
}

fn postback_button(label: &str, data: &str, style: &str, color: Option<&str>) -> Value {
    let mut action = json!({
        "type": "button",
        "action": { "type": "postback", "label": label, "data": data },
        "style": style,
        "height": "sm",
    });
    if let Some(color) = color {
        action["color"] = json!(color);
    }
    action
}

/// Welcome bubble sent on follow.
pub fn welcome() -> Value {
    json!({
        "type": "flex",
        "altText": "ยินดีต้อนรับสู่ร้านอาหารของเรา!",
        "contents": {
            "type": "bubble",
            "size": "mega",
            "hero": {
                "type": "image",
                "url": "https://via.placeholder.com/800x400/FFE5E5/FF6B6B?text=Welcome",
                "size": "full",
                "aspectMode": "cover",
                "aspectRatio": "2:1",
            },
            "body": {
                "type": "box",
                "layout": "vertical",
                "contents": [
                    { "type": "text", "text": "🍜 ยินดีต้อนรับ", "size": "xl", "weight": "bold", "color": ACCENT },
                    { "type": "text", "text": "ร้านอาหารน่ารัก", "size": "xxl", "weight": "bold", "margin": "sm" },
                    { "type": "text", "text": "พร้อมเสิร์ฟความอร่อยทุกวัน", "size": "md", "color": "#666666", "margin": "lg", "wrap": true },
                    { "type": "text", "text": "เปิดทุกวัน 10.00 - 20.00 น.", "size": "sm", "color": "#999999", "margin": "sm" },
                    { "type": "separator", "margin": "xl" },
                    { "type": "text", "text": "✨ เริ่มต้นสั่งอาหารได้เลย!", "size": "md", "color": ACCENT, "weight": "bold", "align": "center", "margin": "xl" },
                ],
            },
            "footer": {
                "type": "box",
                "layout": "vertical",
                "contents": [
                    message_button("🍱 สั่งอาหาร", "สั่งอาหาร", "primary", Some(ACCENT)),
                    message_button("🎉 ดูโปรโมชั่น", "โปรโมชั่น", "secondary", None),
                ],
                "spacing": "sm",
            },
        },
    })
}

/// Category picker: six categories in a two-column grid, view-cart footer.
pub fn categories() -> Value {
    const CATEGORIES: [(&str, &str); 6] = [
        ("🍜", "อาหารจานเดียว"),
        ("🥘", "กับข้าว"),
        ("🥗", "สลัด/ยำ"),
        ("🍲", "ต้ม/แกง"),
        ("🥤", "เครื่องดื่ม"),
        ("🍰", "ของหวาน"),
    ];

    let rows: Vec<Value> = CATEGORIES
        .chunks(2)
        .map(|pair| {
            let cells: Vec<Value> = pair
                .iter()
                .map(|(emoji, label)| {
                    json!({
                        "type": "box",
                        "layout": "vertical",
                        "contents": [
                            {
                                "type": "button",
                                "action": { "type": "message", "label": emoji, "text": label },
                                "style": "secondary",
                                "height": "80px",
                            },
                            { "type": "text", "text": label, "size": "sm", "color": "#666666", "align": "center", "margin": "sm" },
                        ],
                        "flex": 1,
                        "margin": "sm",
                    })
                })
                .collect();
            json!({ "type": "box", "layout": "horizontal", "contents": cells, "spacing": "md", "margin": "lg" })
        })
        .collect();

    json!({
        "type": "flex",
        "altText": "เลือกหมวดหมู่อาหาร",
        "contents": {
            "type": "bubble",
            "size": "mega",
            "header": {
                "type": "box",
                "layout": "vertical",
                "contents": [
                    { "type": "text", "text": "🍽️ เลือกหมวดหมู่", "size": "xl", "weight": "bold", "color": "#333333", "align": "center" },
                ],
                "backgroundColor": "#F5F5F5",
                "paddingAll": "20px",
            },
            "body": { "type": "box", "layout": "vertical", "contents": rows, "paddingAll": "10px" },
            "footer": {
                "type": "box",
                "layout": "vertical",
                "contents": [message_button("🛒 ดูตะกร้า", "ดูตะกร้า", "primary", Some(ACCENT))],
            },
        },
    })
}

/// Static promotions carousel.
pub fn promotions() -> Value {
    json!({
        "type": "flex",
        "altText": "โปรโมชั่นพิเศษ",
        "contents": {
            "type": "carousel",
            "contents": [
                {
                    "type": "bubble",
                    "size": "kilo",
                    "hero": {
                        "type": "image",
                        "url": "https://via.placeholder.com/400x200/FFE5E5/FF6B6B?text=Buy+1+Get+1",
                        "size": "full",
                        "aspectMode": "cover",
                        "aspectRatio": "2:1",
                    },
                    "body": {
                        "type": "box",
                        "layout": "vertical",
                        "contents": [
                            { "type": "text", "text": "🎉 ซื้อ 1 แถม 1", "size": "xl", "weight": "bold", "color": ACCENT },
                            { "type": "text", "text": "ผัดไทย ซื้อ 1 แถม 1", "size": "md", "margin": "sm", "wrap": true },
                            {
                                "type": "box",
                                "layout": "horizontal",
                                "contents": [
                                    { "type": "text", "text": "ปกติ ฿120", "size": "sm", "color": "#999999", "decoration": "line-through" },
                                    { "type": "text", "text": "฿60", "size": "xl", "color": ACCENT, "weight": "bold", "margin": "md" },
                                ],
                                "margin": "md",
                            },
                            { "type": "text", "text": "⏰ วันนี้เท่านั้น!", "size": "sm", "color": "#666666", "margin": "md" },
                        ],
                    },
                    "footer": {
                        "type": "box",
                        "layout": "vertical",
                        "contents": [message_button("สั่งเลย!", "สั่งอาหาร", "primary", Some(ACCENT))],
                    },
                },
                {
                    "type": "bubble",
                    "size": "kilo",
                    "hero": {
                        "type": "image",
                        "url": "https://via.placeholder.com/400x200/E5F3FF/4ECDC4?text=20%25+OFF",
                        "size": "full",
                        "aspectMode": "cover",
                        "aspectRatio": "2:1",
                    },
                    "body": {
                        "type": "box",
                        "layout": "vertical",
                        "contents": [
                            { "type": "text", "text": "💙 ลด 20%", "size": "xl", "weight": "bold", "color": ACCENT_ALT },
                            { "type": "text", "text": "เมนูต้มยำ ทุกชนิด", "size": "md", "margin": "sm", "wrap": true },
                            { "type": "text", "text": "เมื่อสั่ง 2 ที่ขึ้นไป", "size": "sm", "color": "#666666", "margin": "sm" },
                            { "type": "text", "text": "📅 1-7 กรกฎาคม 2568", "size": "sm", "color": "#666666", "margin": "md" },
                        ],
                    },
                    "footer": {
                        "type": "box",
                        "layout": "vertical",
                        "contents": [message_button("สั่งเลย!", "สั่งอาหาร", "primary", Some(ACCENT_ALT))],
                    },
                },
            ],
        },
    })
}

/// Recommended-menu carousel with direct add-to-cart postbacks.
pub fn recommended() -> Value {
    let picks = [
        ("⭐ ผัดไทยกุ้งสด", "Best Seller!", 60, "padthai", ACCENT, "https://via.placeholder.com/300x200/FFE5CC/FF6B6B?text=Best+Seller"),
        ("👨\u{200d}🍳 ต้มยำกุ้งน้ำข้น", "Chef's Pick!", 120, "tomyum", ACCENT_ALT, "https://via.placeholder.com/300x200/E5F3FF/4ECDC4?text=Chef+Pick"),
    ];

    let bubbles: Vec<Value> = picks
        .iter()
        .map(|&(title, tagline, price, item_id, color, image)| {
            json!({
                "type": "bubble",
                "size": "micro",
                "hero": {
                    "type": "image",
                    "url": image,
                    "size": "full",
                    "aspectMode": "cover",
                    "aspectRatio": "3:2",
                },
                "body": {
                    "type": "box",
                    "layout": "vertical",
                    "contents": [
                        { "type": "text", "text": title, "weight": "bold", "size": "md", "wrap": true },
                        { "type": "text", "text": tagline, "size": "xs", "color": color, "margin": "xs" },
                        { "type": "text", "text": format!("฿{price}"), "size": "lg", "color": color, "weight": "bold", "margin": "sm" },
                    ],
                },
                "footer": {
                    "type": "box",
                    "layout": "vertical",
                    "contents": [postback_button("สั่งเลย", &format!("action=add&item={item_id}"), "primary", Some(color))],
                },
            })
        })
        .collect();

    json!({
        "type": "flex",
        "altText": "เมนูแนะนำ",
        "contents": { "type": "carousel", "contents": bubbles },
    })
}

/// Menu carousel for one category; empty input renders a "no items" text.
pub fn menu_carousel(items: &[MenuItem]) -> Value {
    if items.is_empty() {
        return text_message("ขออภัยค่ะ ยังไม่มีเมนูในหมวดนี้");
    }

    let bubbles: Vec<Value> = items
        .iter()
        .map(|item| {
            let image = if item.image_url.is_empty() {
                format!(
                    "https://via.placeholder.com/300x200/FFE5CC/FF6B6B?text={}",
                    urlencode(&item.name)
                )
            } else {
                item.image_url.clone()
            };
            json!({
                "type": "bubble",
                "size": "micro",
                "hero": {
                    "type": "image",
                    "url": image,
                    "size": "full",
                    "aspectMode": "cover",
                    "aspectRatio": "3:2",
                },
                "body": {
                    "type": "box",
                    "layout": "vertical",
                    "contents": [
                        { "type": "text", "text": item.name, "weight": "bold", "size": "md", "wrap": true },
                        { "type": "text", "text": format!("฿{}", item.price), "size": "lg", "color": ACCENT, "weight": "bold", "margin": "sm" },
                    ],
                },
                "footer": {
                    "type": "box",
                    "layout": "vertical",
                    "contents": [{
                        "type": "box",
                        "layout": "horizontal",
                        "contents": [
                            postback_button("➖", &format!("action=remove&item={}", item.id), "secondary", None),
                            { "type": "text", "text": "0", "align": "center", "gravity": "center", "flex": 1 },
                            postback_button("➕", &format!("action=add&item={}", item.id), "secondary", None),
                        ],
                        "spacing": "xs",
                    }],
                },
            })
        })
        .collect();

    json!({
        "type": "flex",
        "altText": "เมนูอาหาร",
        "contents": { "type": "carousel", "contents": bubbles },
    })
}

/// Cart bubble: one row per line with +/- steppers, grand total, confirm
/// footer. An empty cart renders a text prompt instead.
pub fn cart_view(lines: &[OrderLine], total: i64) -> Value {
    if lines.is_empty() {
        return text_message("ตะกร้าของคุณยังว่างเปล่าค่ะ 🛒\nกรุณาเลือกเมนูก่อนนะคะ");
    }

    let mut rows: Vec<Value> = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            rows.push(json!({ "type": "separator", "margin": "md" }));
        }
        rows.push(json!({
            "type": "box",
            "layout": "horizontal",
            "contents": [
                {
                    "type": "box",
                    "layout": "vertical",
                    "contents": [
                        { "type": "text", "text": line.name, "size": "md", "weight": "bold" },
                        { "type": "text", "text": format!("฿{}", line.unit_price), "size": "sm", "color": "#666666" },
                    ],
                    "flex": 3,
                },
                {
                    "type": "box",
                    "layout": "horizontal",
                    "contents": [
                        postback_button("-", &format!("action=decrease&item={}", line.item_id), "secondary", None),
                        { "type": "text", "text": line.quantity.to_string(), "align": "center", "gravity": "center", "size": "md", "margin": "sm" },
                        postback_button("+", &format!("action=increase&item={}", line.item_id), "secondary", None),
                    ],
                    "flex": 2,
                    "spacing": "xs",
                    "alignItems": "center",
                },
                { "type": "text", "text": format!("฿{}", line.line_total()), "size": "md", "weight": "bold", "color": ACCENT, "align": "end", "gravity": "center", "flex": 1 },
            ],
            "spacing": "md",
            "paddingAll": "10px",
        }));
    }

    rows.push(json!({ "type": "separator", "margin": "lg" }));
    rows.push(json!({
        "type": "box",
        "layout": "horizontal",
        "contents": [
            { "type": "text", "text": "ยอดรวม", "size": "lg", "weight": "bold", "flex": 1 },
            { "type": "text", "text": format!("฿{total}"), "size": "xl", "weight": "bold", "color": ACCENT, "align": "end" },
        ],
        "margin": "lg",
    }));

    json!({
        "type": "flex",
        "altText": "ตะกร้าสินค้า",
        "contents": {
            "type": "bubble",
            "size": "mega",
            "header": {
                "type": "box",
                "layout": "vertical",
                "contents": [
                    { "type": "text", "text": "🛒 ตะกร้าของคุณ", "size": "xl", "weight": "bold", "color": "#333333" },
                ],
                "backgroundColor": "#F5F5F5",
                "paddingAll": "20px",
            },
            "body": { "type": "box", "layout": "vertical", "contents": rows },
            "footer": {
                "type": "box",
                "layout": "vertical",
                "contents": [
                    {
                        "type": "button",
                        "action": { "type": "postback", "label": "✅ ยืนยันคำสั่งซื้อ", "data": "action=confirm_order" },
                        "style": "primary",
                        "color": ACCENT,
                        "height": "md",
                    },
                    message_button("🍽️ เพิ่มเมนูอื่น", "สั่งอาหาร", "secondary", None),
                ],
                "spacing": "sm",
            },
        },
    })
}

/// Receipt bubble with an order-id QR code, itemized lines, and a payment
/// link.
pub fn bill(lines: &[OrderLine], total: i64, order_id: &str, timestamp: &str) -> Value {
    let item_rows: Vec<Value> = lines
        .iter()
        .map(|line| {
            json!({
                "type": "box",
                "layout": "horizontal",
                "contents": [
                    { "type": "text", "text": format!("{} x{}", line.name, line.quantity), "size": "sm", "flex": 3 },
                    { "type": "text", "text": format!("฿{}", line.line_total()), "size": "sm", "align": "end", "flex": 1 },
                ],
                "margin": "sm",
            })
        })
        .collect();

    let mut body: Vec<Value> = vec![
        json!({
            "type": "box",
            "layout": "horizontal",
            "contents": [
                { "type": "text", "text": "เลขที่บิล:", "size": "sm", "color": "#666666", "flex": 2 },
                { "type": "text", "text": order_id, "size": "sm", "align": "end", "flex": 3 },
            ],
        }),
        json!({
            "type": "box",
            "layout": "horizontal",
            "contents": [
                { "type": "text", "text": "วันที่:", "size": "sm", "color": "#666666", "flex": 2 },
                { "type": "text", "text": timestamp, "size": "sm", "align": "end", "flex": 3 },
            ],
            "margin": "sm",
        }),
        json!({ "type": "separator", "margin": "lg" }),
        json!({ "type": "text", "text": "รายการอาหาร", "size": "md", "weight": "bold", "margin": "lg" }),
    ];
    body.extend(item_rows);
    body.push(json!({ "type": "separator", "margin": "lg" }));
    body.push(json!({
        "type": "box",
        "layout": "horizontal",
        "contents": [
            { "type": "text", "text": "ยอดรวม", "size": "lg", "weight": "bold", "flex": 1 },
            { "type": "text", "text": format!("฿{total}"), "size": "xl", "weight": "bold", "color": ACCENT, "align": "end" },
        ],
        "margin": "lg",
    }));
    body.push(json!({
        "type": "text", "text": "🙏 ขอบคุณที่ใช้บริการ", "size": "sm", "color": "#666666", "align": "center", "margin": "xl",
    }));

    json!({
        "type": "flex",
        "altText": "บิลค่าอาหาร",
        "contents": {
            "type": "bubble",
            "size": "mega",
            "header": {
                "type": "box",
                "layout": "vertical",
                "contents": [
                    {
                        "type": "image",
                        "url": format!("https://api.qrserver.com/v1/create-qr-code/?size=200x200&data={}", urlencode(order_id)),
                        "size": "150px",
                        "align": "center",
                    },
                    { "type": "text", "text": "ร้านอาหารน่ารัก", "size": "xl", "weight": "bold", "align": "center", "margin": "md" },
                    { "type": "text", "text": "ใบเสร็จรับเงิน", "size": "md", "color": "#666666", "align": "center" },
                ],
                "backgroundColor": "#F5F5F5",
                "paddingAll": "20px",
            },
            "body": { "type": "box", "layout": "vertical", "contents": body, "paddingAll": "20px" },
            "footer": {
                "type": "box",
                "layout": "vertical",
                "contents": [{
                    "type": "button",
                    "action": { "type": "uri", "label": "💳 ชำระเงิน", "uri": format!("https://payment.example.com/{order_id}") },
                    "style": "primary",
                    "color": ACCENT,
                }],
            },
        },
    })
}

fn urlencode(value: &str) -> String {
    serde_urlencoded::to_string([("q", value)])
        .map(|encoded| encoded.trim_start_matches("q=").to_string())
        .unwrap_or_default()
}
