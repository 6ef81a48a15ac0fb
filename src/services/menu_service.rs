use crate::{models::MenuItem, state::AppState};

/// Items of one category, filtered to available rows. The category label is
/// matched case-sensitively against the sheet. A fetch failure degrades to
/// an empty list; the user sees "no items", never an error.
pub async fn menu_by_category(state: &AppState, category: &str) -> Vec<MenuItem> {
    match state.sheets.menu_rows().await {
        Ok(rows) => rows
            .into_iter()
            .filter(|item| item.category == category && item.available)
            .collect(),
        Err(err) => {
            tracing::warn!(error = %err, category, "menu fetch failed");
            Vec::new()
        }
    }
}

/// Unit price for the postback add path. Unknown ids price at 0; postbacks
/// only ever carry ids from menus the bot itself rendered.
pub fn item_price(item_id: &str) -> i64 {
    match item_id {
        "padthai" => 60,
        "tomyum" => 120,
        "greencurry" => 80,
        "somtam" => 50,
        "friedrice" => 60,
        "papayasalad" => 45,
        "icedtea" => 25,
        "mangorice" => 60,
        _ => 0,
    }
}

/// Display name for a cart item id; falls back to the id itself.
pub fn item_name(item_id: &str) -> String {
    match item_id {
        "padthai" => "ผัดไทย",
        "tomyum" => "ต้มยำกุ้ง",
        "greencurry" => "แกงเขียวหวาน",
        "somtam" => "ส้มตำ",
        "friedrice" => "ข้าวผัด",
        "papayasalad" => "ยำมะระวงใส",
        "icedtea" => "ชาเย็น",
        "mangorice" => "ข้าวเหนียวมะม่วง",
        other => other,
    }
    .to_string()
}
