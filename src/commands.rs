/// A recognized text command from the chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Order,
    Promotions,
    Recommended,
    ContactStaff,
    ViewCart,
    ViewBill,
    /// Free-text category lookup. Carries the full lowercased message text:
    /// category buttons send labels such as "ต้ม/แกง" that must match the
    /// menu sheet rows verbatim.
    Category(String),
}

#[derive(Debug, Clone, Copy)]
enum Pattern {
    /// Whole message equals one of the phrases.
    Exact(&'static [&'static str]),
    /// Message contains one of the phrases.
    Contains(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy)]
enum Target {
    Order,
    Promotions,
    Recommended,
    ContactStaff,
    ViewCart,
    ViewBill,
    Category,
}

/// Routing table, evaluated top to bottom; the first matching rule wins.
const RULES: &[(Pattern, Target)] = &[
    (Pattern::Exact(&["สั่งอาหาร", "order"]), Target::Order),
    (Pattern::Exact(&["โปรโมชั่น", "โปร"]), Target::Promotions),
    (Pattern::Exact(&["เมนูแนะนำ"]), Target::Recommended),
    (Pattern::Exact(&["ติดต่อ", "help"]), Target::ContactStaff),
    (Pattern::Exact(&["ดูตะกร้า", "cart"]), Target::ViewCart),
    (Pattern::Exact(&["เช็คบิล", "บิล"]), Target::ViewBill),
    (
        Pattern::Contains(&[
            "อาหารจานเดียว",
            "กับข้าว",
            "สลัด",
            "ต้ม",
            "เครื่องดื่ม",
            "ของหวาน",
        ]),
        Target::Category,
    ),
];

impl Pattern {
    fn matches(&self, text: &str) -> bool {
        match self {
            Pattern::Exact(phrases) => phrases.iter().any(|phrase| text == *phrase),
            Pattern::Contains(phrases) => phrases.iter().any(|phrase| text.contains(phrase)),
        }
    }
}

/// Parses free text into a command. Matching is case-insensitive on the
/// trimmed message; unknown text is no command, not an error.
pub fn parse(input: &str) -> Option<Command> {
    let text = input.trim().to_lowercase();

    RULES
        .iter()
        .find(|(pattern, _)| pattern.matches(&text))
        .map(|(_, target)| match target {
            Target::Order => Command::Order,
            Target::Promotions => Command::Promotions,
            Target::Recommended => Command::Recommended,
            Target::ContactStaff => Command::ContactStaff,
            Target::ViewCart => Command::ViewCart,
            Target::ViewBill => Command::ViewBill,
            Target::Category => Command::Category(text.clone()),
        })
}
