use serde::Deserialize;

/// Webhook request body: a batch of events for one bot destination.
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub events: Vec<Event>,
}

/// Inbound platform event. Kinds the bot does not handle deserialize into
/// `Unsupported` and resolve to a no-op.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Event {
    #[serde(rename_all = "camelCase")]
    Message {
        reply_token: String,
        source: EventSource,
        message: MessageContent,
    },
    #[serde(rename_all = "camelCase")]
    Postback {
        reply_token: String,
        source: EventSource,
        postback: Postback,
    },
    #[serde(rename_all = "camelCase")]
    Follow {
        reply_token: String,
        source: EventSource,
    },
    #[serde(other)]
    Unsupported,
}

/// Event origin. `user_id` can be absent for group or room sources.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSource {
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Message payload; only text messages are routed, the rest are ignored.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MessageContent {
    Text { text: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub struct Postback {
    pub data: String,
}

/// Structured payload of a button tap, carried URL-encoded in
/// `Postback::data` as `action=<verb>&item=<id>`.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct PostbackData {
    pub action: String,
    #[serde(default)]
    pub item: Option<String>,
}

impl PostbackData {
    /// Returns `None` on malformed data; unknown postbacks are a no-op, not
    /// an error.
    pub fn parse(raw: &str) -> Option<Self> {
        serde_urlencoded::from_str(raw).ok()
    }
}
