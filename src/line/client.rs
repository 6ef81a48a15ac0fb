use serde_json::Value;

use crate::error::AppResult;

const REPLY_ENDPOINT: &str = "https://api.line.me/v2/bot/message/reply";

/// Messaging API client used to answer inbound events.
#[derive(Debug, Clone)]
pub struct MessagingClient {
    http: reqwest::Client,
    channel_access_token: String,
    endpoint: String,
}

impl MessagingClient {
    pub fn new(http: reqwest::Client, channel_access_token: impl Into<String>) -> Self {
        Self::with_endpoint(http, channel_access_token, REPLY_ENDPOINT)
    }

    pub fn with_endpoint(
        http: reqwest::Client,
        channel_access_token: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            http,
            channel_access_token: channel_access_token.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Replies to the originating event with up to five messages.
    pub async fn reply(&self, reply_token: &str, messages: Vec<Value>) -> AppResult<()> {
        self.http
            .post(&self.endpoint)
            .bearer_auth(&self.channel_access_token)
            .json(&serde_json::json!({
                "replyToken": reply_token,
                "messages": messages,
            }))
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
