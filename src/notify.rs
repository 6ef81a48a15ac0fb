use crate::error::AppResult;

const NOTIFY_ENDPOINT: &str = "https://notify-api.line.me/api/notify";

/// LINE Notify channel used to reach the kitchen staff. Callers treat sends
/// as best-effort and wrap them in `effects::best_effort`.
#[derive(Debug, Clone)]
pub struct NotifyClient {
    http: reqwest::Client,
    token: String,
    endpoint: String,
}

impl NotifyClient {
    pub fn new(http: reqwest::Client, token: impl Into<String>) -> Self {
        Self::with_endpoint(http, token, NOTIFY_ENDPOINT)
    }

    pub fn with_endpoint(
        http: reqwest::Client,
        token: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            http,
            token: token.into(),
            endpoint: endpoint.into(),
        }
    }

    pub async fn send(&self, message: &str) -> AppResult<()> {
        self.http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .form(&[("message", message)])
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
