use std::sync::Arc;
use std::time::Duration;

use crate::{
    cart::{CartStore, MemoryCartStore},
    config::AppConfig,
    line::client::MessagingClient,
    notify::NotifyClient,
    sheets::{ServiceAccountKey, SheetsClient},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub carts: Arc<dyn CartStore>,
    pub line: MessagingClient,
    pub notify: NotifyClient,
    pub sheets: SheetsClient,
}

impl AppState {
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        let key = ServiceAccountKey::from_file(&config.service_account_file)?;

        Ok(Self {
            line: MessagingClient::new(http.clone(), config.channel_access_token.as_str()),
            notify: NotifyClient::new(http.clone(), config.notify_token.as_str()),
            sheets: SheetsClient::new(http, key, config.spreadsheet_id.as_str()),
            carts: Arc::new(MemoryCartStore::default()),
            config: Arc::new(config),
        })
    }
}
