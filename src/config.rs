use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub channel_access_token: String,
    pub channel_secret: String,
    pub notify_token: String,
    pub spreadsheet_id: String,
    pub service_account_file: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let channel_access_token = env::var("CHANNEL_ACCESS_TOKEN")?;
        let channel_secret = env::var("CHANNEL_SECRET")?;
        let notify_token = env::var("LINE_NOTIFY_TOKEN")?;
        let spreadsheet_id = env::var("SPREADSHEET_ID")?;
        let service_account_file = env::var("SERVICE_ACCOUNT_FILE")
            .unwrap_or_else(|_| "./service-account.json".to_string());
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        Ok(Self {
            channel_access_token,
            channel_secret,
            notify_token,
            spreadsheet_id,
            service_account_file,
            host,
            port,
        })
    }
}
