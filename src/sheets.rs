use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::{
    error::AppResult,
    models::{MenuItem, OrderRow},
};

const SHEETS_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const MENU_RANGE: &str = "Menu!A2:H";
const ORDERS_RANGE: &str = "Orders!A:G";

/// Google service-account credentials, the subset of the key file the
/// client needs.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    pub token_uri: String,
}

impl ServiceAccountKey {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: DateTime<Utc>,
}

/// Value range payload of the spreadsheet `values` endpoints.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Tabular store backing the menu and the order log. Every read re-fetches;
/// the only cached state is the OAuth2 access token.
#[derive(Clone)]
pub struct SheetsClient {
    http: reqwest::Client,
    key: Arc<ServiceAccountKey>,
    spreadsheet_id: String,
    base_url: String,
    token: Arc<Mutex<Option<CachedToken>>>,
}

impl SheetsClient {
    pub fn new(
        http: reqwest::Client,
        key: ServiceAccountKey,
        spreadsheet_id: impl Into<String>,
    ) -> Self {
        Self::with_base_url(http, key, spreadsheet_id, SHEETS_BASE)
    }

    pub fn with_base_url(
        http: reqwest::Client,
        key: ServiceAccountKey,
        spreadsheet_id: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            key: Arc::new(key),
            spreadsheet_id: spreadsheet_id.into(),
            base_url: base_url.into(),
            token: Arc::new(Mutex::new(None)),
        }
    }

    /// All parsed menu rows; availability filtering is left to the caller.
    pub async fn menu_rows(&self) -> AppResult<Vec<MenuItem>> {
        let token = self.access_token().await?;
        let url = format!(
            "{}/{}/values/{}",
            self.base_url, self.spreadsheet_id, MENU_RANGE
        );
        let range: ValueRange = self
            .http
            .get(&url)
            .bearer_auth(&token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(range.values.into_iter().filter_map(menu_item_from_row).collect())
    }

    /// Appends one order row to the `Orders` sheet.
    pub async fn append_order(&self, order: &OrderRow) -> AppResult<()> {
        let token = self.access_token().await?;
        let url = format!(
            "{}/{}/values/{}:append",
            self.base_url, self.spreadsheet_id, ORDERS_RANGE
        );
        self.http
            .post(&url)
            .bearer_auth(&token)
            .query(&[("valueInputOption", "USER_ENTERED")])
            .json(&serde_json::json!({
                "values": [[
                    order.timestamp,
                    order.user_id,
                    order.item_summary,
                    order.total,
                    order.status,
                    order.payment_status,
                    order.order_id,
                ]]
            }))
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    /// Exchanges a signed service-account assertion for an access token,
    /// reusing the cached token until shortly before it expires.
    async fn access_token(&self) -> AppResult<String> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if token.expires_at > Utc::now() {
                return Ok(token.value.clone());
            }
        }

        let now = Utc::now();
        let claims = AssertionClaims {
            iss: &self.key.client_email,
            scope: SHEETS_SCOPE,
            aud: &self.key.token_uri,
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
        };
        let assertion = encode(
            &Header::new(Algorithm::RS256),
            &claims,
            &EncodingKey::from_rsa_pem(self.key.private_key.as_bytes())?,
        )?;

        let response: TokenResponse = self
            .http
            .post(&self.key.token_uri)
            .form(&[
                ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        // Refresh a minute before the token actually expires.
        let expires_at = now + Duration::seconds(response.expires_in.max(60) - 60);
        *cached = Some(CachedToken {
            value: response.access_token.clone(),
            expires_at,
        });

        Ok(response.access_token)
    }
}

/// Menu sheet columns: `[id, name, category, price, imageUrl, _, available,
/// description]`. Rows missing required cells or with an unparsable price
/// are skipped.
fn menu_item_from_row(row: Vec<String>) -> Option<MenuItem> {
    Some(MenuItem {
        id: row.first()?.clone(),
        name: row.get(1)?.clone(),
        category: row.get(2)?.clone(),
        price: row.get(3)?.parse().ok()?,
        image_url: row.get(4).cloned().unwrap_or_default(),
        available: row.get(6).is_some_and(|cell| cell == "TRUE"),
        description: row.get(7).cloned().unwrap_or_default(),
    })
}
