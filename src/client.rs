use crate::error::FolderCountError;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

/// One page of a Nylas v3 list response.
#[derive(Debug, Deserialize)]
pub struct FolderPage {
    pub data: Option<Vec<Value>>,
    pub next_cursor: Option<String>,
}

pub struct NylasClient {
    pub client: Client,
    pub api_key: String,
}

impl NylasClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    pub fn get(&self, url: &Url) -> reqwest::RequestBuilder {
        self.client
            .get(url.clone())
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
    }

    pub async fn fetch_page(&self, url: &Url) -> Result<FolderPage, FolderCountError> {
        let resp = self.get(url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(FolderCountError::Status { status, body });
        }
        Ok(serde_json::from_str(&body)?)
    }
}
