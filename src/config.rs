use crate::cli::CliArgs;
use crate::error::FolderCountError;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = "~/.config/nylas-folder-count/config.toml";
pub const DEFAULT_API_BASE: &str = "https://api.eu.nylas.com";

#[derive(Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Grant (connected mailbox) whose folders are counted
    pub grant_id: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u32,
    pub api_key: Option<String>,
    /// Shell command printing the API key on its first line
    pub api_key_command: Option<String>,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    pub max_pages: Option<usize>,
}

fn default_limit() -> u32 {
    10
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grant_id: None,
            limit: default_limit(),
            api_key: None,
            api_key_command: None,
            api_base: default_api_base(),
            max_pages: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("grant_id", &self.grant_id)
            .field("limit", &self.limit)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_key_command", &self.api_key_command)
            .field("api_base", &self.api_base)
            .field("max_pages", &self.max_pages)
            .finish()
    }
}

impl Config {
    pub fn from_toml(contents: &str) -> Result<Self, FolderCountError> {
        Ok(toml::from_str(contents)?)
    }

    /// Flags given on the command line win over the file.
    pub fn apply_args(mut self, args: &CliArgs) -> Self {
        if let Some(grant_id) = &args.grant_id {
            self.grant_id = Some(grant_id.clone());
        }
        if let Some(limit) = args.limit {
            self.limit = limit;
        }
        if let Some(api_base) = &args.api_base {
            self.api_base = api_base.clone();
        }
        if args.max_pages.is_some() {
            self.max_pages = args.max_pages;
        }
        self
    }

    /// Rejects values that can never produce a useful run.
    pub fn validate(&self) -> Result<(), FolderCountError> {
        if self.limit == 0 {
            return Err(FolderCountError::Config(
                "limit must be at least 1".to_string(),
            ));
        }
        if self.max_pages == Some(0) {
            return Err(FolderCountError::Config(
                "max_pages must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// `{api_base}/v3/grants/{grant_id}/folders?limit={limit}`, with the
    /// grant id escaped as a single path segment.
    pub fn folders_url(&self) -> Result<Url, FolderCountError> {
        self.validate()?;
        let grant_id = self
            .grant_id
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .ok_or_else(|| FolderCountError::Config("grant_id is not set".to_string()))?;
        if matches!(grant_id, "." | "..") {
            return Err(FolderCountError::Config(format!(
                "invalid grant_id {grant_id:?}"
            )));
        }

        let mut url = Url::parse(&self.api_base).map_err(|source| FolderCountError::InvalidUrl {
            url: self.api_base.clone(),
            source,
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FolderCountError::Config(format!(
                "api_base must be an http(s) URL, got {}",
                self.api_base
            )));
        }
        url.set_fragment(None);
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|()| {
                FolderCountError::Config(format!("api_base cannot be a base URL: {}", self.api_base))
            })?
            .pop_if_empty()
            .extend(["v3", "grants", grant_id, "folders"]);
        url.query_pairs_mut()
            .append_pair("limit", &self.limit.to_string());
        Ok(url)
    }
}

/// Reads the config file at `path` (tilde-expanded). A missing file at the
/// default location is not an error; everything can come from flags.
pub async fn load_config(path: Option<&str>) -> Result<Config, FolderCountError> {
    let raw = path.unwrap_or(DEFAULT_CONFIG_PATH);
    let expanded = shellexpand::tilde(raw).to_string();
    if path.is_none() && !Path::new(&expanded).exists() {
        tracing::debug!(path = %expanded, "no config file, using defaults");
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(&expanded)?;
    Config::from_toml(&contents)
}
