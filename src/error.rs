use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolderCountError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Nylas query failed: {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response has no `data` array")]
    MissingData,

    #[error("Gave up after {0} pages, server kept returning next_cursor")]
    PageLimit(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
