use std::io::Write;

use url::Url;

use crate::client::NylasClient;
use crate::error::FolderCountError;

pub const PAGE_TOKEN_PARAM: &str = "page_token";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WalkSummary {
    pub pages: usize,
    pub total: usize,
}

/// Follows `next_cursor` from the first page until the server stops
/// sending one, counting the items in every page's `data`.
pub struct PaginationWalker<'a> {
    client: &'a NylasClient,
    base_url: Url,
    max_pages: Option<usize>,
}

impl<'a> PaginationWalker<'a> {
    pub fn new(client: &'a NylasClient, base_url: Url) -> Self {
        Self {
            client,
            base_url,
            max_pages: None,
        }
    }

    pub fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Next-page URL: always the original URL plus the token, never the
    /// previous page's URL.
    pub fn page_url(&self, cursor: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair(PAGE_TOKEN_PARAM, cursor);
        url
    }

    pub async fn run<W: Write>(&self, out: &mut W) -> Result<WalkSummary, FolderCountError> {
        let mut summary = WalkSummary::default();
        let mut current = Some(self.base_url.clone());

        while let Some(url) = current.take() {
            if let Some(max) = self.max_pages {
                if summary.pages >= max {
                    return Err(FolderCountError::PageLimit(max));
                }
            }

            tracing::debug!(%url, page = summary.pages + 1, "fetching page");
            let page = self.client.fetch_page(&url).await?;
            let items = page.data.ok_or(FolderCountError::MissingData)?.len();

            summary.pages += 1;
            summary.total += items;
            writeln!(out, "Object returned: {items}")?;

            current = match page.next_cursor.as_deref() {
                Some(cursor) if !cursor.is_empty() => Some(self.page_url(cursor)),
                Some(_) => {
                    tracing::debug!("empty next_cursor, treating as last page");
                    None
                }
                None => None,
            };
        }

        writeln!(out, "Total folders: {}", summary.total)?;
        tracing::info!(pages = summary.pages, total = summary.total, "pagination finished");
        Ok(summary)
    }
}
