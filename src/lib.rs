pub mod auth;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod walker;

use crate::cli::CliArgs;
use crate::client::NylasClient;
use crate::walker::{PaginationWalker, WalkSummary};

pub async fn run(args: CliArgs) -> anyhow::Result<WalkSummary> {
    let config = config::load_config(args.config.as_deref())
        .await?
        .apply_args(&args);
    let base_url = config.folders_url()?;
    let api_key = auth::resolve_api_key(&config).await?;
    let client = NylasClient::new(api_key);

    let walker = PaginationWalker::new(&client, base_url).with_max_pages(config.max_pages);
    let mut stdout = std::io::stdout().lock();
    Ok(walker.run(&mut stdout).await?)
}
