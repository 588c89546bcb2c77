use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[clap(
    name = "nylas-folder-count",
    about = "Count the folders of a Nylas grant across all result pages"
)]
pub struct CliArgs {
    /// Path to the TOML config file
    #[arg(long)]
    pub config: Option<String>,

    /// Grant identifier of the mailbox (overrides config)
    #[arg(long)]
    pub grant_id: Option<String>,

    /// Page size sent as `limit`
    #[arg(long)]
    pub limit: Option<u32>,

    #[arg(long)]
    pub api_base: Option<String>,

    /// Stop with an error after this many pages
    #[arg(long)]
    pub max_pages: Option<usize>,
}
