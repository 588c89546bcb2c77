use clap::Parser;
use nylas_folder_count::cli::CliArgs;
use nylas_folder_count::run;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let args = CliArgs::parse();
    run(args).await?;
    Ok(())
}
