use clap::Parser;
use color_eyre::Result;
use fxnc_fetch::{artifacts, FetcherBuilder};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Download the Function core libraries into this plugin.
#[derive(Debug, Parser)]
#[command(name = "fxnc-fetch", about, disable_version_flag = true)]
struct Cli {
    /// Function core version to download, e.g. 0.0.35.
    #[arg(long)]
    version: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();
    let artifacts = artifacts(&cli.version)?;

    FetcherBuilder::new().build().fetch_all(&artifacts).await?;

    Ok(())
}
