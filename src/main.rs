use anyhow::Result;
use clap::Parser;
use meteogram_tui::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    meteogram_tui::run(cli).await
}
