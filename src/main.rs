use anyhow::Result;
use clap::Parser;
use weather_canvas::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    weather_canvas::run(cli).await
}
