//! GDP CLI - Command line tool for Trading Economics GDP series.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gdp-cli",
    version,
    about = "Historical GDP query and charting toolkit"
)]
struct Cli {
    #[command(flatten)]
    source: gdp_cmd::SourceArgs,

    #[command(subcommand)]
    command: gdp_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    gdp_cmd::run(cli.source, cli.command).await
}
