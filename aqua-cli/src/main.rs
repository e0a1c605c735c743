//! Aqua CLI - Command line tool for the lake water quality registry.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "aqua-cli",
    version,
    about = "Lake water quality registry toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: aqua_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    aqua_cmd::run(cli.command).await
}
