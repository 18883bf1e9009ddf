//! riego-cli - Command line client for the irrigation water requirement simulator.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "riego-cli",
    version,
    about = "Irrigation water requirement simulator"
)]
struct Cli {
    #[command(subcommand)]
    command: riego_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    riego_cmd::run(cli.command).await
}
