//! TSA CLI - Command line tool for exploring the airline tweet sentiment dataset.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "tsa-cli",
    version,
    about = "Airline tweet sentiment toolkit"
)]
struct Cli {
    #[command(flatten)]
    options: tsa_cmd::GlobalOptions,

    #[command(subcommand)]
    command: tsa_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("input: {}", cli.options.input);
    tsa_cmd::run(cli.options, cli.command).await
}
