//! hydro-cli - inspect time series and river profiles from the command line.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "hydro-cli",
    version,
    about = "Hydrological chart data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: hydro_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("starting hydro-cli");
    hydro_cmd::run(cli.command)
}
