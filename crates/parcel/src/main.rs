//! Parcel - Entry Point

use clap::Parser;
use parcel::cli::{run, Cli};
use parcel::infrastructure::{init_app, logging::init_logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    init_logging(&config.logging)?;

    let context = init_app(config)?;
    run(&cli.command, &context, &mut std::io::stdout().lock())
}
