use clap::Parser;
use eyre::Result;

use ibpi_scorer::cli::Cli;
use ibpi_scorer::{commands, logging};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = tracing::subscriber::with_default(
        logging::bootstrap_subscriber(std::io::stderr),
        || commands::load_config_for(&cli),
    )?;
    logging::init(&config.log_level, cli.log_json)?;

    commands::run(cli, config)
}
