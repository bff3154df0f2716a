//! reflow: rebuild logical paragraphs from PDF-extracted text

use clap::Parser;
use reflow_cli::{logging, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);
    cli.run()
}
