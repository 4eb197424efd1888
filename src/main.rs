use anyhow::Result;
use clap::Parser;
use librio::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
