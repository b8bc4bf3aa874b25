use anyhow::Result;
use clap::Parser;
use javsp::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
