use clap::Parser;
use region_explorer::cli::{run, Cli};
use region_explorer::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
