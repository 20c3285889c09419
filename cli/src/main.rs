use anyhow::{Context, Result};
use clap::Parser;

use cli::args::Cli;
use cli::generate;

fn main() -> Result<()> {
    let args = Cli::parse();

    let (rendered, found) = generate(&args.path)?;
    eprintln!("Found {} U256::from_limbs entries in {}", found, args.path);

    match &args.output {
        Some(out_path) => {
            std::fs::write(out_path, &rendered).context("Failed to write output file")?;
            println!("Saved constants to {}", out_path);
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
