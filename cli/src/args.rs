use clap::Parser;

#[derive(Parser)]
#[command(name = "montgen")]
#[command(about = "BN254 Fr Montgomery constant generator", long_about = None)]
pub struct Cli {
    /// Source file containing the U256::from_limbs constant literals
    #[arg(default_value = "src/poseidon/constants.rs")]
    pub path: String,
    /// Write the generated declarations to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}
