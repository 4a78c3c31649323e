use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for scenetab
#[derive(Parser, Debug)]
#[command(name = "scenetab")]
#[command(about = "Flatten chest X-ray scene-graph JSON annotations into CSV tables")]
#[command(version)]
pub struct Cli {
    /// Directory containing scene-graph JSON files
    #[arg(value_name = "INPUT_DIR")]
    pub input: PathBuf,

    /// Directory to write the CSV tables into (created if missing)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output: PathBuf,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
