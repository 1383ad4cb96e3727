use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "mekgen")]
#[command(about = "Generates a MekScript project skeleton from a JSON configuration")]
pub struct CliArgs {
    /// Path to the JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
