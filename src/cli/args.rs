use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kira-gc", version, about = "GC-content report for FASTA gene files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Run(RunArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Gene identifiers, each read from `<folder>/<GENE>.fasta`.
    /// Defaults to the built-in cancer gene set.
    pub genes: Vec<String>,

    #[arg(long, default_value = crate::core::engine::DEFAULT_FOLDER)]
    pub folder: PathBuf,
}
