//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Character creation checker
#[derive(Parser)]
#[command(name = "chargen")]
#[command(about = "Builds characters from life module content and validates them", long_about = None)]
pub struct Cli {
    /// Directory holding traits.ron, skills.ron, life_modules.toml and rules.toml
    #[arg(long, global = true, env = "CHARGEN_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a build plan and validate the resulting character
    Check {
        /// Build plan (RON); relative paths resolve against <data-dir>/builds
        #[arg(env = "CHARGEN_BUILD")]
        build: PathBuf,

        /// Skip the rules.toml rule set
        #[arg(long)]
        no_rules: bool,
    },

    /// List the loaded catalog
    Catalog,
}
