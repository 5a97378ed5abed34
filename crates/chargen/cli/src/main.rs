//! Character creation command-line driver.
//!
//! Loads a content directory, replays a build plan against a fresh character,
//! validates it against its life module rules plus the optional campaign rule
//! set, and prints a report. Exits non-zero when the character is invalid.
//!
//! ```bash
//! CHARGEN_DATA_DIR=./data chargen check wolf_mechwarrior.ron
//! RUST_LOG=chargen=debug chargen --data-dir ./data catalog
//! ```

mod cli;
mod report;

use std::process::ExitCode;

use anyhow::Result;
use chargen_content::ContentFactory;
use chargen_core::CharacterValidationService;
use clap::Parser;

use crate::cli::{Cli, Commands};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    setup_logging();

    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Setup logging to stderr, filtered by `RUST_LOG` (default `info`).
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Returns whether the command succeeded.
fn run(cli: Cli) -> Result<bool> {
    let factory = ContentFactory::new(cli.data_dir);
    let catalog = factory.load_catalog()?;

    match cli.command {
        Commands::Check { build, no_rules } => {
            let plan = factory.load_build_plan(&build)?;
            let rules = if no_rules {
                Vec::new()
            } else {
                factory.load_rules()?
            };

            let character = plan.apply(&catalog)?;
            for (lm, fx) in character.pending_fixed_xps() {
                tracing::warn!(life_module = lm, fixed_xp = fx, "fixed XP left unallocated");
            }

            let mut service = CharacterValidationService::new(&character).with_rules(&rules);
            let valid = service.validate();
            tracing::info!(
                plan = %plan.name,
                validators = service.len(),
                errors = service.errors().len(),
                "validation finished"
            );

            print!("{}", report::render(&plan.name, &character, service.errors())?);
            Ok(valid)
        }
        Commands::Catalog => {
            println!("Traits:");
            for t in catalog.traits() {
                println!("  {}", t.name);
            }
            println!("\nSkills:");
            for skill in catalog.skills() {
                println!("  {}", skill.name());
            }
            println!("\nLife modules:");
            for module in catalog.life_modules() {
                println!("  [{}] {}", module.stage.number(), module.name);
            }
            Ok(true)
        }
    }
}
