//! Data-driven character creation content and loaders.
//!
//! This crate houses the definitions a character is built from and provides
//! loaders for the RON/TOML files that describe them:
//! - Trait definitions (RON)
//! - Skill definitions (RON)
//! - Life modules with their rules and fixed XP (TOML)
//! - Campaign rule sets (TOML)
//! - Character build plans (RON)
//!
//! Definitions are gathered into a [`Catalog`]; life modules and build plans
//! refer to catalog entries by name and are resolved against it.

pub mod build;
pub mod catalog;
pub mod specs;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use build::{BuildPlan, BuildStep};
pub use catalog::Catalog;
pub use specs::{FixedXpSpec, LifeModuleSpec, OptionSpec};

#[cfg(feature = "loaders")]
pub use loaders::{
    BuildPlanLoader, ContentFactory, LifeModuleLoader, LoadResult, RuleSetLoader, SkillLoader,
    TraitLoader,
};
