//! Content loaders for reading character creation data from files.
//!
//! Each loader exposes `load(path)` for files and `parse(content)` for
//! in-memory text, so content can be checked without touching disk.

pub mod build;
pub mod factory;
pub mod life_modules;
pub mod rules;
pub mod skills;
pub mod traits;

pub use build::BuildPlanLoader;
pub use factory::ContentFactory;
pub use life_modules::LifeModuleLoader;
pub use rules::RuleSetLoader;
pub use skills::SkillLoader;
pub use traits::TraitLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
