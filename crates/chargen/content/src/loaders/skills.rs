//! Skill definition loader.

use std::path::Path;

use chargen_core::SkillBase;

use crate::loaders::{LoadResult, read_file};

/// Loader for skill definitions from RON files.
///
/// File format: `Vec<SkillBase>`. Tiered skills list a second value for every
/// tiered property; definitions that don't are rejected while parsing.
///
/// ```ron
/// [
///     (
///         name: "Computers",
///         target_numbers: (first: 8, second: Some(9)),
///         complexity_ratings: (first: CB, second: Some(CA)),
///         linked_attributes: (first: Pair(DEX, INT), second: Some(Pair(DEX, INT))),
///         tiered: true,
///     ),
/// ]
/// ```
pub struct SkillLoader;

impl SkillLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<SkillBase>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<SkillBase>> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse skill RON: {}", e))
    }
}
