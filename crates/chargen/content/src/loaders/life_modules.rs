//! Life module loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::specs::LifeModuleSpec;

/// Life module file structure for TOML files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifeModuleFile {
    #[serde(default)]
    pub modules: Vec<LifeModuleSpec>,
}

/// Loader for life module specs from TOML files.
///
/// Specs still refer to skills and traits by name; resolve them with
/// [`Catalog::add_life_modules`](crate::Catalog::add_life_modules).
pub struct LifeModuleLoader;

impl LifeModuleLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<LifeModuleSpec>> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<LifeModuleSpec>> {
        let file: LifeModuleFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse life module TOML: {}", e))?;

        Ok(file.modules)
    }
}
