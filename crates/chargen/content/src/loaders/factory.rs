//! Content factory for building a catalog from data files.

use std::path::{Path, PathBuf};

use chargen_core::{Rule, SkillBase, TraitBase};

use crate::build::BuildPlan;
use crate::catalog::Catalog;
use crate::loaders::{
    BuildPlanLoader, LifeModuleLoader, LoadResult, RuleSetLoader, SkillLoader, TraitLoader,
};

/// Content factory that loads all character creation content from a data
/// directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── traits.ron
/// ├── skills.ron
/// ├── life_modules.toml
/// ├── rules.toml        (optional)
/// └── builds/
///     └── wolf_mechwarrior.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load trait definitions from `traits.ron`.
    pub fn load_traits(&self) -> LoadResult<Vec<TraitBase>> {
        TraitLoader::load(&self.data_dir.join("traits.ron"))
    }

    /// Load skill definitions from `skills.ron`.
    pub fn load_skills(&self) -> LoadResult<Vec<SkillBase>> {
        SkillLoader::load(&self.data_dir.join("skills.ron"))
    }

    /// Load traits, skills, and life modules, resolving the modules' option
    /// references against the loaded definitions.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        let mut catalog = Catalog::new(self.load_traits()?, self.load_skills()?);

        let specs = LifeModuleLoader::load(&self.data_dir.join("life_modules.toml"))?;
        catalog.add_life_modules(specs)?;

        tracing::info!(
            target: "chargen::content",
            data_dir = %self.data_dir.display(),
            traits = catalog.traits().count(),
            skills = catalog.skills().count(),
            life_modules = catalog.life_modules().len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Load the campaign rule set from `rules.toml`. A missing file means no
    /// extra rules.
    pub fn load_rules(&self) -> LoadResult<Vec<Rule>> {
        let path = self.data_dir.join("rules.toml");
        if !path.exists() {
            tracing::debug!(
                target: "chargen::content",
                path = %path.display(),
                "no rule set found"
            );
            return Ok(Vec::new());
        }
        RuleSetLoader::load(&path)
    }

    /// Load a build plan. Relative paths are resolved against `builds/`.
    pub fn load_build_plan(&self, path: &Path) -> LoadResult<BuildPlan> {
        if path.is_absolute() {
            BuildPlanLoader::load(path)
        } else {
            BuildPlanLoader::load(&self.data_dir.join("builds").join(path))
        }
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chargen_core::CharacterValidationService;
    use std::fs;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn test_load_data_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(
            dir.path().join("traits.ron"),
            r#"[(name: "Clan Warrior Trait"), (name: "Toughness", max: Some(3))]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("skills.ron"),
            r#"[(
                name: "Language",
                target_numbers: (first: 8),
                complexity_ratings: (first: SB),
                linked_attributes: (first: Pair(INT, CHA)),
            )]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("life_modules.toml"),
            r#"
            [[modules]]
            stage = "Affiliation"
            name = "Clan Wolf"
            clan = true
            rules = [{ kind = "clan_warrior_must_take_trait", trait = "Clan Warrior Trait" }]

            [[modules.fixed_xps]]
            choices = 1
            xp = 100
            options = [{ kind = "skill", name = "Language", sub_name = "Any" }]
            "#,
        )
        .unwrap();
        fs::create_dir(dir.path().join("builds")).unwrap();
        fs::write(
            dir.path().join("builds").join("wolf.ron"),
            r#"(
                name: "Wolf",
                steps: [
                    TakeAffiliation("Clan Wolf"),
                    SetCaste(MechWarrior),
                    SelectFixedXp(life_module: 0, fixed_xp: 0, option: 0, sub_name: Some("Clan")),
                ],
            )"#,
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        let catalog = factory.load_catalog().expect("Failed to load catalog");
        assert!(factory.load_rules().unwrap().is_empty());

        let plan = factory
            .load_build_plan(Path::new("wolf.ron"))
            .expect("Failed to load build plan");
        let character = plan.apply(&catalog).expect("Plan applies");
        assert_eq!(character.skill_strings(), vec!["Language/Clan"]);

        let mut service = CharacterValidationService::new(&character);
        assert!(!service.validate());
        assert_eq!(service.errors().len(), 1);
    }

    #[test]
    fn test_missing_file_names_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = ContentFactory::new(dir.path()).load_traits().unwrap_err();
        assert!(err.to_string().contains("traits.ron"));
    }
}
