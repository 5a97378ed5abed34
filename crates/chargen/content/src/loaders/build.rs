//! Build plan loader.

use std::path::Path;

use crate::build::BuildPlan;
use crate::loaders::{LoadResult, read_file};

/// Loader for character build plans from RON files.
///
/// ```ron
/// (
///     name: "Wolf MechWarrior",
///     steps: [
///         AddXp(5000),
///         TakeAffiliation("Clan Wolf"),
///         SetCaste(MechWarrior),
///         SelectFixedXp(life_module: 0, fixed_xp: 0, option: 0, sub_name: Some("Clan")),
///         TakeTrait(name: "Clan Warrior Trait", xp: 100),
///         AddAttributeXp(attribute: BOD, xp: 200),
///     ],
/// )
/// ```
pub struct BuildPlanLoader;

impl BuildPlanLoader {
    pub fn load(path: &Path) -> LoadResult<BuildPlan> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<BuildPlan> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse build plan RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::BuildStep;
    use chargen_core::{Attribute, ClanCaste};

    #[test]
    fn test_parse_build_plan() {
        let plan = BuildPlanLoader::parse(
            r#"(
                name: "Wolf MechWarrior",
                steps: [
                    AddXp(5000),
                    TakeAffiliation("Clan Wolf"),
                    SetCaste(MechWarrior),
                    SelectFixedXp(life_module: 0, fixed_xp: 0, option: 0, sub_name: Some("Clan")),
                    AddAttributeXp(attribute: BOD, xp: 200),
                    AddSkillXp(name: "Gunnery", xp: 30, spend: false),
                ],
            )"#,
        )
        .expect("Failed to parse build plan");

        assert_eq!(plan.name, "Wolf MechWarrior");
        assert_eq!(plan.steps.len(), 6);
        assert_eq!(plan.steps[2], BuildStep::SetCaste(ClanCaste::MechWarrior));
        assert_eq!(
            plan.steps[4],
            BuildStep::AddAttributeXp {
                attribute: Attribute::BOD,
                xp: 200,
                spend: true,
            }
        );
        assert!(matches!(
            plan.steps[5],
            BuildStep::AddSkillXp { spend: false, .. }
        ));
    }
}
