//! Character build plans: an ordered list of intake steps replayed against a
//! fresh character.

use chargen_core::{Attribute, Character, ClanCaste, LifeStage};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

const fn spend() -> bool {
    true
}

/// One intake operation, referring to catalog entries by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildStep {
    /// Adds XP to the pool.
    AddXp(i32),
    TakeAffiliation(String),
    TakeModule {
        stage: LifeStage,
        name: String,
        #[serde(default)]
        field: Option<String>,
    },
    SetCaste(ClanCaste),
    TakeTrait {
        name: String,
        xp: i32,
        #[serde(default)]
        sub_name: Option<String>,
        #[serde(default)]
        subject: Option<String>,
        #[serde(default = "spend")]
        spend: bool,
    },
    AddAttributeXp {
        attribute: Attribute,
        xp: i32,
        #[serde(default = "spend")]
        spend: bool,
    },
    AddSkillXp {
        name: String,
        xp: i32,
        #[serde(default)]
        sub_name: Option<String>,
        #[serde(default)]
        specialty: Option<String>,
        #[serde(default = "spend")]
        spend: bool,
    },
    SelectFixedXp {
        life_module: usize,
        fixed_xp: usize,
        option: usize,
        /// Replaces an open "Any" sub-name on the chosen option.
        #[serde(default)]
        sub_name: Option<String>,
    },
}

impl BuildStep {
    pub fn apply(&self, character: &mut Character, catalog: &Catalog) -> anyhow::Result<()> {
        match self {
            BuildStep::AddXp(xp) => character.add_xp(*xp),
            BuildStep::TakeAffiliation(name) => {
                let module = catalog.life_module(LifeStage::Affiliation, name)?;
                if !character.add_affiliation(module) {
                    tracing::warn!(
                        target: "chargen::content",
                        affiliation = %name,
                        "affiliation already taken, step skipped"
                    );
                }
            }
            BuildStep::TakeModule { stage, name, field } => {
                let module = catalog.life_module(*stage, name)?;
                character.add_life_module(*stage, module, field.as_deref());
            }
            BuildStep::SetCaste(caste) => character.set_caste(Some(*caste)),
            BuildStep::TakeTrait {
                name,
                xp,
                sub_name,
                subject,
                spend,
            } => {
                let t = catalog.new_trait(name, sub_name.as_deref(), subject.as_deref())?;
                character.add_trait_xp(t, *xp, *spend);
            }
            BuildStep::AddAttributeXp {
                attribute,
                xp,
                spend,
            } => character.add_attribute_xp(*attribute, *xp, *spend),
            BuildStep::AddSkillXp {
                name,
                xp,
                sub_name,
                specialty,
                spend,
            } => {
                let skill = catalog.new_skill(name, sub_name.as_deref(), specialty.as_deref())?;
                character.add_skill_xp(skill, *xp, *spend);
            }
            BuildStep::SelectFixedXp {
                life_module,
                fixed_xp,
                option,
                sub_name,
            } => match sub_name {
                Some(sub_name) => {
                    character.select_fixed_xp_as(*life_module, *fixed_xp, *option, sub_name)?
                }
                None => character.select_fixed_xp(*life_module, *fixed_xp, *option)?,
            },
        }
        Ok(())
    }
}

/// A named sequence of build steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPlan {
    #[serde(default)]
    pub name: String,
    pub steps: Vec<BuildStep>,
}

impl BuildPlan {
    /// Replays every step against a fresh character.
    pub fn apply(&self, catalog: &Catalog) -> anyhow::Result<Character> {
        let mut character = Character::new();
        for (index, step) in self.steps.iter().enumerate() {
            step.apply(&mut character, catalog)
                .map_err(|e| anyhow::anyhow!("Build step {} ({:?}) failed: {}", index, step, e))?;
        }

        tracing::debug!(
            target: "chargen::content",
            plan = %self.name,
            steps = self.steps.len(),
            xp = character.xp_value(),
            "build plan applied"
        );
        Ok(character)
    }
}
