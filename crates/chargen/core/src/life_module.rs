//! Life modules: the biography stages a character is built from.

use crate::fixed_xp::FixedXp;
use crate::rules::{Rule, RuleName};

/// Stage of a character's life a module is taken at.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::FromRepr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum LifeStage {
    Affiliation = 0,
    EarlyChildhood = 1,
    LateChildhood = 2,
    HigherEducation = 3,
    RealLife = 4,
}

impl LifeStage {
    /// Stage number as printed on the character sheet.
    pub const fn number(self) -> u8 {
        self as u8
    }
}

/// A reusable template for one biography entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LifeModule {
    pub stage: LifeStage,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rules: Vec<Rule>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fixed_xps: Vec<FixedXp>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_clan: bool,
    /// Free-form field labels. Annotations only; they never affect leveling.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fields: Vec<String>,
}

impl LifeModule {
    pub fn new(stage: LifeStage, name: impl Into<String>) -> Self {
        Self {
            stage,
            name: name.into(),
            rules: Vec::new(),
            fixed_xps: Vec::new(),
            is_clan: false,
            fields: Vec::new(),
        }
    }

    /// Shorthand for a module taken at [`LifeStage::Affiliation`].
    pub fn affiliation(name: impl Into<String>) -> Self {
        Self::new(LifeStage::Affiliation, name)
    }

    pub fn with_rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    pub fn with_fixed_xps(mut self, fixed_xps: impl IntoIterator<Item = FixedXp>) -> Self {
        self.fixed_xps.extend(fixed_xps);
        self
    }

    pub fn clan(mut self) -> Self {
        self.is_clan = true;
        self
    }

    pub fn has_rule_for(&self, name: RuleName) -> bool {
        self.rule_for(name).is_some()
    }

    pub fn rule_for(&self, name: RuleName) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.name() == name)
    }
}

/// A life module as taken by a specific character at a specific stage.
///
/// Owns its copy of the module, so fixed XP allocation state belongs to the
/// character rather than the shared template.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterLifeModule {
    stage: LifeStage,
    module: LifeModule,
    /// Per-character fields focused on while taking this module.
    pub fields: Vec<String>,
}

impl CharacterLifeModule {
    pub fn new(stage: LifeStage, module: LifeModule) -> Self {
        Self {
            stage,
            module,
            fields: Vec::new(),
        }
    }

    pub fn stage(&self) -> LifeStage {
        self.stage
    }

    pub fn module(&self) -> &LifeModule {
        &self.module
    }

    pub fn name(&self) -> &str {
        &self.module.name
    }

    pub fn is_clan(&self) -> bool {
        self.module.is_clan
    }

    pub fn is_affiliation(&self) -> bool {
        self.stage == LifeStage::Affiliation
    }

    pub fn rules(&self) -> &[Rule] {
        &self.module.rules
    }

    pub fn has_rule_for(&self, name: RuleName) -> bool {
        self.module.has_rule_for(name)
    }

    pub fn fixed_xps(&self) -> &[FixedXp] {
        &self.module.fixed_xps
    }

    pub(crate) fn fixed_xps_mut(&mut self) -> &mut [FixedXp] {
        &mut self.module.fixed_xps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::TraitRequirement;

    #[test]
    fn stage_numbers_round_trip() {
        assert_eq!(LifeStage::from_repr(3), Some(LifeStage::HigherEducation));
        assert_eq!(LifeStage::RealLife.number(), 4);
        assert_eq!(LifeStage::from_repr(9), None);
        assert_eq!("late_childhood".parse::<LifeStage>(), Ok(LifeStage::LateChildhood));
    }

    #[test]
    fn rule_lookup_by_name() {
        let module = LifeModule::affiliation("TopTier Associate").with_rules([
            Rule::ClanWarriorMustTakeTrait(TraitRequirement::new("Required Trait").unwrap()),
            Rule::ActsAsClan,
        ]);

        assert!(module.has_rule_for(RuleName::ActsAsClan));
        assert!(module.has_rule_for(RuleName::ClanWarriorMustTakeTrait));
        assert!(!module.has_rule_for(RuleName::CannotBeOnlyAffiliation));
        assert!(!module.is_clan);
    }

    #[test]
    fn character_module_keeps_taken_stage() {
        let module = LifeModule::new(LifeStage::RealLife, "Farmer");
        let taken = CharacterLifeModule::new(LifeStage::LateChildhood, module);
        assert_eq!(taken.stage(), LifeStage::LateChildhood);
        assert_eq!(taken.module().stage, LifeStage::RealLife);
        assert!(!taken.is_affiliation());
    }
}
