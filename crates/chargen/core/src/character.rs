//! The character under construction and its intake operations.
//!
//! All mutation flows through [`Character`]: spending pool XP, merging XP into
//! skills and traits, taking life modules and allocating their fixed XP.
//! Derived views (learning rate, affiliations, active modules) are recomputed
//! from the current state on every call.
//!
//! # Merging
//!
//! Skills and traits are stored by structural key ([`SkillKey`], [`TraitKey`]).
//! Adding XP to an instance whose key is already held adds to the held entity;
//! otherwise the instance becomes a new tracked entity. After any removal, an
//! entity left at exactly 0 XP is dropped.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::attribute::{Attribute, Attributes};
use crate::caste::ClanCaste;
use crate::config::RulesConfig;
use crate::error::{CharacterError, ErrorSeverity};
use crate::experience::{Experience, Learning};
use crate::fixed_xp::{AllocationError, FixedXpOption};
use crate::life_module::{CharacterLifeModule, LifeModule, LifeStage};
use crate::rules::RuleName;
use crate::skill::{Skill, SkillKey};
use crate::traits::{Trait, TraitKey};

/// Errors raised by character intake operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("life module {index} is out of range (character has {len})")]
    LifeModuleOutOfRange { index: usize, len: usize },

    #[error("fixed XP set {index} is out of range ({module} has {len})")]
    FixedXpOutOfRange {
        module: String,
        index: usize,
        len: usize,
    },

    #[error(transparent)]
    Allocation(#[from] AllocationError),
}

impl CharacterError for IntakeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::LifeModuleOutOfRange { .. } | Self::FixedXpOutOfRange { .. } => {
                ErrorSeverity::Validation
            }
            Self::Allocation(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LifeModuleOutOfRange { .. } => "INTAKE_LIFE_MODULE_OUT_OF_RANGE",
            Self::FixedXpOutOfRange { .. } => "INTAKE_FIXED_XP_OUT_OF_RANGE",
            Self::Allocation(err) => err.error_code(),
        }
    }
}

/// A character being built from life modules and spent XP.
///
/// Not internally synchronized; each character is owned by one caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Character {
    xp: i32,
    attributes: Attributes,
    skills: BTreeMap<SkillKey, Skill>,
    traits: BTreeMap<TraitKey, Trait>,
    life_modules: Vec<CharacterLifeModule>,
    caste: Option<ClanCaste>,
}

impl Character {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // XP pool
    // ------------------------------------------------------------------

    /// Unspent XP in the pool. Negative once the character overspends.
    pub fn xp_value(&self) -> i32 {
        self.xp
    }

    /// Pool arithmetic saturates at the `i32` bounds.
    pub fn add_xp(&mut self, xp: i32) {
        self.xp = self.xp.saturating_add(xp);
    }

    pub fn remove_xp(&mut self, xp: i32) {
        self.xp = self.xp.saturating_sub(xp);
    }

    pub fn set_xp(&mut self, xp: i32) {
        self.xp = xp;
    }

    // ------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Raises `attr` by `xp`, debiting the pool by the same amount when
    /// `spend` is set.
    pub fn add_attribute_xp(&mut self, attr: Attribute, xp: i32, spend: bool) {
        self.attributes.add_xp(attr, xp);
        if spend {
            self.remove_xp(xp);
        }
    }

    pub fn remove_attribute_xp(&mut self, attr: Attribute, xp: i32, refund: bool) {
        self.attributes.remove_xp(attr, xp);
        if refund {
            self.add_xp(xp);
        }
    }

    // ------------------------------------------------------------------
    // Skills
    // ------------------------------------------------------------------

    pub fn skills(&self) -> impl Iterator<Item = &Skill> + '_ {
        self.skills.values()
    }

    pub fn skill(&self, key: &SkillKey) -> Option<&Skill> {
        self.skills.get(key)
    }

    pub fn skill_strings(&self) -> Vec<String> {
        self.skills().map(ToString::to_string).collect()
    }

    /// Adds `xp` to the held skill matching `skill`, tracking `skill` itself
    /// when no match is held.
    pub fn add_skill_xp(&mut self, skill: Skill, xp: i32, spend: bool) {
        let learning = self.learning();
        self.skills
            .entry(skill.key())
            .or_insert(skill)
            .add_xp(xp, learning);
        if spend {
            self.remove_xp(xp);
        }
    }

    pub fn remove_skill_xp(&mut self, skill: Skill, xp: i32, refund: bool) {
        let learning = self.learning();
        let key = skill.key();
        let held = self.skills.entry(key.clone()).or_insert(skill);
        held.remove_xp(xp, learning);
        if held.xp() == 0 {
            self.skills.remove(&key);
        }
        if refund {
            self.add_xp(xp);
        }
    }

    // ------------------------------------------------------------------
    // Traits
    // ------------------------------------------------------------------

    pub fn traits(&self) -> impl Iterator<Item = &Trait> + '_ {
        self.traits.values()
    }

    pub fn trait_strings(&self) -> Vec<String> {
        self.traits().map(ToString::to_string).collect()
    }

    /// Held traits with the given name, across all sub-names and subjects.
    pub fn traits_named<'a, 'n>(
        &'a self,
        name: &'n str,
    ) -> impl Iterator<Item = &'a Trait> + use<'a, 'n> {
        self.traits().filter(move |t| t.name() == name)
    }

    pub fn has_trait(&self, name: &str) -> bool {
        self.traits_named(name).next().is_some()
    }

    /// First held trait with the given name.
    pub fn get_trait(&self, name: &str) -> Option<&Trait> {
        self.traits_named(name).next()
    }

    pub fn trait_by_key(&self, key: &TraitKey) -> Option<&Trait> {
        self.traits.get(key)
    }

    /// Tracks `t`, merging its XP into a held trait with the same key.
    pub fn add_trait(&mut self, t: Trait) {
        let xp = t.xp();
        self.update_traits(|traits| match traits.entry(t.key()) {
            Entry::Occupied(mut held) => held.get_mut().add_xp(xp, Learning::Standard),
            Entry::Vacant(slot) => {
                slot.insert(t);
            }
        });
    }

    pub fn add_trait_xp(&mut self, t: Trait, xp: i32, spend: bool) {
        self.update_traits(|traits| {
            traits
                .entry(t.key())
                .or_insert(t)
                .add_xp(xp, Learning::Standard);
        });
        if spend {
            self.remove_xp(xp);
        }
    }

    pub fn remove_trait_xp(&mut self, t: Trait, xp: i32, refund: bool) {
        self.update_traits(|traits| {
            let key = t.key();
            let held = traits.entry(key.clone()).or_insert(t);
            held.remove_xp(xp, Learning::Standard);
            if held.xp() == 0 {
                traits.remove(&key);
            }
        });
        if refund {
            self.add_xp(xp);
        }
    }

    /// Applies a trait mutation, re-leveling skills if it changed the
    /// learning rate.
    fn update_traits(&mut self, mutate: impl FnOnce(&mut BTreeMap<TraitKey, Trait>)) {
        let before = self.learning();
        mutate(&mut self.traits);
        let after = self.learning();

        if before != after {
            tracing::debug!(
                target: "chargen::character",
                from = %before,
                to = %after,
                "learning rate changed, re-leveling skills"
            );
            for skill in self.skills.values_mut() {
                let xp = skill.xp();
                skill.set_xp(xp, after);
            }
        }
    }

    /// Learning rate implied by the currently active traits.
    pub fn learning(&self) -> Learning {
        let active = |name: &str| self.traits_named(name).any(Trait::is_active);

        if active(RulesConfig::SLOW_LEARNER) {
            Learning::Slow
        } else if active(RulesConfig::FAST_LEARNER) {
            Learning::Fast
        } else {
            Learning::Standard
        }
    }

    // ------------------------------------------------------------------
    // Caste
    // ------------------------------------------------------------------

    pub fn caste(&self) -> Option<ClanCaste> {
        self.caste
    }

    pub fn set_caste(&mut self, caste: Option<ClanCaste>) {
        self.caste = caste;
    }

    // ------------------------------------------------------------------
    // Life modules
    // ------------------------------------------------------------------

    /// Every module taken, in intake order.
    pub fn life_modules(&self) -> &[CharacterLifeModule] {
        &self.life_modules
    }

    pub fn add_affiliation(&mut self, module: &LifeModule) -> bool {
        self.add_life_module(LifeStage::Affiliation, module, None)
    }

    /// Takes `module` at `stage`.
    ///
    /// Returns `false` without changing anything when the same affiliation
    /// is already held. Fixed XP sets that need no player input are
    /// allocated immediately, free of pool cost.
    pub fn add_life_module(
        &mut self,
        stage: LifeStage,
        module: &LifeModule,
        field: Option<&str>,
    ) -> bool {
        if stage == LifeStage::Affiliation
            && self
                .affiliations()
                .any(|held| held.name() == module.name)
        {
            tracing::debug!(
                target: "chargen::character",
                module = %module.name,
                "affiliation already taken"
            );
            return false;
        }

        let mut taken = CharacterLifeModule::new(stage, module.clone());
        if let Some(field) = field {
            taken.fields.push(field.to_owned());
        }

        let mut grants = Vec::new();
        for fixed in taken.fixed_xps_mut() {
            if !fixed.can_auto_assign() {
                continue;
            }
            for index in 0..fixed.options().len() {
                if fixed.take(index).is_err() {
                    continue;
                }
                if let Some(option) = fixed.option(index) {
                    grants.push((option.clone(), fixed.xp()));
                }
            }
        }

        tracing::debug!(
            target: "chargen::character",
            module = %module.name,
            %stage,
            auto_grants = grants.len(),
            "life module taken"
        );

        for (option, xp) in &grants {
            self.apply_fixed_xp(option, *xp, None);
        }
        self.life_modules.push(taken);
        true
    }

    /// Allocates option `option` of fixed XP set `fixed_xp` on life module
    /// `life_module`. Grants are free of pool cost.
    pub fn select_fixed_xp(
        &mut self,
        life_module: usize,
        fixed_xp: usize,
        option: usize,
    ) -> Result<(), IntakeError> {
        self.select_fixed_xp_inner(life_module, fixed_xp, option, None)
    }

    /// Like [`Character::select_fixed_xp`], replacing an open "Any" sub-name
    /// on the chosen skill or trait with `sub_name`.
    pub fn select_fixed_xp_as(
        &mut self,
        life_module: usize,
        fixed_xp: usize,
        option: usize,
        sub_name: &str,
    ) -> Result<(), IntakeError> {
        self.select_fixed_xp_inner(life_module, fixed_xp, option, Some(sub_name))
    }

    fn select_fixed_xp_inner(
        &mut self,
        life_module: usize,
        fixed_xp: usize,
        option: usize,
        sub_name: Option<&str>,
    ) -> Result<(), IntakeError> {
        let len = self.life_modules.len();
        let taken = self
            .life_modules
            .get_mut(life_module)
            .ok_or(IntakeError::LifeModuleOutOfRange {
                index: life_module,
                len,
            })?;

        let module = taken.name().to_owned();
        let sets = taken.fixed_xps_mut();
        let len = sets.len();
        let fixed = sets
            .get_mut(fixed_xp)
            .ok_or(IntakeError::FixedXpOutOfRange {
                module,
                index: fixed_xp,
                len,
            })?;

        if let Err(err) = fixed.take(option) {
            tracing::warn!(
                target: "chargen::character",
                life_module,
                fixed_xp,
                option,
                %err,
                "fixed XP selection rejected"
            );
            return Err(err.into());
        }
        let grant = fixed.option(option).cloned().map(|opt| (opt, fixed.xp()));

        if let Some((opt, xp)) = grant {
            tracing::debug!(
                target: "chargen::character",
                option = %opt,
                xp,
                "fixed XP selected"
            );
            self.apply_fixed_xp(&opt, xp, sub_name);
        }
        Ok(())
    }

    fn apply_fixed_xp(&mut self, option: &FixedXpOption, xp: i32, sub_name: Option<&str>) {
        let name_open = |current: &Option<String>| match (current.as_deref(), sub_name) {
            (Some(RulesConfig::ANY_SUB_NAME), Some(chosen)) => Some(chosen.to_owned()),
            _ => current.clone(),
        };

        match option {
            FixedXpOption::Attribute(attr) => self.add_attribute_xp(*attr, xp, false),
            FixedXpOption::Skill(skill) => {
                let mut skill = skill.clone();
                skill.sub_name = name_open(&skill.sub_name);
                self.add_skill_xp(skill, xp, false);
            }
            FixedXpOption::Trait(t) => {
                let mut t = t.clone();
                t.sub_name = name_open(&t.sub_name);
                self.add_trait_xp(t, xp, false);
            }
        }
    }

    /// `(life_module, fixed_xp)` index pairs still awaiting a player choice.
    pub fn pending_fixed_xps(&self) -> Vec<(usize, usize)> {
        self.life_modules
            .iter()
            .enumerate()
            .flat_map(|(lm, taken)| {
                taken
                    .fixed_xps()
                    .iter()
                    .enumerate()
                    .filter(|(_, fixed)| fixed.incomplete())
                    .map(move |(fx, _)| (lm, fx))
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Affiliations
    // ------------------------------------------------------------------

    /// Affiliations in the order they were taken.
    pub fn affiliations(&self) -> impl Iterator<Item = &CharacterLifeModule> + '_ {
        self.life_modules
            .iter()
            .filter(|taken| taken.is_affiliation())
    }

    pub fn original_affiliation(&self) -> Option<&CharacterLifeModule> {
        self.affiliations().next()
    }

    pub fn current_affiliation(&self) -> Option<&CharacterLifeModule> {
        self.affiliations().last()
    }

    /// True when any affiliation ever taken is a Clan, or the current one
    /// acts as one.
    pub fn is_clan(&self) -> bool {
        self.affiliations().any(CharacterLifeModule::is_clan)
            || self
                .current_affiliation()
                .is_some_and(|current| current.has_rule_for(RuleName::ActsAsClan))
    }

    /// The current affiliation plus every non-affiliation module, in intake
    /// order. Superseded affiliations stay in history but are not active.
    pub fn active_life_modules(&self) -> Vec<&CharacterLifeModule> {
        let current = self
            .life_modules
            .iter()
            .rposition(CharacterLifeModule::is_affiliation);

        self.life_modules
            .iter()
            .enumerate()
            .filter(|(index, taken)| !taken.is_affiliation() || Some(*index) == current)
            .map(|(_, taken)| taken)
            .collect()
    }
}
