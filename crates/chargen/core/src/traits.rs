//! Character traits measured in trait points (TP).
//!
//! A trait's level is its TP: one point per 100 raw XP, bounded by the
//! definition's `min` and `max`. Negative traits carry negative XP, so the
//! bounds are compared by absolute value.
//!
//! # Activity
//!
//! A trait whose level is 0 is inactive regardless of stored XP. This is how
//! a trait below its minimum investment stays on the character without
//! having any effect.

use crate::config::RulesConfig;
use crate::experience::{Experience, Learning};
use crate::life_module::LifeStage;

/// Immutable definition of a trait.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TraitBase {
    pub name: String,
    /// If a character is allowed to hold this trait more than once.
    pub multiple_allowed: bool,
    /// Maximum TP this trait can reach.
    pub max: Option<i32>,
    /// Minimum TP for this trait to be active.
    pub min: Option<i32>,
    /// The trait gives XP back for taking it.
    pub negative: bool,
}

impl TraitBase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_max(mut self, max: i32) -> Self {
        self.max = Some(max);
        self
    }

    pub fn with_min(mut self, min: i32) -> Self {
        self.min = Some(min);
        self
    }

    pub fn negative(mut self) -> Self {
        self.negative = true;
        self
    }

    pub fn multiple_allowed(mut self) -> Self {
        self.multiple_allowed = true;
        self
    }

    /// The level can't be over a limit that doesn't exist.
    pub fn level_above_maximum(&self, level: i32) -> bool {
        self.max.is_some_and(|max| level.abs() > max.abs())
    }

    pub fn level_above_minimum(&self, level: i32) -> bool {
        self.min.is_some_and(|min| level.abs() > min.abs())
    }

    pub fn level_at_maximum(&self, level: i32) -> bool {
        self.max.is_some_and(|max| level.abs() == max.abs())
    }

    pub fn level_at_minimum(&self, level: i32) -> bool {
        self.min.is_some_and(|min| level.abs() == min.abs())
    }

    pub fn level_under_maximum(&self, level: i32) -> bool {
        self.max.is_some_and(|max| level.abs() < max.abs())
    }

    pub fn level_under_minimum(&self, level: i32) -> bool {
        self.min.is_some_and(|min| level.abs() < min.abs())
    }

    /// TP for a given amount of raw XP.
    ///
    /// Floor division, so -50 XP is -1 TP. Levels past `max` clamp to `max`;
    /// levels short of `min` are forced to 0.
    pub fn level_for(&self, xp: i32) -> i32 {
        let raw = xp.div_euclid(RulesConfig::TRAIT_XP_PER_POINT);

        if self.level_above_maximum(raw) {
            self.max.unwrap_or(0)
        } else if self.level_under_minimum(raw) {
            0
        } else {
            raw
        }
    }
}

/// Identity of a trait on a character, excluding XP and level.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TraitKey {
    pub name: String,
    pub kind: Option<String>,
    pub sub_name: Option<String>,
    pub subject: Option<String>,
}

impl TraitKey {
    /// Key for a plain trait with no qualifiers.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
            sub_name: None,
            subject: None,
        }
    }
}

/// A trait instance with its own XP.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trait {
    base: TraitBase,
    xp: i32,
    level: i32,
    /// Differentiates a trait taken multiple times.
    pub sub_name: Option<String>,
    /// Further clarification of `sub_name`, e.g. `Dependent/Son (Albert)`.
    pub subject: Option<String>,
    /// Which of the character's identities this belongs to.
    pub identity: Option<String>,
    /// Phenotype-related qualifier.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: Option<String>,
    /// The stage this trait was assigned to the character.
    pub stage_taken: Option<LifeStage>,
}

impl Trait {
    pub fn new(base: TraitBase) -> Self {
        let level = base.level_for(0);
        Self {
            base,
            xp: 0,
            level,
            sub_name: None,
            subject: None,
            identity: None,
            kind: None,
            stage_taken: None,
        }
    }

    pub fn with_sub_name(mut self, sub_name: impl Into<String>) -> Self {
        self.sub_name = Some(sub_name.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_stage(mut self, stage: LifeStage) -> Self {
        self.stage_taken = Some(stage);
        self
    }

    pub fn base(&self) -> &TraitBase {
        &self.base
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }

    pub fn max(&self) -> Option<i32> {
        self.base.max
    }

    pub fn min(&self) -> Option<i32> {
        self.base.min
    }

    pub fn negative(&self) -> bool {
        self.base.negative
    }

    pub fn multiple_allowed(&self) -> bool {
        self.base.multiple_allowed
    }

    pub fn is_active(&self) -> bool {
        self.level != 0
    }

    pub fn level_above_minimum(&self) -> bool {
        self.base.level_above_minimum(self.level)
    }

    pub fn level_at_minimum(&self) -> bool {
        self.base.level_at_minimum(self.level)
    }

    pub fn level_at_maximum(&self) -> bool {
        self.base.level_at_maximum(self.level)
    }

    pub fn level_under_maximum(&self) -> bool {
        self.base.level_under_maximum(self.level)
    }

    pub fn key(&self) -> TraitKey {
        TraitKey {
            name: self.name().to_owned(),
            kind: self.kind.clone(),
            sub_name: self.sub_name.clone(),
            subject: self.subject.clone(),
        }
    }
}

impl Experience for Trait {
    fn xp(&self) -> i32 {
        self.xp
    }

    fn level(&self) -> i32 {
        self.level
    }

    fn set_xp(&mut self, xp: i32, _learning: Learning) {
        self.xp = xp;
        self.level = self.base.level_for(xp);
    }
}

impl core::fmt::Display for Trait {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())?;
        if let Some(kind) = &self.kind {
            write!(f, ": {kind}")?;
        }
        if self.is_active() {
            write!(f, " ({})", self.level)?;
        }
        if let Some(sub_name) = &self.sub_name {
            write!(f, "/{sub_name}")?;
        }
        if let Some(subject) = &self.subject {
            write!(f, " ({subject})")?;
        }
        Ok(())
    }
}
