//! Experience ledger shared by skills, traits, and attributes.
//!
//! Every experience-bearing entity stores raw XP and derives its level from
//! it. The level is never set directly: each mutation goes through
//! [`Experience::set_xp`], which recomputes the level from the current XP.

use crate::config::RulesConfig;

/// How quickly a character converts XP into skill levels.
///
/// Derived from the character's traits, never stored independently.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Learning {
    Slow,
    #[default]
    Standard,
    Fast,
}

impl Learning {
    /// Cumulative XP thresholds for each skill level at this learning rate.
    pub const fn skill_table(self) -> &'static [i32] {
        match self {
            Learning::Slow => &RulesConfig::SLOW_SKILL_XP,
            Learning::Standard => &RulesConfig::STANDARD_SKILL_XP,
            Learning::Fast => &RulesConfig::FAST_SKILL_XP,
        }
    }
}

/// Anything that holds raw XP and derives a level from it.
///
/// `learning` is only consulted by entities whose leveling depends on it
/// (skills); traits and attributes ignore it.
pub trait Experience {
    /// Raw XP currently held. May be negative.
    fn xp(&self) -> i32;

    /// Level derived from [`Experience::xp`].
    fn level(&self) -> i32;

    /// Replaces the stored XP and recomputes the level.
    fn set_xp(&mut self, xp: i32, learning: Learning);

    fn add_xp(&mut self, xp: i32, learning: Learning) {
        let total = self.xp().saturating_add(xp);
        self.set_xp(total, learning);
    }

    fn remove_xp(&mut self, xp: i32, learning: Learning) {
        let total = self.xp().saturating_sub(xp);
        self.set_xp(total, learning);
    }
}
