//! Character attributes and their XP ledgers.

use strum::{EnumCount, IntoEnumIterator};

use crate::config::RulesConfig;
use crate::experience::{Experience, Learning};

/// The eight attributes every character carries.
///
/// - **STR** (Strength), **BOD** (Body), **RFL** (Reflexes), **DEX** (Dexterity)
/// - **INT** (Intelligence), **WIL** (Willpower), **CHA** (Charisma), **EDG** (Edge)
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
    strum::EnumCount,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Attribute {
    STR = 0,
    BOD = 1,
    RFL = 2,
    DEX = 3,
    INT = 4,
    WIL = 5,
    CHA = 6,
    EDG = 7,
}

impl Attribute {
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }
}

/// Raw XP and derived score for one attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeValues {
    pub xp: i32,
    pub score: i32,
}

impl AttributeValues {
    fn score_for(xp: i32) -> i32 {
        xp.div_euclid(RulesConfig::ATTRIBUTE_XP_PER_POINT).max(0)
    }
}

impl Experience for AttributeValues {
    fn xp(&self) -> i32 {
        self.xp
    }

    fn level(&self) -> i32 {
        self.score
    }

    fn set_xp(&mut self, xp: i32, _learning: Learning) {
        self.xp = xp;
        self.score = Self::score_for(xp);
    }
}

/// Ledgers for all attributes, indexed by [`Attribute`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    values: [AttributeValues; Attribute::COUNT],
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self, attr: Attribute) -> AttributeValues {
        self.values[attr.as_index()]
    }

    pub fn score(&self, attr: Attribute) -> i32 {
        self.values[attr.as_index()].score
    }

    pub fn add_xp(&mut self, attr: Attribute, xp: i32) {
        self.values[attr.as_index()].add_xp(xp, Learning::Standard);
    }

    pub fn remove_xp(&mut self, attr: Attribute, xp: i32) {
        self.values[attr.as_index()].remove_xp(xp, Learning::Standard);
    }

    pub fn set_xp(&mut self, attr: Attribute, xp: i32) {
        self.values[attr.as_index()].set_xp(xp, Learning::Standard);
    }

    /// Iterates over every attribute with its current values.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, AttributeValues)> + '_ {
        Attribute::iter().map(|attr| (attr, self.values(attr)))
    }
}
