//! Fixed XP grants attached to life modules.
//!
//! A fixed XP set grants `xp` to each of `choices` options picked from a list.
//! When the number of options equals the number of choices, and no option is
//! an open "Any" slot, the set is allocated automatically on intake. Fixed
//! grants never draw from the character's XP pool.

use crate::attribute::Attribute;
use crate::config::RulesConfig;
use crate::error::{CharacterError, ErrorSeverity};
use crate::skill::Skill;
use crate::traits::Trait;

/// Something a fixed XP grant can be applied to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FixedXpOption {
    Attribute(Attribute),
    Skill(Skill),
    Trait(Trait),
}

impl FixedXpOption {
    /// An option whose sub-name is "Any" always needs player input, even when
    /// the counts line up.
    pub fn is_open_choice(&self) -> bool {
        let sub_name = match self {
            FixedXpOption::Attribute(_) => return false,
            FixedXpOption::Skill(skill) => skill.sub_name.as_deref(),
            FixedXpOption::Trait(t) => t.sub_name.as_deref(),
        };
        sub_name == Some(RulesConfig::ANY_SUB_NAME)
    }
}

impl core::fmt::Display for FixedXpOption {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FixedXpOption::Attribute(attr) => write!(f, "{attr}"),
            FixedXpOption::Skill(skill) => write!(f, "{skill}"),
            FixedXpOption::Trait(t) => match &t.sub_name {
                Some(sub_name) => write!(f, "{}/{sub_name}", t.name()),
                None => write!(f, "{}", t.name()),
            },
        }
    }
}

impl From<Attribute> for FixedXpOption {
    fn from(attr: Attribute) -> Self {
        FixedXpOption::Attribute(attr)
    }
}

impl From<Skill> for FixedXpOption {
    fn from(skill: Skill) -> Self {
        FixedXpOption::Skill(skill)
    }
}

impl From<Trait> for FixedXpOption {
    fn from(t: Trait) -> Self {
        FixedXpOption::Trait(t)
    }
}

/// Errors raised while allocating a fixed XP set.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    #[error("fixed XP set is already fully allocated")]
    AlreadyAllocated,

    #[error("option {0} has already been chosen")]
    OptionAlreadyChosen(usize),

    #[error("option {index} is out of range (set has {len} options)")]
    OptionOutOfRange { index: usize, len: usize },
}

impl CharacterError for AllocationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AlreadyAllocated | Self::OptionAlreadyChosen(_) => ErrorSeverity::Recoverable,
            Self::OptionOutOfRange { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyAllocated => "FIXED_XP_ALREADY_ALLOCATED",
            Self::OptionAlreadyChosen(_) => "FIXED_XP_OPTION_ALREADY_CHOSEN",
            Self::OptionOutOfRange { .. } => "FIXED_XP_OPTION_OUT_OF_RANGE",
        }
    }
}

/// A forced XP grant with `choices` picks over `options`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedXp {
    choices: usize,
    options: Vec<FixedXpOption>,
    xp: i32,
    /// Indexes of chosen options, in the order they were taken.
    #[cfg_attr(feature = "serde", serde(default))]
    chosen: Vec<usize>,
}

impl FixedXp {
    pub fn new(choices: usize, options: Vec<FixedXpOption>, xp: i32) -> Self {
        Self {
            choices,
            options,
            xp,
            chosen: Vec::new(),
        }
    }

    pub fn choices(&self) -> usize {
        self.choices
    }

    pub fn options(&self) -> &[FixedXpOption] {
        &self.options
    }

    pub fn option(&self, index: usize) -> Option<&FixedXpOption> {
        self.options.get(index)
    }

    /// XP granted per chosen option.
    pub fn xp(&self) -> i32 {
        self.xp
    }

    pub fn chosen(&self) -> &[usize] {
        &self.chosen
    }

    /// Picks still to be made.
    pub fn remaining(&self) -> usize {
        self.choices.saturating_sub(self.chosen.len())
    }

    /// All available XP for this set has been allocated.
    pub fn complete(&self) -> bool {
        self.chosen.len() == self.choices
    }

    pub fn incomplete(&self) -> bool {
        !self.complete()
    }

    pub fn for_attributes(&self) -> bool {
        matches!(self.options.first(), Some(FixedXpOption::Attribute(_)))
    }

    /// A player must choose how this XP is allocated.
    pub fn requires_choices(&self) -> bool {
        self.options.len() != self.choices || self.options.iter().any(FixedXpOption::is_open_choice)
    }

    pub fn can_auto_assign(&self) -> bool {
        !self.requires_choices()
    }

    /// Records `index` as chosen. Each option can be taken at most once, and
    /// never after the set is complete.
    pub fn take(&mut self, index: usize) -> Result<(), AllocationError> {
        if self.complete() {
            return Err(AllocationError::AlreadyAllocated);
        }
        if index >= self.options.len() {
            return Err(AllocationError::OptionOutOfRange {
                index,
                len: self.options.len(),
            });
        }
        if self.chosen.contains(&index) {
            return Err(AllocationError::OptionAlreadyChosen(index));
        }

        self.chosen.push(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::{ComplexityRating, SkillBase, SkillLinks};

    fn language() -> Skill {
        let base = SkillBase::simple(
            "Language",
            8,
            ComplexityRating::SimpleBasic,
            SkillLinks::Pair(Attribute::INT, Attribute::CHA),
        )
        .unwrap();
        Skill::new(base)
    }

    #[test]
    fn single_option_single_choice_auto_assigns() {
        let set = FixedXp::new(1, vec![Attribute::BOD.into()], 20);
        assert!(set.can_auto_assign());
        assert!(set.for_attributes());
    }

    #[test]
    fn more_options_than_choices_requires_choice() {
        let set = FixedXp::new(1, vec![Attribute::BOD.into(), Attribute::STR.into()], 20);
        assert!(set.requires_choices());
    }

    #[test]
    fn any_sub_name_requires_choice() {
        let set = FixedXp::new(1, vec![language().with_sub_name("Any").into()], 100);
        assert!(set.requires_choices());

        let named = FixedXp::new(1, vec![language().with_sub_name("English").into()], 100);
        assert!(named.can_auto_assign());
    }

    #[test]
    fn take_tracks_completion() {
        let mut set = FixedXp::new(2, vec![Attribute::BOD.into(), Attribute::STR.into()], 20);
        assert_eq!(set.remaining(), 2);

        set.take(1).unwrap();
        assert!(set.incomplete());
        set.take(0).unwrap();
        assert!(set.complete());
        assert_eq!(set.chosen(), &[1, 0]);
        assert_eq!(set.remaining(), 0);
    }

    #[test]
    fn take_rejects_over_allocation() {
        let mut set = FixedXp::new(1, vec![Attribute::BOD.into(), Attribute::STR.into()], 20);
        set.take(0).unwrap();
        assert_eq!(set.take(1), Err(AllocationError::AlreadyAllocated));
        assert_eq!(set.chosen(), &[0]);
    }

    #[test]
    fn take_rejects_repeat_and_out_of_range() {
        let mut set = FixedXp::new(2, vec![Attribute::BOD.into(), Attribute::STR.into()], 20);
        set.take(0).unwrap();
        assert_eq!(set.take(0), Err(AllocationError::OptionAlreadyChosen(0)));
        assert_eq!(
            set.take(5),
            Err(AllocationError::OptionOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(
            AllocationError::AlreadyAllocated.error_code(),
            "FIXED_XP_ALREADY_ALLOCATED"
        );
    }
}
