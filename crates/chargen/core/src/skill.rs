//! Skills: learning-rate dependent leveling with tiered properties.

use crate::attribute::Attribute;
use crate::error::{CharacterError, ErrorSeverity};
use crate::experience::{Experience, Learning};
use crate::tiered::Tiered;

/// Skill complexity: Simple/Complex crossed with Basic/Advanced.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComplexityRating {
    #[strum(serialize = "SB")]
    #[cfg_attr(feature = "serde", serde(rename = "SB"))]
    SimpleBasic,
    #[strum(serialize = "SA")]
    #[cfg_attr(feature = "serde", serde(rename = "SA"))]
    SimpleAdvanced,
    #[strum(serialize = "CB")]
    #[cfg_attr(feature = "serde", serde(rename = "CB"))]
    ComplexBasic,
    #[strum(serialize = "CA")]
    #[cfg_attr(feature = "serde", serde(rename = "CA"))]
    ComplexAdvanced,
}

/// Attribute(s) a skill check is linked to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillLinks {
    Single(Attribute),
    Pair(Attribute, Attribute),
}

impl core::fmt::Display for SkillLinks {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SkillLinks::Single(a) => write!(f, "{a}"),
            SkillLinks::Pair(a, b) => write!(f, "{a}+{b}"),
        }
    }
}

/// Errors raised while defining a skill.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SkillDefinitionError {
    #[error("skill name must not be empty")]
    EmptyName,

    #[error("tiered skill {skill} has no second tier for {property}")]
    MissingSecondTier {
        skill: String,
        property: &'static str,
    },
}

impl CharacterError for SkillDefinitionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "SKILL_EMPTY_NAME",
            Self::MissingSecondTier { .. } => "SKILL_MISSING_SECOND_TIER",
        }
    }
}

/// Immutable definition of a skill.
///
/// A tiered skill must supply a second tier for every tiered property;
/// an untiered skill only ever uses the first.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "SkillBaseRepr", into = "SkillBaseRepr")
)]
pub struct SkillBase {
    name: String,
    target_numbers: Tiered<i32>,
    complexity_ratings: Tiered<ComplexityRating>,
    linked_attributes: Tiered<SkillLinks>,
    tiered: bool,
}

impl SkillBase {
    pub fn new(
        name: impl Into<String>,
        target_numbers: Tiered<i32>,
        complexity_ratings: Tiered<ComplexityRating>,
        linked_attributes: Tiered<SkillLinks>,
        tiered: bool,
    ) -> Result<Self, SkillDefinitionError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SkillDefinitionError::EmptyName);
        }

        if tiered {
            let missing = [
                ("target numbers", target_numbers.has_second()),
                ("complexity ratings", complexity_ratings.has_second()),
                ("linked attributes", linked_attributes.has_second()),
            ]
            .into_iter()
            .find(|(_, present)| !present);

            if let Some((property, _)) = missing {
                return Err(SkillDefinitionError::MissingSecondTier {
                    skill: name,
                    property,
                });
            }
        }

        Ok(Self {
            name,
            target_numbers,
            complexity_ratings,
            linked_attributes,
            tiered,
        })
    }

    /// An untiered skill with a single value for every property.
    pub fn simple(
        name: impl Into<String>,
        target_number: i32,
        complexity: ComplexityRating,
        links: SkillLinks,
    ) -> Result<Self, SkillDefinitionError> {
        Self::new(
            name,
            Tiered::single(target_number),
            Tiered::single(complexity),
            Tiered::single(links),
            false,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target_numbers(&self) -> &Tiered<i32> {
        &self.target_numbers
    }

    pub fn complexity_ratings(&self) -> &Tiered<ComplexityRating> {
        &self.complexity_ratings
    }

    pub fn linked_attributes(&self) -> &Tiered<SkillLinks> {
        &self.linked_attributes
    }

    pub fn tiered(&self) -> bool {
        self.tiered
    }
}

#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct SkillBaseRepr {
    name: String,
    target_numbers: Tiered<i32>,
    complexity_ratings: Tiered<ComplexityRating>,
    linked_attributes: Tiered<SkillLinks>,
    #[serde(default)]
    tiered: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<SkillBaseRepr> for SkillBase {
    type Error = SkillDefinitionError;

    fn try_from(repr: SkillBaseRepr) -> Result<Self, Self::Error> {
        SkillBase::new(
            repr.name,
            repr.target_numbers,
            repr.complexity_ratings,
            repr.linked_attributes,
            repr.tiered,
        )
    }
}

#[cfg(feature = "serde")]
impl From<SkillBase> for SkillBaseRepr {
    fn from(base: SkillBase) -> Self {
        Self {
            name: base.name,
            target_numbers: base.target_numbers,
            complexity_ratings: base.complexity_ratings,
            linked_attributes: base.linked_attributes,
            tiered: base.tiered,
        }
    }
}

/// Identity of a skill on a character. XP is merged into whichever held skill
/// has the same key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SkillKey {
    pub name: String,
    pub sub_name: Option<String>,
    pub specialty: Option<String>,
}

/// A skill instance with its own XP.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    base: SkillBase,
    xp: i32,
    level: i32,
    trained: bool,
    pub sub_name: Option<String>,
    pub specialty: Option<String>,
}

impl Skill {
    pub fn new(base: SkillBase) -> Self {
        Self {
            base,
            xp: 0,
            level: 0,
            trained: false,
            sub_name: None,
            specialty: None,
        }
    }

    pub fn with_sub_name(mut self, sub_name: impl Into<String>) -> Self {
        self.sub_name = Some(sub_name.into());
        self
    }

    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    pub fn base(&self) -> &SkillBase {
        &self.base
    }

    pub fn name(&self) -> &str {
        self.base.name()
    }

    pub fn tiered(&self) -> bool {
        self.base.tiered()
    }

    /// True once XP reaches the first threshold of the learning table used at
    /// the last recalculation. Below that, the skill reports level 0 but is
    /// not yet usable.
    pub fn is_trained(&self) -> bool {
        self.trained
    }

    pub fn complexity(&self) -> ComplexityRating {
        *self.base.complexity_ratings.resolve(self.tiered(), self.level)
    }

    pub fn links(&self) -> SkillLinks {
        *self.base.linked_attributes.resolve(self.tiered(), self.level)
    }

    pub fn target_number(&self) -> i32 {
        *self.base.target_numbers.resolve(self.tiered(), self.level)
    }

    pub fn key(&self) -> SkillKey {
        SkillKey {
            name: self.name().to_owned(),
            sub_name: self.sub_name.clone(),
            specialty: self.specialty.clone(),
        }
    }

    /// Last table index whose threshold the XP has reached.
    ///
    /// Negative XP, and XP below the first threshold, both yield level 0.
    pub fn level_for(xp: i32, learning: Learning) -> i32 {
        if xp < 0 {
            return 0;
        }

        learning
            .skill_table()
            .iter()
            .rposition(|&threshold| xp >= threshold)
            .map_or(0, |index| index as i32)
    }
}

impl Experience for Skill {
    fn xp(&self) -> i32 {
        self.xp
    }

    fn level(&self) -> i32 {
        self.level
    }

    fn set_xp(&mut self, xp: i32, learning: Learning) {
        self.xp = xp;
        self.level = Self::level_for(xp, learning);
        self.trained = learning
            .skill_table()
            .first()
            .is_some_and(|&first| xp >= first);
    }
}

impl core::fmt::Display for Skill {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())?;
        if let Some(sub_name) = &self.sub_name {
            write!(f, "/{sub_name}")?;
        }
        if let Some(specialty) = &self.specialty {
            write!(f, " ({specialty})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn computers() -> SkillBase {
        SkillBase::new(
            "Computers",
            Tiered::pair(8, 9),
            Tiered::pair(ComplexityRating::ComplexBasic, ComplexityRating::ComplexAdvanced),
            Tiered::pair(
                SkillLinks::Single(Attribute::INT),
                SkillLinks::Pair(Attribute::DEX, Attribute::INT),
            ),
            true,
        )
        .unwrap()
    }

    #[test]
    fn level_scans_learning_table() {
        assert_eq!(Skill::level_for(0, Learning::Standard), 0);
        assert_eq!(Skill::level_for(30, Learning::Standard), 1);
        assert_eq!(Skill::level_for(49, Learning::Standard), 1);
        assert_eq!(Skill::level_for(50, Learning::Standard), 2);
        assert_eq!(Skill::level_for(570, Learning::Standard), 10);
        assert_eq!(Skill::level_for(10_000, Learning::Standard), 10);
    }

    #[test]
    fn learning_changes_level_for_same_xp() {
        assert_eq!(Skill::level_for(27, Learning::Fast), 1);
        assert_eq!(Skill::level_for(27, Learning::Standard), 0);
        assert_eq!(Skill::level_for(30, Learning::Slow), 0);
    }

    #[test]
    fn negative_xp_is_level_zero() {
        let mut skill = Skill::new(computers());
        skill.set_xp(-400, Learning::Standard);
        assert_eq!(skill.level(), 0);
        assert!(!skill.is_trained());
    }

    #[test]
    fn tiered_properties_follow_level() {
        let mut skill = Skill::new(computers());
        skill.add_xp(80, Learning::Standard);
        assert_eq!(skill.level(), 3);
        assert_eq!(skill.target_number(), 8);
        assert_eq!(skill.complexity(), ComplexityRating::ComplexBasic);
        assert_eq!(skill.links(), SkillLinks::Single(Attribute::INT));

        skill.add_xp(40, Learning::Standard);
        assert_eq!(skill.level(), 4);
        assert_eq!(skill.target_number(), 9);
        assert_eq!(skill.complexity(), ComplexityRating::ComplexAdvanced);
        assert_eq!(skill.links(), SkillLinks::Pair(Attribute::DEX, Attribute::INT));
    }

    #[test]
    fn trained_after_first_threshold() {
        let mut skill = Skill::new(computers());
        skill.add_xp(19, Learning::Standard);
        assert!(!skill.is_trained());
        skill.add_xp(1, Learning::Standard);
        assert!(skill.is_trained());
        assert_eq!(skill.level(), 0);
    }

    #[test]
    fn tiered_skill_requires_second_tiers() {
        let err = SkillBase::new(
            "Piloting",
            Tiered::pair(8, 9),
            Tiered::single(ComplexityRating::SimpleBasic),
            Tiered::pair(
                SkillLinks::Single(Attribute::RFL),
                SkillLinks::Pair(Attribute::RFL, Attribute::DEX),
            ),
            true,
        )
        .unwrap_err();

        assert_eq!(
            err,
            SkillDefinitionError::MissingSecondTier {
                skill: "Piloting".into(),
                property: "complexity ratings",
            }
        );
        assert_eq!(err.error_code(), "SKILL_MISSING_SECOND_TIER");
    }

    #[test]
    fn display_and_key_include_sub_name_and_specialty() {
        let skill = Skill::new(computers())
            .with_sub_name("Hacking")
            .with_specialty("Military");

        assert_eq!(skill.to_string(), "Computers/Hacking (Military)");
        assert_eq!(
            skill.key(),
            SkillKey {
                name: "Computers".into(),
                sub_name: Some("Hacking".into()),
                specialty: Some("Military".into()),
            }
        );
    }
}
