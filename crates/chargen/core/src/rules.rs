//! Rules carried by life modules and their typed configuration.
//!
//! Each rule variant that drives a validator carries its own configuration
//! record. Records are checked when they are built (`new`) and when they are
//! deserialized, so a validator never sees a malformed configuration.

use crate::attribute::Attribute;
use crate::error::{CharacterError, ErrorSeverity};
use crate::life_module::LifeStage;

/// Errors raised while building a rule configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuleConfigError {
    #[error("rule requires a trait name")]
    EmptyTraitName,

    #[error("minimum {attribute} score must not be negative, got {minimum}")]
    NegativeScore { attribute: Attribute, minimum: i32 },

    #[error("the affiliation stage cannot be forbidden")]
    AffiliationStage,
}

impl CharacterError for RuleConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyTraitName => "RULE_EMPTY_TRAIT_NAME",
            Self::NegativeScore { .. } => "RULE_NEGATIVE_SCORE",
            Self::AffiliationStage => "RULE_AFFILIATION_STAGE",
        }
    }
}

fn checked_trait_name(name: String) -> Result<String, RuleConfigError> {
    if name.trim().is_empty() {
        Err(RuleConfigError::EmptyTraitName)
    } else {
        Ok(name)
    }
}

/// Configuration naming a single trait, e.g. `{ trait = "In For Life" }`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "TraitRequirementRepr", into = "TraitRequirementRepr")
)]
pub struct TraitRequirement {
    trait_name: String,
}

impl TraitRequirement {
    pub fn new(trait_name: impl Into<String>) -> Result<Self, RuleConfigError> {
        Ok(Self {
            trait_name: checked_trait_name(trait_name.into())?,
        })
    }

    pub fn trait_name(&self) -> &str {
        &self.trait_name
    }
}

#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct TraitRequirementRepr {
    #[serde(rename = "trait")]
    trait_name: String,
}

#[cfg(feature = "serde")]
impl TryFrom<TraitRequirementRepr> for TraitRequirement {
    type Error = RuleConfigError;

    fn try_from(repr: TraitRequirementRepr) -> Result<Self, Self::Error> {
        TraitRequirement::new(repr.trait_name)
    }
}

#[cfg(feature = "serde")]
impl From<TraitRequirement> for TraitRequirementRepr {
    fn from(config: TraitRequirement) -> Self {
        Self {
            trait_name: config.trait_name,
        }
    }
}

/// Configuration naming a life stage a character must not take modules in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "StageRestrictionRepr", into = "StageRestrictionRepr")
)]
pub struct StageRestriction {
    stage: LifeStage,
}

impl StageRestriction {
    pub fn new(stage: LifeStage) -> Result<Self, RuleConfigError> {
        if stage == LifeStage::Affiliation {
            return Err(RuleConfigError::AffiliationStage);
        }
        Ok(Self { stage })
    }

    pub fn stage(&self) -> LifeStage {
        self.stage
    }
}

#[cfg(feature = "serde")]
#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
struct StageRestrictionRepr {
    stage: LifeStage,
}

#[cfg(feature = "serde")]
impl TryFrom<StageRestrictionRepr> for StageRestriction {
    type Error = RuleConfigError;

    fn try_from(repr: StageRestrictionRepr) -> Result<Self, Self::Error> {
        StageRestriction::new(repr.stage)
    }
}

#[cfg(feature = "serde")]
impl From<StageRestriction> for StageRestrictionRepr {
    fn from(config: StageRestriction) -> Self {
        Self {
            stage: config.stage,
        }
    }
}

/// Configuration tying a trait to a minimum attribute score.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "AttributeRequirementRepr", into = "AttributeRequirementRepr")
)]
pub struct AttributeRequirement {
    trait_name: String,
    attribute: Attribute,
    minimum: i32,
}

impl AttributeRequirement {
    pub fn new(
        trait_name: impl Into<String>,
        attribute: Attribute,
        minimum: i32,
    ) -> Result<Self, RuleConfigError> {
        let trait_name = checked_trait_name(trait_name.into())?;
        if minimum < 0 {
            return Err(RuleConfigError::NegativeScore { attribute, minimum });
        }
        Ok(Self {
            trait_name,
            attribute,
            minimum,
        })
    }

    pub fn trait_name(&self) -> &str {
        &self.trait_name
    }

    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    pub fn minimum(&self) -> i32 {
        self.minimum
    }
}

#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct AttributeRequirementRepr {
    #[serde(rename = "trait")]
    trait_name: String,
    attribute: Attribute,
    minimum: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<AttributeRequirementRepr> for AttributeRequirement {
    type Error = RuleConfigError;

    fn try_from(repr: AttributeRequirementRepr) -> Result<Self, Self::Error> {
        AttributeRequirement::new(repr.trait_name, repr.attribute, repr.minimum)
    }
}

#[cfg(feature = "serde")]
impl From<AttributeRequirement> for AttributeRequirementRepr {
    fn from(config: AttributeRequirement) -> Self {
        Self {
            trait_name: config.trait_name,
            attribute: config.attribute,
            minimum: config.minimum,
        }
    }
}

/// A rule attached to a life module.
///
/// [`RuleName`] is the fieldless discriminant, used to ask whether a module
/// carries a rule without caring about its configuration.
#[derive(Clone, Debug, PartialEq, Eq, strum::EnumDiscriminants)]
#[strum_discriminants(
    name(RuleName),
    derive(Hash, strum::Display, strum::EnumString, strum::AsRefStr),
    strum(serialize_all = "snake_case")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Rule {
    /// A non-Clan affiliation whose members are treated as Clan.
    ActsAsClan,
    /// Clan warriors of this affiliation must hold the trait.
    ClanWarriorMustTakeTrait(TraitRequirement),
    /// The trait may be held, but no higher than its minimum.
    TraitNotAboveMinimum(TraitRequirement),
    /// The character must take at least one other affiliation.
    CannotBeOnlyAffiliation,
    /// No life module may be taken at the stage.
    ForbiddenStage(StageRestriction),
    /// The trait may not be active on the character.
    ForbiddenTrait(TraitRequirement),
    /// Holding the trait requires a minimum attribute score.
    TraitRequiresAttributeScore(AttributeRequirement),
}

impl Rule {
    pub fn name(&self) -> RuleName {
        RuleName::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_requirement_rejects_blank_names() {
        assert_eq!(
            TraitRequirement::new("  "),
            Err(RuleConfigError::EmptyTraitName)
        );
        assert_eq!(
            TraitRequirement::new("In For Life").unwrap().trait_name(),
            "In For Life"
        );
    }

    #[test]
    fn stage_restriction_rejects_affiliation() {
        assert_eq!(
            StageRestriction::new(LifeStage::Affiliation),
            Err(RuleConfigError::AffiliationStage)
        );
        assert!(StageRestriction::new(LifeStage::HigherEducation).is_ok());
    }

    #[test]
    fn attribute_requirement_rejects_negative_minimum() {
        let err = AttributeRequirement::new("Toughness", Attribute::BOD, -1).unwrap_err();
        assert_eq!(err.error_code(), "RULE_NEGATIVE_SCORE");
    }

    #[test]
    fn rule_names_match_variants() {
        assert_eq!(Rule::ActsAsClan.name(), RuleName::ActsAsClan);
        assert_eq!(
            RuleName::CannotBeOnlyAffiliation.to_string(),
            "cannot_be_only_affiliation"
        );
        assert_eq!(
            "forbidden_trait".parse::<RuleName>(),
            Ok(RuleName::ForbiddenTrait)
        );
    }
}
