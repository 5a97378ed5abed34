//! Character creation rules: XP ledgers, leveling, life modules and validation.
//!
//! `chargen-core` is a pure library. A [`Character`] is built through its
//! intake operations (taking life modules, spending XP, allocating fixed XP)
//! and checked on demand by a [`CharacterValidationService`]. Content loading
//! and presentation live in other crates and depend on the types re-exported
//! here.
pub mod attribute;
pub mod caste;
pub mod character;
pub mod config;
pub mod error;
pub mod experience;
pub mod fixed_xp;
pub mod life_module;
pub mod rules;
pub mod skill;
pub mod tiered;
pub mod traits;
pub mod validation;

pub use attribute::{Attribute, AttributeValues, Attributes};
pub use caste::ClanCaste;
pub use character::{Character, IntakeError};
pub use config::RulesConfig;
pub use error::{CharacterError, ErrorSeverity};
pub use experience::{Experience, Learning};
pub use fixed_xp::{AllocationError, FixedXp, FixedXpOption};
pub use life_module::{CharacterLifeModule, LifeModule, LifeStage};
pub use rules::{
    AttributeRequirement, Rule, RuleConfigError, RuleName, StageRestriction, TraitRequirement,
};
pub use skill::{ComplexityRating, Skill, SkillBase, SkillDefinitionError, SkillKey, SkillLinks};
pub use tiered::Tiered;
pub use traits::{Trait, TraitBase, TraitKey};
pub use validation::{
    CannotBeOnlyAffiliationValidator, CharacterValidationService,
    ClanWarriorMustTakeTraitValidator, ForbiddenStageValidator, ForbiddenTraitValidator,
    TraitNotAboveMinimumValidator, TraitRequiresAttributeScoreValidator, ValidationError,
    Validator, ValidatorFactory,
};
