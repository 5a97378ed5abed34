//! Rule checks run against a fully built character.
//!
//! Validators follow the same shape: each one inspects a [`Character`]
//! read-only, and records zero or more [`ValidationError`]s. A failed check is
//! never an `Err`; errors are collected and returned to the caller for
//! presentation.
//!
//! # Architecture
//!
//! - Each [`Rule`](crate::Rule) variant that needs checking maps to one
//!   validator via [`ValidatorFactory`]
//! - [`CharacterValidationService`] builds validators from the character's
//!   active life modules, runs them all, and concatenates their errors
//! - Every run clears a validator's previous errors, so repeated validation
//!   of the same character yields the same result

mod attribute_score;
mod clan_warrior;
mod factory;
mod forbidden_stage;
mod forbidden_trait;
mod only_affiliation;
mod service;
mod trait_minimum;

pub use attribute_score::TraitRequiresAttributeScoreValidator;
pub use clan_warrior::ClanWarriorMustTakeTraitValidator;
pub use factory::ValidatorFactory;
pub use forbidden_stage::ForbiddenStageValidator;
pub use forbidden_trait::ForbiddenTraitValidator;
pub use only_affiliation::CannotBeOnlyAffiliationValidator;
pub use service::CharacterValidationService;
pub use trait_minimum::TraitNotAboveMinimumValidator;

use crate::character::Character;

/// A single reason a character is not legal.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationError {
    pub message: String,
    /// Name of the validator that reported it.
    pub origin: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            origin: origin.into(),
        }
    }
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.message, self.origin)
    }
}

/// A rule check over a character.
///
/// `valid` replaces the contents of `errors` on every call and must not
/// depend on the order validators run in.
pub trait Validator {
    /// Human-readable name, used as the origin of reported errors.
    fn name(&self) -> &'static str;

    /// Errors reported by the most recent [`Validator::valid`] call.
    fn errors(&self) -> &[ValidationError];

    /// Checks `character`, returning true iff no errors were reported.
    fn valid(&mut self, character: &Character) -> bool;
}
