//! Maps rules onto the validators that enforce them.

use crate::rules::Rule;

use super::{
    CannotBeOnlyAffiliationValidator, ClanWarriorMustTakeTraitValidator, ForbiddenStageValidator,
    ForbiddenTraitValidator, TraitNotAboveMinimumValidator, TraitRequiresAttributeScoreValidator,
    Validator,
};

/// Builds validators from rule configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatorFactory;

impl ValidatorFactory {
    /// Validator for a single rule, or `None` for marker rules such as
    /// [`Rule::ActsAsClan`] that other validators only consult.
    pub fn validator_for(rule: &Rule) -> Option<Box<dyn Validator>> {
        let validator: Box<dyn Validator> = match rule {
            Rule::ActsAsClan => return None,
            Rule::ClanWarriorMustTakeTrait(config) => {
                Box::new(ClanWarriorMustTakeTraitValidator::new(config.clone()))
            }
            Rule::TraitNotAboveMinimum(config) => {
                Box::new(TraitNotAboveMinimumValidator::new(config.clone()))
            }
            Rule::CannotBeOnlyAffiliation => Box::new(CannotBeOnlyAffiliationValidator::new()),
            Rule::ForbiddenStage(config) => Box::new(ForbiddenStageValidator::new(*config)),
            Rule::ForbiddenTrait(config) => Box::new(ForbiddenTraitValidator::new(config.clone())),
            Rule::TraitRequiresAttributeScore(config) => {
                Box::new(TraitRequiresAttributeScoreValidator::new(config.clone()))
            }
        };
        Some(validator)
    }

    /// Validators for every distinct rule in `rules`, in first-seen order.
    ///
    /// Identical rules carried by several modules yield one validator, so the
    /// same violation is reported once.
    pub fn build<'r>(rules: impl IntoIterator<Item = &'r Rule>) -> Vec<Box<dyn Validator>> {
        let mut seen: Vec<&Rule> = Vec::new();
        let mut validators = Vec::new();

        for rule in rules {
            if seen.contains(&rule) {
                continue;
            }
            seen.push(rule);
            validators.extend(Self::validator_for(rule));
        }

        validators
    }
}
