use crate::character::Character;
use crate::rules::Rule;

use super::{ValidationError, Validator, ValidatorFactory};

/// Runs a set of validators over one character and aggregates their errors.
///
/// [`CharacterValidationService::new`] enforces the rules carried by the
/// character's active life modules. Superseded affiliations contribute no
/// validators.
pub struct CharacterValidationService<'a> {
    character: &'a Character,
    rules: Vec<Rule>,
    validators: Vec<Box<dyn Validator>>,
    errors: Vec<ValidationError>,
}

impl<'a> CharacterValidationService<'a> {
    pub fn new(character: &'a Character) -> Self {
        let service = Self {
            character,
            rules: Vec::new(),
            validators: Vec::new(),
            errors: Vec::new(),
        };
        service.with_rules(
            character
                .active_life_modules()
                .into_iter()
                .flat_map(|taken| taken.rules()),
        )
    }

    /// Adds validators for rules supplied outside the life modules, such as a
    /// campaign rule set. Rules already enforced are skipped.
    pub fn with_rules<'r>(mut self, rules: impl IntoIterator<Item = &'r Rule>) -> Self {
        for rule in rules {
            if self.rules.contains(rule) {
                continue;
            }
            self.rules.push(rule.clone());
            self.validators.extend(ValidatorFactory::validator_for(rule));
        }
        self
    }

    pub fn with_validators(
        mut self,
        validators: impl IntoIterator<Item = Box<dyn Validator>>,
    ) -> Self {
        self.validators.extend(validators);
        self
    }

    /// Runs every validator and returns true iff none reported an error.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();

        for validator in &mut self.validators {
            if !validator.valid(self.character) {
                for error in validator.errors() {
                    tracing::trace!(
                        target: "chargen::validation",
                        validator = validator.name(),
                        message = %error.message,
                        "validation error"
                    );
                }
                self.errors.extend_from_slice(validator.errors());
            }
        }

        tracing::debug!(
            target: "chargen::validation",
            validators = self.validators.len(),
            errors = self.errors.len(),
            "character validated"
        );

        self.errors.is_empty()
    }

    /// Errors from the most recent [`CharacterValidationService::validate`].
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Names of the validators that will run, in order.
    pub fn validator_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.validators.iter().map(|validator| validator.name())
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::life_module::LifeModule;
    use crate::rules::TraitRequirement;

    #[test]
    fn superseded_affiliation_rules_do_not_apply() {
        let strict = LifeModule::affiliation("Dark Caste").with_rules([Rule::ForbiddenTrait(
            TraitRequirement::new("Wealth").unwrap(),
        )]);

        let mut character = Character::new();
        character.add_affiliation(&strict);
        assert_eq!(CharacterValidationService::new(&character).len(), 1);

        character.add_affiliation(&LifeModule::affiliation("Outworlds Alliance"));
        assert!(CharacterValidationService::new(&character).is_empty());
    }

    #[test]
    fn extra_rules_are_appended() {
        let character = Character::new();
        let extra = [Rule::CannotBeOnlyAffiliation];
        let mut service = CharacterValidationService::new(&character).with_rules(&extra);

        assert_eq!(
            service.validator_names().collect::<Vec<_>>(),
            vec!["Cannot Be Only Affiliation Validator"]
        );
        assert!(service.validate());
        assert!(service.validate());
        assert!(service.errors().is_empty());
    }

    #[test]
    fn campaign_rule_matching_module_rule_runs_once() {
        let forbidden = Rule::ForbiddenTrait(TraitRequirement::new("Wealth").unwrap());
        let mut character = Character::new();
        character.add_affiliation(
            &LifeModule::affiliation("Dark Caste").with_rules([forbidden.clone()]),
        );

        let service = CharacterValidationService::new(&character).with_rules([&forbidden]);
        assert_eq!(service.len(), 1);
    }
}
