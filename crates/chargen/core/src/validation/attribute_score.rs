use crate::character::Character;
use crate::rules::AttributeRequirement;
use crate::traits::Trait;

use super::{ValidationError, Validator};

/// Holding an active trait requires a minimum attribute score.
#[derive(Clone, Debug)]
pub struct TraitRequiresAttributeScoreValidator {
    config: AttributeRequirement,
    errors: Vec<ValidationError>,
}

impl TraitRequiresAttributeScoreValidator {
    pub fn new(config: AttributeRequirement) -> Self {
        Self {
            config,
            errors: Vec::new(),
        }
    }
}

impl Validator for TraitRequiresAttributeScoreValidator {
    fn name(&self) -> &'static str {
        "Trait Requires Attribute Score Validator"
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    fn valid(&mut self, character: &Character) -> bool {
        self.errors.clear();

        let origin = self.name();
        let config = &self.config;
        let score = character.attributes().score(config.attribute());

        if character.traits_named(config.trait_name()).any(Trait::is_active)
            && score < config.minimum()
        {
            self.errors.push(ValidationError::new(
                format!(
                    "The trait {} requires {} {} or higher, but it is {score}",
                    config.trait_name(),
                    config.attribute(),
                    config.minimum()
                ),
                origin,
            ));
        }

        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::Attribute;
    use crate::traits::TraitBase;

    #[test]
    fn active_trait_needs_score() {
        let mut validator = TraitRequiresAttributeScoreValidator::new(
            AttributeRequirement::new("Toughness", Attribute::BOD, 5).unwrap(),
        );

        let mut character = Character::new();
        character.add_trait_xp(Trait::new(TraitBase::new("Toughness")), 300, true);
        character.add_attribute_xp(Attribute::BOD, 400, true);

        assert!(!validator.valid(&character));
        assert_eq!(
            validator.errors()[0].message,
            "The trait Toughness requires BOD 5 or higher, but it is 4"
        );

        character.add_attribute_xp(Attribute::BOD, 100, true);
        assert!(validator.valid(&character));
    }
}
