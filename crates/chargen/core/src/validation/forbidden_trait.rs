use crate::character::Character;
use crate::rules::TraitRequirement;
use crate::traits::Trait;

use super::{ValidationError, Validator};

/// The configured trait may not be active. Holding it at level 0 is allowed.
#[derive(Clone, Debug)]
pub struct ForbiddenTraitValidator {
    config: TraitRequirement,
    errors: Vec<ValidationError>,
}

impl ForbiddenTraitValidator {
    pub fn new(config: TraitRequirement) -> Self {
        Self {
            config,
            errors: Vec::new(),
        }
    }
}

impl Validator for ForbiddenTraitValidator {
    fn name(&self) -> &'static str {
        "Forbidden Trait Validator"
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    fn valid(&mut self, character: &Character) -> bool {
        self.errors.clear();

        let trait_name = self.config.trait_name();
        if character.traits_named(trait_name).any(Trait::is_active) {
            let error = ValidationError::new(
                format!("This character cannot have the trait {trait_name}"),
                self.name(),
            );
            self.errors.push(error);
        }

        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::TraitBase;

    #[test]
    fn only_active_trait_is_forbidden() {
        let green_thumb = Trait::new(TraitBase::new("Green Thumb").with_min(1));
        let mut validator =
            ForbiddenTraitValidator::new(TraitRequirement::new("Green Thumb").unwrap());

        let mut character = Character::new();
        character.add_trait_xp(green_thumb.clone(), 50, false);
        assert!(validator.valid(&character));

        character.add_trait_xp(green_thumb, 50, false);
        assert!(!validator.valid(&character));
        assert_eq!(
            validator.errors()[0].message,
            "This character cannot have the trait Green Thumb"
        );
    }
}
