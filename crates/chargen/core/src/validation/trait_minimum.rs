use crate::character::Character;
use crate::rules::TraitRequirement;

use super::{ValidationError, Validator};

/// A trait may be held, but no higher than its minimum.
#[derive(Clone, Debug)]
pub struct TraitNotAboveMinimumValidator {
    config: TraitRequirement,
    errors: Vec<ValidationError>,
}

impl TraitNotAboveMinimumValidator {
    pub fn new(config: TraitRequirement) -> Self {
        Self {
            config,
            errors: Vec::new(),
        }
    }
}

impl Validator for TraitNotAboveMinimumValidator {
    fn name(&self) -> &'static str {
        "Trait Not Above Minimum Validator"
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    fn valid(&mut self, character: &Character) -> bool {
        self.errors.clear();

        let origin = self.name();
        if let Some(held) = character.get_trait(self.config.trait_name())
            && held.level_above_minimum()
        {
            self.errors.push(ValidationError::new(
                format!(
                    "The trait {} cannot be above its minimum value of {}",
                    held.name(),
                    held.min().unwrap_or_default()
                ),
                origin,
            ));
        }

        self.errors.is_empty()
    }
}
