use crate::character::Character;
use crate::rules::StageRestriction;

use super::{ValidationError, Validator};

/// No life module may be taken at the configured stage.
#[derive(Clone, Debug)]
pub struct ForbiddenStageValidator {
    config: StageRestriction,
    errors: Vec<ValidationError>,
}

impl ForbiddenStageValidator {
    pub fn new(config: StageRestriction) -> Self {
        Self {
            config,
            errors: Vec::new(),
        }
    }
}

impl Validator for ForbiddenStageValidator {
    fn name(&self) -> &'static str {
        "Forbidden Stage Validator"
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    fn valid(&mut self, character: &Character) -> bool {
        self.errors.clear();

        let origin = self.name();
        let stage = self.config.stage();
        self.errors.extend(
            character
                .life_modules()
                .iter()
                .filter(|taken| taken.stage() == stage)
                .map(|taken| {
                    ValidationError::new(
                        format!(
                            "{} cannot be taken: this character may not take stage {} modules",
                            taken.name(),
                            stage.number()
                        ),
                        origin,
                    )
                }),
        );

        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::life_module::{LifeModule, LifeStage};

    #[test]
    fn reports_each_module_at_stage() {
        let mut validator =
            ForbiddenStageValidator::new(StageRestriction::new(LifeStage::HigherEducation).unwrap());

        let mut character = Character::new();
        character.add_affiliation(&LifeModule::affiliation("Clan Jade Falcon").clan());
        assert!(validator.valid(&character));

        let academy = LifeModule::new(LifeStage::HigherEducation, "Military Academy");
        character.add_life_module(LifeStage::HigherEducation, &academy, None);
        character.add_life_module(LifeStage::HigherEducation, &academy, None);
        assert!(!validator.valid(&character));
        assert_eq!(validator.errors().len(), 2);
    }
}
