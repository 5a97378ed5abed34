use crate::character::Character;
use crate::rules::TraitRequirement;

use super::{ValidationError, Validator};

/// Clan warriors must hold a given trait.
///
/// Only applies when the character has a warrior caste and is Clan, either
/// through any Clan affiliation or a current affiliation that acts as Clan.
/// Characters without a caste are exempt.
#[derive(Clone, Debug)]
pub struct ClanWarriorMustTakeTraitValidator {
    config: TraitRequirement,
    errors: Vec<ValidationError>,
}

impl ClanWarriorMustTakeTraitValidator {
    pub fn new(config: TraitRequirement) -> Self {
        Self {
            config,
            errors: Vec::new(),
        }
    }

    fn applies_to(character: &Character) -> bool {
        character.caste().is_some_and(|caste| caste.is_warrior()) && character.is_clan()
    }
}

impl Validator for ClanWarriorMustTakeTraitValidator {
    fn name(&self) -> &'static str {
        "Clan Warrior Must Take Trait Validator"
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    fn valid(&mut self, character: &Character) -> bool {
        self.errors.clear();

        let origin = self.name();
        let trait_name = self.config.trait_name();
        if Self::applies_to(character) && !character.has_trait(trait_name) {
            self.errors.push(ValidationError::new(
                format!("This character must have the trait {trait_name}"),
                origin,
            ));
        }

        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caste::ClanCaste;
    use crate::life_module::LifeModule;
    use crate::rules::Rule;
    use crate::traits::{Trait, TraitBase};

    fn validator() -> ClanWarriorMustTakeTraitValidator {
        ClanWarriorMustTakeTraitValidator::new(TraitRequirement::new("Required Trait").unwrap())
    }

    #[test]
    fn casteless_character_is_exempt() {
        let mut character = Character::new();
        character.add_affiliation(&LifeModule::affiliation("Clan Wolf").clan());
        assert!(validator().valid(&character));
    }

    #[test]
    fn non_warrior_caste_is_exempt() {
        let mut character = Character::new();
        character.add_affiliation(&LifeModule::affiliation("Clan Wolf").clan());
        character.set_caste(Some(ClanCaste::Merchant));
        assert!(validator().valid(&character));
    }

    #[test]
    fn acts_as_clan_affiliation_applies() {
        let mut character = Character::new();
        character.add_affiliation(
            &LifeModule::affiliation("TopTier Associate").with_rules([Rule::ActsAsClan]),
        );
        character.set_caste(Some(ClanCaste::MechWarrior));

        let mut validator = validator();
        assert!(!validator.valid(&character));
        assert_eq!(
            validator.errors()[0].message,
            "This character must have the trait Required Trait"
        );

        character.add_trait(Trait::new(TraitBase::new("Required Trait")));
        assert!(validator.valid(&character));
        assert!(validator.errors().is_empty());
    }

    #[test]
    fn inner_sphere_warrior_is_exempt() {
        let mut character = Character::new();
        character.add_affiliation(&LifeModule::affiliation("Federated Suns"));
        character.set_caste(Some(ClanCaste::MechWarrior));
        assert!(validator().valid(&character));
    }
}
