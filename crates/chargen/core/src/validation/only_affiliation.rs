use crate::character::Character;
use crate::rules::RuleName;

use super::{ValidationError, Validator};

/// An affiliation that cannot be the character's only one.
///
/// Fails when exactly one affiliation is held and that affiliation carries
/// the rule.
#[derive(Clone, Debug, Default)]
pub struct CannotBeOnlyAffiliationValidator {
    errors: Vec<ValidationError>,
}

impl CannotBeOnlyAffiliationValidator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validator for CannotBeOnlyAffiliationValidator {
    fn name(&self) -> &'static str {
        "Cannot Be Only Affiliation Validator"
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    fn valid(&mut self, character: &Character) -> bool {
        self.errors.clear();

        let origin = self.name();
        let mut affiliations = character.affiliations();
        if let (Some(only), None) = (affiliations.next(), affiliations.next())
            && only.has_rule_for(RuleName::CannotBeOnlyAffiliation)
        {
            self.errors.push(ValidationError::new(
                format!("{} cannot be this character's only affiliation", only.name()),
                origin,
            ));
        }

        self.errors.is_empty()
    }
}
