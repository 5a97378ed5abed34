//! Campaign rule set loader.

use std::path::Path;

use chargen_core::Rule;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Rule set structure for TOML files.
///
/// ```toml
/// [[rules]]
/// kind = "forbidden_trait"
/// trait = "Green Thumb"
///
/// [[rules]]
/// kind = "trait_requires_attribute_score"
/// trait = "Toughness"
/// attribute = "BOD"
/// minimum = 5
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub rules: Vec<Rule>,
}

/// Loader for rule sets applied on top of the life module rules.
pub struct RuleSetLoader;

impl RuleSetLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Rule>> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Rule>> {
        let set: RuleSet = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rule set TOML: {}", e))?;

        Ok(set.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chargen_core::{Attribute, AttributeRequirement, LifeStage, RuleName};

    #[test]
    fn test_parse_rule_set() {
        let rules = RuleSetLoader::parse(
            r#"
            [[rules]]
            kind = "forbidden_stage"
            stage = "HigherEducation"

            [[rules]]
            kind = "trait_requires_attribute_score"
            trait = "Toughness"
            attribute = "BOD"
            minimum = 5

            [[rules]]
            kind = "acts_as_clan"
            "#,
        )
        .expect("Failed to parse rule set");

        let names: Vec<_> = rules.iter().map(Rule::name).collect();
        assert_eq!(
            names,
            vec![
                RuleName::ForbiddenStage,
                RuleName::TraitRequiresAttributeScore,
                RuleName::ActsAsClan,
            ]
        );
        assert!(matches!(
            &rules[0],
            Rule::ForbiddenStage(config) if config.stage() == LifeStage::HigherEducation
        ));
        assert_eq!(
            rules[1],
            Rule::TraitRequiresAttributeScore(
                AttributeRequirement::new("Toughness", Attribute::BOD, 5).unwrap()
            )
        );
    }

    #[test]
    fn test_parse_rejects_negative_minimum() {
        let err = RuleSetLoader::parse(
            r#"
            [[rules]]
            kind = "trait_requires_attribute_score"
            trait = "Toughness"
            attribute = "BOD"
            minimum = -2
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("must not be negative"));
    }

    #[test]
    fn test_empty_rule_set() {
        assert!(RuleSetLoader::parse("").unwrap().is_empty());
    }
}
