//! Trait definition loader.

use std::path::Path;

use chargen_core::TraitBase;

use crate::loaders::{LoadResult, read_file};

/// Loader for trait definitions from RON files.
///
/// File format: `Vec<TraitBase>`
///
/// ```ron
/// [
///     (name: "Toughness", max: Some(3)),
///     (name: "In For Life", min: Some(1), max: Some(3)),
///     (name: "Dependent", min: Some(-1), max: Some(-3), negative: true, multiple_allowed: true),
/// ]
/// ```
pub struct TraitLoader;

impl TraitLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<TraitBase>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<TraitBase>> {
        let traits: Vec<TraitBase> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse trait RON: {}", e))?;

        if let Some(unnamed) = traits.iter().position(|t| t.name.trim().is_empty()) {
            anyhow::bail!("Trait definition {} has no name", unnamed);
        }

        Ok(traits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_traits() {
        let traits = TraitLoader::parse(
            r#"[
                (name: "Toughness", max: Some(3)),
                (name: "Dependent", min: Some(-1), max: Some(-3), negative: true),
            ]"#,
        )
        .expect("Failed to parse traits");

        assert_eq!(traits.len(), 2);
        assert_eq!(traits[0].max, Some(3));
        assert!(!traits[0].negative);
        assert!(traits[1].negative);
        assert_eq!(traits[1].min, Some(-1));
    }

    #[test]
    fn test_parse_rejects_unnamed_trait() {
        let err = TraitLoader::parse(r#"[(max: Some(3))]"#).unwrap_err();
        assert!(err.to_string().contains("has no name"));
    }
}
