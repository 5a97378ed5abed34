//! File formats for life modules.
//!
//! Life modules refer to catalog skills and traits by name instead of
//! embedding full definitions:
//!
//! ```toml
//! [[modules]]
//! stage = "Affiliation"
//! name = "Clan Wolf"
//! clan = true
//!
//! [[modules.rules]]
//! kind = "clan_warrior_must_take_trait"
//! trait = "Clan Warrior Trait"
//!
//! [[modules.fixed_xps]]
//! choices = 1
//! xp = 100
//! options = [
//!     { kind = "skill", name = "Language", sub_name = "Any" },
//! ]
//! ```

use chargen_core::{Attribute, LifeStage, Rule};
use serde::{Deserialize, Serialize};

/// One fixed XP option, by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OptionSpec {
    Attribute {
        attribute: Attribute,
    },
    Skill {
        name: String,
        #[serde(default)]
        sub_name: Option<String>,
        #[serde(default)]
        specialty: Option<String>,
    },
    Trait {
        name: String,
        #[serde(default)]
        sub_name: Option<String>,
        #[serde(default)]
        subject: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedXpSpec {
    pub choices: usize,
    pub xp: i32,
    pub options: Vec<OptionSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeModuleSpec {
    pub stage: LifeStage,
    pub name: String,
    #[serde(default)]
    pub rules: Vec<Rule>,
    #[serde(default)]
    pub fixed_xps: Vec<FixedXpSpec>,
    #[serde(default)]
    pub clan: bool,
    #[serde(default)]
    pub fields: Vec<String>,
}
