//! Plain-text character report.

use std::fmt::{self, Write};

use chargen_core::{Character, Experience, ValidationError};

pub fn render(
    name: &str,
    character: &Character,
    errors: &[ValidationError],
) -> Result<String, fmt::Error> {
    let mut out = String::new();

    let title = if name.is_empty() { "Character" } else { name };
    writeln!(out, "{title}")?;
    writeln!(out, "XP remaining: {}", character.xp_value())?;

    if let Some(current) = character.current_affiliation() {
        writeln!(out, "Affiliation: {}", current.name())?;
    }
    if let Some(caste) = character.caste() {
        writeln!(out, "Caste: {caste}")?;
    }
    writeln!(out, "Learning: {}", character.learning())?;

    writeln!(out, "\nLife modules:")?;
    for taken in character.life_modules() {
        writeln!(out, "  [{}] {}", taken.stage().number(), taken.name())?;
    }

    writeln!(out, "\nAttributes:")?;
    for (attr, values) in character.attributes().iter() {
        writeln!(out, "  {attr:<4}{:>3}  ({} XP)", values.score, values.xp)?;
    }

    writeln!(out, "\nSkills:")?;
    for skill in character.skills() {
        let trained = if skill.is_trained() { "" } else { " (untrained)" };
        writeln!(
            out,
            "  {skill} +{}  TN {} {} {}{trained}",
            skill.level(),
            skill.target_number(),
            skill.complexity(),
            skill.links()
        )?;
    }

    writeln!(out, "\nTraits:")?;
    for line in character.trait_strings() {
        writeln!(out, "  {line}")?;
    }

    let pending = character.pending_fixed_xps();
    if !pending.is_empty() {
        writeln!(out, "\nUnallocated fixed XP:")?;
        for (lm, fx) in pending {
            writeln!(out, "  life module {lm}, set {fx}")?;
        }
    }

    if errors.is_empty() {
        writeln!(out, "\nValid")?;
    } else {
        writeln!(out, "\nInvalid:")?;
        for error in errors {
            writeln!(out, "  - {error}")?;
        }
    }

    Ok(out)
}
