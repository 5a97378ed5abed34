//! Property tests for XP ledgers, leveling and tiered lookup.

use chargen_core::{
    Attribute, Character, ComplexityRating, Experience, Learning, Skill, SkillBase, SkillLinks,
    Tiered, Trait, TraitBase,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_learning() -> impl Strategy<Value = Learning> {
    prop_oneof![
        Just(Learning::Slow),
        Just(Learning::Standard),
        Just(Learning::Fast),
    ]
}

fn arb_attribute() -> impl Strategy<Value = Attribute> {
    prop_oneof![
        Just(Attribute::STR),
        Just(Attribute::BOD),
        Just(Attribute::DEX),
        Just(Attribute::EDG),
    ]
}

/// Trait bases with optional, positive bounds where `min <= max`.
fn arb_trait_base() -> impl Strategy<Value = TraitBase> {
    (prop::option::of(1i32..4), prop::option::of(0i32..6)).prop_map(|(min, extra)| {
        let mut base = TraitBase::new("Property");
        base.min = min;
        base.max = extra.map(|extra| min.unwrap_or(0) + extra);
        base
    })
}

fn skill() -> Skill {
    Skill::new(
        SkillBase::simple(
            "Gunnery",
            7,
            ComplexityRating::SimpleAdvanced,
            SkillLinks::Pair(Attribute::RFL, Attribute::DEX),
        )
        .expect("valid skill"),
    )
}

// ---------------------------------------------------------------------------
// Inverse laws
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn pool_add_then_remove_is_identity(start in -5_000i32..5_000, xp in 0i32..5_000) {
        let mut character = Character::new();
        character.set_xp(start);
        character.add_xp(xp);
        character.remove_xp(xp);
        prop_assert_eq!(character.xp_value(), start);
    }

    #[test]
    fn attribute_spend_then_refund_is_identity(attr in arb_attribute(), xp in 0i32..5_000) {
        let mut character = Character::new();
        character.add_attribute_xp(attr, xp, true);
        character.remove_attribute_xp(attr, xp, true);
        prop_assert_eq!(character.xp_value(), 0);
        prop_assert_eq!(character.attributes().values(attr).xp, 0);
    }

    #[test]
    fn skill_add_then_remove_is_identity(
        learning in arb_learning(),
        start in 0i32..1_000,
        xp in 0i32..1_000,
    ) {
        let mut skill = skill();
        skill.set_xp(start, learning);
        let level = skill.level();

        skill.add_xp(xp, learning);
        skill.remove_xp(xp, learning);
        prop_assert_eq!(skill.xp(), start);
        prop_assert_eq!(skill.level(), level);
    }

    #[test]
    fn trait_add_then_remove_is_identity(base in arb_trait_base(), xp in 0i32..1_000) {
        let mut t = Trait::new(base);
        t.add_xp(xp, Learning::Standard);
        t.remove_xp(xp, Learning::Standard);
        prop_assert_eq!(t.xp(), 0);
        prop_assert_eq!(t.level(), 0);
    }
}

// ---------------------------------------------------------------------------
// Leveling
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn trait_level_is_monotonic_and_bounded(
        base in arb_trait_base(),
        xp in 0i32..1_000,
        extra in 0i32..500,
    ) {
        let lower = base.level_for(xp);
        let higher = base.level_for(xp + extra);

        prop_assert!(higher >= lower);
        if let Some(max) = base.max {
            prop_assert!(higher <= max);
        }
        if let Some(min) = base.min {
            prop_assert!(lower == 0 || lower >= min);
        }
    }

    #[test]
    fn trait_below_minimum_is_inactive(min in 1i32..5, xp in -1_000i32..1_000) {
        let base = TraitBase::new("Property").with_min(min);
        let raw = xp.div_euclid(100);
        if raw.abs() < min {
            prop_assert_eq!(base.level_for(xp), 0);
        }
    }

    #[test]
    fn skill_level_is_monotonic(learning in arb_learning(), xp in 0i32..1_000, extra in 0i32..500) {
        prop_assert!(Skill::level_for(xp + extra, learning) >= Skill::level_for(xp, learning));
    }

    #[test]
    fn negative_skill_xp_is_level_zero(learning in arb_learning(), xp in -1_000i32..0) {
        prop_assert_eq!(Skill::level_for(xp, learning), 0);
    }

    #[test]
    fn tiered_lookup_switches_past_boundary(level in 0i32..12, tiered in any::<bool>()) {
        let pair = Tiered::pair(1, 2);
        let expected = if tiered && level > 3 { 2 } else { 1 };
        prop_assert_eq!(*pair.resolve(tiered, level), expected);
        prop_assert_eq!(*Tiered::single(1).resolve(tiered, level), 1);
    }
}

#[test]
fn skill_level_at_zero_xp_is_zero() {
    for learning in [Learning::Slow, Learning::Standard, Learning::Fast] {
        assert_eq!(Skill::level_for(0, learning), 0);
    }
}
