/// Rules constants for character creation.
///
/// These values are fixed by the rules system rather than by individual
/// definitions: a skill's tier boundary, for instance, is the same for every
/// tiered skill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RulesConfig;

impl RulesConfig {
    // ===== leveling =====
    /// Highest skill level that still uses the first tier of a tiered property.
    pub const TIER_BOUNDARY: i32 = 3;
    /// Raw XP per trait point (TP).
    pub const TRAIT_XP_PER_POINT: i32 = 100;
    /// Raw XP per attribute score point.
    pub const ATTRIBUTE_XP_PER_POINT: i32 = 100;

    // ===== skill tables =====
    // Index `n` is the cumulative XP needed for skill level `n`.
    /// Thresholds for characters without a learning trait.
    pub const STANDARD_SKILL_XP: [i32; 11] = [20, 30, 50, 80, 120, 170, 230, 300, 380, 470, 570];
    /// Thresholds for characters with an active Fast Learner trait (x0.9).
    pub const FAST_SKILL_XP: [i32; 11] = [18, 27, 45, 72, 108, 153, 207, 270, 342, 423, 513];
    /// Thresholds for characters with an active Slow Learner trait (x1.2).
    pub const SLOW_SKILL_XP: [i32; 11] = [24, 36, 60, 96, 144, 204, 276, 360, 456, 564, 684];

    // ===== well-known names =====
    pub const SLOW_LEARNER: &'static str = "Slow Learner";
    pub const FAST_LEARNER: &'static str = "Fast Learner";
    /// Sub-name marking an open-ended fixed XP option the player must specify.
    pub const ANY_SUB_NAME: &'static str = "Any";
}
