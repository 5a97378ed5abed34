//! Values that change once a skill passes the tier boundary.

use crate::config::RulesConfig;

/// A property with a first-tier value and an optional second-tier value.
///
/// Tiered skills switch to the second tier once their level exceeds
/// [`RulesConfig::TIER_BOUNDARY`]. The boundary is fixed by the rules system,
/// not per skill.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tiered<T> {
    pub first: T,
    pub second: Option<T>,
}

impl<T> Tiered<T> {
    /// A value that never changes with level.
    pub const fn single(first: T) -> Self {
        Self {
            first,
            second: None,
        }
    }

    pub const fn pair(first: T, second: T) -> Self {
        Self {
            first,
            second: Some(second),
        }
    }

    pub const fn has_second(&self) -> bool {
        self.second.is_some()
    }

    /// Selects the value for a skill at `level`.
    ///
    /// Returns the second tier only when `tiered` is set, the level is past
    /// the boundary, and a second tier exists.
    pub fn resolve(&self, tiered: bool, level: i32) -> &T {
        match &self.second {
            Some(second) if tiered && level > RulesConfig::TIER_BOUNDARY => second,
            _ => &self.first,
        }
    }
}

impl<T> From<T> for Tiered<T> {
    fn from(first: T) -> Self {
        Self::single(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untiered_always_uses_first() {
        let value = Tiered::pair(8, 9);
        for level in 0..=10 {
            assert_eq!(*value.resolve(false, level), 8);
        }
    }

    #[test]
    fn tiered_switches_after_boundary() {
        let value = Tiered::pair("CB", "CA");
        assert_eq!(*value.resolve(true, 3), "CB");
        assert_eq!(*value.resolve(true, 4), "CA");
    }

    #[test]
    fn missing_second_tier_falls_back() {
        let value = Tiered::single(7);
        assert_eq!(*value.resolve(true, 9), 7);
    }
}
