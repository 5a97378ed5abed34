/// Clan caste a character was raised in.
///
/// Only Clan characters have a caste; everyone else leaves it unset.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ClanCaste {
    MechWarrior,
    AerospaceWarrior,
    Elemental,
    ProtoMechWarrior,
    Scientist,
    Merchant,
    Technician,
    Laborer,
}

impl ClanCaste {
    pub const fn is_warrior(self) -> bool {
        matches!(
            self,
            ClanCaste::MechWarrior
                | ClanCaste::AerospaceWarrior
                | ClanCaste::Elemental
                | ClanCaste::ProtoMechWarrior
        )
    }
}
