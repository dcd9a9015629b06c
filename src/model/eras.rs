//! BattleTech eras and availability criteria. Year spans match the Master
//! Unit List era breakdown; a coarse `Era` aggregates the sub-eras the MUL
//! tracks individually.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TechBase {
    InnerSphere,
    Clan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SubEra {
    AgeOfWar,
    StarLeague,
    EarlySuccessionWar,
    LateSuccessionWarLosTech,
    LateSuccessionWarRenaissance,
    ClanInvasion,
    CivilWar,
    Jihad,
    EarlyRepublic,
    LateRepublic,
    DarkAge,
    IlClan,
}

impl SubEra {
    pub fn start(self) -> i32 {
        self.span().0
    }

    pub fn end(self) -> i32 {
        self.span().1
    }

    fn span(self) -> (i32, i32) {
        match self {
            Self::AgeOfWar => (2005, 2570),
            Self::StarLeague => (2571, 2780),
            Self::EarlySuccessionWar => (2781, 2900),
            Self::LateSuccessionWarLosTech => (2901, 3019),
            Self::LateSuccessionWarRenaissance => (3020, 3049),
            Self::ClanInvasion => (3050, 3061),
            Self::CivilWar => (3062, 3067),
            Self::Jihad => (3068, 3080),
            Self::EarlyRepublic => (3081, 3100),
            Self::LateRepublic => (3101, 3130),
            Self::DarkAge => (3031, 3150),
            Self::IlClan => (3151, 9999),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Era {
    StarLeague,
    SuccessionWars,
    ClanInvasion,
    CivilWar,
    Jihad,
    DarkAge,
    IlClan,
}

impl Era {
    pub fn sub_eras(self) -> &'static [SubEra] {
        match self {
            Self::StarLeague => &[SubEra::AgeOfWar, SubEra::StarLeague],
            Self::SuccessionWars => &[
                SubEra::EarlySuccessionWar,
                SubEra::LateSuccessionWarLosTech,
                SubEra::LateSuccessionWarRenaissance,
            ],
            Self::ClanInvasion => &[SubEra::ClanInvasion],
            Self::CivilWar => &[SubEra::CivilWar],
            Self::Jihad => &[SubEra::Jihad],
            Self::DarkAge => &[SubEra::EarlyRepublic, SubEra::LateRepublic, SubEra::DarkAge],
            Self::IlClan => &[SubEra::IlClan],
        }
    }

    pub fn start(self) -> i32 {
        self.sub_eras().iter().map(|sub| sub.start()).min().unwrap_or(0)
    }

    pub fn end(self) -> i32 {
        self.sub_eras().iter().map(|sub| sub.end()).max().unwrap_or(0)
    }
}

/// Which tech-level introduction year an availability check reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvailableTechLevel {
    #[default]
    Any,
    Advanced,
    Standard,
}

/// An availability window: units must become available between the start of
/// `min_era` and the end of `max_era`, at the selected tech level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityCriteria {
    pub min_era: Era,
    pub max_era: Era,
    pub level: AvailableTechLevel,
}

impl Default for AvailabilityCriteria {
    fn default() -> Self {
        Self {
            min_era: Era::StarLeague,
            max_era: Era::IlClan,
            level: AvailableTechLevel::Any,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_spans_aggregate_sub_eras() {
        assert_eq!(Era::StarLeague.start(), 2005);
        assert_eq!(Era::StarLeague.end(), 2780);
        assert_eq!(Era::SuccessionWars.start(), 2781);
        assert_eq!(Era::SuccessionWars.end(), 3049);
        assert_eq!(Era::IlClan.end(), 9999);
    }

    #[test]
    fn default_criteria_cover_the_full_timeline() {
        let criteria = AvailabilityCriteria::default();
        assert_eq!(criteria.min_era.start(), 2005);
        assert_eq!(criteria.max_era.end(), 9999);
        assert_eq!(criteria.level, AvailableTechLevel::Any);
    }
}
