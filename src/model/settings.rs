//! Force generation settings: a declarative snapshot the host edits and the
//! scorer builder reads. The settings are inert data; each optimization run
//! takes its own copy.

use std::collections::BTreeSet;

use crate::chooser::{choose_units, ChooserConfig};
use crate::model::eras::{AvailabilityCriteria, TechBase};
use crate::model::mini::{ForceUnit, Mini, DEFAULT_SKILL};
use crate::runner::SearchContext;
use crate::score::priority::{ForcePriority, MaximizePointsValue, MaximizeUnitCount};
use crate::score::requirement::{
    AvailableInEra, ConfigError, ForceRequirement, IncludesUnits, MatchingTechBase,
    PointsValueRange, UnitCountRange,
};
use crate::score::scorer::ForceScorer;

/// Which collection manifest the force draws from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MiniLibrary {
    #[default]
    Tomas,
    Custom,
}

impl MiniLibrary {
    /// Manifest file name for the bundled libraries. `Custom` has none; the
    /// host supplies its own path.
    pub fn manifest_name(self) -> Option<&'static str> {
        match self {
            Self::Tomas => Some("inventory-tomas.csv"),
            Self::Custom => None,
        }
    }
}

/// A half-bounded integer range; `None` means unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenIntRange {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

/// Declarative priority selection, turned into a strategy by the scorer
/// builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityKind {
    #[default]
    MaximizePointsValue,
    MaximizeUnitCount,
}

impl PriorityKind {
    pub fn strategy(self) -> Box<dyn ForcePriority> {
        match self {
            Self::MaximizePointsValue => Box::new(MaximizePointsValue),
            Self::MaximizeUnitCount => Box::new(MaximizeUnitCount),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ForceSettings {
    pub library: MiniLibrary,
    pub tech_bases: BTreeSet<TechBase>,
    pub max_points_value: i32,
    pub unit_limit: OpenIntRange,
    pub availability: AvailabilityCriteria,
    /// Units the generated force should include. The pull is soft: the
    /// chooser may drop one when the composite score says so.
    pub locked_units: BTreeSet<ForceUnit>,
    pub default_skill: i32,
    pub priority: PriorityKind,
}

impl Default for ForceSettings {
    fn default() -> Self {
        Self {
            library: MiniLibrary::default(),
            tech_bases: [TechBase::InnerSphere, TechBase::Clan].into(),
            max_points_value: 300,
            unit_limit: OpenIntRange::default(),
            availability: AvailabilityCriteria::default(),
            locked_units: BTreeSet::new(),
            default_skill: DEFAULT_SKILL,
            priority: PriorityKind::default(),
        }
    }
}

impl ForceSettings {
    /// Builds the scorer these settings describe. Fails fast on inverted
    /// ranges rather than failing mid-search.
    pub fn scorer(&self) -> Result<ForceScorer, ConfigError> {
        let mut requirements: Vec<Box<dyn ForceRequirement>> = vec![
            Box::new(PointsValueRange::new(None, Some(self.max_points_value))?),
            Box::new(MatchingTechBase::new(self.tech_bases.clone())),
            Box::new(UnitCountRange::new(self.unit_limit.min, self.unit_limit.max)?),
            Box::new(AvailableInEra::new(self.availability)),
        ];
        if !self.locked_units.is_empty() {
            requirements.push(Box::new(IncludesUnits::new(self.locked_units.clone())));
        }
        Ok(ForceScorer::new(requirements, self.priority.strategy()))
    }

    /// Runs the chooser with these settings, seeding the search with the
    /// locked units.
    pub fn generate_force(
        &self,
        minis: &[Mini],
        seed: u64,
        ctx: &SearchContext,
    ) -> Result<BTreeSet<ForceUnit>, ConfigError> {
        let scorer = self.scorer()?;
        let config = ChooserConfig {
            seed,
            default_skill: self.default_skill,
            ..ChooserConfig::default()
        };
        Ok(choose_units(&scorer, minis, &self.locked_units, &config, ctx))
    }
}
