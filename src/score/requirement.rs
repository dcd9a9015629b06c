//! Force requirements: pluggable constraints the scorer combines. Each
//! requirement offers a cheap per-unit eligibility test (used to prune the
//! candidate pool before search) and a per-force distance-to-satisfaction
//! score in [0, 1].

use std::collections::BTreeSet;

use thiserror::Error;

use crate::model::eras::{AvailabilityCriteria, AvailableTechLevel, TechBase};
use crate::model::mini::{pv_sum, ForceUnit};
use crate::model::variant::UnitVariant;
use crate::score::scorer::RequirementScore;

/// Construction-time configuration failures. Bad settings fail here, never
/// silently during search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: f64, max: f64 },
}

pub trait ForceRequirement: Send + Sync {
    /// Whether an individual unit could ever meet the requirement, alone or
    /// as part of a force.
    fn unit_could_meet(&self, _unit: &UnitVariant) -> bool {
        true
    }

    /// How far `force` is from meeting this requirement.
    fn check_force(&self, _force: &BTreeSet<ForceUnit>) -> RequirementScore {
        RequirementScore::MET
    }
}

/// Distance of `value` from the closed interval [min, max], normalized by
/// `max_distance` and clamped to 1.0. Zero inside the interval.
fn range_score(
    value: f64,
    min: Option<f64>,
    max: Option<f64>,
    max_distance: f64,
) -> RequirementScore {
    let bound = max
        .filter(|&limit| value > limit)
        .or_else(|| min.filter(|&limit| value < limit));
    match bound {
        Some(limit) => {
            RequirementScore::new((value - limit).abs().min(max_distance) / max_distance)
        }
        None => RequirementScore::MET,
    }
}

fn check_range(min: Option<f64>, max: Option<f64>) -> Result<(), ConfigError> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(ConfigError::InvalidRange { min, max }),
        _ => Ok(()),
    }
}

/// Keeps the force's total skill-adjusted points value inside a range.
#[derive(Debug, Clone)]
pub struct PointsValueRange {
    min: Option<f64>,
    max: Option<f64>,
}

impl PointsValueRange {
    const MAX_DISTANCE: f64 = 1000.0;

    pub fn new(min: Option<i32>, max: Option<i32>) -> Result<Self, ConfigError> {
        let min = min.map(f64::from);
        let max = max.map(f64::from);
        check_range(min, max)?;
        Ok(Self { min, max })
    }
}

impl ForceRequirement for PointsValueRange {
    fn check_force(&self, force: &BTreeSet<ForceUnit>) -> RequirementScore {
        range_score(f64::from(pv_sum(force)), self.min, self.max, Self::MAX_DISTANCE)
    }
}

/// Keeps the number of units in the force inside a range.
#[derive(Debug, Clone)]
pub struct UnitCountRange {
    min: Option<f64>,
    max: Option<f64>,
}

impl UnitCountRange {
    const MAX_DISTANCE: f64 = 100.0;

    pub fn new(min: Option<i32>, max: Option<i32>) -> Result<Self, ConfigError> {
        let min = min.map(f64::from);
        let max = max.map(f64::from);
        check_range(min, max)?;
        Ok(Self { min, max })
    }
}

impl ForceRequirement for UnitCountRange {
    fn check_force(&self, force: &BTreeSet<ForceUnit>) -> RequirementScore {
        range_score(force.len() as f64, self.min, self.max, Self::MAX_DISTANCE)
    }
}

/// Restricts the force to the allowed tech bases. Enforced entirely by
/// pre-filtering; the per-force score is always met.
#[derive(Debug, Clone)]
pub struct MatchingTechBase {
    tech_bases: BTreeSet<TechBase>,
}

impl MatchingTechBase {
    pub fn new(tech_bases: BTreeSet<TechBase>) -> Self {
        Self { tech_bases }
    }
}

impl ForceRequirement for MatchingTechBase {
    fn unit_could_meet(&self, unit: &UnitVariant) -> bool {
        let base = if unit.is_clan {
            TechBase::Clan
        } else {
            TechBase::InnerSphere
        };
        self.tech_bases.contains(&base)
    }
}

/// Pulls the search toward retaining a required set of units. Score is the
/// fraction of required units missing from the force, so the pull is soft:
/// the chooser may still drop a required unit when that wins overall.
#[derive(Debug, Clone)]
pub struct IncludesUnits {
    units: BTreeSet<ForceUnit>,
}

impl IncludesUnits {
    pub fn new(units: BTreeSet<ForceUnit>) -> Self {
        Self { units }
    }
}

impl ForceRequirement for IncludesUnits {
    fn check_force(&self, force: &BTreeSet<ForceUnit>) -> RequirementScore {
        if self.units.is_empty() {
            return RequirementScore::MET;
        }
        let missing = self.units.difference(force).count();
        RequirementScore::new(missing as f64 / self.units.len() as f64)
    }
}

/// Restricts the force to units available inside the configured era window.
/// Like the tech-base requirement, this is pure pre-filtering.
#[derive(Debug, Clone)]
pub struct AvailableInEra {
    criteria: AvailabilityCriteria,
}

impl AvailableInEra {
    pub fn new(criteria: AvailabilityCriteria) -> Self {
        Self { criteria }
    }
}

impl ForceRequirement for AvailableInEra {
    fn unit_could_meet(&self, unit: &UnitVariant) -> bool {
        let applicable_year = match self.criteria.level {
            AvailableTechLevel::Any => unit.year_introduced,
            AvailableTechLevel::Advanced => unit.advanced_tech_year,
            AvailableTechLevel::Standard => unit.standard_tech_year,
        };
        applicable_year >= self.criteria.min_era.start()
            && applicable_year <= self.criteria.max_era.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::eras::Era;
    use crate::model::mini::MiniId;

    fn unit(points_value: i32) -> ForceUnit {
        ForceUnit::new(
            MiniId(points_value as u32),
            UnitVariant {
                chassis: format!("Chassis-{points_value}"),
                points_value,
                ..UnitVariant::default()
            },
            4,
        )
    }

    fn force(points: &[i32]) -> BTreeSet<ForceUnit> {
        points.iter().copied().map(unit).collect()
    }

    #[test]
    fn range_score_is_zero_inside_bounds() {
        assert!(range_score(50.0, Some(10.0), Some(100.0), 1000.0).meets());
        assert!(range_score(10.0, Some(10.0), Some(100.0), 1000.0).meets());
        assert!(range_score(100.0, Some(10.0), Some(100.0), 1000.0).meets());
        assert!(range_score(5.0, None, None, 1000.0).meets());
    }

    #[test]
    fn range_score_is_normalized_distance_outside_bounds() {
        let over = range_score(150.0, None, Some(100.0), 1000.0);
        assert!((over.distance() - 0.05).abs() < 1e-12);
        let under = range_score(40.0, Some(100.0), None, 1000.0);
        assert!((under.distance() - 0.06).abs() < 1e-12);
        // Far misses clamp at the normalizer.
        let far = range_score(5000.0, None, Some(100.0), 1000.0);
        assert!((far.distance() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn inverted_range_fails_construction() {
        assert_eq!(
            PointsValueRange::new(Some(100), Some(50)).unwrap_err(),
            ConfigError::InvalidRange { min: 100.0, max: 50.0 }
        );
        assert!(UnitCountRange::new(Some(2), Some(2)).is_ok());
    }

    #[test]
    fn points_value_range_scores_the_adjusted_sum() {
        let requirement = PointsValueRange::new(None, Some(100)).unwrap();
        assert!(requirement.check_force(&force(&[40, 60])).meets());
        let over = requirement.check_force(&force(&[40, 60, 50]));
        assert!((over.distance() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn unit_count_range_scores_the_force_size() {
        let requirement = UnitCountRange::new(Some(2), Some(3)).unwrap();
        assert!(requirement.check_force(&force(&[10, 20])).meets());
        let short = requirement.check_force(&force(&[10]));
        assert!((short.distance() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn matching_tech_base_filters_by_clan_flag() {
        let clan_only = MatchingTechBase::new([TechBase::Clan].into());
        let clan_unit = UnitVariant { is_clan: true, ..UnitVariant::default() };
        let is_unit = UnitVariant::default();
        assert!(clan_only.unit_could_meet(&clan_unit));
        assert!(!clan_only.unit_could_meet(&is_unit));

        let both = MatchingTechBase::new([TechBase::Clan, TechBase::InnerSphere].into());
        assert!(both.unit_could_meet(&clan_unit));
        assert!(both.unit_could_meet(&is_unit));
    }

    #[test]
    fn includes_units_scores_fraction_missing() {
        let required = force(&[10, 20]);
        let requirement = IncludesUnits::new(required);
        assert!(requirement.check_force(&force(&[10, 20, 30])).meets());
        let half = requirement.check_force(&force(&[10]));
        assert!((half.distance() - 0.5).abs() < 1e-12);
        let none = requirement.check_force(&force(&[30]));
        assert!((none.distance() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn available_in_era_checks_the_selected_tech_year() {
        let criteria = AvailabilityCriteria {
            min_era: Era::ClanInvasion,
            max_era: Era::CivilWar,
            level: AvailableTechLevel::Any,
        };
        let requirement = AvailableInEra::new(criteria);
        let in_window = UnitVariant { year_introduced: 3055, ..UnitVariant::default() };
        let too_early = UnitVariant { year_introduced: 3049, ..UnitVariant::default() };
        assert!(requirement.unit_could_meet(&in_window));
        assert!(!requirement.unit_could_meet(&too_early));

        let standard = AvailableInEra::new(AvailabilityCriteria {
            level: AvailableTechLevel::Standard,
            ..criteria
        });
        let unit = UnitVariant {
            year_introduced: 3055,
            standard_tech_year: 3070,
            ..UnitVariant::default()
        };
        // Standard mode reads the standard tech year, which falls outside.
        assert!(!standard.unit_could_meet(&unit));
    }
}
