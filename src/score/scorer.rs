//! Composite scoring: combines an ordered list of requirements with one
//! priority into a single comparable score. Meeting the requirements is
//! categorically better than any priority value.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::model::mini::ForceUnit;
use crate::model::variant::UnitVariant;
use crate::score::priority::ForcePriority;
use crate::score::requirement::ForceRequirement;

/// Distance from meeting a requirement, in [0, 1]. Zero meets the
/// requirement; of two non-zero scores, the smaller is closer to meeting it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequirementScore(f64);

impl RequirementScore {
    pub const MET: Self = Self(0.0);

    pub fn new(distance: f64) -> Self {
        Self(distance)
    }

    pub fn distance(self) -> f64 {
        self.0
    }

    pub fn meets(self) -> bool {
        self.0 == 0.0
    }
}

/// Composite score for a candidate force. Ordering: `Greater` means better.
/// A force that meets all requirements always beats one that does not; among
/// non-meeting forces the smaller aggregate distance wins; among meeting
/// forces the larger priority wins. Not a weighted sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceScore {
    pub requirements: RequirementScore,
    pub priority: f64,
}

impl Eq for ForceScore {}

impl PartialOrd for ForceScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ForceScore {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.requirements.meets(), other.requirements.meets()) {
            (true, true) => self.priority.total_cmp(&other.priority),
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => other
                .requirements
                .distance()
                .total_cmp(&self.requirements.distance()),
        }
    }
}

/// A candidate force bundled with its score, ordered by score so it can sit
/// directly in the frontier heap.
#[derive(Debug, Clone)]
pub struct ScoredForce {
    pub units: BTreeSet<ForceUnit>,
    pub score: ForceScore,
}

impl PartialEq for ScoredForce {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl Eq for ScoredForce {}

impl PartialOrd for ScoredForce {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredForce {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}

pub struct ForceScorer {
    requirements: Vec<Box<dyn ForceRequirement>>,
    priority: Box<dyn ForcePriority>,
}

impl ForceScorer {
    pub fn new(
        requirements: Vec<Box<dyn ForceRequirement>>,
        priority: Box<dyn ForcePriority>,
    ) -> Self {
        Self { requirements, priority }
    }

    /// Whether an individual unit could ever meet every requirement, alone or
    /// as part of a force. Used to prune the candidate pool before search.
    pub fn unit_could_meet(&self, unit: &UnitVariant) -> bool {
        self.requirements
            .iter()
            .all(|requirement| requirement.unit_could_meet(unit))
    }

    /// Score a candidate force: mean requirement distance plus the priority
    /// value.
    pub fn score_force(&self, force: BTreeSet<ForceUnit>) -> ScoredForce {
        let aggregate = if self.requirements.is_empty() {
            0.0
        } else {
            let total: f64 = self
                .requirements
                .iter()
                .map(|requirement| requirement.check_force(&force).distance())
                .sum();
            total / self.requirements.len() as f64
        };
        let priority = self.priority.score_force(&force);
        ScoredForce {
            units: force,
            score: ForceScore {
                requirements: RequirementScore::new(aggregate),
                priority,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::mini::MiniId;
    use crate::score::priority::MaximizePointsValue;
    use crate::score::requirement::{PointsValueRange, UnitCountRange};

    fn score(requirements: f64, priority: f64) -> ForceScore {
        ForceScore {
            requirements: RequirementScore::new(requirements),
            priority,
        }
    }

    #[test]
    fn meeting_beats_non_meeting_regardless_of_priority() {
        assert!(score(0.0, 1.0) > score(0.2, 1000.0));
        assert!(score(0.9, 1000.0) < score(0.0, 0.0));
    }

    #[test]
    fn among_non_meeting_smaller_distance_wins() {
        assert!(score(0.1, 0.0) > score(0.5, 100.0));
        assert!(score(0.5, 0.0) < score(0.2, 0.0));
    }

    #[test]
    fn among_meeting_larger_priority_wins() {
        assert!(score(0.0, 300.0) > score(0.0, 200.0));
        assert_eq!(score(0.0, 250.0).cmp(&score(0.0, 250.0)), Ordering::Equal);
    }

    #[test]
    fn ordering_is_transitive_across_the_meets_boundary() {
        let best = score(0.0, 10.0);
        let middle = score(0.1, 999.0);
        let worst = score(0.4, 999.0);
        assert!(best > middle);
        assert!(middle > worst);
        assert!(best > worst);
    }

    #[test]
    fn aggregate_is_mean_of_requirement_distances() {
        let scorer = ForceScorer::new(
            vec![
                Box::new(PointsValueRange::new(None, Some(100)).unwrap()),
                Box::new(UnitCountRange::new(Some(1), None).unwrap()),
            ],
            Box::new(MaximizePointsValue),
        );
        // Empty force: PV range met, unit count misses by 1 -> 0.01 distance.
        let scored = scorer.score_force(BTreeSet::new());
        assert!((scored.score.requirements.distance() - 0.005).abs() < 1e-12);
        assert_eq!(scored.score.priority, 0.0);
    }

    #[test]
    fn zero_requirements_score_as_met() {
        let scorer = ForceScorer::new(Vec::new(), Box::new(MaximizePointsValue));
        let force: BTreeSet<ForceUnit> = std::iter::once(ForceUnit::new(
            MiniId(0),
            crate::model::variant::UnitVariant {
                points_value: 30,
                ..Default::default()
            },
            4,
        ))
        .collect();
        let scored = scorer.score_force(force);
        assert!(scored.score.requirements.meets());
        assert_eq!(scored.score.priority, 30.0);
    }
}
