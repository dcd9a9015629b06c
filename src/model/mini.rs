//! Collection entries and chosen units. A `Mini` is a physical model in the
//! player's collection; its identity is its id alone, so two minis of the
//! same chassis stay distinct entries. A `ForceUnit` pairs a mini with one of
//! its variants and a pilot skill; forces are sets of these value types.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::model::variant::UnitVariant;

/// Baseline pilot skill. Points values in the catalog assume this skill.
pub const DEFAULT_SKILL: i32 = 4;

/// Opaque stable identity for a collection entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MiniId(pub u32);

impl fmt::Display for MiniId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A distinct collection entry offering one or more interchangeable stat
/// profiles. Created once at catalog load, immutable thereafter.
#[derive(Debug, Clone)]
pub struct Mini {
    pub id: MiniId,
    pub chassis: String,
    pub variants: Vec<UnitVariant>,
}

impl PartialEq for Mini {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Mini {}

impl Hash for Mini {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Mini {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mini[{}]: {}", self.id, self.chassis)
    }
}

/// One chosen unit in a force: a mini fielding a specific variant at a
/// specific skill. Changing variant or skill means replacing the value, not
/// mutating it in place.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ForceUnit {
    pub mini: MiniId,
    pub variant: UnitVariant,
    pub skill: i32,
}

impl ForceUnit {
    pub fn new(mini: MiniId, variant: UnitVariant, skill: i32) -> Self {
        Self { mini, variant, skill }
    }

    /// The variant's points value adjusted for this unit's skill.
    pub fn points_value(&self) -> i32 {
        modified_points_value(self.variant.points_value, self.skill)
    }
}

impl fmt::Display for ForceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} Skill {} PV: {}",
            self.variant.chassis,
            self.variant.variant,
            self.skill,
            self.points_value()
        )
    }
}

/// Sum of skill-adjusted points values.
pub fn pv_sum<'a, I: IntoIterator<Item = &'a ForceUnit>>(units: I) -> i32 {
    units.into_iter().map(ForceUnit::points_value).sum()
}

/// Per-step cost of improving skill below the baseline. Steeper for more
/// expensive units.
pub fn points_per_skill_increase(base_points: i32) -> i32 {
    ceil_div(base_points - 2, 5).max(1)
}

/// Per-step refund for worsening skill above the baseline. Negative, and
/// shallower than the increase side.
pub fn points_per_skill_decrease(base_points: i32) -> i32 {
    -ceil_div(base_points - 4, 10).max(1)
}

/// Points value of a unit with `base_points` at the given skill. Skill 4 is
/// the baseline; each step away moves the cost by the asymmetric per-step
/// deltas above.
pub fn modified_points_value(base_points: i32, skill: i32) -> i32 {
    let offset = skill - DEFAULT_SKILL;
    let per_step = match offset.cmp(&0) {
        Ordering::Less => points_per_skill_increase(base_points),
        _ => points_per_skill_decrease(base_points),
    };
    base_points + offset.abs() * per_step
}

fn ceil_div(numerator: i32, denominator: i32) -> i32 {
    if numerator <= 0 {
        0
    } else {
        (numerator + denominator - 1) / denominator
    }
}
