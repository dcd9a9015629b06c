//! Force priorities: the scalar objective the chooser maximizes among forces
//! that satisfy the requirements.

use std::collections::BTreeSet;

use crate::model::mini::{pv_sum, ForceUnit};

pub trait ForcePriority: Send + Sync {
    fn score_force(&self, force: &BTreeSet<ForceUnit>) -> f64;
}

/// Maximize the total skill-adjusted points value of the force.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaximizePointsValue;

impl ForcePriority for MaximizePointsValue {
    fn score_force(&self, force: &BTreeSet<ForceUnit>) -> f64 {
        f64::from(pv_sum(force))
    }
}

/// Maximize the number of units in the force.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaximizeUnitCount;

impl ForcePriority for MaximizeUnitCount {
    fn score_force(&self, force: &BTreeSet<ForceUnit>) -> f64 {
        force.len() as f64
    }
}
