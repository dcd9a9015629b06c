//! The force chooser: an anytime best-first local search over force
//! compositions. Starting from the initial (locked) set, each iteration pops
//! the best unexplored composition and expands it by dropping one unit or
//! adding one eligible (mini, variant) pair, keeping the top few neighbors.
//! The search never fails; it returns the best force seen when the iteration
//! budget runs out, the frontier empties, or cancellation is observed.

use std::collections::{BTreeSet, BinaryHeap, HashSet};

use crate::model::mini::{ForceUnit, Mini, MiniId, DEFAULT_SKILL};
use crate::model::variant::UnitVariant;
use crate::rng::Rng;
use crate::runner::SearchContext;
use crate::score::scorer::{ForceScorer, ScoredForce};

#[derive(Debug, Clone)]
pub struct ChooserConfig {
    /// Maximum number of expansion iterations.
    pub iteration_budget: u32,
    /// How many of each iteration's neighbors survive into the frontier.
    pub neighbor_fanout: usize,
    /// Shuffle seed. Fixed seed plus identical inputs gives identical output.
    pub seed: u64,
    /// Skill assigned to units the search adds. Initial units keep their own.
    pub default_skill: i32,
}

impl Default for ChooserConfig {
    fn default() -> Self {
        Self {
            iteration_budget: 100,
            neighbor_fanout: 20,
            seed: 0,
            default_skill: DEFAULT_SKILL,
        }
    }
}

/// A mini with its variant list narrowed to those the scorer considers
/// eligible. Minis with no eligible variants are dropped before search.
struct PrunedMini<'a> {
    mini: &'a Mini,
    variants: Vec<&'a UnitVariant>,
}

fn prune_minis<'a>(scorer: &ForceScorer, minis: &'a [Mini], rng: &mut Rng) -> Vec<PrunedMini<'a>> {
    let mut pruned: Vec<PrunedMini<'a>> = minis
        .iter()
        .map(|mini| {
            let mut variants: Vec<&UnitVariant> = mini
                .variants
                .iter()
                .filter(|variant| scorer.unit_could_meet(variant))
                .collect();
            rng.shuffle(&mut variants);
            PrunedMini { mini, variants }
        })
        .filter(|pruned| !pruned.variants.is_empty())
        .collect();
    // Shuffle minis too, so tie-breaking doesn't track catalog order.
    rng.shuffle(&mut pruned);
    pruned
}

/// Runs the search and returns the best-scoring force found.
pub fn choose_units(
    scorer: &ForceScorer,
    minis: &[Mini],
    initial: &BTreeSet<ForceUnit>,
    config: &ChooserConfig,
    ctx: &SearchContext,
) -> BTreeSet<ForceUnit> {
    let mut rng = Rng::new(config.seed);
    let eligible = prune_minis(scorer, minis, &mut rng);

    let start = initial.clone();
    let mut best = scorer.score_force(start.clone());
    let mut visited: HashSet<BTreeSet<ForceUnit>> = HashSet::new();
    visited.insert(start);
    let mut frontier: BinaryHeap<ScoredForce> = BinaryHeap::new();
    frontier.push(best.clone());

    let budget = config.iteration_budget;
    for consumed in 1..=budget {
        if ctx.is_cancelled() {
            break;
        }
        let Some(current) = frontier.pop() else {
            break;
        };

        let current_minis: HashSet<MiniId> =
            current.units.iter().map(|unit| unit.mini).collect();

        // Drop-one neighbors. Initial/locked units are fair game here; the
        // includes-units requirement is what argues for keeping them.
        let mut candidates: Vec<BTreeSet<ForceUnit>> =
            Vec::with_capacity(current.units.len());
        for unit in &current.units {
            let mut next = current.units.clone();
            next.remove(unit);
            candidates.push(next);
        }

        // Add-one neighbors, one per eligible variant of each absent mini.
        // Only absent minis are considered, which keeps at most one unit per
        // mini in every composition the search ever scores.
        for pruned in &eligible {
            if current_minis.contains(&pruned.mini.id) {
                continue;
            }
            for &variant in &pruned.variants {
                let mut next = current.units.clone();
                next.insert(ForceUnit::new(
                    pruned.mini.id,
                    variant.clone(),
                    config.default_skill,
                ));
                candidates.push(next);
            }
        }

        let mut scored: Vec<ScoredForce> = candidates
            .into_iter()
            .filter(|candidate| !visited.contains(candidate))
            .map(|candidate| scorer.score_force(candidate))
            .collect();
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(config.neighbor_fanout);

        for candidate in scored {
            if candidate.score > best.score {
                best = candidate.clone();
            }
            visited.insert(candidate.units.clone());
            frontier.push(candidate);
        }

        ctx.report_progress(consumed as f32 / budget as f32);
    }

    best.units
}
