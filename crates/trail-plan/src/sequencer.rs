//! Tour sequencing: choose the visiting order of the selected landmarks.
//!
//! # Pluggability
//!
//! The planner calls sequencing via the [`TourStrategy`] trait, so callers
//! with small waypoint counts can swap in an exact solver.  The default
//! [`NearestNextStrategy`] is deliberately the greedy heuristic — it is the
//! behavior route output is defined against, and at O(n²) cost calls it
//! stays responsive for tens of waypoints, where each cost call is a full
//! path search.

use trail_core::LocationId;

use crate::PlanResult;

/// Pairwise cost oracle handed to a strategy: `cost(a, b)` is the
/// least-cost-path total between the two landmarks' cells.  Mutable so the
/// planner can cache repeated pairs within one sequencing pass.
pub type PairCostFn<'a> = dyn FnMut(LocationId, LocationId) -> PlanResult<f64> + 'a;

// ── TourStrategy trait ────────────────────────────────────────────────────────

/// Pluggable waypoint-ordering strategy.
pub trait TourStrategy: Send + Sync {
    /// Order `waypoints` into a visiting sequence beginning at `start`.
    ///
    /// Occurrences of `start` inside `waypoints` are ignored.  The returned
    /// sequence is `start` followed by every other waypoint exactly once.
    fn order(
        &self,
        start: LocationId,
        waypoints: &[LocationId],
        cost: &mut PairCostFn<'_>,
    ) -> PlanResult<Vec<LocationId>>;
}

// ── NearestNextStrategy ───────────────────────────────────────────────────────

/// Greedy nearest-unvisited-next ordering.
///
/// Repeatedly appends the remaining waypoint cheapest to reach from the
/// current position.  Ties are broken by first-encountered input order
/// (strict `<` during the scan), so output is deterministic for a given
/// waypoint iteration order.  Not tour-optimal by design.
pub struct NearestNextStrategy;

impl TourStrategy for NearestNextStrategy {
    fn order(
        &self,
        start: LocationId,
        waypoints: &[LocationId],
        cost: &mut PairCostFn<'_>,
    ) -> PlanResult<Vec<LocationId>> {
        let mut remaining: Vec<LocationId> =
            waypoints.iter().copied().filter(|&w| w != start).collect();

        let mut sequence = Vec::with_capacity(remaining.len() + 1);
        sequence.push(start);
        let mut current = start;

        while !remaining.is_empty() {
            let mut best: Option<(usize, f64)> = None;
            for (i, &candidate) in remaining.iter().enumerate() {
                let c = cost(current, candidate)?;
                if best.is_none_or(|(_, best_cost)| c < best_cost) {
                    best = Some((i, c));
                }
            }
            let Some((i, _)) = best else { break };
            current = remaining.remove(i);
            sequence.push(current);
        }

        Ok(sequence)
    }
}
