//! Pathfinding trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The planner calls pathfinding via the [`PathFinder`] trait, so
//! applications can swap in custom implementations (A* with an admissible
//! heuristic, jump-point search) without touching the rest of the pipeline.
//! The default [`DijkstraPathFinder`] returns the globally minimum-cost
//! path.
//!
//! # Cost accumulation
//!
//! The grid graph is 8-connected.  Stepping from cell `p` to neighbor `q`
//! costs
//!
//! ```text
//! len(p→q) × (cost(p) + cost(q)) / 2
//! ```
//!
//! with `len` = 1 for orthogonal and √2 for diagonal steps.  A single-cell
//! path therefore costs 0, and costs are symmetric in the endpoints.
//!
//! # Determinism
//!
//! Frontier entries are ordered by `(cost, row-major linear cell index)`;
//! on equal cost the lower index settles first.  Together with the fixed
//! neighbor visitation order this makes path and cost reproducible for
//! identical inputs.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use trail_grid::{Cell, CostGrid};

use crate::{PlanError, PlanResult};

// ── CellPath ──────────────────────────────────────────────────────────────────

/// The result of a path query: an ordered cell sequence (endpoints
/// inclusive) and its accumulated cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPath {
    /// Cells to traverse in order, from start to end.
    pub cells: Vec<Cell>,
    /// Accumulated traversal cost under the geometric rule above.
    pub total_cost: f64,
}

impl CellPath {
    /// `true` if start and end are the same cell.
    pub fn is_trivial(&self) -> bool {
        self.cells.len() <= 1
    }
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable least-cost path search.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a planner can be shared across
/// threads serving independent route requests.
pub trait PathFinder: Send + Sync {
    /// Compute the minimum-cost path between two cells.
    ///
    /// `grid` must be fully defined (see
    /// [`CostGrid::sanitized`](trail_grid::CostGrid::sanitized)); an
    /// undefined (NaN) cell is never relaxed and behaves as unreachable.
    ///
    /// Fails with [`PlanError::Unreachable`] when either endpoint lies
    /// outside the grid.
    fn least_cost_path(&self, grid: &CostGrid, start: Cell, end: Cell) -> PlanResult<CellPath>;
}

// ── DijkstraPathFinder ────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the 8-connected cell graph.
pub struct DijkstraPathFinder;

impl PathFinder for DijkstraPathFinder {
    fn least_cost_path(&self, grid: &CostGrid, start: Cell, end: Cell) -> PlanResult<CellPath> {
        dijkstra(grid, start, end)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// 8-connected neighborhood with Euclidean step lengths, in fixed
/// visitation order (row-major over the offsets).
const STEPS: [(i64, i64, f64); 8] = [
    (-1, -1, std::f64::consts::SQRT_2),
    (-1, 0, 1.0),
    (-1, 1, std::f64::consts::SQRT_2),
    (0, -1, 1.0),
    (0, 1, 1.0),
    (1, -1, std::f64::consts::SQRT_2),
    (1, 0, 1.0),
    (1, 1, std::f64::consts::SQRT_2),
];

/// Frontier entry.  `Ord` is ascending `(cost, index)`; wrapped in
/// [`Reverse`] the binary heap pops the cheapest entry, lowest linear index
/// first on ties.
#[derive(Copy, Clone, Debug)]
struct Frontier {
    cost: f64,
    index: u32,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

const NO_PREV: u32 = u32::MAX;

fn dijkstra(grid: &CostGrid, start: Cell, end: Cell) -> PlanResult<CellPath> {
    if !grid.in_bounds(start) || !grid.in_bounds(end) {
        return Err(PlanError::Unreachable { start, end });
    }
    if start == end {
        return Ok(CellPath { cells: vec![start], total_cost: 0.0 });
    }

    let rows = grid.rows();
    let cols = grid.cols();
    let n = rows * cols;
    let start_idx = start.linear(cols) as u32;
    let end_idx = end.linear(cols) as u32;

    // dist[v] = best known cost to reach v.
    let mut dist = vec![f64::INFINITY; n];
    // prev[v] = linear index of the cell that reached v; NO_PREV if unreached.
    let mut prev = vec![NO_PREV; n];

    dist[start_idx as usize] = 0.0;

    let mut heap: BinaryHeap<Reverse<Frontier>> = BinaryHeap::new();
    heap.push(Reverse(Frontier { cost: 0.0, index: start_idx }));

    while let Some(Reverse(Frontier { cost, index })) = heap.pop() {
        if index == end_idx {
            return Ok(reconstruct(grid, &prev, start_idx, end_idx, cost));
        }

        // Skip stale heap entries.
        if cost > dist[index as usize] {
            continue;
        }

        let cell = Cell::from_linear(index as usize, cols);
        let here = grid.cost(cell);

        for (dr, dc, len) in STEPS {
            let nr = cell.row as i64 + dr;
            let nc = cell.col as i64 + dc;
            if nr < 0 || nc < 0 || nr >= rows as i64 || nc >= cols as i64 {
                continue;
            }
            let neighbor = Cell::new(nr as u32, nc as u32);
            let n_idx = neighbor.linear(cols);

            // NaN costs poison the comparison below and are never relaxed,
            // so an unsanitized cell is simply unreachable.
            let new_cost = cost + len * 0.5 * (here + grid.cost(neighbor));

            if new_cost < dist[n_idx] {
                dist[n_idx] = new_cost;
                prev[n_idx] = index;
                heap.push(Reverse(Frontier { cost: new_cost, index: n_idx as u32 }));
            }
        }
    }

    // Only reachable with undefined cells in the grid.
    Err(PlanError::Unreachable { start, end })
}

fn reconstruct(
    grid: &CostGrid,
    prev: &[u32],
    start_idx: u32,
    end_idx: u32,
    total_cost: f64,
) -> CellPath {
    let cols = grid.cols();
    let mut cells = Vec::new();
    let mut cur = end_idx;
    loop {
        cells.push(Cell::from_linear(cur as usize, cols));
        if cur == start_idx {
            break;
        }
        cur = prev[cur as usize];
    }
    cells.reverse();
    CellPath { cells, total_cost }
}
