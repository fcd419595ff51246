//! Unit tests for trail-plan.
//!
//! All tests use small hand-crafted grids (1 m cells, origin (0, 0),
//! north-up) so expected costs can be derived by hand.

#[cfg(test)]
mod helpers {
    use trail_core::GeoPoint;
    use trail_grid::{Cell, CostGrid, GridTransform};

    use crate::{Location, LocationSet};

    pub fn unit_transform() -> GridTransform {
        GridTransform::north_up(0.0, 0.0, 1.0).unwrap()
    }

    /// `rows × cols` grid of uniform cost 1.
    pub fn uniform_grid(rows: usize, cols: usize) -> CostGrid {
        CostGrid::from_vec(rows, cols, vec![1.0; rows * cols], unit_transform()).unwrap()
    }

    /// A landmark pinned to a cell; geo coordinates mirror the cell index
    /// (arbitrary but distinct, which is all the spatial snap tests need).
    pub fn site(name: &str, row: u32, col: u32) -> Location {
        Location {
            name: name.to_string(),
            geo: GeoPoint::new(row as f64, col as f64),
            cell: Cell::new(row, col),
        }
    }

    pub fn set(locations: Vec<Location>) -> LocationSet {
        LocationSet::new(locations)
    }
}

// ── Locations ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod location {
    use trail_core::{GeoPoint, LocationId, ProjPoint};
    use trail_grid::{Cell, GridError};

    use crate::{Location, LocationSet};

    use super::helpers::{set, site, uniform_grid};

    #[test]
    fn ids_follow_insertion_order() {
        let s = set(vec![site("a", 0, 0), site("b", 1, 1), site("c", 2, 2)]);
        assert_eq!(s.len(), 3);
        let names: Vec<&str> = s.iter().map(|(_, l)| l.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(s.by_name("b"), Some(LocationId(1)));
        assert_eq!(s.by_name("zzz"), None);
    }

    #[test]
    fn nearest_snaps_to_closest_landmark() {
        let s = set(vec![site("a", 0, 0), site("b", 0, 1), site("c", 5, 5)]);
        // Geo coordinates mirror cell indices in these fixtures.
        let hit = s.nearest(GeoPoint::new(0.1, 0.9)).unwrap();
        assert_eq!(hit, LocationId(1));
        assert!(LocationSet::new(vec![]).nearest(GeoPoint::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn resolve_derives_cell_from_projected_point() {
        let grid = uniform_grid(3, 3);
        let loc = Location::resolve(
            "old town",
            GeoPoint::new(26.6, 37.9),
            ProjPoint::new(2.5, -1.5),
            &grid,
        )
        .unwrap();
        assert_eq!(loc.cell, Cell::new(1, 2));
        assert_eq!(loc.name, "old town");
    }

    #[test]
    fn resolve_outside_extent_is_rejected_before_routing() {
        let grid = uniform_grid(3, 3);
        let r = Location::resolve(
            "far away",
            GeoPoint::new(0.0, 0.0),
            ProjPoint::new(100.0, 100.0),
            &grid,
        );
        assert!(matches!(r, Err(GridError::OutOfBounds { .. })));
    }

    #[test]
    fn resolve_wgs84_projects_through_mercator() {
        // 10×10 grid centred on the Mercator origin.
        let t = trail_grid::GridTransform::north_up(-5.0, 5.0, 1.0).unwrap();
        let grid = trail_grid::CostGrid::from_vec(10, 10, vec![1.0; 100], t).unwrap();
        let loc = Location::resolve_wgs84("origin", GeoPoint::new(0.0, 0.0), &grid).unwrap();
        assert_eq!(loc.cell, Cell::new(5, 5));
    }
}

// ── Least-cost path search ────────────────────────────────────────────────────

#[cfg(test)]
mod pathfinder {
    use std::f64::consts::SQRT_2;

    use trail_grid::{Cell, CostGrid};

    use crate::{DijkstraPathFinder, PathFinder, PlanError};

    use super::helpers::{uniform_grid, unit_transform};

    #[test]
    fn same_cell_is_a_single_cell_path_of_cost_zero() {
        let g = uniform_grid(5, 5);
        let p = DijkstraPathFinder
            .least_cost_path(&g, Cell::new(2, 2), Cell::new(2, 2))
            .unwrap();
        assert!(p.is_trivial());
        assert_eq!(p.cells, vec![Cell::new(2, 2)]);
        assert_eq!(p.total_cost, 0.0);
    }

    #[test]
    fn straight_line_on_uniform_grid() {
        let g = uniform_grid(5, 5);
        let p = DijkstraPathFinder
            .least_cost_path(&g, Cell::new(0, 0), Cell::new(0, 4))
            .unwrap();
        // Four orthogonal steps of cost 1·(1+1)/2 each.
        assert!((p.total_cost - 4.0).abs() < 1e-12, "got {}", p.total_cost);
        assert_eq!(p.cells.len(), 5);
        assert!(p.cells.iter().all(|c| c.row == 0));
    }

    #[test]
    fn diagonal_steps_weighted_by_sqrt2() {
        let g = uniform_grid(5, 5);
        let p = DijkstraPathFinder
            .least_cost_path(&g, Cell::new(0, 0), Cell::new(2, 2))
            .unwrap();
        // Two diagonal steps beat any orthogonal detour: 2·√2 < 4.
        assert!((p.total_cost - 2.0 * SQRT_2).abs() < 1e-12);
        assert_eq!(p.cells.len(), 3);
    }

    #[test]
    fn cost_is_symmetric_in_the_endpoints() {
        let g = CostGrid::from_rows(
            vec![
                vec![1.0, 3.0, 1.0],
                vec![2.0, 5.0, 1.0],
                vec![1.0, 1.0, 4.0],
            ],
            unit_transform(),
        )
        .unwrap();
        let a = Cell::new(0, 0);
        let b = Cell::new(2, 2);
        let fwd = DijkstraPathFinder.least_cost_path(&g, a, b).unwrap();
        let rev = DijkstraPathFinder.least_cost_path(&g, b, a).unwrap();
        assert!((fwd.total_cost - rev.total_cost).abs() < 1e-9);
    }

    #[test]
    fn routes_around_sanitized_undefined_cell() {
        let g = CostGrid::from_rows(
            vec![
                vec![1.0, 1.0, 1.0],
                vec![1.0, f64::NAN, 1.0],
                vec![1.0, 1.0, 1.0],
            ],
            unit_transform(),
        )
        .unwrap()
        .sanitized()
        .unwrap();

        let p = DijkstraPathFinder
            .least_cost_path(&g, Cell::new(1, 0), Cell::new(1, 2))
            .unwrap();

        // Straight through the sentinel cell would cost 11; around it 2·√2.
        assert!(!p.cells.contains(&Cell::new(1, 1)));
        // Equal-cost detours over (0,1) and (2,1): the lower linear index
        // settles first, so the northern route is the deterministic pick.
        assert_eq!(p.cells, vec![Cell::new(1, 0), Cell::new(0, 1), Cell::new(1, 2)]);
    }

    #[test]
    fn nan_wall_without_sanitization_is_unreachable() {
        let g = CostGrid::from_rows(vec![vec![1.0, f64::NAN, 1.0]], unit_transform()).unwrap();
        let r = DijkstraPathFinder.least_cost_path(&g, Cell::new(0, 0), Cell::new(0, 2));
        assert!(matches!(r, Err(PlanError::Unreachable { .. })));
    }

    #[test]
    fn out_of_bounds_endpoint_fails_before_search() {
        let g = uniform_grid(3, 3);
        let r = DijkstraPathFinder.least_cost_path(&g, Cell::new(0, 0), Cell::new(9, 9));
        assert!(matches!(r, Err(PlanError::Unreachable { .. })));
        let r = DijkstraPathFinder.least_cost_path(&g, Cell::new(9, 0), Cell::new(0, 0));
        assert!(matches!(r, Err(PlanError::Unreachable { .. })));
    }

    #[test]
    fn repeated_searches_are_identical() {
        let g = CostGrid::from_rows(
            vec![
                vec![1.0, 9.0, 1.0, 1.0],
                vec![1.0, 9.0, 9.0, 1.0],
                vec![1.0, 1.0, 1.0, 1.0],
            ],
            unit_transform(),
        )
        .unwrap();
        let a = Cell::new(0, 0);
        let b = Cell::new(0, 3);
        let first = DijkstraPathFinder.least_cost_path(&g, a, b).unwrap();
        let second = DijkstraPathFinder.least_cost_path(&g, a, b).unwrap();
        assert_eq!(first, second);
    }
}

// ── Greedy sequencing ─────────────────────────────────────────────────────────

#[cfg(test)]
mod sequencer {
    use trail_core::LocationId;
    use trail_grid::Cell;

    use crate::{NearestNextStrategy, PlanError, PlanResult, TourStrategy};

    fn id(n: u32) -> LocationId {
        LocationId(n)
    }

    /// Symmetric toy cost table over ids 0..=3.
    fn table_cost(a: LocationId, b: LocationId) -> PlanResult<f64> {
        let (x, y) = if a <= b { (a.0, b.0) } else { (b.0, a.0) };
        Ok(match (x, y) {
            (0, 1) => 5.0,
            (0, 2) => 2.0,
            (0, 3) => 9.0,
            (1, 2) => 1.0,
            (1, 3) => 2.0,
            (2, 3) => 7.0,
            _ => f64::INFINITY,
        })
    }

    #[test]
    fn picks_cheapest_next_repeatedly() {
        let mut cost = table_cost;
        let order = NearestNextStrategy
            .order(id(0), &[id(1), id(2), id(3)], &mut cost)
            .unwrap();
        // 0 →(2)→ 2 →(1)→ 1 →(2)→ 3
        assert_eq!(order, vec![id(0), id(2), id(1), id(3)]);
    }

    #[test]
    fn equal_costs_fall_back_to_input_order() {
        let mut cost = |_: LocationId, _: LocationId| Ok(1.0);
        let order = NearestNextStrategy
            .order(id(0), &[id(3), id(1), id(2)], &mut cost)
            .unwrap();
        assert_eq!(order, vec![id(0), id(3), id(1), id(2)]);
    }

    #[test]
    fn output_is_a_permutation_starting_at_start() {
        let mut cost = table_cost;
        let waypoints = [id(3), id(1), id(2)];
        let order = NearestNextStrategy.order(id(0), &waypoints, &mut cost).unwrap();
        assert_eq!(order.len(), 4);
        assert_eq!(order[0], id(0));
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(sorted, vec![id(0), id(1), id(2), id(3)]);
    }

    #[test]
    fn start_occurrences_in_waypoints_are_ignored() {
        let mut cost = table_cost;
        let order = NearestNextStrategy
            .order(id(0), &[id(0), id(1)], &mut cost)
            .unwrap();
        assert_eq!(order, vec![id(0), id(1)]);
    }

    #[test]
    fn single_waypoint() {
        let mut cost = table_cost;
        let order = NearestNextStrategy.order(id(0), &[id(2)], &mut cost).unwrap();
        assert_eq!(order, vec![id(0), id(2)]);
    }

    #[test]
    fn cost_errors_propagate() {
        let mut cost = |_: LocationId, _: LocationId| -> PlanResult<f64> {
            Err(PlanError::Unreachable { start: Cell::new(0, 0), end: Cell::new(9, 9) })
        };
        let r = NearestNextStrategy.order(id(0), &[id(1)], &mut cost);
        assert!(matches!(r, Err(PlanError::Unreachable { .. })));
    }
}

// ── Route assembly ────────────────────────────────────────────────────────────

#[cfg(test)]
mod assembler {
    use trail_core::{LocationId, WalkParams};

    use crate::{DijkstraPathFinder, RouteAssembler};

    use super::helpers::{set, site, uniform_grid};

    #[test]
    fn total_distance_equals_sum_of_leg_lengths() {
        let grid = uniform_grid(5, 5);
        let locs = set(vec![site("a", 0, 0), site("b", 0, 4), site("c", 4, 4)]);
        let order = [LocationId(0), LocationId(1), LocationId(2)];

        let route = RouteAssembler::default()
            .assemble(&grid, &DijkstraPathFinder, &locs, &order)
            .unwrap();

        assert_eq!(route.legs.len(), 2);
        let leg_sum: f64 = route.legs.iter().map(|l| l.length_m).sum();
        assert!((route.metrics.distance_km * 1000.0 - leg_sum).abs() < 1e-9);
    }

    #[test]
    fn polylines_follow_the_grid_transform() {
        let grid = uniform_grid(5, 5);
        let locs = set(vec![site("a", 0, 0), site("b", 0, 4)]);
        let route = RouteAssembler::default()
            .assemble(&grid, &DijkstraPathFinder, &locs, &[LocationId(0), LocationId(1)])
            .unwrap();

        let leg = &route.legs[0];
        assert_eq!(leg.polyline.len(), leg.cells.len());
        for (cell, point) in leg.cells.iter().zip(&leg.polyline) {
            assert_eq!(grid.proj(*cell), *point);
        }
        // 1 m cells along a row: 4 m.
        assert!((leg.length_m - 4.0).abs() < 1e-12);
    }

    #[test]
    fn geographic_polyline_inverts_the_projection() {
        let grid = uniform_grid(5, 5);
        let locs = set(vec![site("a", 0, 0), site("b", 0, 4)]);
        let route = RouteAssembler::default()
            .assemble(&grid, &DijkstraPathFinder, &locs, &[LocationId(0), LocationId(1)])
            .unwrap();

        let leg = &route.legs[0];
        let geo = leg.polyline_wgs84();
        assert_eq!(geo.len(), leg.polyline.len());
        for (g, p) in geo.iter().zip(&leg.polyline) {
            let back = g.to_mercator();
            assert!((back.x - p.x).abs() < 1e-6);
            assert!((back.y - p.y).abs() < 1e-6);
        }
    }

    #[test]
    fn metrics_use_the_default_walking_constants() {
        let grid = uniform_grid(5, 5);
        let locs = set(vec![site("a", 0, 0), site("b", 0, 4), site("c", 4, 4)]);
        let order = [LocationId(0), LocationId(1), LocationId(2)];
        let route = RouteAssembler::default()
            .assemble(&grid, &DijkstraPathFinder, &locs, &order)
            .unwrap();

        // 8 m total at 5 km/h and 60 kcal/km.
        let m = route.metrics;
        assert!((m.distance_km - 0.008).abs() < 1e-12);
        assert!((m.time_h - 0.008 / 5.0).abs() < 1e-12);
        assert!((m.calories_kcal - 0.008 * 60.0).abs() < 1e-12);
        assert_eq!(m.sites, 3);
    }

    #[test]
    fn custom_walk_params() {
        let grid = uniform_grid(5, 5);
        let locs = set(vec![site("a", 0, 0), site("b", 0, 4)]);
        let route = RouteAssembler::new(WalkParams::new(4.0, 100.0))
            .assemble(&grid, &DijkstraPathFinder, &locs, &[LocationId(0), LocationId(1)])
            .unwrap();
        assert!((route.metrics.time_h - 0.004 / 4.0).abs() < 1e-12);
        assert!((route.metrics.calories_kcal - 0.4).abs() < 1e-12);
    }

    #[test]
    fn assembly_is_idempotent() {
        let grid = uniform_grid(5, 5);
        let locs = set(vec![site("a", 0, 0), site("b", 4, 0), site("c", 4, 4)]);
        let order = [LocationId(0), LocationId(2), LocationId(1)];
        let asm = RouteAssembler::default();
        let first = asm.assemble(&grid, &DijkstraPathFinder, &locs, &order).unwrap();
        let second = asm.assemble(&grid, &DijkstraPathFinder, &locs, &order).unwrap();
        assert_eq!(first, second);
    }
}

// ── Planner (end to end) ──────────────────────────────────────────────────────

#[cfg(test)]
mod planner {
    use trail_core::LocationId;
    use trail_grid::{Cell, CostGrid};

    use crate::{PlanError, TourPlanner, TourPlannerBuilder};

    use super::helpers::{set, site, uniform_grid, unit_transform};

    #[test]
    fn equidistant_waypoints_visit_in_input_order() {
        // 5×5 uniform grid, start (0,0), waypoints (0,4) and (4,0): both
        // cost 4 from the start, so the first-listed wins the first leg.
        let grid = uniform_grid(5, 5);
        let locs = set(vec![site("start", 0, 0), site("east", 0, 4), site("south", 4, 0)]);
        let planner = TourPlanner::new(&grid, locs).unwrap();

        let route = planner
            .plan(LocationId(0), &[LocationId(1), LocationId(2)])
            .unwrap();

        assert_eq!(route.order, vec![LocationId(0), LocationId(1), LocationId(2)]);
        assert!((route.legs[0].cost - 4.0).abs() < 1e-12);
        // Second leg is the (0,4)→(4,0) diagonal: 4·√2.
        let expected = 4.0 + 4.0 * std::f64::consts::SQRT_2;
        assert!((route.total_cost() - expected).abs() < 1e-9);
        assert_eq!(route.metrics.sites, 3);
    }

    #[test]
    fn route_avoids_undefined_cells_after_sanitization() {
        let grid = CostGrid::from_rows(
            vec![
                vec![1.0, 1.0, 1.0],
                vec![1.0, f64::NAN, 1.0],
                vec![1.0, 1.0, 1.0],
            ],
            unit_transform(),
        )
        .unwrap();
        let locs = set(vec![site("west", 1, 0), site("east", 1, 2)]);
        let planner = TourPlanner::new(&grid, locs).unwrap();
        // The planner's copy is sanitized; the caller's grid keeps its NaNs.
        assert!(planner.grid().is_fully_defined());
        assert!(!grid.is_fully_defined());

        let route = planner.plan(LocationId(0), &[LocationId(1)]).unwrap();
        assert!(!route.legs[0].cells.contains(&Cell::new(1, 1)));
    }

    #[test]
    fn degenerate_selection_is_refused() {
        let grid = uniform_grid(3, 3);
        let locs = set(vec![site("only", 0, 0), site("other", 2, 2)]);
        let planner = TourPlanner::new(&grid, locs).unwrap();

        let r = planner.plan(LocationId(0), &[]);
        assert!(matches!(r, Err(PlanError::DegenerateSelection { sites: 1 })));
        // A selection that is just the start repeated is equally degenerate.
        let r = planner.plan(LocationId(0), &[LocationId(0), LocationId(0)]);
        assert!(matches!(r, Err(PlanError::DegenerateSelection { .. })));
    }

    #[test]
    fn unknown_location_is_refused() {
        let grid = uniform_grid(3, 3);
        let locs = set(vec![site("a", 0, 0), site("b", 2, 2)]);
        let planner = TourPlanner::new(&grid, locs).unwrap();

        let r = planner.plan(LocationId(99), &[LocationId(1)]);
        assert!(matches!(r, Err(PlanError::UnknownLocation(id)) if id == LocationId(99)));
        let r = planner.plan(LocationId(0), &[LocationId(42)]);
        assert!(matches!(r, Err(PlanError::UnknownLocation(id)) if id == LocationId(42)));
    }

    #[test]
    fn duplicate_waypoints_are_visited_once() {
        let grid = uniform_grid(5, 5);
        let locs = set(vec![site("a", 0, 0), site("b", 0, 4), site("c", 4, 0)]);
        let planner = TourPlanner::new(&grid, locs).unwrap();

        let route = planner
            .plan(LocationId(0), &[LocationId(1), LocationId(1), LocationId(2), LocationId(0)])
            .unwrap();
        assert_eq!(route.order.len(), 3);
        assert_eq!(route.metrics.sites, 3);
    }

    #[test]
    fn replanning_the_same_selection_is_deterministic() {
        let grid = CostGrid::from_rows(
            vec![
                vec![1.0, 4.0, 1.0, 2.0],
                vec![2.0, f64::NAN, 1.0, 1.0],
                vec![1.0, 1.0, 3.0, 1.0],
            ],
            unit_transform(),
        )
        .unwrap();
        let locs = set(vec![site("a", 0, 0), site("b", 2, 3), site("c", 0, 2)]);
        let planner = TourPlanner::new(&grid, locs).unwrap();

        let sel = [LocationId(1), LocationId(2)];
        let first = planner.plan(LocationId(0), &sel).unwrap();
        let second = planner.plan(LocationId(0), &sel).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn builder_overrides_walk_params() {
        let grid = uniform_grid(5, 5);
        let locs = set(vec![site("a", 0, 0), site("b", 0, 4)]);
        let planner = TourPlannerBuilder::new(&grid, locs)
            .walk_params(trail_core::WalkParams::new(2.0, 10.0))
            .build()
            .unwrap();

        let route = planner.plan(LocationId(0), &[LocationId(1)]).unwrap();
        // 4 m at 2 km/h.
        assert!((route.metrics.time_h - 0.004 / 2.0).abs() < 1e-12);
    }
}
