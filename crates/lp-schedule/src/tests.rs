//! Unit tests for lp-schedule.

#[cfg(test)]
mod helpers {
    use lp_core::Cell;
    use lp_spatial::{CostField, LatticeGraph, Path};

    pub fn c(x: i32, y: i32, z: i32) -> Cell {
        Cell::new(x, y, z)
    }

    /// Build a validated path on a zero-cost `side³` field.
    pub fn path(side: u32, cells: &[(i32, i32, i32)]) -> Path {
        let field = CostField::uniform(side);
        let graph = LatticeGraph::new(&field);
        Path::from_cells(&graph, cells.iter().map(|&t| Cell::from(t)).collect()).unwrap()
    }

    /// Two paths that both reach (1,1,1) at step 2 and share no other cell.
    pub fn crossing_pair() -> Vec<Path> {
        vec![
            path(3, &[(1, 0, 0), (1, 0, 1), (1, 1, 1), (1, 2, 1)]),
            path(3, &[(0, 0, 1), (0, 1, 1), (1, 1, 1), (2, 1, 1)]),
        ]
    }

    /// A third path reaching (1,1,1) at step 2.
    pub fn third_crosser() -> Path {
        path(3, &[(1, 2, 2), (1, 1, 2), (1, 1, 1), (1, 1, 0)])
    }
}

// ── ReservationTable ──────────────────────────────────────────────────────────

#[cfg(test)]
mod reservation {
    use lp_core::Tick;

    use super::helpers::c;
    use crate::ReservationTable;

    #[test]
    fn empty_table() {
        let t = ReservationTable::new();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert!(!t.is_reserved(c(0, 0, 0), Tick(0)));
    }

    #[test]
    fn reserve_and_query() {
        let mut t = ReservationTable::new();
        assert!(t.reserve(c(1, 1, 1), Tick(3)));
        assert!(t.reserve(c(1, 1, 1), Tick(2)));
        assert!(t.reserve(c(0, 0, 0), Tick(3)));
        assert!(t.is_reserved(c(1, 1, 1), Tick(3)));
        assert!(!t.is_reserved(c(1, 1, 1), Tick(4)));
        assert_eq!(t.len(), 3);
        assert_eq!(t.cell_count(), 2);
    }

    #[test]
    fn duplicate_claim_not_counted() {
        let mut t = ReservationTable::new();
        assert!(t.reserve(c(0, 0, 0), Tick(1)));
        assert!(!t.reserve(c(0, 0, 0), Tick(1)));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn reserved_times_sorted() {
        let mut t = ReservationTable::new();
        for tick in [5, 1, 3] {
            t.reserve(c(2, 2, 2), Tick(tick));
        }
        let times: Vec<_> = t.reserved_times(c(2, 2, 2)).collect();
        assert_eq!(times, [Tick(1), Tick(3), Tick(5)]);
        assert_eq!(t.reserved_times(c(0, 0, 0)).count(), 0);
    }
}

// ── ConflictScheduler ─────────────────────────────────────────────────────────

#[cfg(test)]
mod scheduler {
    use std::collections::HashSet;

    use lp_core::{AgentId, Tick};
    use lp_spatial::{CostField, DijkstraRouter, LatticeGraph, Router};

    use super::helpers::{c, crossing_pair, path, third_crosser};
    use crate::{ConflictScheduler, ScheduleError};

    fn ticks(v: &[u64]) -> Vec<Tick> {
        v.iter().map(|&t| Tick(t)).collect()
    }

    #[test]
    fn empty_input() {
        let s = ConflictScheduler::default().schedule(&[]).unwrap();
        assert!(s.paths.is_empty());
        assert!(s.reservations.is_empty());
    }

    #[test]
    fn disjoint_paths_keep_nominal_times() {
        let paths = vec![
            path(3, &[(0, 0, 0), (1, 0, 0), (2, 0, 0)]),
            path(3, &[(0, 2, 2), (1, 2, 2), (2, 2, 2)]),
        ];
        let s = ConflictScheduler::default().schedule(&paths).unwrap();
        for sp in &s.paths {
            assert_eq!(sp.times(), ticks(&[0, 1, 2]));
            assert!(!sp.is_delayed());
        }
        assert_eq!(s.delayed_agents(), 0);
    }

    #[test]
    fn shared_cell_same_step_gets_distinct_times() {
        let s = ConflictScheduler::new(8).schedule(&crossing_pair()).unwrap();

        // Highest priority is never delayed.
        assert_eq!(s.paths[0].times(), ticks(&[0, 1, 2, 3]));
        // Lower priority: step 2 pushed to 3; step 3 still uses its own nominal time.
        assert_eq!(s.paths[1].times(), ticks(&[0, 1, 3, 3]));
        assert_eq!(s.paths[1].delay_at(2), 1);
        assert_eq!(s.paths[1].delay_at(3), 0);
        assert_eq!(s.paths[1].total_delay(), 1);

        let claims: Vec<_> = s.reservations.reserved_times(c(1, 1, 1)).collect();
        assert_eq!(claims, [Tick(2), Tick(3)]);
    }

    #[test]
    fn delay_queries_past_the_last_step_are_zero() {
        let s = ConflictScheduler::new(8).schedule(&crossing_pair()).unwrap();
        let sp = &s.paths[1];
        assert_eq!(sp.agent(), AgentId(1));
        assert_eq!(sp.times().len(), sp.path().len());
        assert_eq!(sp.delay_at(sp.path().len()), 0);
        assert_eq!(sp.delay_at(usize::MAX), 0);
        assert_eq!(sp.max_delay(), 1);
    }

    #[test]
    fn cells_are_never_changed() {
        let input = crossing_pair();
        let s = ConflictScheduler::new(8).schedule(&input).unwrap();
        assert_eq!(s.clone().into_paths(), input);
        for (sp, p) in s.paths.iter().zip(&input) {
            let cells: Vec<_> = sp.steps().map(|(cell, _, _)| cell).collect();
            assert_eq!(cells, p.cells());
        }
    }

    #[test]
    fn contention_beyond_cap_times_out() {
        let mut paths = crossing_pair();
        paths.push(third_crosser());

        let err = ConflictScheduler::new(1).schedule(&paths).unwrap_err();
        let ScheduleError::Timeout { agent, cell, nominal, max_delay } = err;
        assert_eq!(agent, AgentId(2));
        assert_eq!(cell, c(1, 1, 1));
        assert_eq!(nominal, Tick(2));
        assert_eq!(max_delay, 1);
    }

    #[test]
    fn contention_within_cap_succeeds() {
        let mut paths = crossing_pair();
        paths.push(third_crosser());

        let s = ConflictScheduler::new(2).schedule(&paths).unwrap();
        let effective: Vec<_> = s.paths.iter().map(|p| p.times()[2]).collect();
        assert_eq!(effective, [Tick(2), Tick(3), Tick(4)]);
    }

    #[test]
    fn zero_cap_rejects_any_conflict() {
        let err = ConflictScheduler::new(0).schedule(&crossing_pair());
        assert!(matches!(err, Err(ScheduleError::Timeout { agent: AgentId(1), .. })));
    }

    #[test]
    fn trivial_paths_on_same_cell() {
        let paths = vec![path(2, &[(0, 0, 0)]), path(2, &[(0, 0, 0)])];
        let s = ConflictScheduler::default().schedule(&paths).unwrap();
        assert_eq!(s.paths[0].times(), ticks(&[0]));
        assert_eq!(s.paths[1].times(), ticks(&[1]));
    }

    #[test]
    fn identical_paths_shift_every_step() {
        let p = path(3, &[(0, 0, 0), (1, 0, 0), (2, 0, 0)]);
        let s = ConflictScheduler::default().schedule(&[p.clone(), p]).unwrap();
        assert_eq!(s.paths[1].times(), ticks(&[1, 2, 3]));
    }

    #[test]
    fn schedule_agents_keeps_original_ids() {
        let paths = crossing_pair();
        let err = ConflictScheduler::new(0)
            .schedule_agents([(AgentId(3), &paths[0]), (AgentId(7), &paths[1])])
            .unwrap_err();
        assert!(matches!(err, ScheduleError::Timeout { agent: AgentId(7), .. }));
    }

    #[test]
    fn idempotent() {
        let mut paths = crossing_pair();
        paths.push(third_crosser());
        let sched = ConflictScheduler::new(4);
        let a = sched.schedule(&paths).unwrap();
        let b = sched.schedule(&paths).unwrap();
        assert_eq!(a.paths, b.paths);
    }

    #[test]
    fn no_two_agents_share_a_claim() {
        // Many corner-to-corner and edge-to-edge routes on an empty field.
        let field = CostField::uniform(4);
        let graph = LatticeGraph::new(&field);
        let pairs = [
            ((0, 0, 0), (3, 3, 3)),
            ((3, 3, 3), (0, 0, 0)),
            ((0, 3, 0), (3, 0, 3)),
            ((3, 0, 0), (0, 3, 3)),
            ((0, 0, 3), (3, 3, 0)),
            ((1, 1, 1), (2, 2, 2)),
            ((0, 0, 0), (3, 3, 3)),
        ];
        let paths: Vec<_> = pairs
            .iter()
            .map(|&(a, b)| DijkstraRouter.route(&graph, a.into(), b.into()).unwrap())
            .collect();

        let s = ConflictScheduler::new(64).schedule(&paths).unwrap();

        let mut claims = HashSet::new();
        for sp in &s.paths {
            for (cell, nominal, effective) in sp.steps() {
                assert!(effective >= nominal);
                assert!(claims.insert((cell, effective)), "{cell} claimed twice at {effective}");
            }
        }
        let total_steps: usize = paths.iter().map(|p| p.len()).sum();
        assert_eq!(s.reservations.len(), total_steps);
    }
}
