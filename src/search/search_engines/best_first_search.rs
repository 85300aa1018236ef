//! Best-first search driven one step at a time.
//!
//! The engine keeps its frontier, explored table and counters between calls,
//! so a driver can run it to completion, a batch of steps at a time, or one
//! step per animation frame. Uniform-cost search and A* share this engine;
//! uniform-cost search is the case where every heuristic estimate is 0.
//!
//! The frontier uses lazy deletion: pushing a cheaper node for a state leaves
//! older nodes for the same state in place, and those are discarded when they
//! are popped.

use crate::search::{
    search_engines::{
        ExploredTable, Progress, SearchError, SearchOutcome, SearchStatus, Snapshot, Solution,
        TerminationCondition,
    },
    Cost, NodeId, SearchProblem, SearchSpace, SearchStatistics,
};
use priority_queue::PriorityQueue;
use std::{cmp::Reverse, num::NonZeroUsize, rc::Rc};
use tracing::{debug, trace};

#[derive(Debug)]
pub struct BestFirstSearch<'a, P: SearchProblem> {
    problem: &'a P,
    use_heuristic: bool,
    status: SearchStatus,
    search_space: SearchSpace<P::State>,
    /// Open nodes keyed by `g + h`. Ties are broken arbitrarily.
    frontier: PriorityQueue<NodeId, Reverse<Cost>>,
    explored: ExploredTable<P::State>,
    statistics: SearchStatistics,
}

impl<'a, P: SearchProblem> BestFirstSearch<'a, P> {
    /// Create an engine in the [`SearchStatus::Ready`] state, with only the
    /// start node in the frontier.
    pub fn new(problem: &'a P, use_heuristic: bool) -> Self {
        let mut statistics = SearchStatistics::new(if use_heuristic { "astar" } else { "ucs" });
        let initial_state = problem.initial_state();
        let initial_h = if use_heuristic {
            problem.heuristic(&initial_state)
        } else {
            0
        };
        let search_space = SearchSpace::new(initial_state, initial_h);

        let mut frontier = PriorityQueue::new();
        let root_node = search_space.get_root_node();
        frontier.push(root_node.get_node_id(), Reverse(root_node.get_f()));
        statistics.increment_generated_nodes(1);

        Self {
            problem,
            use_heuristic,
            status: SearchStatus::Ready,
            search_space,
            frontier,
            explored: Rc::default(),
            statistics,
        }
    }

    /// Run up to `steps` steps and return the snapshot of the last one. Stops
    /// early at the first success or failure.
    pub fn advance(&mut self, steps: NonZeroUsize) -> Result<Snapshot<P::State>, SearchError> {
        if self.status.is_terminal() {
            return Err(SearchError::EngineAlreadyTerminated);
        }

        let mut remaining = steps.get();
        loop {
            let snapshot = self.step();
            remaining -= 1;
            if remaining == 0 || snapshot.is_terminal() {
                return Ok(snapshot);
            }
        }
    }

    /// Advance until the search succeeds or fails.
    pub fn run_to_completion(&mut self) -> Result<SearchOutcome<P::State>, SearchError> {
        loop {
            if let Some(outcome) = self.advance(NonZeroUsize::MAX)?.into_outcome() {
                return Ok(outcome);
            }
        }
    }

    /// Advance `batch` steps at a time until the search succeeds or fails,
    /// checking `termination` between batches.
    pub fn run_with_limits(
        &mut self,
        batch: NonZeroUsize,
        termination: &mut TerminationCondition,
    ) -> Result<SearchOutcome<P::State>, SearchError> {
        loop {
            let snapshot = self.advance(batch)?;
            if let Snapshot::Running(progress) = &snapshot {
                debug!(
                    frontier_size = progress.frontier_size,
                    expanded = progress.expanded,
                    next = ?progress.current_node.get_state(),
                    f = progress.current_node.get_f(),
                );
            }
            if let Some(outcome) = snapshot.into_outcome() {
                return Ok(outcome);
            }

            termination.log_if_needed();
            if let Some(reason) = termination.should_terminate() {
                return Err(SearchError::Terminated(reason));
            }
        }
    }

    /// One step: expand the node that the previous snapshot showed at the top
    /// of the frontier (there is none before the first step), then report the
    /// next node to be expanded.
    fn step(&mut self) -> Snapshot<P::State> {
        if self.status == SearchStatus::Running {
            if let Some(goal_id) = self.expand_next() {
                return self.succeed(goal_id);
            }
        }

        match self.peek() {
            Some(progress) => {
                self.status = SearchStatus::Running;
                Snapshot::Running(progress)
            }
            None => self.fail(),
        }
    }

    /// Pop the best node and expand it. Returns the node id if it holds a
    /// goal state.
    fn expand_next(&mut self) -> Option<NodeId> {
        let (node_id, _) = self.frontier.pop()?;
        let node = self.search_space.get_node(node_id);
        if self.problem.is_goal(node.get_state()) {
            return Some(node_id);
        }

        let g = node.get_g();
        if let Some(&explored_g) = self.explored.get(node.get_state()) {
            if explored_g <= g {
                self.statistics.increment_stale_nodes();
                return None;
            }
        }

        let state = node.get_state().clone();
        trace!(?state, g, h = node.get_h(), "expanding");
        Rc::make_mut(&mut self.explored).insert(state.clone(), g);
        self.statistics.increment_expanded_nodes();

        let mut generated = 0;
        for (next_state, edge_cost) in self.problem.successors(&state) {
            let new_cost = g + edge_cost;
            let improves = self
                .explored
                .get(&next_state)
                .map_or(true, |&explored_g| new_cost < explored_g);
            if !improves {
                continue;
            }

            let h = if self.use_heuristic {
                self.problem.heuristic(&next_state)
            } else {
                0
            };
            let child_id = self.search_space.insert_node(next_state, new_cost, h, node_id);
            self.frontier.push(child_id, Reverse(new_cost + h));
            generated += 1;
        }
        self.statistics.increment_generated_nodes(generated);

        None
    }

    fn peek(&mut self) -> Option<Progress<P::State>> {
        let (&node_id, _) = self.frontier.peek()?;
        let frontier_size = self.frontier.len();
        self.statistics.register_frontier_size(frontier_size);

        Some(Progress {
            frontier_size,
            expanded: self.statistics.expanded_nodes(),
            current_node: self.search_space.get_node(node_id).clone(),
            explored: Rc::clone(&self.explored),
        })
    }

    fn succeed(&mut self, goal_id: NodeId) -> Snapshot<P::State> {
        self.status = SearchStatus::Success;
        self.statistics.finalise_search();

        let solution = Solution {
            path: self.search_space.extract_path(goal_id),
            cost: self.search_space.get_node(goal_id).get_g(),
            expanded: self.statistics.expanded_nodes(),
            max_frontier: self.statistics.max_frontier_size(),
        };
        debug!(
            cost = solution.cost,
            path_length = solution.path.len(),
            expanded = solution.expanded,
            "goal reached"
        );
        self.frontier.clear();
        Snapshot::Success(solution)
    }

    fn fail(&mut self) -> Snapshot<P::State> {
        self.status = SearchStatus::Failure;
        self.statistics.finalise_search();
        debug!(expanded = self.statistics.expanded_nodes(), "frontier exhausted");
        Snapshot::Failure {
            expanded: self.statistics.expanded_nodes(),
        }
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn frontier_size(&self) -> usize {
        self.frontier.len()
    }

    pub fn explored(&self) -> ExploredTable<P::State> {
        Rc::clone(&self.explored)
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{
        search_engines::{SearchEngineName, Termination},
        validate, Position, Terrain, TerrainGrid, TreasureHunt, TreasureState,
    };
    use std::time::Duration;
    use crate::test_utils::*;

    fn one() -> NonZeroUsize {
        NonZeroUsize::MIN
    }

    fn solve(hunt: &TreasureHunt, name: SearchEngineName) -> SearchOutcome<TreasureState> {
        name.create(hunt).run_to_completion().unwrap()
    }

    fn solution(outcome: SearchOutcome<TreasureState>) -> Solution<TreasureState> {
        match outcome {
            SearchOutcome::Success(solution) => solution,
            SearchOutcome::Failure { expanded } => {
                panic!("search failed after expanding {} nodes", expanded)
            }
        }
    }

    fn open_sea(size: usize) -> TreasureHunt {
        let last = size - 1;
        TreasureHunt::new(
            TerrainGrid::filled(size, size, Terrain::Sand).unwrap(),
            Position::new(0, 0),
            Position::new(last, 0),
            Position::new(last, last),
            Position::new(0, last),
        )
        .unwrap()
    }

    #[test]
    fn islet_costs_twelve_for_both_engines() {
        let hunt = TreasureHunt::from_text(ISLET_MAP_TEXT).unwrap();
        let ucs = solution(solve(&hunt, SearchEngineName::Ucs));
        let astar = solution(solve(&hunt, SearchEngineName::Astar));
        assert_eq!(ucs.cost, 12);
        assert_eq!(astar.cost, 12);
        assert!(astar.expanded <= ucs.expanded);
        assert_eq!(ucs.path.len(), 13);
        assert!(validate(&ucs.path, &hunt, ucs.cost).is_ok());
        assert!(validate(&astar.path, &hunt, astar.cost).is_ok());
    }

    #[test]
    fn engines_agree_on_mixed_terrain() {
        let hunt = TreasureHunt::from_text(ARCHIPELAGO_MAP_TEXT).unwrap();
        let ucs = solution(solve(&hunt, SearchEngineName::Ucs));
        let astar = solution(solve(&hunt, SearchEngineName::Astar));
        assert_eq!(ucs.cost, ARCHIPELAGO_OPTIMAL_COST);
        assert_eq!(astar.cost, ARCHIPELAGO_OPTIMAL_COST);
        assert!(astar.expanded <= ucs.expanded);
        assert!(validate(&ucs.path, &hunt, ucs.cost).is_ok());
        assert!(validate(&astar.path, &hunt, astar.cost).is_ok());
    }

    #[test]
    fn paths_avoid_lava() {
        let hunt = TreasureHunt::from_text(ARCHIPELAGO_MAP_TEXT).unwrap();
        for name in [SearchEngineName::Ucs, SearchEngineName::Astar] {
            let solution = solution(solve(&hunt, name));
            assert!(solution
                .path
                .iter()
                .all(|state| hunt.grid().get(state.position) != Some(Terrain::Lava)));
        }
    }

    #[test]
    fn astar_expands_strictly_fewer_on_open_sea() {
        let hunt = open_sea(20);
        let ucs = solution(solve(&hunt, SearchEngineName::Ucs));
        let astar = solution(solve(&hunt, SearchEngineName::Astar));
        assert_eq!(ucs.cost, 57);
        assert_eq!(astar.cost, 57);
        assert!(astar.expanded < ucs.expanded);
    }

    #[test]
    fn key_is_collected_before_chest() {
        // Walking towards the key passes over the chest first, which must not
        // yield the treasure.
        let hunt = TreasureHunt::new(
            TerrainGrid::filled(5, 1, Terrain::Sand).unwrap(),
            Position::new(0, 0),
            Position::new(3, 0),
            Position::new(1, 0),
            Position::new(0, 0),
        )
        .unwrap();
        for name in [SearchEngineName::Ucs, SearchEngineName::Astar] {
            let solution = solution(solve(&hunt, name));
            assert_eq!(solution.cost, 6);
            let first_key = solution.path.iter().position(|state| state.has_key).unwrap();
            let first_treasure = solution
                .path
                .iter()
                .position(|state| state.has_treasure)
                .unwrap();
            assert!(first_key < first_treasure);
            assert_eq!(solution.path[first_key].position, Position::new(3, 0));
            assert_eq!(solution.path[first_treasure].position, Position::new(1, 0));
        }
    }

    #[test]
    fn sealed_goal_fails_after_exhausting_reachable_states() {
        let hunt = TreasureHunt::from_text(SEALED_GOAL_MAP_TEXT).unwrap();
        for name in [SearchEngineName::Ucs, SearchEngineName::Astar] {
            let mut engine = name.create(&hunt);
            let outcome = engine.run_to_completion().unwrap();
            assert_eq!(outcome, SearchOutcome::Failure { expanded: 64 });
            assert_eq!(engine.status(), SearchStatus::Failure);
        }
    }

    #[test]
    fn sealed_key_fails() {
        let grid = TerrainGrid::filled(4, 4, Terrain::Sand)
            .unwrap()
            .with_cell(Position::new(2, 3), Terrain::Lava)
            .with_cell(Position::new(3, 2), Terrain::Lava);
        let hunt = TreasureHunt::new(
            grid,
            Position::new(0, 0),
            Position::new(3, 3),
            Position::new(0, 3),
            Position::new(3, 0),
        )
        .unwrap();
        let outcome = solve(&hunt, SearchEngineName::Astar);
        assert!(matches!(outcome, SearchOutcome::Failure { .. }));
    }

    #[test]
    fn sealed_chest_fails() {
        // Key and goal are open, but the chest sits behind a lava corner.
        let grid = TerrainGrid::filled(4, 4, Terrain::Sand)
            .unwrap()
            .with_cell(Position::new(2, 3), Terrain::Lava)
            .with_cell(Position::new(3, 2), Terrain::Lava);
        let hunt = TreasureHunt::new(
            grid,
            Position::new(0, 0),
            Position::new(3, 0),
            Position::new(3, 3),
            Position::new(0, 3),
        )
        .unwrap();
        for name in [SearchEngineName::Ucs, SearchEngineName::Astar] {
            let outcome = solve(&hunt, name);
            assert!(matches!(outcome, SearchOutcome::Failure { .. }));
        }
    }

    #[test]
    fn batched_run_matches_full_run() {
        let hunt = TreasureHunt::from_text(ARCHIPELAGO_MAP_TEXT).unwrap();
        let mut termination = TerminationCondition::new(None, None);
        let outcome = SearchEngineName::Astar
            .create(&hunt)
            .run_with_limits(NonZeroUsize::new(7).unwrap(), &mut termination)
            .unwrap();
        assert_eq!(outcome, solve(&hunt, SearchEngineName::Astar));
    }

    #[test]
    fn batched_run_stops_at_time_limit() {
        let hunt = TreasureHunt::from_text(ARCHIPELAGO_MAP_TEXT).unwrap();
        let mut termination = TerminationCondition::new(Some(Duration::ZERO), None);
        std::thread::sleep(Duration::from_millis(2));
        let mut engine = SearchEngineName::Ucs.create(&hunt);
        assert_eq!(
            engine.run_with_limits(one(), &mut termination).unwrap_err(),
            SearchError::Terminated(Termination::TimeLimitExceeded)
        );
        assert_eq!(engine.status(), SearchStatus::Running);
    }

    #[test]
    fn first_snapshot_peeks_the_start_node() {
        let hunt = TreasureHunt::from_text(ISLET_MAP_TEXT).unwrap();
        let mut engine = SearchEngineName::Astar.create(&hunt);
        assert_eq!(engine.status(), SearchStatus::Ready);

        let Snapshot::Running(progress) = engine.advance(one()).unwrap() else {
            panic!("expected a running snapshot");
        };
        assert_eq!(progress.frontier_size, 1);
        assert_eq!(progress.expanded, 0);
        assert!(progress.explored.is_empty());
        assert_eq!(progress.current_node.get_state(), &hunt.start_state());
        assert_eq!(progress.current_node.get_g(), 0);
        assert_eq!(progress.current_node.get_h(), 12);
        assert!(progress.current_node.is_root());
        assert_eq!(engine.status(), SearchStatus::Running);

        let Snapshot::Running(progress) = engine.advance(one()).unwrap() else {
            panic!("expected a running snapshot");
        };
        assert_eq!(progress.expanded, 1);
        assert_eq!(progress.frontier_size, 2);
        assert_eq!(progress.explored.get(&hunt.start_state()), Some(&0));
    }

    #[test]
    fn uniform_cost_search_never_estimates() {
        let hunt = TreasureHunt::from_text(ISLET_MAP_TEXT).unwrap();
        let mut engine = SearchEngineName::Ucs.create(&hunt);
        for _ in 0..20 {
            match engine.advance(one()).unwrap() {
                Snapshot::Running(progress) => assert_eq!(progress.current_node.get_h(), 0),
                _ => panic!("islet cannot be solved in 20 uniform-cost steps"),
            }
        }
    }

    #[test]
    fn batch_stops_at_terminal_snapshot() {
        let hunt = TreasureHunt::from_text(ISLET_MAP_TEXT).unwrap();
        let mut engine = SearchEngineName::Ucs.create(&hunt);
        let snapshot = engine.advance(NonZeroUsize::new(1_000_000).unwrap()).unwrap();
        assert_eq!(snapshot.status(), SearchStatus::Success);
        assert_eq!(engine.frontier_size(), 0);
    }

    #[test]
    fn advancing_after_terminal_is_rejected() {
        let hunt = TreasureHunt::from_text(ISLET_MAP_TEXT).unwrap();
        let mut engine = SearchEngineName::Astar.create(&hunt);
        engine.run_to_completion().unwrap();
        assert_eq!(
            engine.advance(one()).unwrap_err(),
            SearchError::EngineAlreadyTerminated
        );
        assert_eq!(
            engine.run_to_completion().unwrap_err(),
            SearchError::EngineAlreadyTerminated
        );
    }

    #[test]
    fn single_steps_match_full_run() {
        let hunt = TreasureHunt::from_text(ARCHIPELAGO_MAP_TEXT).unwrap();
        let mut engine = SearchEngineName::Astar.create(&hunt);
        let mut steps = 0;
        let outcome = loop {
            steps += 1;
            if let Some(outcome) = engine.advance(one()).unwrap().into_outcome() {
                break outcome;
            }
        };
        assert_eq!(outcome.cost(), Some(ARCHIPELAGO_OPTIMAL_COST));
        // One step per expansion, plus the first peek and the final goal pop,
        // plus one per discarded duplicate.
        let statistics = engine.statistics();
        assert_eq!(
            steps,
            statistics.expanded_nodes() + statistics.stale_nodes() + 2
        );
    }

    #[test]
    fn explored_costs_never_increase() {
        let hunt = TreasureHunt::from_text(ARCHIPELAGO_MAP_TEXT).unwrap();
        for name in [SearchEngineName::Ucs, SearchEngineName::Astar] {
            let mut engine = name.create(&hunt);
            let mut previous = engine.explored();
            loop {
                let snapshot = engine.advance(one()).unwrap();
                let current = engine.explored();
                for (state, cost) in previous.iter() {
                    let now = current.get(state).expect("explored states are never removed");
                    assert!(now <= cost);
                }
                previous = current;
                if snapshot.is_terminal() {
                    break;
                }
            }
        }
    }

    #[test]
    fn retained_snapshot_is_not_mutated() {
        let hunt = TreasureHunt::from_text(ARCHIPELAGO_MAP_TEXT).unwrap();
        let mut engine = SearchEngineName::Ucs.create(&hunt);
        engine.advance(NonZeroUsize::new(10).unwrap()).unwrap();
        let Snapshot::Running(retained) = engine.advance(one()).unwrap() else {
            panic!("expected a running snapshot");
        };
        let frozen: Vec<_> = retained
            .explored
            .iter()
            .map(|(state, cost)| (*state, *cost))
            .collect();

        engine.advance(NonZeroUsize::new(50).unwrap()).unwrap();
        assert!(engine.explored().len() > retained.explored.len());
        assert_eq!(retained.explored.len(), frozen.len());
        for (state, cost) in frozen {
            assert_eq!(retained.explored.get(&state), Some(&cost));
        }
    }

    #[test]
    fn walled_in_start_fails_after_one_expansion() {
        let grid = TerrainGrid::filled(3, 3, Terrain::Sand)
            .unwrap()
            .with_cell(Position::new(1, 0), Terrain::Lava)
            .with_cell(Position::new(0, 1), Terrain::Lava);
        let hunt = TreasureHunt::new(
            grid,
            Position::new(0, 0),
            Position::new(2, 2),
            Position::new(2, 0),
            Position::new(0, 2),
        )
        .unwrap();
        let mut engine = SearchEngineName::Ucs.create(&hunt);
        assert_eq!(engine.advance(one()).unwrap().status(), SearchStatus::Running);
        let snapshot = engine.advance(one()).unwrap();
        assert!(matches!(snapshot, Snapshot::Failure { expanded: 1 }));
    }

    #[test]
    fn max_frontier_is_recorded() {
        let hunt = TreasureHunt::from_text(ISLET_MAP_TEXT).unwrap();
        let mut engine = SearchEngineName::Ucs.create(&hunt);
        let solution = solution(engine.run_to_completion().unwrap());
        assert!(solution.max_frontier >= 2);
        assert!(solution.max_frontier <= engine.statistics().generated_nodes());
        assert_eq!(
            solution.max_frontier,
            engine.statistics().max_frontier_size()
        );
    }
}
