//! The search orchestrator.
//!
//! `search_tree` is the one expand/dedup/terminate loop shared by every
//! strategy; the strategy only decides which frontier the loop pulls from.
//! `iterative_deepening` wraps that loop with a growing depth bound, and
//! `search` dispatches on an `Algorithm`.

use crate::error::Error;
use crate::frontier::{DepthBoundedFrontier, FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
use crate::state::{Heuristic, State};
use crate::tree::SearchTree;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Outcome of one search call.
///
/// Built once when the search ends and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchResult<A> {
    cost: u32,
    expanded_nodes: usize,
    frontier_nodes: usize,
    solution: Vec<A>,
    solved: bool,
}

impl<A> SearchResult<A> {
    /// A successful search reaching a solution of path cost `cost` through
    /// `solution`.
    pub fn solved(cost: u32, expanded_nodes: usize, frontier_nodes: usize, solution: Vec<A>) -> Self {
        SearchResult {
            cost,
            expanded_nodes,
            frontier_nodes,
            solution,
            solved: true,
        }
    }

    /// A search that exhausted its frontier without reaching a solution.
    pub fn empty(expanded_nodes: usize) -> Self {
        SearchResult {
            cost: 0,
            expanded_nodes,
            frontier_nodes: 0,
            solution: Vec::new(),
            solved: false,
        }
    }

    /// Path cost of the solution, 0 if none was found.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Nodes popped from the frontier and expanded. Stale duplicates skipped by
    /// the visited check and leaves without actions are not counted.
    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    /// Frontier size at the moment the solution was popped.
    pub fn frontier_nodes(&self) -> usize {
        self.frontier_nodes
    }

    /// Actions from the initial state to the solution, in execution order.
    pub fn solution(&self) -> &[A] {
        &self.solution
    }

    pub fn into_solution(self) -> Vec<A> {
        self.solution
    }

    /// `true` if no solution was found.
    ///
    /// A solved initial state yields an empty action list but is not empty.
    pub fn is_empty(&self) -> bool {
        !self.solved
    }
}

/// What the visited set keys on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DedupPolicy {
    /// A state is expanded at most once per search.
    State,
    /// A state may be expanded once per distinct path cost. Used by iterative
    /// deepening, where reaching a state again at a shallower depth can still
    /// lead somewhere the deeper visit could not, given the bound.
    StateAndCost,
}

#[derive(PartialEq, Eq, Hash)]
struct VisitKey<S> {
    state: S,
    cost: Option<u32>,
}

/// Runs the shared search loop over `tree`, pulling nodes from `frontier`.
///
/// The loop pops a node, skips it if its key was already visited, returns if it
/// is a solution, and otherwise expands it and feeds the children back into the
/// frontier. It stops with an empty result when the frontier runs dry.
pub fn search_tree<S, F>(
    tree: &mut SearchTree<'_, S>,
    mut frontier: F,
    dedup: DedupPolicy,
) -> SearchResult<S::Action>
where
    S: State,
    F: Frontier,
{
    let mut expanded = 0;
    let mut visited: HashSet<VisitKey<S>> = HashSet::new();

    let root = tree.root();
    frontier.add(root, tree.node(root).cost(), tree.node(root).estimate());

    while let Some(id) = frontier.pop() {
        let node = tree.node(id);
        let key = VisitKey {
            state: node.state().clone(),
            cost: match dedup {
                DedupPolicy::State => None,
                DedupPolicy::StateAndCost => Some(node.cost()),
            },
        };
        if !visited.insert(key) {
            continue; // stale duplicate
        }

        if node.is_solution() {
            let cost = node.cost();
            debug!(cost, expanded, frontier = frontier.len(), "solution found");
            return SearchResult::solved(cost, expanded, frontier.len(), tree.solution_path(id));
        }

        let children = tree.expand(id);
        if children.is_empty() {
            continue;
        }
        expanded += 1;
        for child in children {
            let child_node = tree.node(child);
            frontier.add(child, child_node.cost(), child_node.estimate());
        }
    }

    debug!(expanded, visited = visited.len(), "frontier exhausted");
    SearchResult::empty(expanded)
}

/// How the depth bound grows after a failed iterative-deepening pass.
///
/// The update must be strictly increasing, otherwise a state space without a
/// solution (or with a solution beyond a bound that never grows) keeps the
/// search running forever.
#[derive(Clone, Copy, Debug)]
pub enum DepthUpdate {
    /// `depth + n`.
    Increment(u32),
    /// `2 * depth`, and at least `depth + 1`.
    Double,
    /// A caller-supplied function.
    Custom(fn(u32) -> u32),
}

impl DepthUpdate {
    pub fn next(self, depth: u32) -> u32 {
        match self {
            DepthUpdate::Increment(n) => depth.saturating_add(n),
            DepthUpdate::Double => depth.saturating_mul(2).max(depth.saturating_add(1)),
            DepthUpdate::Custom(update) => update(depth),
        }
    }
}

/// Initial depth bound and growth policy for iterative deepening.
#[derive(Clone, Copy, Debug)]
pub struct DepthSchedule {
    pub initial_depth: u32,
    pub update: DepthUpdate,
}

impl DepthSchedule {
    pub fn new(initial_depth: u32, update: DepthUpdate) -> Self {
        DepthSchedule {
            initial_depth,
            update,
        }
    }
}

impl Default for DepthSchedule {
    /// Start at depth 1 and grow by one.
    fn default() -> Self {
        DepthSchedule::new(1, DepthUpdate::Increment(1))
    }
}

/// Bookkeeping for one depth-bounded pass of iterative deepening.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DeepeningPass {
    pub depth_limit: u32,
    pub expanded_nodes: usize,
    pub solved: bool,
}

/// Result of iterative deepening together with the per-pass history.
#[derive(Clone, Debug)]
pub struct DeepeningOutcome<A> {
    /// The final result. `expanded_nodes` is the sum over all passes.
    pub result: SearchResult<A>,
    pub passes: Vec<DeepeningPass>,
}

impl<A> DeepeningOutcome<A> {
    /// Passes that ended without a solution.
    pub fn failed_passes(&self) -> usize {
        self.passes.iter().filter(|p| !p.solved).count()
    }
}

/// Iterative-deepening depth-first search.
///
/// Each pass builds a fresh `SearchTree` from `initial`, runs the shared loop on a
/// `DepthBoundedFrontier`, and throws the tree away. Nothing from a failed pass is
/// reused except its expansion count, which is added to the final result.
///
/// There is no upper bound on the number of passes: if no solution exists, this
/// does not return.
pub fn iterative_deepening<S: State>(
    initial: &S,
    heuristic: &dyn Heuristic<S>,
    schedule: DepthSchedule,
) -> DeepeningOutcome<S::Action> {
    let mut depth_limit = schedule.initial_depth;
    let mut total_expanded = 0;
    let mut passes = Vec::new();

    loop {
        let mut tree = SearchTree::new(initial.clone(), heuristic);
        let frontier = DepthBoundedFrontier::new(depth_limit);
        let pass = search_tree(&mut tree, frontier, DedupPolicy::StateAndCost);

        total_expanded += pass.expanded_nodes();
        let solved = !pass.is_empty();
        passes.push(DeepeningPass {
            depth_limit,
            expanded_nodes: pass.expanded_nodes(),
            solved,
        });
        debug!(
            depth_limit,
            expanded = pass.expanded_nodes(),
            generated = tree.node_count(),
            solved,
            "iterative deepening pass finished"
        );

        if solved {
            let result = SearchResult::solved(
                pass.cost(),
                total_expanded,
                pass.frontier_nodes(),
                pass.into_solution(),
            );
            return DeepeningOutcome { result, passes };
        }

        depth_limit = schedule.update.next(depth_limit);
    }
}

/// Names of the available strategies, without their parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    Bfs,
    Dfs,
    Greedy,
    AStar,
    Iddfs,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 5] = [
        AlgorithmKind::Bfs,
        AlgorithmKind::Dfs,
        AlgorithmKind::Greedy,
        AlgorithmKind::AStar,
        AlgorithmKind::Iddfs,
    ];

    /// Whether the strategy ranks nodes with the heuristic.
    pub fn is_informed(self) -> bool {
        matches!(self, AlgorithmKind::Greedy | AlgorithmKind::AStar)
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AlgorithmKind::Bfs => "BFS",
            AlgorithmKind::Dfs => "DFS",
            AlgorithmKind::Greedy => "Greedy",
            AlgorithmKind::AStar => "A*",
            AlgorithmKind::Iddfs => "IDDFS",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for AlgorithmKind {
    type Err = Error;

    /// Accepts `bfs`, `dfs`, `greedy`, `a*` / `astar` / `a_star`, and `iddfs`,
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(AlgorithmKind::Bfs),
            "dfs" => Ok(AlgorithmKind::Dfs),
            "greedy" => Ok(AlgorithmKind::Greedy),
            "a*" | "astar" | "a_star" | "a-star" => Ok(AlgorithmKind::AStar),
            "iddfs" | "iterative_deepening" => Ok(AlgorithmKind::Iddfs),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// A fully parameterized search strategy.
#[derive(Clone, Copy, Debug)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Greedy,
    AStar,
    Iddfs(DepthSchedule),
}

impl Algorithm {
    /// Builds the algorithm named by `kind`. `schedule` is only used by IDDFS.
    pub fn from_kind(kind: AlgorithmKind, schedule: DepthSchedule) -> Self {
        match kind {
            AlgorithmKind::Bfs => Algorithm::Bfs,
            AlgorithmKind::Dfs => Algorithm::Dfs,
            AlgorithmKind::Greedy => Algorithm::Greedy,
            AlgorithmKind::AStar => Algorithm::AStar,
            AlgorithmKind::Iddfs => Algorithm::Iddfs(schedule),
        }
    }

    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Algorithm::Bfs => AlgorithmKind::Bfs,
            Algorithm::Dfs => AlgorithmKind::Dfs,
            Algorithm::Greedy => AlgorithmKind::Greedy,
            Algorithm::AStar => AlgorithmKind::AStar,
            Algorithm::Iddfs(_) => AlgorithmKind::Iddfs,
        }
    }

    pub fn is_iterative(&self) -> bool {
        matches!(self, Algorithm::Iddfs(_))
    }

    pub fn dedup_policy(&self) -> DedupPolicy {
        if self.is_iterative() {
            DedupPolicy::StateAndCost
        } else {
            DedupPolicy::State
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

/// Searches the state space rooted at `initial` with the given strategy.
///
/// `initial` itself is never modified; every attempt works on its own tree built
/// from a clone of it.
///
/// # Examples
/// ```
/// use puzzle_search::eight_puzzle::ManhattanHeuristic;
/// use puzzle_search::solver::{search, Algorithm};
/// use puzzle_search::state::State;
/// use puzzle_search::utils::puzzle_from_str;
///
/// let puzzle = puzzle_from_str("123405786").unwrap();
/// let result = search(&puzzle, &ManhattanHeuristic, &Algorithm::AStar);
/// assert_eq!(result.cost(), 2);
///
/// let mut replay = puzzle.clone();
/// for slide in result.solution() {
///     replay = replay.apply(slide);
/// }
/// assert!(replay.is_solution());
/// ```
pub fn search<S: State>(
    initial: &S,
    heuristic: &dyn Heuristic<S>,
    algorithm: &Algorithm,
) -> SearchResult<S::Action> {
    debug!(algorithm = %algorithm, "starting search");

    let result = match *algorithm {
        Algorithm::Iddfs(schedule) => iterative_deepening(initial, heuristic, schedule).result,
        Algorithm::Bfs => run_once(initial, heuristic, FifoFrontier::new()),
        Algorithm::Dfs => run_once(initial, heuristic, LifoFrontier::new()),
        Algorithm::Greedy => run_once(initial, heuristic, PriorityFrontier::greedy()),
        Algorithm::AStar => run_once(initial, heuristic, PriorityFrontier::a_star()),
    };

    debug!(
        algorithm = %algorithm,
        found = !result.is_empty(),
        cost = result.cost(),
        expanded = result.expanded_nodes(),
        "search finished"
    );
    result
}

fn run_once<S: State, F: Frontier>(
    initial: &S,
    heuristic: &dyn Heuristic<S>,
    frontier: F,
) -> SearchResult<S::Action> {
    let mut tree = SearchTree::new(initial.clone(), heuristic);
    search_tree(&mut tree, frontier, DedupPolicy::State)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eight_puzzle::{EightPuzzleState, ManhattanHeuristic, OutOfPlaceHeuristic, Slide};
    use crate::engine::Board;
    use crate::fill_zone::FillZoneState;
    use crate::heuristics::{ColorCountHeuristic, CombinedHeuristic, EccentricityHeuristic};
    use crate::state::ZeroHeuristic;
    use crate::utils::puzzle_from_str;

    /// Walk along the naturals in steps of 1 or 2, looking for `target`.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    struct Line {
        at: u32,
        target: u32,
    }

    impl State for Line {
        type Action = u32;

        fn is_solution(&self) -> bool {
            self.at == self.target
        }

        fn possible_actions(&self) -> Vec<u32> {
            vec![1, 2]
        }

        fn apply(&self, action: &u32) -> Self {
            Line {
                at: self.at + action,
                target: self.target,
            }
        }
    }

    /// Position in a fixed directed graph.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    struct Graph {
        at: usize,
        goal: usize,
        edges: &'static [&'static [usize]],
    }

    impl State for Graph {
        type Action = usize;

        fn is_solution(&self) -> bool {
            self.at == self.goal
        }

        fn possible_actions(&self) -> Vec<usize> {
            self.edges[self.at].to_vec()
        }

        fn apply(&self, action: &usize) -> Self {
            Graph {
                at: *action,
                ..self.clone()
            }
        }
    }

    // 0 -> 1 -> 2 -> 3 -> 4 (goal), plus a shortcut 0 -> 5 -> 4 and a cycle 2 -> 0.
    const SHORTCUT_GRAPH: &[&[usize]] = &[&[5, 1], &[2], &[3, 0], &[4], &[], &[4]];

    /// A state that is neither solved nor has anywhere to go.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    struct Stuck;

    impl State for Stuck {
        type Action = ();

        fn is_solution(&self) -> bool {
            false
        }

        fn possible_actions(&self) -> Vec<()> {
            Vec::new()
        }

        fn apply(&self, _action: &()) -> Self {
            Stuck
        }
    }

    fn all_algorithms() -> Vec<Algorithm> {
        AlgorithmKind::ALL
            .iter()
            .map(|&kind| Algorithm::from_kind(kind, DepthSchedule::default()))
            .collect()
    }

    fn replay<S: State>(start: &S, actions: &[S::Action]) -> S {
        actions.iter().fold(start.clone(), |state, a| state.apply(a))
    }

    #[test]
    fn test_bfs_accounting_on_line() {
        let start = Line { at: 0, target: 4 };
        let result = search(&start, &ZeroHeuristic, &Algorithm::Bfs);

        assert!(!result.is_empty());
        assert_eq!(result.cost(), 2);
        assert_eq!(result.solution(), &[2, 2]);
        // Expanded: 0, 1, 2, 3. The second visits of 2 and 3 are skipped.
        assert_eq!(result.expanded_nodes(), 4);
        // Still queued: the second 4 (from 3) and 5.
        assert_eq!(result.frontier_nodes(), 2);
    }

    #[test]
    fn test_bfs_prefers_shortest_path() {
        let start = Graph {
            at: 0,
            goal: 4,
            edges: SHORTCUT_GRAPH,
        };
        let result = search(&start, &ZeroHeuristic, &Algorithm::Bfs);
        assert_eq!(result.cost(), 2);
        assert_eq!(result.solution(), &[5, 4]);
    }

    #[test]
    fn test_dfs_terminates_on_cyclic_graph() {
        let start = Graph {
            at: 0,
            goal: 4,
            edges: SHORTCUT_GRAPH,
        };
        let result = search(&start, &ZeroHeuristic, &Algorithm::Dfs);
        assert!(!result.is_empty());
        // The LIFO pops the last listed action (1) first and follows the long way.
        assert_eq!(result.solution(), &[1, 2, 3, 4]);
        assert_eq!(result.cost(), 4);
        assert_eq!(replay(&start, result.solution()).at, 4);
    }

    #[test]
    fn test_dfs_exhausts_cycle_without_goal() {
        const CYCLE: &[&[usize]] = &[&[1], &[2], &[0], &[]];
        let start = Graph {
            at: 0,
            goal: 3,
            edges: CYCLE,
        };
        let result = search(&start, &ZeroHeuristic, &Algorithm::Dfs);
        assert!(result.is_empty());
        assert_eq!(result.expanded_nodes(), 3);
        assert_eq!(result.cost(), 0);
        assert_eq!(result.frontier_nodes(), 0);
    }

    #[test]
    fn test_stuck_state_gives_empty_result_for_every_strategy() {
        for algorithm in all_algorithms() {
            if algorithm.is_iterative() {
                // Unsolvable spaces never stop iterative deepening.
                continue;
            }
            let result = search(&Stuck, &ZeroHeuristic, &algorithm);
            assert!(result.is_empty(), "{} should find nothing", algorithm);
            assert_eq!(result.expanded_nodes(), 0, "{}", algorithm);
            assert_eq!(result.cost(), 0);
            assert_eq!(result.frontier_nodes(), 0);
            assert!(result.solution().is_empty());
        }
    }

    #[test]
    fn test_stuck_state_single_deepening_pass_is_empty() {
        let mut tree = SearchTree::new(Stuck, &ZeroHeuristic);
        let pass = search_tree(&mut tree, DepthBoundedFrontier::new(3), DedupPolicy::StateAndCost);
        assert_eq!(pass, SearchResult::empty(0));
    }

    #[test]
    fn test_solved_initial_state() {
        let start = Line { at: 3, target: 3 };
        for algorithm in all_algorithms() {
            let result = search(&start, &ZeroHeuristic, &algorithm);
            assert!(!result.is_empty(), "{}", algorithm);
            assert_eq!(result.cost(), 0);
            assert_eq!(result.expanded_nodes(), 0);
            assert!(result.solution().is_empty());
        }
    }

    #[test]
    fn test_iterative_deepening_grows_bound_until_solved() {
        let start = Line { at: 0, target: 3 };
        // Only single steps, so three actions are needed.
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        struct Steps(Line);
        impl State for Steps {
            type Action = u32;
            fn is_solution(&self) -> bool {
                self.0.is_solution()
            }
            fn possible_actions(&self) -> Vec<u32> {
                vec![1]
            }
            fn apply(&self, action: &u32) -> Self {
                Steps(self.0.apply(action))
            }
        }

        let schedule = DepthSchedule::new(1, DepthUpdate::Increment(1));
        let outcome = iterative_deepening(&Steps(start), &ZeroHeuristic, schedule);

        assert_eq!(outcome.result.cost(), 3);
        assert_eq!(outcome.result.solution(), &[1, 1, 1]);
        let depths: Vec<u32> = outcome.passes.iter().map(|p| p.depth_limit).collect();
        assert_eq!(depths, vec![1, 2, 3]);
        assert_eq!(outcome.failed_passes(), 2);
        assert!(outcome.passes.last().unwrap().solved);

        // A node at the bound still counts as expanded: its children are
        // generated, then turned away by the frontier.
        let per_pass: Vec<usize> = outcome.passes.iter().map(|p| p.expanded_nodes).collect();
        assert_eq!(per_pass, vec![2, 3, 3]);
        assert_eq!(outcome.result.expanded_nodes(), per_pass.iter().sum::<usize>());
    }

    #[test]
    fn test_iterative_deepening_custom_update() {
        fn jump_to_five(depth: u32) -> u32 {
            depth.max(4) + 1
        }
        let start = Line { at: 0, target: 9 };
        let schedule = DepthSchedule::new(1, DepthUpdate::Custom(jump_to_five));
        let outcome = iterative_deepening(&start, &ZeroHeuristic, schedule);

        let depths: Vec<u32> = outcome.passes.iter().map(|p| p.depth_limit).collect();
        assert_eq!(depths, vec![1, 5]);
        assert_eq!(outcome.result.cost(), 5);
        assert_eq!(replay(&start, outcome.result.solution()).at, 9);
    }

    #[test]
    fn test_iterative_deepening_expansions_non_decreasing() {
        let start = puzzle_from_str("013425786").unwrap();
        let outcome = iterative_deepening(&start, &ZeroHeuristic, DepthSchedule::default());
        let per_pass: Vec<usize> = outcome.passes.iter().map(|p| p.expanded_nodes).collect();
        assert_eq!(outcome.result.expanded_nodes(), per_pass.iter().sum::<usize>());

        // Failed passes explore everything within their bound, so they only grow.
        let failed: Vec<usize> = outcome
            .passes
            .iter()
            .filter(|p| !p.solved)
            .map(|p| p.expanded_nodes)
            .collect();
        assert_eq!(failed.len(), 3);
        assert!(failed.windows(2).all(|w| w[0] <= w[1]), "{:?}", failed);

        let cumulative: Vec<usize> = per_pass
            .iter()
            .scan(0, |total, n| {
                *total += n;
                Some(*total)
            })
            .collect();
        assert!(cumulative.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(outcome.result.cost(), 4);
    }

    #[test]
    fn test_depth_update_rules() {
        assert_eq!(DepthUpdate::Increment(3).next(2), 5);
        assert_eq!(DepthUpdate::Double.next(4), 8);
        assert_eq!(DepthUpdate::Double.next(0), 1);
        assert_eq!(DepthUpdate::Custom(|d| d + 10).next(1), 11);
    }

    #[test]
    fn test_eight_puzzle_costs_across_strategies() {
        // Four slides away from the goal; Manhattan distance is also 4.
        let start = puzzle_from_str("013425786").unwrap();

        let bfs = search(&start, &ZeroHeuristic, &Algorithm::Bfs);
        assert_eq!(bfs.cost(), 4);
        assert_eq!(bfs.solution(), &[Slide::Right, Slide::Down, Slide::Right, Slide::Down]);

        let heuristics: [&dyn Heuristic<EightPuzzleState>; 2] = [&ManhattanHeuristic, &OutOfPlaceHeuristic];
        for heuristic in heuristics {
            let a_star = search(&start, heuristic, &Algorithm::AStar);
            assert_eq!(a_star.cost(), 4);
            assert!(replay(&start, a_star.solution()).is_solution());

            let greedy = search(&start, heuristic, &Algorithm::Greedy);
            assert!(greedy.cost() >= a_star.cost());
            assert!(replay(&start, greedy.solution()).is_solution());
        }

        let dfs = search(&start, &ZeroHeuristic, &Algorithm::Dfs);
        assert!(dfs.cost() >= 4);
        assert_eq!(dfs.solution().len() as u32, dfs.cost());
        assert!(replay(&start, dfs.solution()).is_solution());

        let iddfs = search(&start, &ZeroHeuristic, &Algorithm::Iddfs(DepthSchedule::default()));
        assert_eq!(iddfs.cost(), 4);
        assert!(replay(&start, iddfs.solution()).is_solution());
    }

    #[test]
    fn test_a_star_with_zero_heuristic_matches_bfs_cost() {
        let start = puzzle_from_str("123645780").unwrap();
        let bfs = search(&start, &ZeroHeuristic, &Algorithm::Bfs);
        let uniform = search(&start, &ZeroHeuristic, &Algorithm::AStar);
        assert_eq!(bfs.cost(), uniform.cost());
    }

    #[test]
    fn test_fill_zone_scenario_board_all_strategies() {
        let board = Board::new(vec![
            vec![4, 5, 5, 3],
            vec![4, 3, 0, 3],
            vec![3, 4, 0, 2],
            vec![1, 5, 1, 0],
        ])
        .unwrap();
        let start = FillZoneState::from_board(&board);

        let bfs = search(&start, &ZeroHeuristic, &Algorithm::Bfs);
        assert!(!bfs.solution().is_empty());
        let colors: Vec<u8> = bfs.solution().iter().map(|a| a.color()).collect();
        assert!(board.check_solution(&colors));

        let heuristics: [&dyn Heuristic<FillZoneState>; 3] =
            [&ColorCountHeuristic, &EccentricityHeuristic, &CombinedHeuristic];
        let dfs = search(&start, &ZeroHeuristic, &Algorithm::Dfs);
        for heuristic in heuristics {
            let a_star = search(&start, heuristic, &Algorithm::AStar);
            let greedy = search(&start, heuristic, &Algorithm::Greedy);

            assert_eq!(a_star.cost(), bfs.cost(), "admissible A* must be optimal");
            assert!(a_star.cost() <= greedy.cost());
            assert!(a_star.cost() <= dfs.cost());

            for result in [&a_star, &greedy] {
                let colors: Vec<u8> = result.solution().iter().map(|a| a.color()).collect();
                assert!(board.check_solution(&colors));
            }
        }

        let colors: Vec<u8> = dfs.solution().iter().map(|a| a.color()).collect();
        assert!(board.check_solution(&colors));
    }

    #[test]
    fn test_algorithm_kind_parsing() {
        assert_eq!("bfs".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::Bfs);
        assert_eq!("DFS".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::Dfs);
        assert_eq!("greedy".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::Greedy);
        assert_eq!("A*".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::AStar);
        assert_eq!("astar".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::AStar);
        assert_eq!("iddfs".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::Iddfs);

        let err = "beam".parse::<AlgorithmKind>().unwrap_err();
        assert!(err.to_string().contains("beam"));
    }

    #[test]
    fn test_algorithm_from_kind_keeps_schedule() {
        let schedule = DepthSchedule::new(7, DepthUpdate::Double);
        let algorithm = Algorithm::from_kind(AlgorithmKind::Iddfs, schedule);
        match algorithm {
            Algorithm::Iddfs(s) => assert_eq!(s.initial_depth, 7),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(algorithm.dedup_policy(), DedupPolicy::StateAndCost);
        assert_eq!(Algorithm::AStar.dedup_policy(), DedupPolicy::State);
        assert_eq!(Algorithm::AStar.to_string(), "A*");
    }
}
