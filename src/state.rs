//! The contract a puzzle domain implements to be searchable.
//!
//! A domain provides:
//! - `State`: a value describing one configuration of the puzzle, the legal
//!   actions out of it, and the pure transition function.
//! - `Heuristic`: an optional cost-to-go estimate used by the informed strategies.
//!
//! The search engine never looks inside a state. It only compares and hashes
//! states (for deduplication), asks them for actions, and applies actions.

use std::fmt::Debug;
use std::hash::Hash;

/// A node of the state space.
///
/// States are treated as immutable values: the frontier and the visited set may
/// hold many of them at once, including several ancestors of the same branch.
/// `apply` therefore takes `&self` and returns a fresh state.
///
/// # Contract
/// - `possible_actions` returns every legal action exactly once, in a
///   deterministic order. An empty list means the state is terminal or stuck.
/// - `apply` is only called with an action returned by `possible_actions` on the
///   same state. Anything else is a precondition violation; implementations may
///   panic or return garbage.
/// - `Eq` and `Hash` must agree, since the engine deduplicates states through a
///   hash set.
pub trait State: Clone + Eq + Hash {
    /// One legal transition out of a state.
    type Action: Clone + Eq + Hash + Debug;

    /// Returns `true` if this state is accepting.
    fn is_solution(&self) -> bool;

    /// Returns `true` if this state provably cannot reach a solution.
    ///
    /// Reserved for pruning; the default never claims a state is dead.
    fn is_dead(&self) -> bool {
        false
    }

    /// Lists the legal actions from this state.
    fn possible_actions(&self) -> Vec<Self::Action>;

    /// Produces the successor state reached through `action`.
    fn apply(&self, action: &Self::Action) -> Self;
}

/// A cost-to-go estimate for states of type `S`.
///
/// For A* to return optimal solutions the heuristic must be admissible: it may
/// never overestimate the true number of actions left to reach a solution. The
/// engine does not check this.
pub trait Heuristic<S> {
    /// Estimates the remaining cost from `state` to a solution.
    fn calculate(&self, state: &S) -> u32;
}

/// The heuristic used when none is given: every state is estimated at 0.
///
/// With it, greedy search degenerates to arbitrary-order search and A* to a
/// cost-ordered (uniform cost) search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZeroHeuristic;

impl<S> Heuristic<S> for ZeroHeuristic {
    fn calculate(&self, _state: &S) -> u32 {
        0
    }
}
