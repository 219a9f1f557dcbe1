//! Search-tree bookkeeping.
//!
//! A `SearchTree` owns every node generated during one search attempt in a flat
//! arena. Nodes refer to each other through `NodeId`s: the parent link is used to
//! rebuild the solution path, the child list records what `expand` produced.
//! Neither link owns anything, so the tree can be dropped as a whole once the
//! attempt is over.

use crate::state::{Heuristic, State};
use std::fmt;
use tracing::trace;

/// Index of a node inside its `SearchTree`.
///
/// Ids are only meaningful for the tree that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena, in creation order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One node of the search tree: a state plus the bookkeeping needed to rank it
/// and to walk back to the root.
#[derive(Clone, Debug)]
pub struct SearchNode<S: State> {
    state: S,
    cost: u32,
    estimate: u32,
    parent: Option<NodeId>,
    action: Option<S::Action>,
    children: Vec<NodeId>,
}

impl<S: State> SearchNode<S> {
    /// The wrapped state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Path cost from the root. With unit-cost actions this is the depth.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Heuristic estimate, computed once when the node was created.
    pub fn estimate(&self) -> u32 {
        self.estimate
    }

    /// `cost + estimate`, the ordering key used by A*.
    pub fn priority(&self) -> u32 {
        self.cost.saturating_add(self.estimate)
    }

    /// The node this one was expanded from, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The action that produced this node from its parent, `None` for the root.
    pub fn action(&self) -> Option<&S::Action> {
        self.action.as_ref()
    }

    /// Children registered by `SearchTree::expand`.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_solution(&self) -> bool {
        self.state.is_solution()
    }
}

/// The arena of nodes for a single search attempt, together with the heuristic
/// used to estimate every node it creates.
///
/// Iterative deepening builds a new tree for every depth bound, so no node is
/// ever shared between two attempts.
pub struct SearchTree<'h, S: State> {
    nodes: Vec<SearchNode<S>>,
    heuristic: &'h dyn Heuristic<S>,
}

impl<'h, S: State> SearchTree<'h, S> {
    /// Creates a tree whose root wraps `initial` with cost 0.
    ///
    /// # Examples
    /// ```
    /// use puzzle_search::state::ZeroHeuristic;
    /// use puzzle_search::tree::SearchTree;
    /// use puzzle_search::utils::puzzle_from_str;
    ///
    /// let puzzle = puzzle_from_str("123405678").unwrap();
    /// let tree = SearchTree::new(puzzle, &ZeroHeuristic);
    /// let root = tree.node(tree.root());
    /// assert_eq!(root.cost(), 0);
    /// assert!(root.parent().is_none());
    /// ```
    pub fn new(initial: S, heuristic: &'h dyn Heuristic<S>) -> Self {
        let mut tree = SearchTree {
            nodes: Vec::new(),
            heuristic,
        };
        tree.new_node(initial, 0, None, None);
        tree
    }

    /// Id of the root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Returns the node with the given id.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this tree.
    pub fn node(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.0]
    }

    /// Number of nodes generated so far, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn heuristic(&self) -> &'h dyn Heuristic<S> {
        self.heuristic
    }

    pub fn is_solution(&self, id: NodeId) -> bool {
        self.nodes[id.0].is_solution()
    }

    fn new_node(
        &mut self,
        state: S,
        cost: u32,
        parent: Option<NodeId>,
        action: Option<S::Action>,
    ) -> NodeId {
        let estimate = self.heuristic.calculate(&state);
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            state,
            cost,
            estimate,
            parent,
            action,
            children: Vec::new(),
        });
        id
    }

    /// Generates one child per legal action of the node's state.
    ///
    /// Each child costs one more than its parent and is registered in the
    /// parent's child list. The parent's state is left untouched.
    ///
    /// # Returns
    /// The ids of the new children, in the order the state listed its actions.
    pub fn expand(&mut self, id: NodeId) -> Vec<NodeId> {
        let actions = self.nodes[id.0].state.possible_actions();
        let child_cost = self.nodes[id.0].cost + 1;
        let mut created = Vec::with_capacity(actions.len());

        for action in actions {
            let child_state = self.nodes[id.0].state.apply(&action);
            let child = self.new_node(child_state, child_cost, Some(id), Some(action));
            created.push(child);
        }

        self.nodes[id.0].children.extend_from_slice(&created);
        trace!(node = %id, children = created.len(), cost = child_cost - 1, "expanded node");
        created
    }

    /// Rebuilds the sequence of actions leading from the root to `id`.
    ///
    /// The root carries no action, so the path of the root itself is empty.
    pub fn solution_path(&self, id: NodeId) -> Vec<S::Action> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &self.nodes[node_id.0];
            if let Some(action) = &node.action {
                path.push(action.clone());
            }
            current = node.parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ZeroHeuristic;

    /// A walk along the integers: from `n` you may step to `n + 1` or `n + 2`.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    struct Line(u32);

    impl State for Line {
        type Action = u32;

        fn is_solution(&self) -> bool {
            self.0 == 4
        }

        fn possible_actions(&self) -> Vec<u32> {
            vec![1, 2]
        }

        fn apply(&self, action: &u32) -> Self {
            Line(self.0 + action)
        }
    }

    struct DistanceToFour;

    impl Heuristic<Line> for DistanceToFour {
        fn calculate(&self, state: &Line) -> u32 {
            4u32.saturating_sub(state.0)
        }
    }

    #[test]
    fn test_root_has_no_parent_or_action() {
        let tree = SearchTree::new(Line(0), &ZeroHeuristic);
        let root = tree.node(tree.root());
        assert_eq!(root.cost(), 0);
        assert!(root.parent().is_none());
        assert!(root.action().is_none());
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_estimate_computed_at_construction() {
        let mut tree = SearchTree::new(Line(0), &DistanceToFour);
        assert_eq!(tree.node(tree.root()).estimate(), 4);

        let children = tree.expand(tree.root());
        assert_eq!(tree.node(children[0]).estimate(), 3);
        assert_eq!(tree.node(children[1]).estimate(), 2);
        assert_eq!(tree.node(children[1]).priority(), 1 + 2);
    }

    #[test]
    fn test_expand_creates_children_with_unit_cost() {
        let mut tree = SearchTree::new(Line(0), &ZeroHeuristic);
        let root = tree.root();
        let children = tree.expand(root);

        assert_eq!(children.len(), 2);
        assert_eq!(tree.node(root).children(), children.as_slice());
        for &child in &children {
            assert_eq!(tree.node(child).cost(), 1);
            assert_eq!(tree.node(child).parent(), Some(root));
        }
        assert_eq!(tree.node(children[0]).state(), &Line(1));
        assert_eq!(tree.node(children[1]).state(), &Line(2));
        // The root still wraps the untouched initial state.
        assert_eq!(tree.node(root).state(), &Line(0));
    }

    #[test]
    fn test_solution_path_reads_root_to_node() {
        let mut tree = SearchTree::new(Line(0), &ZeroHeuristic);
        let first = tree.expand(tree.root());
        let second = tree.expand(first[1]); // Line(2)
        let target = second[1]; // Line(4)

        assert!(tree.is_solution(target));
        assert_eq!(tree.solution_path(target), vec![2, 2]);
        assert_eq!(tree.node(target).cost(), 2);
    }

    #[test]
    fn test_solution_path_of_root_is_empty() {
        let tree = SearchTree::new(Line(4), &ZeroHeuristic);
        assert!(tree.is_solution(tree.root()));
        assert!(tree.solution_path(tree.root()).is_empty());
    }
}
