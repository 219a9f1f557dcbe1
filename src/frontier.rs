//! Frontier strategies: the order in which discovered nodes are explored.
//!
//! Every strategy implements the same small interface (`add`, `pop`, `len`,
//! `is_empty`), and the search loop in [`crate::solver`] is written once against
//! it. The strategies only see node ids plus the two numbers they may rank by,
//! never the states themselves.
//!
//! | Strategy | Container | Pops |
//! |---|---|---|
//! | `FifoFrontier` | `VecDeque` | oldest first (BFS) |
//! | `LifoFrontier` | `Vec` | newest first (DFS) |
//! | `PriorityFrontier` (`Estimate`) | `BinaryHeap` | lowest estimate (greedy) |
//! | `PriorityFrontier` (`CostPlusEstimate`) | `BinaryHeap` | lowest cost + estimate (A*) |
//! | `DepthBoundedFrontier` | `Vec` | newest first, only cost ≤ limit (IDDFS) |

use crate::tree::NodeId;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

/// The set of discovered but not yet expanded nodes, ordered by some policy.
pub trait Frontier {
    /// Offers a node to the frontier. `cost` and `estimate` are the node's path
    /// cost and heuristic estimate; strategies that do not rank ignore them.
    fn add(&mut self, node: NodeId, cost: u32, estimate: u32);

    /// Removes and returns the next node to explore.
    fn pop(&mut self) -> Option<NodeId>;

    /// Number of nodes currently waiting, stale duplicates included.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out. Explores the tree level by level.
#[derive(Clone, Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn add(&mut self, node: NodeId, _cost: u32, _estimate: u32) {
        self.queue.push_back(node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out. Dives along the most recently generated branch.
#[derive(Clone, Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
}

impl LifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    fn add(&mut self, node: NodeId, _cost: u32, _estimate: u32) {
        self.stack.push(node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// The key a `PriorityFrontier` ranks nodes by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriorityOrder {
    /// Heuristic estimate only (greedy best-first).
    Estimate,
    /// Path cost plus heuristic estimate (A*).
    CostPlusEstimate,
}

impl PriorityOrder {
    fn key(self, cost: u32, estimate: u32) -> u32 {
        match self {
            PriorityOrder::Estimate => estimate,
            PriorityOrder::CostPlusEstimate => cost.saturating_add(estimate),
        }
    }
}

/// Min-priority queue over nodes.
///
/// `BinaryHeap` is a max-heap, so entries are wrapped in `Reverse`. Entries with
/// the same priority pop in the order they were added: an insertion counter is
/// the secondary key.
#[derive(Clone, Debug)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Reverse<(u32, u64, NodeId)>>,
    order: PriorityOrder,
    next_seq: u64,
}

impl PriorityFrontier {
    pub fn new(order: PriorityOrder) -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            order,
            next_seq: 0,
        }
    }

    /// Frontier for greedy best-first search.
    pub fn greedy() -> Self {
        Self::new(PriorityOrder::Estimate)
    }

    /// Frontier for A*.
    pub fn a_star() -> Self {
        Self::new(PriorityOrder::CostPlusEstimate)
    }

    pub fn order(&self) -> PriorityOrder {
        self.order
    }
}

impl Frontier for PriorityFrontier {
    fn add(&mut self, node: NodeId, cost: u32, estimate: u32) {
        let key = self.order.key(cost, estimate);
        self.heap.push(Reverse((key, self.next_seq, node)));
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|Reverse((_, _, node))| node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// A LIFO frontier that refuses nodes deeper than a fixed bound.
///
/// Used by iterative deepening: a node is admitted only if its cost is at most
/// `depth_limit` (the bound is inclusive).
#[derive(Clone, Debug)]
pub struct DepthBoundedFrontier {
    inner: LifoFrontier,
    depth_limit: u32,
    rejected: usize,
}

impl DepthBoundedFrontier {
    pub fn new(depth_limit: u32) -> Self {
        DepthBoundedFrontier {
            inner: LifoFrontier::new(),
            depth_limit,
            rejected: 0,
        }
    }

    pub fn depth_limit(&self) -> u32 {
        self.depth_limit
    }

    /// How many nodes were turned away for exceeding the bound.
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

impl Frontier for DepthBoundedFrontier {
    fn add(&mut self, node: NodeId, cost: u32, estimate: u32) {
        if cost <= self.depth_limit {
            self.inner.add(node, cost, estimate);
        } else {
            self.rejected += 1;
        }
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.inner.pop()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}
