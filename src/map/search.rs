//! Generic best-first (A*) search engine
//!
//! The engine is parameterized over the node type through [`SearchSpace`],
//! and over traversability/cost through [`SearchPolicy`], so exact,
//! zone-avoiding and fuzzy queries all run on the same machinery.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use ahash::{AHashMap, AHashSet};
use ordered_float::OrderedFloat;

/// A searchable graph: neighbor expansion plus an admissible heuristic.
pub trait SearchSpace {
    type Node: Copy + Eq + Hash;

    /// Walkable successors of `node` with their base traversal cost.
    fn successors(&self, node: Self::Node) -> Vec<(Self::Node, f32)>;

    /// Admissible estimate of the remaining base cost to `goal`.
    /// Must never overestimate, or the search loses optimality.
    fn heuristic(&self, node: Self::Node, goal: Self::Node) -> f32;
}

/// Per-query traversability and cost shaping.
///
/// The underlying graph is never modified; a policy only filters and
/// biases one search.
pub trait SearchPolicy<N> {
    /// Whether the search may expand into this node at all.
    fn allows(&self, node: N) -> bool {
        let _ = node;
        true
    }

    /// Non-negative cost added on top of the node's base traversal cost.
    /// A negative bias would break heuristic admissibility.
    fn cost_bias(&self, node: N) -> f32 {
        let _ = node;
        0.0
    }
}

/// Exact shortest-path query: no filtering, no bias.
pub struct ExactPolicy;

impl<N> SearchPolicy<N> for ExactPolicy {}

/// An ordered walk from start to destination.
///
/// `nodes` is empty when start equals destination. `cost` is the total
/// base cost of the walk, excluding any per-query bias.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPath<N> {
    pub nodes: Vec<N>,
    pub cost: f32,
}

impl<N> SearchPath<N> {
    pub fn empty() -> Self {
        Self { nodes: Vec::new(), cost: 0.0 }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Entry in the open set. Ties on f-cost break by insertion order, so
/// equally scored expansions are deterministic across runs.
struct OpenEntry<N> {
    node: N,
    f_cost: OrderedFloat<f32>,
    seq: u64,
}

impl<N> PartialEq for OpenEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost && self.seq == other.seq
    }
}

impl<N> Eq for OpenEntry<N> {}

impl<N> Ord for OpenEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap; earlier insertion wins ties.
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<N> PartialOrd for OpenEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the cheapest path under `base cost + policy bias`.
///
/// Returns an empty path when `start == goal`, `None` when the goal is
/// unreachable (or excluded by the policy). Terminates on any finite
/// space: every node is expanded at most once.
pub fn search<S, P>(space: &S, start: S::Node, goal: S::Node, policy: &P) -> Option<SearchPath<S::Node>>
where
    S: SearchSpace,
    P: SearchPolicy<S::Node>,
{
    if start == goal {
        return Some(SearchPath::empty());
    }
    if !policy.allows(start) || !policy.allows(goal) {
        return None;
    }

    let mut open = BinaryHeap::new();
    let mut closed: AHashSet<S::Node> = AHashSet::new();
    let mut came_from: AHashMap<S::Node, S::Node> = AHashMap::new();
    // Biased g drives the priority queue; base g is what callers pay.
    let mut g_biased: AHashMap<S::Node, f32> = AHashMap::new();
    let mut g_base: AHashMap<S::Node, f32> = AHashMap::new();
    let mut seq = 0u64;

    g_biased.insert(start, 0.0);
    g_base.insert(start, 0.0);
    open.push(OpenEntry {
        node: start,
        f_cost: OrderedFloat(space.heuristic(start, goal)),
        seq,
    });

    while let Some(current) = open.pop() {
        if current.node == goal {
            let nodes = reconstruct(&came_from, current.node, start);
            let cost = g_base[&current.node];
            return Some(SearchPath { nodes, cost });
        }
        if !closed.insert(current.node) {
            continue; // stale heap entry
        }

        let current_biased = g_biased[&current.node];
        let current_base = g_base[&current.node];

        for (neighbor, base_cost) in space.successors(current.node) {
            if closed.contains(&neighbor) || !policy.allows(neighbor) {
                continue;
            }

            let tentative = current_biased + base_cost + policy.cost_bias(neighbor);
            let known = g_biased.get(&neighbor).copied().unwrap_or(f32::INFINITY);
            if tentative < known {
                came_from.insert(neighbor, current.node);
                g_biased.insert(neighbor, tentative);
                g_base.insert(neighbor, current_base + base_cost);

                seq += 1;
                open.push(OpenEntry {
                    node: neighbor,
                    f_cost: OrderedFloat(tentative + space.heuristic(neighbor, goal)),
                    seq,
                });
            }
        }
    }

    None
}

/// Walk the came-from chain back to the start.
fn reconstruct<N: Copy + Eq + Hash>(came_from: &AHashMap<N, N>, goal: N, start: N) -> Vec<N> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        let prev = came_from[&current];
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
