//! Shortest paths over the routing graph.
//!
//! Dijkstra's algorithm with a binary heap. Weights are non-negative and the
//! graph never changes after build, so a tree rooted at a source answers
//! every later query from that source.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::graph::{EdgeId, NodeId, TransitGraph};

/// Weight and edges of one shortest path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathInfo {
    /// Sum of the edge weights (minutes).
    pub weight: f64,
    /// Edges from source to target, in travel order.
    pub edges: Vec<EdgeId>,
}

#[derive(Debug, Clone, Copy)]
struct State {
    cost: f64,
    node: NodeId,
}

// BinaryHeap is a max-heap; flip the cost comparison to pop the cheapest
// state first. Ties go to the lower node id to keep runs deterministic.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

/// Shortest-path tree rooted at one source node.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: NodeId,
    dist: Vec<f64>,
    /// Edge through which each node was reached; `None` for the source and
    /// for unreached nodes.
    prev_edge: Vec<Option<EdgeId>>,
}

impl ShortestPathTree {
    /// Run a full search from `source`.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not a node of `graph`.
    pub fn build(graph: &TransitGraph, source: NodeId) -> Self {
        Self::search(graph, source, None)
    }

    /// Search from `source`, stopping once `target` is settled if given.
    fn search(graph: &TransitGraph, source: NodeId, target: Option<NodeId>) -> Self {
        assert!(
            graph.contains_node(source),
            "source {source} outside graph of {} nodes",
            graph.node_count()
        );

        let mut dist = vec![f64::INFINITY; graph.node_count()];
        let mut prev_edge = vec![None; graph.node_count()];
        let mut heap = BinaryHeap::new();

        dist[source.0] = 0.0;
        heap.push(State {
            cost: 0.0,
            node: source,
        });

        while let Some(State { cost, node }) = heap.pop() {
            if Some(node) == target {
                break;
            }

            // Stale heap entry
            if cost > dist[node.0] {
                continue;
            }

            for &edge_id in graph.outgoing(node) {
                let edge = graph.edge(edge_id);
                let next_cost = cost + edge.weight;
                if next_cost < dist[edge.to.0] {
                    dist[edge.to.0] = next_cost;
                    prev_edge[edge.to.0] = Some(edge_id);
                    heap.push(State {
                        cost: next_cost,
                        node: edge.to,
                    });
                }
            }
        }

        Self {
            source,
            dist,
            prev_edge,
        }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Shortest distance to `node`, or `None` if unreachable.
    pub fn distance(&self, node: NodeId) -> Option<f64> {
        self.dist
            .get(node.0)
            .copied()
            .filter(|d| d.is_finite())
    }

    /// Walk predecessor edges back from `target` to the source.
    ///
    /// Returns `None` if `target` is unreachable.
    ///
    /// # Panics
    ///
    /// Panics if `target` is not a node of `graph`.
    pub fn path_to(&self, graph: &TransitGraph, target: NodeId) -> Option<PathInfo> {
        assert!(
            graph.contains_node(target),
            "target {target} outside graph of {} nodes",
            graph.node_count()
        );
        let weight = self.distance(target)?;

        let mut edges = Vec::new();
        let mut current = target;
        while let Some(edge_id) = self.prev_edge[current.0] {
            edges.push(edge_id);
            current = graph.edge(edge_id).from;
        }
        edges.reverse();

        Some(PathInfo { weight, edges })
    }
}

/// Shortest path from `source` to `target` with a single early-exit search.
///
/// Returns `None` if `target` is unreachable. A node is always reachable
/// from itself by the empty path.
///
/// # Panics
///
/// Panics if either node is not a node of `graph`.
pub fn shortest_path(graph: &TransitGraph, source: NodeId, target: NodeId) -> Option<PathInfo> {
    ShortestPathTree::search(graph, source, Some(target)).path_to(graph, target)
}
