//! Routing graph with its edge annotations.
//!
//! Every stop owns two nodes: `2i` (arrived, waiting) and `2i + 1`
//! (boarded). Edges are addressed by [`EdgeId`] and each carries the
//! [`Segment`] it stands for, stored in the same arena so the two can
//! never disagree about ids.

use std::fmt;

use crate::domain::Segment;

/// Index of a node in a [`TransitGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Node where a passenger stands at stop `stop_id`, not yet boarded.
    pub fn arrival(stop_id: usize) -> Self {
        NodeId(2 * stop_id)
    }

    /// Node where a passenger has waited at stop `stop_id` and can board.
    pub fn departure(stop_id: usize) -> Self {
        NodeId(2 * stop_id + 1)
    }

    /// The stop this node belongs to.
    pub fn stop_id(self) -> usize {
        self.0 / 2
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Index of an edge in a [`TransitGraph`], stable for the graph's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

/// A directed weighted edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    /// Minutes. Never negative.
    pub weight: f64,
}

/// Directed weighted graph whose edges are annotated with route segments.
///
/// Built once by [`GraphBuilder`](super::GraphBuilder) and read-only after.
#[derive(Debug, Clone)]
pub struct TransitGraph {
    edges: Vec<Edge>,
    annotations: Vec<Segment>,
    /// Outgoing edge ids per node.
    outgoing: Vec<Vec<EdgeId>>,
}

impl TransitGraph {
    /// An edgeless graph with `node_count` nodes.
    pub(super) fn with_nodes(node_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            annotations: Vec::new(),
            outgoing: vec![Vec::new(); node_count],
        }
    }

    /// Append an edge together with its annotation.
    pub(super) fn add_edge(&mut self, edge: Edge, annotation: Segment) -> EdgeId {
        debug_assert!(edge.weight >= 0.0, "negative edge weight {}", edge.weight);
        let id = EdgeId(self.edges.len());
        self.outgoing[edge.from.0].push(id);
        self.edges.push(edge);
        self.annotations.push(annotation);
        id
    }

    pub fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// # Panics
    ///
    /// Panics if `id` is not an edge of this graph.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    /// The segment an edge stands for.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not an edge of this graph.
    pub fn annotation(&self, id: EdgeId) -> &Segment {
        &self.annotations[id.0]
    }

    /// Ids of the edges leaving `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a node of this graph.
    pub fn outgoing(&self, node: NodeId) -> &[EdgeId] {
        &self.outgoing[node.0]
    }

    /// Iterate over all edges with their ids, in id order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        node.0 < self.node_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wait(name: &str) -> Segment {
        Segment::Wait {
            stop_name: name.into(),
            time: 1,
        }
    }

    #[test]
    fn node_ids_pair_up_per_stop() {
        assert_eq!(NodeId::arrival(3), NodeId(6));
        assert_eq!(NodeId::departure(3), NodeId(7));
        assert_eq!(NodeId(6).stop_id(), 3);
        assert_eq!(NodeId(7).stop_id(), 3);
    }

    #[test]
    fn edges_and_annotations_share_ids() {
        let mut graph = TransitGraph::with_nodes(4);
        let e0 = graph.add_edge(
            Edge {
                from: NodeId(0),
                to: NodeId(1),
                weight: 1.0,
            },
            wait("A"),
        );
        let e1 = graph.add_edge(
            Edge {
                from: NodeId(2),
                to: NodeId(3),
                weight: 1.0,
            },
            wait("B"),
        );

        assert_eq!(e0, EdgeId(0));
        assert_eq!(e1, EdgeId(1));
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.annotation(e1), &wait("B"));
        assert_eq!(graph.edge(e1).from, NodeId(2));
        assert_eq!(graph.outgoing(NodeId(0)), &[e0]);
        assert!(graph.outgoing(NodeId(1)).is_empty());
    }

    #[test]
    fn contains_node() {
        let graph = TransitGraph::with_nodes(2);
        assert!(graph.contains_node(NodeId(1)));
        assert!(!graph.contains_node(NodeId(2)));
    }
}
