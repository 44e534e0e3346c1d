//! Turning graph paths back into routes.

use crate::domain::{Route, Segment};

use super::dijkstra::PathInfo;
use super::graph::{EdgeId, TransitGraph};

/// The segments for a sequence of edges, in the same order.
///
/// Adjacent rides are never merged: each edge already stands for one
/// uninterrupted ride on one bus.
pub fn segments(edges: &[EdgeId], graph: &TransitGraph) -> Vec<Segment> {
    edges
        .iter()
        .map(|&id| graph.annotation(id).clone())
        .collect()
}

/// Build the route for a shortest path.
pub fn route(path: &PathInfo, graph: &TransitGraph) -> Route {
    Route {
        total_time: path.weight,
        segments: segments(&path.edges, graph),
    }
}
