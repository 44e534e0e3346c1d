//! Fastest-route search over the transit network.
//!
//! The network is turned into a weighted directed graph once
//! ([`GraphBuilder`]). Waiting at a stop and riding a bus are both edges, so
//! a plain shortest path through the graph is the fastest itinerary, and
//! each edge's annotation says what the passenger does on it.

mod builder;
mod config;
mod dijkstra;
mod error;
mod graph;
mod reconstruct;

pub use builder::GraphBuilder;
pub use config::RoutingSettings;
pub use dijkstra::{PathInfo, ShortestPathTree, shortest_path};
pub use error::BuildError;
pub use graph::{Edge, EdgeId, NodeId, TransitGraph};
pub use reconstruct::{route, segments};
