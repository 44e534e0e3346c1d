//! Transit guide.
//!
//! Builds a routing graph from a static description of stops, buses and
//! road distances, then answers questions about it: bus statistics, buses
//! through a stop, and the fastest wait-and-ride route between two stops.

pub mod cache;
pub mod domain;
pub mod index;
pub mod protocol;
pub mod router;
pub mod service;
pub mod web;
