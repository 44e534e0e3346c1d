//! Query answering over a built transit network.
//!
//! A [`TransitGuide`] owns the index and the routing graph built from it.
//! Both are immutable once the guide exists, so a guide can be shared
//! across threads and queried concurrently.

mod query;
mod stats;

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::cache::{CacheConfig, TreeCache};
use crate::domain::Route;
use crate::index::TransitIndex;
use crate::router::{self, BuildError, GraphBuilder, NodeId, RoutingSettings, TransitGraph};

pub use query::{Query, QueryKind, QueryOutcome, QueryResponse, RequestId};
pub use stats::BusStats;

/// A built transit network ready to answer queries.
pub struct TransitGuide {
    index: TransitIndex,
    settings: RoutingSettings,
    graph: TransitGraph,
    trees: TreeCache,
}

impl TransitGuide {
    /// Build the routing graph for a fully populated index.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] if the settings are invalid, a bus calls at
    /// an unknown stop, or a hop's road distance is negative. No guide
    /// exists until the build succeeds.
    pub fn build(
        index: TransitIndex,
        settings: RoutingSettings,
        cache_config: &CacheConfig,
    ) -> Result<Self, BuildError> {
        let graph = GraphBuilder::new(&index, &settings).build()?;
        Ok(Self {
            index,
            settings,
            graph,
            trees: TreeCache::new(cache_config),
        })
    }

    pub fn index(&self) -> &TransitIndex {
        &self.index
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    pub fn graph(&self) -> &TransitGraph {
        &self.graph
    }

    /// Statistics for a bus, or `None` if there is no such bus.
    pub fn bus_stats(&self, name: &str) -> Option<BusStats> {
        let bus = self.index.get_bus(name).ok()?;
        BusStats::compute(&self.index, bus).ok()
    }

    /// Sorted names of the buses calling at a stop, or `None` if there is
    /// no such stop.
    pub fn buses_through(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.index.buses_through(name).ok()
    }

    /// Fastest route between two stops.
    ///
    /// Returns `None` if either stop is unknown or no route exists. A route
    /// from a stop to itself is empty and takes no time.
    pub fn route(&self, from: &str, to: &str) -> Option<Route> {
        let source = NodeId::arrival(self.index.stop_id(from)?);
        let target = NodeId::arrival(self.index.stop_id(to)?);

        let path = match self.trees.tree(&self.graph, source) {
            Some(tree) => tree.path_to(&self.graph, target),
            None => router::shortest_path(&self.graph, source, target),
        }?;

        Some(router::route(&path, &self.graph))
    }

    /// Answer one query. Misses become [`QueryOutcome::NotFound`].
    pub fn answer(&self, query: &Query) -> QueryResponse {
        let outcome = match &query.kind {
            QueryKind::Bus { name } => self.bus_stats(name).map(QueryOutcome::Bus),
            QueryKind::Stop { name } => self
                .buses_through(name)
                .map(|buses| QueryOutcome::Stop(buses.clone())),
            QueryKind::Route { from, to } => self.route(from, to).map(QueryOutcome::Route),
        }
        .unwrap_or(QueryOutcome::NotFound);

        trace!(id = query.id, found = !outcome.is_not_found(), "query answered");

        QueryResponse {
            id: query.id,
            outcome,
        }
    }

    /// Answer a batch of queries, preserving their order.
    pub fn answer_all(&self, queries: &[Query]) -> Vec<QueryResponse> {
        let responses: Vec<_> = queries.iter().map(|q| self.answer(q)).collect();
        debug!(
            queries = responses.len(),
            misses = responses.iter().filter(|r| r.outcome.is_not_found()).count(),
            "batch answered"
        );
        responses
    }
}
