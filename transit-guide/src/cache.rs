//! Cache of shortest-path trees.
//!
//! A tree rooted at a source answers every route query from that source.
//! The routing graph never changes after build, so cached trees never go
//! stale and need no expiry; the cache only bounds memory.

use std::sync::Arc;

use moka::sync::Cache as MokaCache;

use crate::router::{NodeId, ShortestPathTree, TransitGraph};

/// Configuration for the tree cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached trees. Zero disables caching.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { max_capacity: 1024 }
    }
}

/// Shortest-path trees keyed by source node, shared between concurrent queries.
pub struct TreeCache {
    trees: Option<MokaCache<NodeId, Arc<ShortestPathTree>>>,
}

impl TreeCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let trees = (config.max_capacity > 0).then(|| {
            MokaCache::builder()
                .max_capacity(config.max_capacity)
                .build()
        });
        Self { trees }
    }

    /// Whether trees are kept at all.
    pub fn is_enabled(&self) -> bool {
        self.trees.is_some()
    }

    /// The tree rooted at `source`, building it on a miss.
    ///
    /// Returns `None` when caching is disabled.
    pub fn tree(&self, graph: &TransitGraph, source: NodeId) -> Option<Arc<ShortestPathTree>> {
        let trees = self.trees.as_ref()?;
        Some(trees.get_with(source, || {
            Arc::new(ShortestPathTree::build(graph, source))
        }))
    }

    /// Number of cached trees (approximate while inserts are pending).
    pub fn entry_count(&self) -> u64 {
        self.trees.as_ref().map_or(0, |t| {
            t.run_pending_tasks();
            t.entry_count()
        })
    }
}
