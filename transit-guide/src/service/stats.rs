//! Bus statistics.

use crate::domain::Bus;
use crate::index::{IndexError, TransitIndex};

/// Summary of one bus's traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct BusStats {
    /// Stops visited, counting repeats.
    pub stop_count: usize,
    /// Distinct stops visited.
    pub unique_stop_count: usize,
    /// Road length of the traversal (meters).
    pub route_length: f64,
    /// Road length over geodesic length. `1.0` when the geodesic length
    /// is zero (a single stop, or coincident stops).
    pub curvature: f64,
}

impl BusStats {
    /// Compute statistics for `bus`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::UnknownStop`] if the bus calls at a stop the
    /// index does not know. A guide only holds buses that passed the graph
    /// build, so this cannot happen for buses answered by a guide.
    pub fn compute(index: &TransitIndex, bus: &Bus) -> Result<Self, IndexError> {
        let mut route_length = 0.0;
        let mut geo_length = 0.0;
        for (from, to) in bus.hops() {
            route_length += index.get_distance(from, to)?;
            geo_length += index.geo_distance(from, to)?;
        }

        let curvature = if geo_length > 0.0 {
            route_length / geo_length
        } else {
            1.0
        };

        Ok(Self {
            stop_count: bus.stop_count(),
            unique_stop_count: bus.unique_stop_count(),
            route_length,
            curvature,
        })
    }
}
