//! Routing graph construction.
//!
//! Each stop gets a wait edge from its arrival node to its departure node.
//! Each bus gets one ride edge for every ordered pair of positions along its
//! traversal, so a single edge covers any uninterrupted ride and a route
//! never has to re-walk a bus's stop list at query time.

use tracing::debug;

use crate::domain::{Bus, Segment};
use crate::index::TransitIndex;

use super::BuildError;
use super::config::RoutingSettings;
use super::graph::{Edge, NodeId, TransitGraph};

/// Builds a [`TransitGraph`] from a populated index.
pub struct GraphBuilder<'a> {
    index: &'a TransitIndex,
    settings: &'a RoutingSettings,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(index: &'a TransitIndex, settings: &'a RoutingSettings) -> Self {
        Self { index, settings }
    }

    /// Build the graph.
    ///
    /// Stop ids are the index's insertion order; buses are added in name
    /// order, so the same index always yields the same edge ids.
    ///
    /// # Errors
    ///
    /// - [`BuildError::InvalidSettings`] if the settings fail validation.
    /// - [`BuildError::UnknownStop`] if a bus calls at an undescribed stop.
    /// - [`BuildError::InvalidDistance`] if a hop's distance is negative or
    ///   not finite.
    pub fn build(self) -> Result<TransitGraph, BuildError> {
        self.settings.validate()?;

        let stops = self.index.stops();
        let mut graph = TransitGraph::with_nodes(2 * stops.len());

        for (id, stop) in stops.iter().enumerate() {
            graph.add_edge(
                Edge {
                    from: NodeId::arrival(id),
                    to: NodeId::departure(id),
                    weight: self.settings.wait_minutes(),
                },
                Segment::Wait {
                    stop_name: stop.name.clone(),
                    time: self.settings.bus_wait_time,
                },
            );
        }

        for bus in self.index.buses() {
            self.add_rides(&mut graph, bus)?;
        }

        debug!(
            stops = stops.len(),
            buses = self.index.bus_count(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "routing graph built"
        );

        Ok(graph)
    }

    /// Add a ride edge for every pair of positions `p < q` on the bus.
    fn add_rides(&self, graph: &mut TransitGraph, bus: &Bus) -> Result<(), BuildError> {
        let stop_ids = bus
            .stops
            .iter()
            .map(|name| {
                self.index
                    .stop_id(name)
                    .ok_or_else(|| BuildError::UnknownStop {
                        bus: bus.name.clone(),
                        stop: name.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // hop_minutes[j] is the time from position j to j + 1.
        let hop_minutes = bus
            .hops()
            .map(|(from, to)| {
                let meters = self
                    .index
                    .get_distance(from, to)
                    .map_err(|_| BuildError::UnknownStop {
                        bus: bus.name.clone(),
                        stop: from.to_string(),
                    })?;
                if !meters.is_finite() || meters < 0.0 {
                    return Err(BuildError::InvalidDistance {
                        bus: bus.name.clone(),
                        from: from.to_string(),
                        to: to.to_string(),
                        meters,
                    });
                }
                Ok(self.settings.minutes_for(meters))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for start in 0..stop_ids.len() {
            let mut time = 0.0;
            for end in (start + 1)..stop_ids.len() {
                time += hop_minutes[end - 1];
                graph.add_edge(
                    Edge {
                        from: NodeId::departure(stop_ids[start]),
                        to: NodeId::arrival(stop_ids[end]),
                        weight: time,
                    },
                    Segment::Ride {
                        bus_name: bus.name.clone(),
                        span_count: end - start,
                        time,
                    },
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coords, Stop};
    use crate::router::EdgeId;

    fn names(s: &[&str]) -> Vec<String> {
        s.iter().map(|n| n.to_string()).collect()
    }

    /// Stops A, B, C one kilometer apart by measured road distance.
    fn line_index() -> TransitIndex {
        let mut index = TransitIndex::new();
        index.add_stop(Stop::new("A", Coords::new(55.0, 37.0)));
        index.add_stop(Stop::new("B", Coords::new(55.01, 37.0)));
        index.add_stop(Stop::new("C", Coords::new(55.02, 37.0)));
        index.add_distance("A", "B", 1000.0);
        index.add_distance("B", "C", 2000.0);
        index
    }

    fn settings() -> RoutingSettings {
        // 1000 m/min
        RoutingSettings::new(6, 60.0)
    }

    #[test]
    fn wait_edges_come_first() {
        let index = line_index();
        let settings = settings();
        let graph = GraphBuilder::new(&index, &settings).build().unwrap();

        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.edge_count(), 3);
        for id in 0..3 {
            let edge = graph.edge(EdgeId(id));
            assert_eq!(edge.from, NodeId::arrival(id));
            assert_eq!(edge.to, NodeId::departure(id));
            assert_eq!(edge.weight, 6.0);
        }
        assert_eq!(
            graph.annotation(EdgeId(1)),
            &Segment::Wait {
                stop_name: "B".into(),
                time: 6
            }
        );
    }

    #[test]
    fn ride_edges_cover_every_pair() {
        let mut index = line_index();
        index.add_bus(Bus::roundtrip("1", names(&["A", "B", "C"])));
        let settings = settings();
        let graph = GraphBuilder::new(&index, &settings).build().unwrap();

        // 3 waits + C(3, 2) rides
        assert_eq!(graph.edge_count(), 6);

        let rides: Vec<_> = graph
            .edges()
            .skip(3)
            .map(|(id, edge)| (edge.from, edge.to, graph.annotation(id).clone()))
            .collect();

        assert_eq!(
            rides,
            vec![
                (
                    NodeId::departure(0),
                    NodeId::arrival(1),
                    Segment::Ride {
                        bus_name: "1".into(),
                        span_count: 1,
                        time: 1.0
                    }
                ),
                (
                    NodeId::departure(0),
                    NodeId::arrival(2),
                    Segment::Ride {
                        bus_name: "1".into(),
                        span_count: 2,
                        time: 3.0
                    }
                ),
                (
                    NodeId::departure(1),
                    NodeId::arrival(2),
                    Segment::Ride {
                        bus_name: "1".into(),
                        span_count: 1,
                        time: 2.0
                    }
                ),
            ]
        );
    }

    #[test]
    fn ride_weight_matches_annotation() {
        let mut index = line_index();
        index.add_bus(Bus::linear("1", names(&["A", "B", "C"])));
        let settings = settings();
        let graph = GraphBuilder::new(&index, &settings).build().unwrap();

        for (id, edge) in graph.edges() {
            assert_eq!(edge.weight, graph.annotation(id).time());
        }
    }

    #[test]
    fn linear_bus_uses_reverse_distances() {
        let mut index = line_index();
        index.add_bus(Bus::linear("1", names(&["A", "B"])));
        let settings = settings();
        let graph = GraphBuilder::new(&index, &settings).build().unwrap();

        // A→B, A→B→A, B→A
        let back = graph
            .edges()
            .find(|(_, e)| e.from == NodeId::departure(1) && e.to == NodeId::arrival(0))
            .map(|(_, e)| e.weight);
        assert_eq!(back, Some(1.0));
    }

    #[test]
    fn unknown_stop_fails_the_build() {
        let mut index = line_index();
        index.add_bus(Bus::roundtrip("7", names(&["A", "Z"])));
        let settings = settings();
        let err = GraphBuilder::new(&index, &settings).build().unwrap_err();
        assert_eq!(
            err,
            BuildError::UnknownStop {
                bus: "7".into(),
                stop: "Z".into()
            }
        );
    }

    #[test]
    fn invalid_settings_fail_the_build() {
        let index = line_index();
        let settings = RoutingSettings::new(6, 0.0);
        let err = GraphBuilder::new(&index, &settings).build().unwrap_err();
        assert!(matches!(err, BuildError::InvalidSettings(_)));
    }

    #[test]
    fn empty_index_builds_empty_graph() {
        let index = TransitIndex::new();
        let settings = settings();
        let graph = GraphBuilder::new(&index, &settings).build().unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn build_is_deterministic() {
        let mut index = line_index();
        index.add_bus(Bus::linear("2", names(&["C", "A"])));
        index.add_bus(Bus::roundtrip("1", names(&["A", "B", "C", "A"])));
        let settings = settings();

        let first = GraphBuilder::new(&index, &settings).build().unwrap();
        let second = GraphBuilder::new(&index, &settings).build().unwrap();

        let a: Vec<_> = first
            .edges()
            .map(|(id, e)| (*e, first.annotation(id).clone()))
            .collect();
        let b: Vec<_> = second
            .edges()
            .map(|(id, e)| (*e, second.annotation(id).clone()))
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn negative_distance_fails_the_build() {
        let mut index = line_index();
        index.add_distance("A", "B", -5000.0);
        index.add_bus(Bus::roundtrip("1", names(&["A", "B"])));
        let settings = settings();
        let err = GraphBuilder::new(&index, &settings).build().unwrap_err();
        assert_eq!(
            err,
            BuildError::InvalidDistance {
                bus: "1".into(),
                from: "A".into(),
                to: "B".into(),
                meters: -5000.0
            }
        );
    }

    #[test]
    fn non_finite_distance_fails_the_build() {
        let mut index = line_index();
        index.add_distance("B", "C", f64::INFINITY);
        index.add_bus(Bus::linear("1", names(&["A", "B", "C"])));
        let settings = settings();
        let err = GraphBuilder::new(&index, &settings).build().unwrap_err();
        assert!(matches!(err, BuildError::InvalidDistance { .. }));
    }

    #[test]
    fn zero_distance_is_allowed() {
        let mut index = line_index();
        index.add_distance("A", "B", 0.0);
        index.add_bus(Bus::roundtrip("1", names(&["A", "B"])));
        let settings = settings();
        let graph = GraphBuilder::new(&index, &settings).build().unwrap();
        assert_eq!(graph.edge(EdgeId(3)).weight, 0.0);
    }
}
