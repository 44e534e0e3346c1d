//! Static description of the transit network.
//!
//! The index holds stops, buses and measured road distances. It is filled
//! once from the base description and then only read: by the graph builder
//! and by informational queries.

mod error;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::domain::{Bus, Stop};

pub use error::IndexError;

static NO_BUSES: BTreeSet<String> = BTreeSet::new();

/// Stops, buses and the road distance table.
///
/// Stops keep the position at which they were first added; this position is
/// the stop's id in the routing graph.
#[derive(Debug, Clone, Default)]
pub struct TransitIndex {
    stops: Vec<Stop>,
    stop_ids: HashMap<String, usize>,
    buses: BTreeMap<String, Bus>,
    /// Stop name → names of the buses calling there.
    buses_by_stop: HashMap<String, BTreeSet<String>>,
    /// from → to → meters. Directed: (a, b) and (b, a) are independent.
    distances: HashMap<String, HashMap<String, f64>>,
}

impl TransitIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stop. A stop with the same name is replaced in place,
    /// keeping its id.
    pub fn add_stop(&mut self, stop: Stop) {
        match self.stop_ids.get(&stop.name) {
            Some(&id) => self.stops[id] = stop,
            None => {
                self.stop_ids.insert(stop.name.clone(), self.stops.len());
                self.stops.push(stop);
            }
        }
    }

    /// Register a bus, replacing any bus with the same name.
    ///
    /// Stops referenced by the bus need not exist yet; unknown stops are
    /// reported when the routing graph is built.
    pub fn add_bus(&mut self, bus: Bus) {
        if let Some(old) = self.buses.remove(&bus.name) {
            for stop in &old.stops {
                if let Some(names) = self.buses_by_stop.get_mut(stop) {
                    names.remove(&old.name);
                }
            }
        }

        for stop in &bus.stops {
            self.buses_by_stop
                .entry(stop.clone())
                .or_default()
                .insert(bus.name.clone());
        }
        self.buses.insert(bus.name.clone(), bus);
    }

    /// Record the measured road distance from `from` to `to`.
    ///
    /// Only this direction is set; a reverse entry, if any, is untouched.
    pub fn add_distance(&mut self, from: &str, to: &str, meters: f64) {
        self.distances
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), meters);
    }

    /// Road distance between two stops in meters.
    ///
    /// Looks up `(from, to)`, then `(to, from)`, and falls back to the
    /// geodesic distance when neither was measured.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::UnknownStop`] if either stop is not registered.
    pub fn get_distance(&self, from: &str, to: &str) -> Result<f64, IndexError> {
        let (a, b) = self.stop_pair(from, to)?;

        Ok(self
            .measured(from, to)
            .or_else(|| self.measured(to, from))
            .unwrap_or_else(|| a.distance_to(b)))
    }

    /// Geodesic distance between two stops in meters.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::UnknownStop`] if either stop is not registered.
    pub fn geo_distance(&self, from: &str, to: &str) -> Result<f64, IndexError> {
        let (a, b) = self.stop_pair(from, to)?;
        Ok(a.distance_to(b))
    }

    fn measured(&self, from: &str, to: &str) -> Option<f64> {
        self.distances.get(from)?.get(to).copied()
    }

    fn stop_pair(&self, from: &str, to: &str) -> Result<(&Stop, &Stop), IndexError> {
        let a = self
            .stop(from)
            .ok_or_else(|| IndexError::UnknownStop(from.to_string()))?;
        let b = self
            .stop(to)
            .ok_or_else(|| IndexError::UnknownStop(to.to_string()))?;
        Ok((a, b))
    }

    fn stop(&self, name: &str) -> Option<&Stop> {
        self.stop_ids.get(name).map(|&id| &self.stops[id])
    }

    pub fn has_stop(&self, name: &str) -> bool {
        self.stop_ids.contains_key(name)
    }

    pub fn has_bus(&self, name: &str) -> bool {
        self.buses.contains_key(name)
    }

    /// # Errors
    ///
    /// Returns [`IndexError::NotFound`] if no stop has this name.
    pub fn get_stop(&self, name: &str) -> Result<&Stop, IndexError> {
        self.stop(name)
            .ok_or_else(|| IndexError::stop_not_found(name))
    }

    /// # Errors
    ///
    /// Returns [`IndexError::NotFound`] if no bus has this name.
    pub fn get_bus(&self, name: &str) -> Result<&Bus, IndexError> {
        self.buses
            .get(name)
            .ok_or_else(|| IndexError::bus_not_found(name))
    }

    /// Names of the buses calling at a stop, sorted.
    ///
    /// A registered stop that no bus serves yields an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::NotFound`] if no stop has this name.
    pub fn buses_through(&self, name: &str) -> Result<&BTreeSet<String>, IndexError> {
        if !self.has_stop(name) {
            return Err(IndexError::stop_not_found(name));
        }
        Ok(self.buses_by_stop.get(name).unwrap_or(&NO_BUSES))
    }

    /// Position of a stop in insertion order.
    pub fn stop_id(&self, name: &str) -> Option<usize> {
        self.stop_ids.get(name).copied()
    }

    /// All stops, indexed by stop id.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All buses, in name order.
    pub fn buses(&self) -> impl Iterator<Item = &Bus> {
        self.buses.values()
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }
}
