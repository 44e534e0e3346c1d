//! Input document: network description, settings and queries.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::cache::CacheConfig;
use crate::domain::{Bus, Coords, Stop};
use crate::index::TransitIndex;
use crate::router::RoutingSettings;
use crate::service::{Query, RequestId, TransitGuide};

use super::DocumentError;

/// A complete input document.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub routing_settings: RoutingSettingsDto,

    /// Stops and buses making up the network.
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,

    /// Queries to answer once the network is built.
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

/// Routing settings as they appear in the document.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RoutingSettingsDto {
    /// Minutes
    pub bus_wait_time: u32,

    /// km/h
    pub bus_velocity: f64,
}

/// One record of the network description.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRecord),
    Bus(BusRecord),
}

/// A stop and the measured road distances from it.
#[derive(Debug, Clone, Deserialize)]
pub struct StopRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,

    /// Other stop name → meters from this stop.
    #[serde(default)]
    pub road_distances: BTreeMap<String, f64>,
}

/// A bus route.
#[derive(Debug, Clone, Deserialize)]
pub struct BusRecord {
    pub name: String,
    pub stops: Vec<String>,

    /// If false the bus runs to the last stop and back the same way.
    pub is_roundtrip: bool,
}

/// A query as it appears in the document.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus {
        id: RequestId,
        name: String,
    },
    Stop {
        id: RequestId,
        name: String,
    },
    Route {
        id: RequestId,
        from: String,
        to: String,
    },

    /// Any other request type. Skipped without an answer.
    #[serde(other)]
    Unknown,
}

/// The `stat_requests` part of a document on its own.
#[derive(Debug, Clone, Deserialize)]
pub struct StatRequests {
    pub stat_requests: Vec<StatRequest>,
}

impl Document {
    /// Parse a document from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, DocumentError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse a document from a string.
    pub fn parse(s: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read and parse a document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn settings(&self) -> RoutingSettings {
        RoutingSettings::new(
            self.routing_settings.bus_wait_time,
            self.routing_settings.bus_velocity,
        )
    }

    /// Populate an index from the base requests.
    ///
    /// All stops are added before any bus, so the order of records in the
    /// document does not matter.
    pub fn index(&self) -> TransitIndex {
        let mut index = TransitIndex::new();

        for request in &self.base_requests {
            if let BaseRequest::Stop(record) = request {
                index.add_stop(record.to_stop());
                for (other, meters) in &record.road_distances {
                    index.add_distance(&record.name, other, *meters);
                }
            }
        }

        for request in &self.base_requests {
            if let BaseRequest::Bus(record) = request {
                index.add_bus(record.to_bus());
            }
        }

        debug!(
            stops = index.stop_count(),
            buses = index.bus_count(),
            "network loaded"
        );

        index
    }

    /// Build a guide for the described network.
    pub fn build_guide(&self, cache_config: &CacheConfig) -> Result<TransitGuide, DocumentError> {
        Ok(TransitGuide::build(
            self.index(),
            self.settings(),
            cache_config,
        )?)
    }

    /// The queries, in document order, without unknown request types.
    pub fn queries(&self) -> Vec<Query> {
        known_queries(&self.stat_requests)
    }
}

impl StopRecord {
    pub fn to_stop(&self) -> Stop {
        Stop::new(&self.name, Coords::new(self.latitude, self.longitude))
    }
}

impl BusRecord {
    pub fn to_bus(&self) -> Bus {
        if self.is_roundtrip {
            Bus::roundtrip(&self.name, self.stops.clone())
        } else {
            Bus::linear(&self.name, self.stops.clone())
        }
    }
}

impl StatRequest {
    /// `None` for a request type the guide does not answer.
    pub fn to_query(&self) -> Option<Query> {
        match self {
            StatRequest::Bus { id, name } => Some(Query::bus(*id, name)),
            StatRequest::Stop { id, name } => Some(Query::stop(*id, name)),
            StatRequest::Route { id, from, to } => Some(Query::route(*id, from, to)),
            StatRequest::Unknown => None,
        }
    }
}

impl StatRequests {
    pub fn queries(&self) -> Vec<Query> {
        known_queries(&self.stat_requests)
    }
}

fn known_queries(requests: &[StatRequest]) -> Vec<Query> {
    let queries: Vec<_> = requests.iter().filter_map(StatRequest::to_query).collect();
    if queries.len() < requests.len() {
        debug!(
            skipped = requests.len() - queries.len(),
            "skipping unknown request types"
        );
    }
    queries
}
