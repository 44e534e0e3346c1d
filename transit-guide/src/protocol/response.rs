//! Output records for query responses.

use std::io::Write;

use serde::Serialize;

use crate::domain::{Route, Segment};
use crate::service::{BusStats, QueryOutcome, QueryResponse, RequestId};

/// Message reported for every kind of miss.
pub const NOT_FOUND: &str = "not found";

/// One response, tagged with the id of the request it answers.
#[derive(Debug, Serialize)]
pub struct ResponseRecord {
    pub request_id: RequestId,

    #[serde(flatten)]
    pub body: ResponseBody,
}

/// Payload of a response; the fields present identify the kind.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Bus(BusResult),
    Stop(StopResult),
    Route(RouteResult),
    Error(ErrorResult),
}

#[derive(Debug, Serialize)]
pub struct BusResult {
    pub stop_count: usize,
    pub unique_stop_count: usize,
    pub route_length: f64,
    pub curvature: f64,
}

#[derive(Debug, Serialize)]
pub struct StopResult {
    /// Sorted bus names
    pub buses: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Minutes
    pub total_time: f64,
    pub items: Vec<RouteItem>,
}

/// One step of a route.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    Wait {
        stop_name: String,
        time: u32,
    },
    #[serde(rename = "Bus")]
    Ride {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

#[derive(Debug, Serialize)]
pub struct ErrorResult {
    pub error_message: String,
}

impl ResponseRecord {
    /// Create from a query response.
    pub fn from_response(response: &QueryResponse) -> Self {
        let body = match &response.outcome {
            QueryOutcome::Bus(stats) => ResponseBody::Bus(BusResult::from_stats(stats)),
            QueryOutcome::Stop(buses) => ResponseBody::Stop(StopResult {
                buses: buses.iter().cloned().collect(),
            }),
            QueryOutcome::Route(route) => ResponseBody::Route(RouteResult::from_route(route)),
            QueryOutcome::NotFound => ResponseBody::Error(ErrorResult {
                error_message: NOT_FOUND.to_string(),
            }),
        };

        Self {
            request_id: response.id,
            body,
        }
    }
}

impl BusResult {
    pub fn from_stats(stats: &BusStats) -> Self {
        Self {
            stop_count: stats.stop_count,
            unique_stop_count: stats.unique_stop_count,
            route_length: stats.route_length,
            curvature: stats.curvature,
        }
    }
}

impl RouteResult {
    pub fn from_route(route: &Route) -> Self {
        Self {
            total_time: route.total_time,
            items: route.segments.iter().map(RouteItem::from_segment).collect(),
        }
    }
}

impl RouteItem {
    pub fn from_segment(segment: &Segment) -> Self {
        match segment {
            Segment::Wait { stop_name, time } => RouteItem::Wait {
                stop_name: stop_name.clone(),
                time: *time,
            },
            Segment::Ride {
                bus_name,
                span_count,
                time,
            } => RouteItem::Ride {
                bus: bus_name.clone(),
                span_count: *span_count,
                time: *time,
            },
        }
    }
}

/// Convert a batch of responses, keeping their order.
pub fn records(responses: &[QueryResponse]) -> Vec<ResponseRecord> {
    responses.iter().map(ResponseRecord::from_response).collect()
}

/// Write responses as a pretty-printed JSON array.
pub fn write_responses(
    writer: impl Write,
    responses: &[QueryResponse],
) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(writer, &records(responses))
}
