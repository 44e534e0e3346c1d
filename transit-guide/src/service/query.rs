//! Query and response types.

use std::collections::BTreeSet;

use crate::domain::Route;

use super::stats::BusStats;

/// Caller-assigned request id, echoed back in the response.
pub type RequestId = i64;

/// A question asked of a built guide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub id: RequestId,
    pub kind: QueryKind,
}

/// The kinds of question a guide answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryKind {
    /// Statistics for one bus.
    Bus { name: String },
    /// Buses calling at one stop.
    Stop { name: String },
    /// Fastest route between two stops.
    Route { from: String, to: String },
}

impl Query {
    pub fn bus(id: RequestId, name: impl Into<String>) -> Self {
        Self {
            id,
            kind: QueryKind::Bus { name: name.into() },
        }
    }

    pub fn stop(id: RequestId, name: impl Into<String>) -> Self {
        Self {
            id,
            kind: QueryKind::Stop { name: name.into() },
        }
    }

    pub fn route(id: RequestId, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            id,
            kind: QueryKind::Route {
                from: from.into(),
                to: to.into(),
            },
        }
    }
}

/// Answer to one [`Query`].
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResponse {
    pub id: RequestId,
    pub outcome: QueryOutcome,
}

/// What a query found.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Bus(BusStats),
    Stop(BTreeSet<String>),
    Route(Route),
    /// Unknown bus or stop, or no route between two stops.
    NotFound,
}

impl QueryOutcome {
    pub fn is_not_found(&self) -> bool {
        matches!(self, QueryOutcome::NotFound)
    }
}
