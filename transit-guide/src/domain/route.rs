//! Route types.
//!
//! A `Route` is the answer to a routing query: an ordered list of
//! segments, each either waiting at a stop or riding one bus.

/// One leg of a route.
///
/// The same type annotates edges of the routing graph, so a reconstructed
/// route is the annotations of its edges in path order.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Waiting at a stop before boarding.
    Wait { stop_name: String, time: u32 },
    /// Riding one bus across `span_count` consecutive hops.
    Ride {
        bus_name: String,
        span_count: usize,
        time: f64,
    },
}

impl Segment {
    /// Duration of this segment in minutes.
    pub fn time(&self) -> f64 {
        match self {
            Segment::Wait { time, .. } => f64::from(*time),
            Segment::Ride { time, .. } => *time,
        }
    }

    /// Returns true if this is a wait segment.
    pub fn is_wait(&self) -> bool {
        matches!(self, Segment::Wait { .. })
    }

    /// Returns true if this is a ride segment.
    pub fn is_ride(&self) -> bool {
        matches!(self, Segment::Ride { .. })
    }
}

/// A fastest route between two stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Total time in minutes.
    pub total_time: f64,
    pub segments: Vec<Segment>,
}

impl Route {
    /// Route from a stop to itself: nothing to wait for, nothing to ride.
    pub fn empty() -> Self {
        Self {
            total_time: 0.0,
            segments: Vec::new(),
        }
    }

    /// Sum of the segment times. Equals `total_time` up to float rounding.
    pub fn segment_time(&self) -> f64 {
        self.segments.iter().map(Segment::time).sum()
    }

    /// Number of buses boarded.
    pub fn ride_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_ride()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_time() {
        let wait = Segment::Wait {
            stop_name: "A".into(),
            time: 6,
        };
        let ride = Segment::Ride {
            bus_name: "1".into(),
            span_count: 2,
            time: 5.25,
        };
        assert_eq!(wait.time(), 6.0);
        assert_eq!(ride.time(), 5.25);
        assert!(wait.is_wait());
        assert!(ride.is_ride());
    }

    #[test]
    fn route_totals() {
        let route = Route {
            total_time: 11.0,
            segments: vec![
                Segment::Wait {
                    stop_name: "A".into(),
                    time: 6,
                },
                Segment::Ride {
                    bus_name: "1".into(),
                    span_count: 1,
                    time: 5.0,
                },
            ],
        };
        assert_eq!(route.segment_time(), 11.0);
        assert_eq!(route.ride_count(), 1);
    }

    #[test]
    fn empty_route() {
        let route = Route::empty();
        assert_eq!(route.total_time, 0.0);
        assert!(route.segments.is_empty());
        assert_eq!(route.ride_count(), 0);
    }
}
