//! Graph build errors.

/// Configuration errors found while building the routing graph.
///
/// Any of these means the network description is unusable and no
/// queries should be served.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    /// A bus calls at a stop that was never described.
    #[error("bus {bus} references unknown stop {stop}")]
    UnknownStop { bus: String, stop: String },

    /// A hop's road distance is negative or not a number.
    #[error("bus {bus} has invalid distance {meters} m from {from} to {to}")]
    InvalidDistance {
        bus: String,
        from: String,
        to: String,
        meters: f64,
    },

    /// Routing settings cannot weight the graph.
    #[error("invalid routing settings: {0}")]
    InvalidSettings(String),
}
