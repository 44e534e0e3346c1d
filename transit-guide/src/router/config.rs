//! Routing settings.

use super::BuildError;

/// Network-wide constants used to weight the routing graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutingSettings {
    /// Time spent waiting at a stop before boarding (minutes).
    pub bus_wait_time: u32,

    /// Speed of every bus (km/h).
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Create settings with the given wait time and velocity.
    pub fn new(bus_wait_time: u32, bus_velocity: f64) -> Self {
        Self {
            bus_wait_time,
            bus_velocity,
        }
    }

    /// Check that the settings can weight a graph.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidSettings`] unless the velocity is a
    /// finite positive number.
    pub fn validate(&self) -> Result<(), BuildError> {
        if !self.bus_velocity.is_finite() || self.bus_velocity <= 0.0 {
            return Err(BuildError::InvalidSettings(format!(
                "bus velocity must be positive, got {}",
                self.bus_velocity
            )));
        }
        Ok(())
    }

    /// Wait time as a graph weight.
    pub fn wait_minutes(&self) -> f64 {
        f64::from(self.bus_wait_time)
    }

    /// Bus speed in meters per minute.
    pub fn meters_per_minute(&self) -> f64 {
        self.bus_velocity * 1000.0 / 60.0
    }

    /// Minutes a bus needs to cover `meters`.
    pub fn minutes_for(&self, meters: f64) -> f64 {
        meters / self.meters_per_minute()
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            bus_wait_time: 6,
            bus_velocity: 40.0,
        }
    }
}
