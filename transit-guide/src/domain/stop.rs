//! Stop and coordinate types.

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// π as used by the data producers. Keeping their truncated value makes
/// geodesic lengths agree with published reference outputs.
const PI: f64 = 3.1415926535;

/// Geographic coordinates in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coords {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coords {
    /// Create coordinates from latitude and longitude in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in meters.
    ///
    /// Uses the spherical law of cosines. The cosine is clamped to `[-1, 1]`
    /// so that coincident points yield exactly zero instead of NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_guide::domain::Coords;
    ///
    /// let a = Coords::new(55.611087, 37.20829);
    /// assert_eq!(a.distance_to(&a), 0.0);
    ///
    /// let b = Coords::new(55.595884, 37.209755);
    /// let d = a.distance_to(&b);
    /// assert!((d - b.distance_to(&a)).abs() < 1e-9);
    /// assert!(d > 1_600.0 && d < 1_800.0);
    /// ```
    pub fn distance_to(&self, other: &Coords) -> f64 {
        let lat1 = to_radians(self.latitude);
        let lat2 = to_radians(other.latitude);
        let dlon = (to_radians(self.longitude) - to_radians(other.longitude)).abs();

        let cosine = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * dlon.cos();
        cosine.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_M
    }
}

fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// A named stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub name: String,
    pub coords: Coords,
}

impl Stop {
    pub fn new(name: impl Into<String>, coords: Coords) -> Self {
        Self {
            name: name.into(),
            coords,
        }
    }

    /// Geodesic distance to another stop in meters.
    pub fn distance_to(&self, other: &Stop) -> f64 {
        self.coords.distance_to(&other.coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coincident_points_are_zero_apart() {
        let c = Coords::new(55.574371, 37.6517);
        assert_eq!(c.distance_to(&c), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coords::new(55.632761, 37.333324);
        let b = Coords::new(55.574371, 37.6517);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-6);
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = Coords::new(0.0, 0.0);
        let b = Coords::new(1.0, 0.0);
        // 2πR / 360 with the truncated π
        let expected = EARTH_RADIUS_M * PI / 180.0;
        assert!((a.distance_to(&b) - expected).abs() < 1e-3);
    }

    #[test]
    fn stop_distance_uses_coords() {
        let a = Stop::new("A", Coords::new(55.611087, 37.20829));
        let b = Stop::new("B", Coords::new(55.595884, 37.209755));
        assert_eq!(a.distance_to(&b), a.coords.distance_to(&b.coords));
    }
}
