//! Bus route type.

use std::collections::HashSet;

/// A bus and the full sequence of stops it traverses.
///
/// The sequence is always a single traversal: linear routes are expanded
/// into forward-then-back before a `Bus` is built (see [`Bus::linear`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bus {
    pub name: String,
    pub stops: Vec<String>,
}

impl Bus {
    /// A bus whose stop list is already the full traversal
    /// (typically a ring ending where it started).
    pub fn roundtrip(name: impl Into<String>, stops: Vec<String>) -> Self {
        Self {
            name: name.into(),
            stops,
        }
    }

    /// A bus that runs to the end of `stops` and back again.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_guide::domain::Bus;
    ///
    /// let bus = Bus::linear("750", vec!["A".into(), "B".into(), "C".into()]);
    /// assert_eq!(bus.stops, ["A", "B", "C", "B", "A"]);
    /// ```
    pub fn linear(name: impl Into<String>, mut stops: Vec<String>) -> Self {
        let back: Vec<String> = stops.iter().rev().skip(1).cloned().collect();
        stops.extend(back);
        Self {
            name: name.into(),
            stops,
        }
    }

    /// Number of stops visited, counting repeats.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Number of distinct stops visited.
    pub fn unique_stop_count(&self) -> usize {
        self.stops.iter().collect::<HashSet<_>>().len()
    }

    /// Consecutive stop pairs along the traversal.
    pub fn hops(&self) -> impl Iterator<Item = (&str, &str)> {
        self.stops
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}
