//! Domain types for the transit guide.
//!
//! Plain data describing the network (stops, buses) and the answers it
//! gives (routes made of wait and ride segments).

mod bus;
mod route;
mod stop;

pub use bus::Bus;
pub use route::{Route, Segment};
pub use stop::{Coords, Stop};
