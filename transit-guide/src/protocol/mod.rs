//! JSON documents in and out.
//!
//! The input is one document holding routing settings, the network
//! description and the queries. The output is an array with one record per
//! query, in query order.

mod error;
mod request;
mod response;

pub use error::DocumentError;
pub use request::*;
pub use response::*;
