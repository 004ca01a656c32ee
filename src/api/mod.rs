//! Remote API boundary.
//!
//! Everything above this module treats the server as an opaque function from
//! typed arguments to `Result<payload, ApiError>`. Transport details
//! (headers, serialization, timeouts) live here and nowhere else.

mod client;
mod error;
mod query;

pub use client::{ApiClient, TOTAL_ITEMS_HEADER};
pub use error::ApiError;
pub use query::{QueryParams, QueryValue};
