//! Event dispatch to the external ingestion endpoint.

mod dispatcher;
mod http;

pub use dispatcher::{EventDispatcher, NO_SIGNAL_DETAIL, UNKNOWN_ID};
pub use http::HttpTransport;
