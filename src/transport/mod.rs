//! HTTP transport: one `reqwest::Client`, one POST per call, transport
//! failures mapped to [`crate::Error::Network`].

mod http;

pub use http::{HttpTransport, Payload, RawResponse, REQUEST_ID_HEADER};
