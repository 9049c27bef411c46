//! Network layer: the buffered [`Response`], the [`fetch`] transport and
//! [`RequestFailure`], the value every failed request is reported as.
mod fetch;
pub mod headers;
mod request_failure;
mod response;

pub use fetch::fetch;
pub use headers::{HeaderInput, ResponseHeaders};
pub use request_failure::RequestFailure;
pub use response::Response;
