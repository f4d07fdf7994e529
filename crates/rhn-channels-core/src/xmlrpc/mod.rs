//! Minimal XML-RPC wire codec
//!
//! Covers exactly what the RHN API surface needs: rendering a
//! `<methodCall>` document from a method name and scalar parameters, and
//! decoding a `<methodResponse>` into a dynamic [`Value`]. A `<fault>`
//! response decodes to an error carrying the server's fault code and string.

mod request;
mod response;
mod value;

pub use request::MethodCall;
pub use response::parse_response;
pub use value::Value;
