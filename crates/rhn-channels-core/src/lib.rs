//! Core library for the `rhn-channels` reporter: a typed XML-RPC client for
//! the RHN Classic API, channel records, the parent/child tree, and the
//! report entry point.

pub mod channel;
pub mod client;
pub mod error;
pub mod report;
pub mod xmlrpc;

pub use channel::{ChannelDetails, ChannelSummary, ChannelTree};
pub use client::{ChannelApi, RpcClient, SessionToken, DEFAULT_SERVER, RPC_PATH};
pub use error::{Result, RhnError};
pub use report::{run_report, ReportOptions};
