//! Channel records and the parent/child tree
//!
//! RHN Classic channels form a flat two-level hierarchy: a base channel has
//! an empty parent label, a child channel names its base channel. The tree
//! preserves the order the server returned the records in.

mod tree;
mod types;

pub use tree::ChannelTree;
pub use types::{ChannelDetails, ChannelSummary};
