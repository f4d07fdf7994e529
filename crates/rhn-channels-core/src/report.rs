//! The channel tree report
//!
//! One linear pass: authenticate, fetch the channel list, group it into a
//! [`ChannelTree`], then print base channels and their children with the
//! requested filters applied. Detail lookups only happen when the custom
//! filter is on, and only for channels the walk actually reaches.

use std::io::Write;

use crate::channel::ChannelTree;
use crate::client::{ChannelApi, SessionToken};
use crate::error::Result;

/// Parsed invocation options for one report run.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub username: String,
    pub password: String,
    /// Restrict output to this base channel and its children.
    pub base_channel: Option<String>,
    /// Suppress channels whose details report no GPG key URL.
    pub no_custom: bool,
}

/// Print the channel tree for the given options through `api`, writing one
/// label per line: base channels unindented, children indented two spaces.
pub fn run_report(
    api: &impl ChannelApi,
    options: &ReportOptions,
    out: &mut impl Write,
) -> Result<()> {
    let session = api.authenticate(&options.username, &options.password)?;
    let channels = api.list_channels(&session)?;
    let tree = ChannelTree::from_channels(&channels);

    for parent in tree.base_channels() {
        if let Some(only) = &options.base_channel {
            if only != parent {
                continue;
            }
        }
        if options.no_custom && is_custom(api, &session, parent)? {
            continue;
        }
        writeln!(out, "{parent}")?;

        for child in tree.children_of(parent) {
            if options.no_custom && is_custom(api, &session, child)? {
                continue;
            }
            writeln!(out, "  {child}")?;
        }
    }

    Ok(())
}

fn is_custom(api: &impl ChannelApi, session: &SessionToken, label: &str) -> Result<bool> {
    Ok(api.channel_details(session, label)?.is_custom())
}
