use std::collections::HashMap;

use super::types::ChannelSummary;

/// Two-level channel hierarchy in server discovery order.
///
/// Base channels keep the order the server listed them in; children are
/// grouped under their parent label in first-seen order. The child map only
/// holds parents with at least one observed child.
#[derive(Debug, Default)]
pub struct ChannelTree {
    parents: Vec<String>,
    children: HashMap<String, Vec<String>>,
}

impl ChannelTree {
    /// Partition a channel list into base channels and children.
    pub fn from_channels(channels: &[ChannelSummary]) -> Self {
        let mut tree = Self::default();
        for channel in channels {
            if channel.is_base() {
                tree.parents.push(channel.label.clone());
            } else {
                tree.children
                    .entry(channel.parent_label.clone())
                    .or_default()
                    .push(channel.label.clone());
            }
        }
        tree
    }

    /// Base channel labels in discovery order.
    pub fn base_channels(&self) -> &[String] {
        &self.parents
    }

    /// Child labels of a base channel in discovery order, empty when the
    /// channel has no children.
    pub fn children_of(&self, parent: &str) -> &[String] {
        self.children
            .get(parent)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels(pairs: &[(&str, &str)]) -> Vec<ChannelSummary> {
        pairs
            .iter()
            .map(|(label, parent)| ChannelSummary::new(*label, *parent))
            .collect()
    }

    #[test]
    fn partitions_bases_and_children() {
        let tree = ChannelTree::from_channels(&channels(&[
            ("base-a", ""),
            ("child-a1", "base-a"),
            ("base-b", ""),
            ("child-a2", "base-a"),
            ("child-b1", "base-b"),
        ]));

        assert_eq!(tree.base_channels(), ["base-a", "base-b"]);
        assert_eq!(tree.children_of("base-a"), ["child-a1", "child-a2"]);
        assert_eq!(tree.children_of("base-b"), ["child-b1"]);
    }

    #[test]
    fn preserves_discovery_order() {
        let tree = ChannelTree::from_channels(&channels(&[
            ("base-z", ""),
            ("base-a", ""),
            ("base-m", ""),
        ]));
        assert_eq!(tree.base_channels(), ["base-z", "base-a", "base-m"]);
    }

    #[test]
    fn childless_parent_has_empty_slice() {
        let tree = ChannelTree::from_channels(&channels(&[("base-a", "")]));
        assert!(tree.children_of("base-a").is_empty());
        assert!(tree.children_of("never-seen").is_empty());
    }

    #[test]
    fn all_children_means_no_bases() {
        let tree = ChannelTree::from_channels(&channels(&[
            ("child-1", "ghost"),
            ("child-2", "ghost"),
        ]));
        assert!(tree.base_channels().is_empty());
        assert_eq!(tree.children_of("ghost"), ["child-1", "child-2"]);
    }
}
