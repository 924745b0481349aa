// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the menu tree: node identifiers, flags, and item data.

use alloc::string::String;

/// Identifier for an item in a [`MenuTree`](crate::MenuTree).
///
/// Ids are dense arena indices handed out in insertion order. For trees built
/// from markup that is document order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32) -> Self {
        Self(idx)
    }

    /// Arena index of this node.
    ///
    /// Useful for hosts that keep their own parallel per-node storage.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Structural facts about a menu item, as read from the markup.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// The item carries the "has children" structural class.
        const DECLARED_PARENT = 0b0000_0001;
        /// A submenu container was found under the item.
        const SUBMENU         = 0b0000_0010;
        /// The anchor does not navigate (`data-parent="true"`, empty or `#` href).
        const PARENT_LINK     = 0b0000_0100;
    }
}

/// One navigation entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuItem {
    /// Display text of the item's link.
    pub label: String,
    /// Navigable destination, `None` when the anchor has no real target.
    pub link: Option<String>,
    /// Structural flags.
    pub flags: ItemFlags,
}

impl MenuItem {
    /// A leaf item pointing at `link`.
    pub fn leaf(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: Some(link.into()),
            flags: ItemFlags::empty(),
        }
    }

    /// A parent item.
    ///
    /// `link` of `None`, `""` or `"#"` marks the anchor as a non-navigating
    /// parent link.
    pub fn parent(label: impl Into<String>, link: Option<&str>) -> Self {
        let mut item = Self {
            label: label.into(),
            link: link.map(String::from),
            flags: ItemFlags::DECLARED_PARENT,
        };
        item.normalize_link(false);
        item
    }

    /// Fold the anchor conventions into [`ItemFlags::PARENT_LINK`].
    ///
    /// Only items that declare themselves parents are considered; `data_parent`
    /// is the value of the anchor's `data-parent="true"` marker.
    pub fn normalize_link(&mut self, data_parent: bool) {
        if !self.flags.contains(ItemFlags::DECLARED_PARENT) {
            return;
        }
        let empty = matches!(self.link.as_deref(), None | Some("" | "#"));
        if data_parent || empty {
            self.flags.insert(ItemFlags::PARENT_LINK);
        }
        if empty {
            self.link = None;
        }
    }

    /// Returns true if activating the anchor should not navigate.
    pub fn is_parent_link(&self) -> bool {
        self.flags.contains(ItemFlags::PARENT_LINK)
    }
}
