// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure and queries.

use alloc::vec::Vec;
use smallvec::SmallVec;

use crate::types::{ItemFlags, MenuItem, NodeId};

/// Navigation menu tree.
///
/// Items live in a flat arena indexed by [`NodeId`]. The tree is built once
/// from the page markup (or by hand) and is read-only afterwards; interaction
/// state lives elsewhere, in storage parallel to the arena.
///
/// ## Example
///
/// ```rust
/// use navmenu_tree::{MenuItem, MenuTree};
///
/// let mut tree = MenuTree::new();
/// let about = tree.insert(None, MenuItem::parent("About", Some("#")));
/// let team = tree.insert(Some(about), MenuItem::leaf("Team", "/about/team"));
///
/// assert!(tree.is_parent(about));
/// assert_eq!(tree.parent_of(team), Some(about));
/// assert!(tree.get(about).unwrap().is_parent_link());
/// ```
#[derive(Clone, Default)]
pub struct MenuTree {
    nodes: Vec<Node>,
    roots: SmallVec<[NodeId; 8]>,
}

impl core::fmt::Debug for MenuTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let parents = self.parents().count();
        f.debug_struct("MenuTree")
            .field("nodes", &self.nodes.len())
            .field("roots", &self.roots.len())
            .field("parents", &parents)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Node {
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
    depth: usize,
    item: MenuItem,
}

impl MenuTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `item` as the last child of `parent` (or as a top-level item if `None`).
    ///
    /// Giving an item a child marks it with [`ItemFlags::SUBMENU`]. An unknown
    /// `parent` is treated as `None`.
    pub fn insert(&mut self, parent: Option<NodeId>, item: MenuItem) -> NodeId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices; menus are nowhere near that size."
        )]
        let id = NodeId::new(self.nodes.len() as u32);
        let parent = match parent {
            Some(p) if self.contains(p) => Some(p),
            Some(p) => {
                tracing::warn!(?p, "unknown parent; inserting as a top-level item");
                None
            }
            None => None,
        };
        let depth = parent.map_or(0, |p| self.nodes[p.index()].depth + 1);
        self.nodes.push(Node {
            parent,
            children: SmallVec::new(),
            depth,
            item,
        });
        match parent {
            Some(p) => {
                let node = &mut self.nodes[p.index()];
                node.children.push(id);
                node.item.flags.insert(ItemFlags::SUBMENU);
            }
            None => self.roots.push(id),
        }
        id
    }

    /// Record that `id` owns a submenu container, even if it has no items yet.
    pub fn mark_submenu(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.item.flags.insert(ItemFlags::SUBMENU);
        }
    }

    /// Number of items in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no items.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns true if `id` belongs to this tree.
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Item data for `id`.
    pub fn get(&self, id: NodeId) -> Option<&MenuItem> {
        self.nodes.get(id.index()).map(|n| &n.item)
    }

    /// Flags of `id`, or empty flags for unknown ids.
    pub fn flags(&self, id: NodeId) -> ItemFlags {
        self.get(id).map(|i| i.flags).unwrap_or_default()
    }

    /// Returns true if `id` is a parent: it declares children or owns a submenu.
    pub fn is_parent(&self, id: NodeId) -> bool {
        self.flags(id)
            .intersects(ItemFlags::DECLARED_PARENT | ItemFlags::SUBMENU)
    }

    /// Returns true if a submenu container was discovered under `id`.
    pub fn has_submenu(&self, id: NodeId) -> bool {
        self.flags(id).contains(ItemFlags::SUBMENU)
    }

    /// Parent of `id`, or `None` for top-level items and unknown ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.index()).and_then(|n| n.parent)
    }

    /// Children of `id` in document order, or an empty slice for unknown ids.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.index())
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Top-level items in document order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Nesting depth of `id`; top-level items are at depth 0.
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        self.nodes.get(id.index()).map(|n| n.depth)
    }

    /// Items sharing `id`'s parent, excluding `id` itself.
    pub fn siblings_of(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let group: &[NodeId] = if !self.contains(id) {
            &[]
        } else {
            match self.parent_of(id) {
                Some(p) => self.children_of(p),
                None => self.roots.as_slice(),
            }
        };
        group.iter().copied().filter(move |&s| s != id)
    }

    /// Returns true if `ancestor` is a strict ancestor of `id`.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = self.parent_of(id);
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = self.parent_of(p);
        }
        false
    }

    /// Get the next item in depth-first (document) order.
    ///
    /// Continues into the next top-level item once a subtree is exhausted.
    /// Returns `None` at the end of the menu or for unknown ids.
    pub fn next_depth_first(&self, current: NodeId) -> Option<NodeId> {
        if !self.contains(current) {
            return None;
        }
        if let Some(&first_child) = self.children_of(current).first() {
            return Some(first_child);
        }
        let mut node = current;
        loop {
            if let Some(next) = self.next_sibling(node) {
                return Some(next);
            }
            node = self.parent_of(node)?;
        }
    }

    /// Get the previous item in depth-first (document) order.
    pub fn prev_depth_first(&self, current: NodeId) -> Option<NodeId> {
        if !self.contains(current) {
            return None;
        }
        if let Some(prev) = self.prev_sibling(current) {
            return Some(self.last_in_subtree(prev));
        }
        self.parent_of(current)
    }

    /// Iterate every item in document order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MenuItem)> + '_ {
        let mut next = self.roots.first().copied();
        core::iter::from_fn(move || {
            let id = next?;
            next = self.next_depth_first(id);
            Some((id, &self.nodes[id.index()].item))
        })
    }

    /// Iterate parent items in document order.
    pub fn parents(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.iter()
            .map(|(id, _)| id)
            .filter(|&id| self.is_parent(id))
    }

    /// First item (in document order) whose link equals `link`.
    pub fn find_by_link(&self, link: &str) -> Option<NodeId> {
        self.iter()
            .find(|(_, item)| item.link.as_deref() == Some(link))
            .map(|(id, _)| id)
    }

    fn sibling_group(&self, node: NodeId) -> &[NodeId] {
        match self.parent_of(node) {
            Some(p) => self.children_of(p),
            None => self.roots.as_slice(),
        }
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let siblings = self.sibling_group(node);
        let pos = siblings.iter().position(|&id| id == node)?;
        siblings.get(pos + 1).copied()
    }

    fn prev_sibling(&self, node: NodeId) -> Option<NodeId> {
        let siblings = self.sibling_group(node);
        let pos = siblings.iter().position(|&id| id == node)?;
        if pos > 0 {
            siblings.get(pos - 1).copied()
        } else {
            None
        }
    }

    fn last_in_subtree(&self, mut node: NodeId) -> NodeId {
        while let Some(&last) = self.children_of(node).last() {
            node = last;
        }
        node
    }
}
