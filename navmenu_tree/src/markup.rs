// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build a [`MenuTree`] from theme markup.
//!
//! Every `li` below the navigation root becomes a [`MenuItem`]; nesting of
//! `li` elements becomes tree structure. The item's label and link come from
//! its first direct `a` child.

use alloc::string::{String, ToString};

use kuchiki::NodeRef;
use kuchiki::traits::TendrilSink as _;

use crate::conventions::MarkupConventions;
use crate::tree::MenuTree;
use crate::types::{ItemFlags, MenuItem, NodeId};

/// Errors raised while reading navigation markup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    /// No element matched the navigation root selector.
    #[error("navigation root `{selector}` not found")]
    MissingRoot {
        /// The selector that was searched for.
        selector: &'static str,
    },
}

impl MenuTree {
    /// Parse `html` and build the tree rooted at `conventions.nav_root`.
    ///
    /// ```rust
    /// use navmenu_tree::{MarkupConventions, MenuTree};
    ///
    /// let html = r##"
    ///   <nav class="site-navigation"><ul>
    ///     <li><a href="/">Home</a></li>
    ///     <li class="menu-item-has-children"><a href="#">About</a>
    ///       <ul class="sub-menu"><li><a href="/team">Team</a></li></ul>
    ///     </li>
    ///   </ul></nav>"##;
    /// let tree = MenuTree::from_html(html, &MarkupConventions::DEFAULT_THEME).unwrap();
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.parents().count(), 1);
    /// ```
    pub fn from_html(html: &str, conventions: &MarkupConventions) -> Result<Self, MarkupError> {
        let document = kuchiki::parse_html().one(html);
        let root = document
            .select_first(conventions.nav_root)
            .map_err(|()| MarkupError::MissingRoot {
                selector: conventions.nav_root,
            })?;
        let mut tree = Self::new();
        collect(root.as_node(), None, conventions, &mut tree);
        tracing::debug!(
            items = tree.len(),
            parents = tree.parents().count(),
            "menu tree built from markup"
        );
        Ok(tree)
    }
}

fn collect(node: &NodeRef, current: Option<NodeId>, conv: &MarkupConventions, tree: &mut MenuTree) {
    for child in node.children() {
        let Some(element) = child.as_element() else {
            continue;
        };
        let classes = element
            .attributes
            .borrow()
            .get("class")
            .map(String::from)
            .unwrap_or_default();
        let has_class = |name: &str| classes.split_whitespace().any(|c| c == name);

        if &*element.name.local == "li" {
            let mut item = MenuItem::default();
            if has_class(conv.parent_class) {
                item.flags.insert(ItemFlags::DECLARED_PARENT);
            }
            let mut data_parent = false;
            if let Some(anchor) = first_anchor(&child) {
                item.label = anchor.text_contents().trim().to_string();
                if let Some(a) = anchor.as_element() {
                    let attrs = a.attributes.borrow();
                    item.link = attrs.get("href").map(String::from);
                    data_parent = attrs.get("data-parent") == Some("true");
                }
            }
            item.normalize_link(data_parent);
            let id = tree.insert(current, item);
            collect(&child, Some(id), conv, tree);
        } else {
            if let Some(owner) = current
                && has_class(conv.submenu_class)
            {
                tree.mark_submenu(owner);
            }
            collect(&child, current, conv, tree);
        }
    }
}

fn first_anchor(li: &NodeRef) -> Option<NodeRef> {
    li.children()
        .find(|c| c.as_element().is_some_and(|e| &*e.name.local == "a"))
}
