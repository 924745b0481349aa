// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use navmenu_tree::NodeId;

/// A marker that mirrors open state into the document.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Open class on the parent item.
    ItemClass,
    /// Active class on the submenu container.
    SubmenuClass,
    /// `aria-hidden` on the submenu container.
    SubmenuHidden,
    /// Presence of the synthesized toggle button.
    AffordancePresence,
    /// `aria-expanded` on the toggle button.
    AffordanceExpanded,
    /// `+` / `-` glyph on the toggle button.
    AffordanceGlyph,
    /// `aria-expanded` on the parent's anchor.
    LinkExpanded,
}

/// Errors raised by the submenu controller.
///
/// None of these are fatal: callers log them and carry on with the rest of
/// the menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    /// A structural element the operation needs is absent from the markup.
    #[error("menu item {item:?} has no {element}")]
    MissingElement {
        /// The item being bound.
        item: NodeId,
        /// What was looked for.
        element: &'static str,
    },
    /// The item is not a parent, so it has no submenu to control.
    #[error("menu item {item:?} is not a parent item")]
    NotParent {
        /// The offending item.
        item: NodeId,
    },
    /// A document marker disagrees with the controller's open state.
    #[error("menu item {item:?}: {marker:?} disagrees with its open state")]
    InconsistentState {
        /// The item whose markers disagree.
        item: NodeId,
        /// The first disagreeing marker found.
        marker: Marker,
    },
}

/// Result type for submenu operations.
pub type Result<T> = core::result::Result<T, MenuError>;
