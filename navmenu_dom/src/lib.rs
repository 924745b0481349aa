// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navmenu DOM: the seam between menu state and the document that shows it.
//!
//! Menu state machines in this workspace never touch a real document. Every
//! visible effect (a class toggle, an ARIA attribute, a synthesized toggle
//! button) is expressed as a call on a [`DomHost`], addressed by a typed
//! [`Element`] handle. A browser integration implements [`DomHost`] over its
//! element table; tests and demos use [`DomModel`], an in-memory host that
//! records the resulting document state.
//!
//! ## Minimal example
//!
//! ```rust
//! use navmenu_dom::{DomHost, DomModel, Element};
//! use navmenu_tree::{MenuItem, MenuTree};
//!
//! let mut tree = MenuTree::new();
//! let about = tree.insert(None, MenuItem::parent("About", None));
//! tree.insert(Some(about), MenuItem::leaf("Team", "/team"));
//!
//! let mut dom = DomModel::from_tree(&tree);
//! dom.insert_affordance(about);
//! dom.set_attribute(Element::Affordance(about), "aria-expanded", "false");
//!
//! assert_eq!(dom.affordance_count(), 1);
//! assert_eq!(
//!     dom.attribute(Element::Affordance(about), "aria-expanded"),
//!     Some("false")
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod model;

pub use model::{DomModel, ElementState};

use navmenu_tree::NodeId;

/// Handle to an element a menu state machine can affect.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    /// The document body.
    Body,
    /// The navigation container.
    Nav,
    /// The main-menu ("hamburger") toggle button.
    MenuToggle,
    /// The dark-mode switch input.
    ThemeSwitch,
    /// The list item of a menu entry.
    Item(NodeId),
    /// The anchor of a menu entry.
    Link(NodeId),
    /// The submenu container owned by a parent entry.
    Submenu(NodeId),
    /// A toggle button synthesized next to a parent entry's anchor.
    Affordance(NodeId),
}

/// Receiver of document mutations.
///
/// Implementations apply each call synchronously; callers rely on a mutation
/// being visible as soon as the call returns. Calls addressing an element the
/// host does not know are ignored.
pub trait DomHost {
    /// Add `class` to the element's class list.
    fn add_class(&mut self, element: Element, class: &'static str);

    /// Remove `class` from the element's class list.
    fn remove_class(&mut self, element: Element, class: &'static str);

    /// Set attribute `name` to `value`.
    fn set_attribute(&mut self, element: Element, name: &'static str, value: &str);

    /// Remove attribute `name`.
    fn remove_attribute(&mut self, element: Element, name: &'static str);

    /// Replace the element's text content.
    fn set_text(&mut self, element: Element, text: &str);

    /// Create the toggle button for `item`, placed right after its anchor.
    fn insert_affordance(&mut self, item: NodeId);

    /// Remove the toggle button of `item`, if any.
    fn remove_affordance(&mut self, item: NodeId);

    /// Create the main-menu toggle button, placed right before the navigation container.
    fn insert_menu_toggle(&mut self);

    /// Add or remove `class` depending on `on`.
    fn set_class(&mut self, element: Element, class: &'static str, on: bool) {
        if on {
            self.add_class(element, class);
        } else {
            self.remove_class(element, class);
        }
    }

    /// Set a boolean ARIA-style attribute to `"true"` or `"false"`.
    fn set_flag(&mut self, element: Element, name: &'static str, value: bool) {
        self.set_attribute(element, name, if value { "true" } else { "false" });
    }
}
