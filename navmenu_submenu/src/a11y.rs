// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accessibility state synchronization.
//!
//! Every open-state change goes through [`sync`] in the same call that
//! changes the state, so the document never shows a frame where classes and
//! ARIA attributes disagree with each other or with the controller.
//!
//! For a parent item `P` the markers are:
//!
//! | element | open | closed |
//! |---|---|---|
//! | item | open class | no open class |
//! | submenu container | active class, `aria-hidden="false"` | no active class, `aria-hidden="true"` |
//! | toggle button (if any) | `aria-expanded="true"`, `-` | `aria-expanded="false"`, `+` |
//! | anchor (if it is the control) | `aria-expanded="true"` | `aria-expanded="false"` |
//!
//! [`verify`] reads the markers back from a [`DomModel`] and reports the
//! first one that disagrees. It exists for tests.

use navmenu_dom::{DomHost, DomModel, Element};
use navmenu_tree::{MenuTree, NodeId};

use crate::config::{ControlStyle, GLYPH_CLOSED, GLYPH_OPEN, SubmenuConfig};
use crate::controller::Controller;
use crate::error::{Marker, MenuError, Result};

/// Returns true if the item's anchor acts as its toggle control.
pub(crate) fn link_is_control(tree: &MenuTree, config: &SubmenuConfig, item: NodeId) -> bool {
    config.control == ControlStyle::ParentLink
        || tree.get(item).is_some_and(|i| i.is_parent_link())
}

/// Write every marker of `item` for the given open state.
pub(crate) fn sync(
    tree: &MenuTree,
    config: &SubmenuConfig,
    item: NodeId,
    open: bool,
    affordance: bool,
    host: &mut impl DomHost,
) {
    host.set_class(Element::Item(item), config.classes.item_open, open);
    if let Some(active) = config.classes.submenu_active {
        host.set_class(Element::Submenu(item), active, open);
    }
    host.set_flag(Element::Submenu(item), "aria-hidden", !open);
    if affordance {
        let button = Element::Affordance(item);
        host.set_flag(button, "aria-expanded", open);
        host.set_text(button, if open { GLYPH_OPEN } else { GLYPH_CLOSED });
    }
    if link_is_control(tree, config, item) {
        host.set_flag(Element::Link(item), "aria-expanded", open);
    }
}

/// Return `item` to the resting state used with desktop hover styling.
///
/// The open classes go and the container's `aria-hidden` is dropped; hover
/// styling decides visibility from then on.
pub(crate) fn clear(tree: &MenuTree, config: &SubmenuConfig, item: NodeId, host: &mut impl DomHost) {
    host.remove_class(Element::Item(item), config.classes.item_open);
    if let Some(active) = config.classes.submenu_active {
        host.remove_class(Element::Submenu(item), active);
    }
    host.remove_attribute(Element::Submenu(item), "aria-hidden");
    if link_is_control(tree, config, item) {
        host.set_flag(Element::Link(item), "aria-expanded", false);
    }
}

/// Unset counts as `false`.
fn flag_matches(value: Option<&str>, expected: bool) -> bool {
    match value {
        Some("true") => expected,
        Some("false") | None => !expected,
        Some(_) => false,
    }
}

/// Check that every marker in `dom` agrees with `controller`'s open state.
///
/// Markers that were never written (for example on desktop, where nothing is
/// bound) count as closed.
pub fn verify(tree: &MenuTree, controller: &Controller, dom: &DomModel) -> Result<()> {
    let config = controller.config();
    for item in tree.parents().filter(|&p| tree.has_submenu(p)) {
        let open = controller.is_open(item);
        let fail = |marker| Err(MenuError::InconsistentState { item, marker });

        if dom.has_class(Element::Item(item), config.classes.item_open) != open {
            return fail(Marker::ItemClass);
        }
        if let Some(active) = config.classes.submenu_active
            && dom.has_class(Element::Submenu(item), active) != open
        {
            return fail(Marker::SubmenuClass);
        }
        let hidden = dom.attribute(Element::Submenu(item), "aria-hidden");
        let hidden_ok = if open {
            hidden == Some("false")
        } else {
            matches!(hidden, Some("true") | None)
        };
        if !hidden_ok {
            return fail(Marker::SubmenuHidden);
        }

        let button = Element::Affordance(item);
        if dom.exists(button) != controller.has_affordance(item) {
            return fail(Marker::AffordancePresence);
        }
        if dom.exists(button) {
            if !flag_matches(dom.attribute(button, "aria-expanded"), open) {
                return fail(Marker::AffordanceExpanded);
            }
            if dom.text(button) != Some(if open { GLYPH_OPEN } else { GLYPH_CLOSED }) {
                return fail(Marker::AffordanceGlyph);
            }
        }
        if link_is_control(tree, config, item)
            && !flag_matches(dom.attribute(Element::Link(item), "aria-expanded"), open)
        {
            return fail(Marker::LinkExpanded);
        }
    }
    Ok(())
}
