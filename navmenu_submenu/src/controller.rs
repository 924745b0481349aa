// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Submenu interaction controller.
//!
//! ## Lifecycle
//!
//! 1. [`Controller::new`] sizes per-node state to the tree; everything starts closed.
//! 2. [`Controller::bind_all`] prepares every parent item for the current viewport:
//!    with [`ControlStyle::Affordance`] a toggle button is synthesized in mobile
//!    mode and nothing happens in desktop mode.
//! 3. Input arrives as [`MenuEvent`]s through [`Controller::dispatch`], or as direct
//!    calls to [`Controller::on_activate`].
//! 4. Viewport changes call [`Controller::teardown_for_desktop`] or
//!    [`Controller::rebind_for_mobile`], usually through the
//!    [`Reconciler`](crate::Reconciler).
//!
//! ## Activation rules
//!
//! - Activating a toggle button always toggles its item and stops propagation.
//! - Activating a non-navigating parent link prevents navigation. With
//!   [`ControlStyle::Affordance`] it only toggles in mobile mode; with
//!   [`ControlStyle::ParentLink`] it always toggles.
//! - Activating a parent link that has a real destination lets navigation
//!   proceed, unless the anchor is the control ([`ControlStyle::ParentLink`]).
//! - Opening an item first applies the configured [`Exclusivity`].
//! - A parent without a submenu container never opens; the activation is
//!   logged and only navigation is suppressed when the anchor is the control.

use alloc::vec::Vec;

use navmenu_dom::{DomHost, Element};
use navmenu_tree::{MenuTree, NodeId};
use navmenu_viewport::Viewport;
use smallvec::SmallVec;

use crate::a11y;
use crate::config::{ControlStyle, Exclusivity, GLYPH_CLOSED, SubmenuConfig};
use crate::error::{MenuError, Result};

/// What the user activated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Activation {
    /// The synthesized toggle button of an item.
    Affordance(NodeId),
    /// The anchor of an item.
    ParentLink(NodeId),
}

impl Activation {
    /// The item the activation targets.
    pub const fn item(self) -> NodeId {
        match self {
            Self::Affordance(id) | Self::ParentLink(id) => id,
        }
    }
}

/// Messages handled by [`Controller::dispatch`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MenuEvent {
    /// The user activated a control.
    Activate(Activation),
    /// Close every open submenu.
    CollapseAll,
}

/// Effects of handling one event.
///
/// `default_prevented` and `propagation_stopped` tell the host what to do
/// with the originating document event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
    /// The event changed menu state.
    pub handled: bool,
    /// The host must suppress the default action (navigation).
    pub default_prevented: bool,
    /// The host must not deliver the event to document-level handlers.
    pub propagation_stopped: bool,
    /// Item opened by this event, if any.
    pub opened: Option<NodeId>,
    /// Items closed by this event, in the order they closed.
    pub closed: SmallVec<[NodeId; 4]>,
}

impl Response {
    fn prevented() -> Self {
        Self {
            default_prevented: true,
            ..Self::default()
        }
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct NodeState {
    open: bool,
    affordance: bool,
}

/// Owner of every item's open state.
///
/// State is stored per node, parallel to the [`MenuTree`] arena. All methods
/// take the tree and a [`DomHost`]; every state change is mirrored into the
/// host before the method returns.
#[derive(Clone, Debug)]
pub struct Controller {
    config: SubmenuConfig,
    nodes: Vec<NodeState>,
}

impl Controller {
    /// Create a controller for `tree` with everything closed and nothing bound.
    pub fn new(tree: &MenuTree, config: SubmenuConfig) -> Self {
        Self {
            config,
            nodes: alloc::vec![NodeState::default(); tree.len()],
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &SubmenuConfig {
        &self.config
    }

    /// Returns true if `item`'s submenu is open.
    pub fn is_open(&self, item: NodeId) -> bool {
        self.state(item).is_some_and(|s| s.open)
    }

    /// Open items in document order.
    pub fn open_items<'a>(&'a self, tree: &'a MenuTree) -> impl Iterator<Item = NodeId> + 'a {
        tree.parents().filter(move |&id| self.is_open(id))
    }

    /// Returns true if a toggle button currently exists for `item`.
    pub fn has_affordance(&self, item: NodeId) -> bool {
        self.state(item).is_some_and(|s| s.affordance)
    }

    /// Number of toggle buttons currently in the document.
    pub fn affordance_count(&self) -> usize {
        self.nodes.iter().filter(|s| s.affordance).count()
    }

    /// Prepare `item` for interaction under `viewport`.
    ///
    /// Fails with [`MenuError::NotParent`] for leaves and
    /// [`MenuError::MissingElement`] when the item has no submenu container;
    /// neither failure touches the document.
    pub fn bind(
        &mut self,
        tree: &MenuTree,
        item: NodeId,
        viewport: Viewport,
        host: &mut impl DomHost,
    ) -> Result<()> {
        if !tree.is_parent(item) || self.state(item).is_none() {
            return Err(MenuError::NotParent { item });
        }
        if !tree.has_submenu(item) {
            return Err(MenuError::MissingElement {
                item,
                element: "submenu container",
            });
        }
        match self.config.control {
            ControlStyle::Affordance => {
                if !viewport.mode().is_mobile() || self.has_affordance(item) {
                    return Ok(());
                }
                host.insert_affordance(item);
                let button = Element::Affordance(item);
                host.add_class(button, "submenu-toggle");
                host.set_flag(button, "aria-expanded", false);
                host.set_text(button, GLYPH_CLOSED);
                self.nodes[item.index()].affordance = true;
                tracing::debug!(?item, "toggle button created");
            }
            ControlStyle::ParentLink => {
                host.set_flag(Element::Link(item), "aria-haspopup", true);
            }
        }
        let open = self.is_open(item);
        a11y::sync(tree, &self.config, item, open, self.has_affordance(item), host);
        Ok(())
    }

    /// Bind every parent item, logging and skipping the ones that fail.
    ///
    /// Returns the number of toggle buttons created.
    pub fn bind_all(&mut self, tree: &MenuTree, viewport: Viewport, host: &mut impl DomHost) -> usize {
        let before = self.affordance_count();
        for item in tree.parents() {
            if let Err(err) = self.bind(tree, item, viewport, host) {
                tracing::warn!(%err, "menu item skipped");
            }
        }
        let created = self.affordance_count() - before;
        tracing::debug!(created, mode = ?viewport.mode(), "submenus bound");
        created
    }

    /// Handle activation of a control.
    pub fn on_activate(
        &mut self,
        tree: &MenuTree,
        activation: Activation,
        viewport: Viewport,
        host: &mut impl DomHost,
    ) -> Response {
        let item = activation.item();
        if !tree.is_parent(item) || self.state(item).is_none() {
            tracing::trace!(?activation, "activation of a non-parent item ignored");
            return Response::default();
        }
        if !tree.has_submenu(item) {
            let err = MenuError::MissingElement {
                item,
                element: "submenu container",
            };
            tracing::warn!(%err, "activation ignored");
            let anchor_is_control = matches!(activation, Activation::ParentLink(_))
                && a11y::link_is_control(tree, &self.config, item);
            return if anchor_is_control {
                Response::prevented()
            } else {
                Response::default()
            };
        }

        match (activation, self.config.control) {
            (Activation::Affordance(_), _) => {
                if !self.has_affordance(item) {
                    tracing::trace!(?item, "activation of a missing toggle button ignored");
                    return Response::default();
                }
                let mut response = self.toggle(tree, item, host);
                response.default_prevented = true;
                response.propagation_stopped = true;
                response
            }
            (Activation::ParentLink(_), ControlStyle::Affordance) => {
                let parent_link = tree.get(item).is_some_and(|i| i.is_parent_link());
                if !parent_link {
                    return Response::default();
                }
                if !viewport.mode().is_mobile() {
                    return Response::prevented();
                }
                // Same transition whether or not the toggle button exists.
                let mut response = self.toggle(tree, item, host);
                response.default_prevented = true;
                response
            }
            (Activation::ParentLink(_), ControlStyle::ParentLink) => {
                let mut response = self.toggle(tree, item, host);
                response.default_prevented = true;
                response
            }
        }
    }

    /// Remove every toggle button and close every submenu.
    ///
    /// Desktop mode relies on hover styling, so no open state survives.
    pub fn teardown_for_desktop(&mut self, tree: &MenuTree, host: &mut impl DomHost) {
        let mut removed = 0_usize;
        for item in tree.parents() {
            let Some(state) = self.nodes.get_mut(item.index()) else {
                continue;
            };
            if state.affordance {
                host.remove_affordance(item);
                state.affordance = false;
                removed += 1;
            }
            state.open = false;
            if tree.has_submenu(item) {
                a11y::clear(tree, &self.config, item, host);
            }
        }
        tracing::debug!(removed, "submenus torn down for desktop");
    }

    /// Bind every parent again after a switch to mobile.
    ///
    /// Only acts when toggle buttons are in use and none exist; returns the
    /// number created.
    pub fn rebind_for_mobile(
        &mut self,
        tree: &MenuTree,
        viewport: Viewport,
        host: &mut impl DomHost,
    ) -> usize {
        if self.config.control != ControlStyle::Affordance || self.affordance_count() > 0 {
            return 0;
        }
        self.bind_all(tree, viewport, host)
    }

    /// Close every submenu and reset every toggle button.
    ///
    /// Returns the items that were open.
    pub fn close_all(&mut self, tree: &MenuTree, host: &mut impl DomHost) -> SmallVec<[NodeId; 4]> {
        let mut closed = SmallVec::new();
        for item in tree.parents().filter(|&p| tree.has_submenu(p)) {
            let was_open = self.is_open(item);
            if was_open || self.has_affordance(item) {
                self.set_open(tree, item, false, host);
            }
            if was_open {
                closed.push(item);
            }
        }
        closed
    }

    /// Route a message to the matching state change.
    pub fn dispatch(
        &mut self,
        tree: &MenuTree,
        event: MenuEvent,
        viewport: Viewport,
        host: &mut impl DomHost,
    ) -> Response {
        match event {
            MenuEvent::Activate(activation) => self.on_activate(tree, activation, viewport, host),
            MenuEvent::CollapseAll => {
                let closed = self.close_all(tree, host);
                Response {
                    handled: !closed.is_empty(),
                    closed,
                    ..Response::default()
                }
            }
        }
    }

    fn toggle(&mut self, tree: &MenuTree, item: NodeId, host: &mut impl DomHost) -> Response {
        let next_open = !self.is_open(item);
        let mut response = Response {
            handled: true,
            ..Response::default()
        };
        if next_open {
            self.exclude(tree, item, &mut response.closed, host);
            response.opened = Some(item);
        } else {
            response.closed.push(item);
        }
        self.set_open(tree, item, next_open, host);
        tracing::debug!(?item, open = next_open, "submenu toggled");
        response
    }

    /// Close what the exclusivity policy requires before `item` opens.
    fn exclude(
        &mut self,
        tree: &MenuTree,
        item: NodeId,
        closed: &mut SmallVec<[NodeId; 4]>,
        host: &mut impl DomHost,
    ) {
        let victims: SmallVec<[NodeId; 4]> = match self.config.exclusivity {
            Exclusivity::Independent => SmallVec::new(),
            Exclusivity::Global => self.open_items(tree).filter(|&o| o != item).collect(),
            Exclusivity::Siblings => self
                .open_items(tree)
                .filter(|&o| {
                    tree.siblings_of(item)
                        .any(|s| s == o || tree.is_ancestor(s, o))
                })
                .collect(),
        };
        for victim in victims {
            self.set_open(tree, victim, false, host);
            closed.push(victim);
        }
    }

    fn set_open(&mut self, tree: &MenuTree, item: NodeId, open: bool, host: &mut impl DomHost) {
        let Some(state) = self.nodes.get_mut(item.index()) else {
            return;
        };
        state.open = open;
        let affordance = state.affordance;
        a11y::sync(tree, &self.config, item, open, affordance, host);
    }

    fn state(&self, item: NodeId) -> Option<&NodeState> {
        self.nodes.get(item.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::a11y::verify;
    use alloc::vec::Vec;
    use navmenu_dom::DomModel;
    use navmenu_tree::MenuItem;

    struct Menu {
        tree: MenuTree,
        about: NodeId,
        history: NodeId,
        services: NodeId,
        contact: NodeId,
    }

    // About (parent link)
    //   Team
    //   History (/history)
    //     Founders
    // Services (/services)
    //   Web
    // Contact
    fn menu() -> Menu {
        let mut tree = MenuTree::new();
        let about = tree.insert(None, MenuItem::parent("About", None));
        tree.insert(Some(about), MenuItem::leaf("Team", "/team"));
        let history = tree.insert(Some(about), MenuItem::parent("History", Some("/history")));
        tree.insert(Some(history), MenuItem::leaf("Founders", "/history/founders"));
        let services = tree.insert(None, MenuItem::parent("Services", Some("/services")));
        tree.insert(Some(services), MenuItem::leaf("Web", "/services/web"));
        let contact = tree.insert(None, MenuItem::leaf("Contact", "/contact"));
        Menu {
            tree,
            about,
            history,
            services,
            contact,
        }
    }

    const MOBILE: Viewport = Viewport::new(500, false);
    const DESKTOP: Viewport = Viewport::new(1024, false);

    fn bound(config: SubmenuConfig, viewport: Viewport) -> (Menu, Controller, DomModel) {
        let m = menu();
        let mut dom = DomModel::from_tree(&m.tree);
        let mut ctl = Controller::new(&m.tree, config);
        ctl.bind_all(&m.tree, viewport, &mut dom);
        (m, ctl, dom)
    }

    fn tap(ctl: &mut Controller, m: &Menu, item: NodeId, dom: &mut DomModel) -> Response {
        ctl.on_activate(&m.tree, Activation::Affordance(item), MOBILE, dom)
    }

    #[test]
    fn mobile_bind_creates_closed_buttons() {
        let (m, ctl, dom) = bound(SubmenuConfig::DEFAULT_THEME, MOBILE);
        assert_eq!(ctl.affordance_count(), 3);
        assert_eq!(dom.affordance_count(), 3);
        assert!(!ctl.has_affordance(m.contact));
        let button = Element::Affordance(m.about);
        assert_eq!(dom.attribute(button, "aria-expanded"), Some("false"));
        assert_eq!(dom.text(button), Some(GLYPH_CLOSED));
        assert!(dom.has_class(button, "submenu-toggle"));
        assert_eq!(dom.attribute(Element::Submenu(m.about), "aria-hidden"), Some("true"));
        assert_eq!(ctl.open_items(&m.tree).count(), 0);
        verify(&m.tree, &ctl, &dom).unwrap();
    }

    #[test]
    fn desktop_bind_creates_nothing() {
        let (m, ctl, dom) = bound(SubmenuConfig::DEFAULT_THEME, DESKTOP);
        assert_eq!(ctl.affordance_count(), 0);
        assert_eq!(dom.affordance_count(), 0);
        assert_eq!(dom.attribute(Element::Submenu(m.about), "aria-hidden"), None);
        verify(&m.tree, &ctl, &dom).unwrap();
    }

    #[test]
    fn bind_rejects_leaves_and_missing_containers() {
        let mut m = menu();
        let empty = m.tree.insert(None, MenuItem::parent("Empty", None));
        let mut dom = DomModel::from_tree(&m.tree);
        let mut ctl = Controller::new(&m.tree, SubmenuConfig::DEFAULT_THEME);

        assert_eq!(
            ctl.bind(&m.tree, m.contact, MOBILE, &mut dom),
            Err(MenuError::NotParent { item: m.contact })
        );
        assert!(matches!(
            ctl.bind(&m.tree, empty, MOBILE, &mut dom),
            Err(MenuError::MissingElement { item, .. }) if item == empty
        ));
        assert_eq!(dom.affordance_count(), 0);

        // The failing item is skipped; the rest still bind.
        assert_eq!(ctl.bind_all(&m.tree, MOBILE, &mut dom), 3);
        assert!(!ctl.has_affordance(empty));
    }

    #[test]
    fn bind_twice_keeps_one_button() {
        let (m, mut ctl, mut dom) = bound(SubmenuConfig::DEFAULT_THEME, MOBILE);
        assert_eq!(ctl.bind_all(&m.tree, MOBILE, &mut dom), 0);
        assert_eq!(dom.affordance_count(), 3);
    }

    #[test]
    fn toggle_twice_restores_closed_state() {
        let (m, mut ctl, mut dom) = bound(SubmenuConfig::DEFAULT_THEME, MOBILE);

        let first = tap(&mut ctl, &m, m.about, &mut dom);
        assert!(first.handled && first.default_prevented && first.propagation_stopped);
        assert_eq!(first.opened, Some(m.about));
        assert!(ctl.is_open(m.about));
        assert!(dom.has_class(Element::Item(m.about), "submenu-open"));
        assert!(dom.has_class(Element::Submenu(m.about), "submenu-active"));
        assert_eq!(dom.attribute(Element::Submenu(m.about), "aria-hidden"), Some("false"));
        assert_eq!(dom.text(Element::Affordance(m.about)), Some("-"));
        assert_eq!(dom.attribute(Element::Link(m.about), "aria-expanded"), Some("true"));
        verify(&m.tree, &ctl, &dom).unwrap();

        let second = tap(&mut ctl, &m, m.about, &mut dom);
        assert_eq!(second.closed.as_slice(), &[m.about]);
        assert!(!ctl.is_open(m.about));
        assert!(!dom.has_class(Element::Item(m.about), "submenu-open"));
        assert_eq!(dom.text(Element::Affordance(m.about)), Some("+"));
        assert_eq!(dom.attribute(Element::Affordance(m.about), "aria-expanded"), Some("false"));
        verify(&m.tree, &ctl, &dom).unwrap();
    }

    #[test]
    fn independent_levels_stay_open() {
        let (m, mut ctl, mut dom) = bound(SubmenuConfig::DEFAULT_THEME, MOBILE);
        tap(&mut ctl, &m, m.about, &mut dom);
        tap(&mut ctl, &m, m.history, &mut dom);
        let r = tap(&mut ctl, &m, m.services, &mut dom);
        assert!(r.closed.is_empty());
        let open: Vec<_> = ctl.open_items(&m.tree).collect();
        assert_eq!(open, [m.about, m.history, m.services]);
        verify(&m.tree, &ctl, &dom).unwrap();
    }

    #[test]
    fn global_exclusivity_keeps_only_the_last() {
        let config = SubmenuConfig::DEFAULT_THEME.with_exclusivity(Exclusivity::Global);
        let (m, mut ctl, mut dom) = bound(config, MOBILE);
        tap(&mut ctl, &m, m.about, &mut dom);
        let r = tap(&mut ctl, &m, m.history, &mut dom);
        assert_eq!(r.closed.as_slice(), &[m.about]);
        let open: Vec<_> = ctl.open_items(&m.tree).collect();
        assert_eq!(open, [m.history]);
        verify(&m.tree, &ctl, &dom).unwrap();

        // Closing does not reopen anything.
        tap(&mut ctl, &m, m.history, &mut dom);
        assert_eq!(ctl.open_items(&m.tree).count(), 0);
    }

    #[test]
    fn sibling_exclusivity_closes_sibling_subtrees() {
        let config = SubmenuConfig::DEFAULT_THEME.with_exclusivity(Exclusivity::Siblings);
        let (m, mut ctl, mut dom) = bound(config, MOBILE);
        tap(&mut ctl, &m, m.about, &mut dom);
        let nested = tap(&mut ctl, &m, m.history, &mut dom);
        assert!(nested.closed.is_empty());

        let r = tap(&mut ctl, &m, m.services, &mut dom);
        assert_eq!(r.closed.as_slice(), &[m.about, m.history]);
        let open: Vec<_> = ctl.open_items(&m.tree).collect();
        assert_eq!(open, [m.services]);
        verify(&m.tree, &ctl, &dom).unwrap();
    }

    #[test]
    fn parent_link_forwards_to_toggle_on_mobile() {
        let (m, mut ctl, mut dom) = bound(SubmenuConfig::DEFAULT_THEME, MOBILE);
        let r = ctl.on_activate(&m.tree, Activation::ParentLink(m.about), MOBILE, &mut dom);
        assert!(r.handled && r.default_prevented);
        assert!(!r.propagation_stopped);
        assert!(ctl.is_open(m.about));
        verify(&m.tree, &ctl, &dom).unwrap();
    }

    #[test]
    fn parent_link_on_desktop_only_prevents_navigation() {
        let (m, mut ctl, mut dom) = bound(SubmenuConfig::DEFAULT_THEME, DESKTOP);
        let r = ctl.on_activate(&m.tree, Activation::ParentLink(m.about), DESKTOP, &mut dom);
        assert!(!r.handled);
        assert!(r.default_prevented);
        assert!(!ctl.is_open(m.about));
    }

    #[test]
    fn parent_link_toggles_on_wide_touch_screens() {
        let tablet = Viewport::new(1024, true);
        let (m, mut ctl, mut dom) = bound(SubmenuConfig::DEFAULT_THEME, tablet);
        assert_eq!(ctl.affordance_count(), 3);
        let r = ctl.on_activate(&m.tree, Activation::ParentLink(m.about), tablet, &mut dom);
        assert!(r.handled && r.default_prevented);
        assert!(ctl.is_open(m.about));
        assert_eq!(dom.text(Element::Affordance(m.about)), Some(crate::config::GLYPH_OPEN));
        verify(&m.tree, &ctl, &dom).unwrap();
    }

    #[test]
    fn navigating_parent_link_is_left_alone() {
        let (m, mut ctl, mut dom) = bound(SubmenuConfig::DEFAULT_THEME, MOBILE);
        let r = ctl.on_activate(&m.tree, Activation::ParentLink(m.services), MOBILE, &mut dom);
        assert_eq!(r, Response::default());
        assert!(!ctl.is_open(m.services));
    }

    #[test]
    fn leaves_and_missing_buttons_are_ignored() {
        let (m, mut ctl, mut dom) = bound(SubmenuConfig::DEFAULT_THEME, DESKTOP);
        let leaf = ctl.on_activate(&m.tree, Activation::Affordance(m.contact), MOBILE, &mut dom);
        assert_eq!(leaf, Response::default());
        let unbound = ctl.on_activate(&m.tree, Activation::Affordance(m.about), MOBILE, &mut dom);
        assert_eq!(unbound, Response::default());
        assert!(!ctl.is_open(m.about));
    }

    #[test]
    fn teardown_then_rebind() {
        let (m, mut ctl, mut dom) = bound(SubmenuConfig::DEFAULT_THEME, MOBILE);
        tap(&mut ctl, &m, m.about, &mut dom);
        tap(&mut ctl, &m, m.history, &mut dom);

        ctl.teardown_for_desktop(&m.tree, &mut dom);
        assert_eq!(ctl.affordance_count(), 0);
        assert_eq!(dom.affordance_count(), 0);
        assert_eq!(ctl.open_items(&m.tree).count(), 0);
        assert!(!dom.has_class(Element::Item(m.about), "submenu-open"));
        assert!(!dom.has_class(Element::Submenu(m.history), "submenu-active"));
        verify(&m.tree, &ctl, &dom).unwrap();

        assert_eq!(ctl.rebind_for_mobile(&m.tree, MOBILE, &mut dom), 3);
        assert_eq!(ctl.rebind_for_mobile(&m.tree, MOBILE, &mut dom), 0);
        assert_eq!(dom.affordance_count(), 3);
        verify(&m.tree, &ctl, &dom).unwrap();
    }

    #[test]
    fn collapse_all_closes_everything() {
        let (m, mut ctl, mut dom) = bound(SubmenuConfig::DEFAULT_THEME, MOBILE);
        tap(&mut ctl, &m, m.about, &mut dom);
        tap(&mut ctl, &m, m.services, &mut dom);

        let r = ctl.dispatch(&m.tree, MenuEvent::CollapseAll, MOBILE, &mut dom);
        assert!(r.handled);
        assert_eq!(r.closed.as_slice(), &[m.about, m.services]);
        assert_eq!(ctl.open_items(&m.tree).count(), 0);
        assert_eq!(dom.affordance_count(), 3);
        verify(&m.tree, &ctl, &dom).unwrap();

        let again = ctl.dispatch(&m.tree, MenuEvent::CollapseAll, MOBILE, &mut dom);
        assert!(!again.handled);
    }

    #[test]
    fn parent_link_style_uses_anchors() {
        let (m, mut ctl, mut dom) = bound(SubmenuConfig::PURE_THEME, DESKTOP);
        assert_eq!(dom.affordance_count(), 0);
        assert_eq!(dom.attribute(Element::Link(m.services), "aria-haspopup"), Some("true"));
        assert_eq!(dom.attribute(Element::Link(m.services), "aria-expanded"), Some("false"));

        let event = MenuEvent::Activate(Activation::ParentLink(m.services));
        let r = ctl.dispatch(&m.tree, event, DESKTOP, &mut dom);
        assert!(r.handled && r.default_prevented);
        assert!(dom.has_class(Element::Item(m.services), "open"));
        assert_eq!(dom.attribute(Element::Link(m.services), "aria-expanded"), Some("true"));

        // Global exclusivity: opening About closes Services.
        let event = MenuEvent::Activate(Activation::ParentLink(m.about));
        let r = ctl.dispatch(&m.tree, event, MOBILE, &mut dom);
        assert_eq!(r.closed.as_slice(), &[m.services]);
        assert!(!dom.has_class(Element::Item(m.services), "open"));
        verify(&m.tree, &ctl, &dom).unwrap();
    }

    #[test]
    fn parent_without_container_never_opens() {
        let mut m = menu();
        let broken = m.tree.insert(None, MenuItem::parent("Broken", None));
        let mut dom = DomModel::from_tree(&m.tree);
        let mut ctl = Controller::new(&m.tree, SubmenuConfig::DEFAULT_THEME);
        ctl.bind_all(&m.tree, MOBILE, &mut dom);

        let r = ctl.on_activate(&m.tree, Activation::ParentLink(broken), MOBILE, &mut dom);
        assert!(!r.handled);
        assert!(r.default_prevented);
        assert_eq!(r.opened, None);
        assert!(!ctl.is_open(broken));
        assert!(!dom.has_class(Element::Item(broken), "submenu-open"));

        let r = ctl.on_activate(&m.tree, Activation::Affordance(broken), MOBILE, &mut dom);
        assert_eq!(r, Response::default());
        assert_eq!(ctl.open_items(&m.tree).count(), 0);
    }

    #[test]
    fn parent_without_container_keeps_other_submenus_open() {
        let mut m = menu();
        let broken = m.tree.insert(None, MenuItem::parent("Broken", Some("/broken")));
        let mut dom = DomModel::from_tree(&m.tree);
        let mut ctl = Controller::new(&m.tree, SubmenuConfig::PURE_THEME);
        ctl.bind_all(&m.tree, DESKTOP, &mut dom);

        ctl.on_activate(&m.tree, Activation::ParentLink(m.services), DESKTOP, &mut dom);
        assert!(ctl.is_open(m.services));

        let r = ctl.on_activate(&m.tree, Activation::ParentLink(broken), DESKTOP, &mut dom);
        assert!(!r.handled);
        assert!(r.default_prevented);
        assert!(r.closed.is_empty());
        assert!(ctl.is_open(m.services));
        assert!(!ctl.is_open(broken));
        assert!(!dom.has_class(Element::Item(broken), "open"));
        verify(&m.tree, &ctl, &dom).unwrap();
    }
}
