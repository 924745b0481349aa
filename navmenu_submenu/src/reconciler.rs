// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outside-click and resize reconciliation.

use navmenu_dom::DomHost;
use navmenu_tree::{MenuTree, NodeId};
use navmenu_viewport::{Viewport, ViewportMode};

use crate::controller::Controller;

/// Where a document-level click landed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClickTarget {
    /// A submenu toggle button.
    Affordance(NodeId),
    /// A menu item's anchor.
    Link(NodeId),
    /// Elsewhere inside the navigation container.
    Nav,
    /// The main-menu toggle button, which sits outside the navigation container.
    MenuToggle,
    /// The dark-mode switch.
    ThemeSwitch,
    /// Anywhere else in the document.
    Outside,
}

impl ClickTarget {
    /// Returns true if the click landed inside the navigation container.
    pub const fn is_inside_navigation(self) -> bool {
        matches!(self, Self::Affordance(_) | Self::Link(_) | Self::Nav)
    }
}

/// Result of a resize.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResizeOutcome {
    /// The controls already matched the viewport mode.
    Unchanged,
    /// The viewport is desktop; leftover toggle buttons were removed.
    TornDown {
        /// Buttons removed.
        removed: usize,
    },
    /// The viewport is mobile; missing toggle buttons were created.
    Rebound {
        /// Buttons created.
        created: usize,
    },
}

/// Collapses submenus on outside clicks and rebinds controls on mode changes.
///
/// No viewport mode is remembered between events. A resize to desktop tears
/// down any toggle buttons that still exist, and a resize to mobile rebuilds
/// them when there are none. When the controller's configuration turns
/// reconciliation off, every call is a no-op.
#[derive(Clone, Debug)]
pub struct Reconciler {
    enabled: bool,
}

impl Reconciler {
    /// Create a reconciler for `controller`.
    pub fn new(controller: &Controller) -> Self {
        Self {
            enabled: controller.config().reconcile,
        }
    }

    /// Handle a click that reached the document.
    ///
    /// In mobile mode a click outside the navigation container closes every
    /// open submenu. Returns true if anything closed.
    pub fn on_global_click(
        &mut self,
        controller: &mut Controller,
        tree: &MenuTree,
        target: ClickTarget,
        viewport: Viewport,
        host: &mut impl DomHost,
    ) -> bool {
        if !self.enabled || !viewport.mode().is_mobile() || target.is_inside_navigation() {
            tracing::trace!(?target, "click left submenus alone");
            return false;
        }
        let closed = controller.close_all(tree, host);
        if !closed.is_empty() {
            tracing::debug!(?target, closed = closed.len(), "outside click collapsed submenus");
        }
        !closed.is_empty()
    }

    /// Handle a viewport resize.
    ///
    /// Tearing down leaves every submenu closed.
    pub fn on_resize(
        &mut self,
        controller: &mut Controller,
        tree: &MenuTree,
        viewport: Viewport,
        host: &mut impl DomHost,
    ) -> ResizeOutcome {
        if !self.enabled {
            return ResizeOutcome::Unchanged;
        }
        match viewport.mode() {
            ViewportMode::Desktop => {
                let removed = controller.affordance_count();
                if removed == 0 {
                    return ResizeOutcome::Unchanged;
                }
                controller.teardown_for_desktop(tree, host);
                ResizeOutcome::TornDown { removed }
            }
            ViewportMode::Mobile => match controller.rebind_for_mobile(tree, viewport, host) {
                0 => ResizeOutcome::Unchanged,
                created => ResizeOutcome::Rebound { created },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::a11y::verify;
    use crate::config::SubmenuConfig;
    use crate::controller::Activation;
    use navmenu_dom::{DomModel, Element};
    use navmenu_tree::MenuItem;

    fn menu() -> (MenuTree, NodeId, NodeId) {
        let mut tree = MenuTree::new();
        let about = tree.insert(None, MenuItem::parent("About", None));
        tree.insert(Some(about), MenuItem::leaf("Team", "/team"));
        let blog = tree.insert(None, MenuItem::parent("Blog", Some("/blog")));
        tree.insert(Some(blog), MenuItem::leaf("Archive", "/blog/archive"));
        (tree, about, blog)
    }

    fn setup(config: SubmenuConfig, viewport: Viewport) -> (MenuTree, NodeId, Controller, Reconciler, DomModel) {
        let (tree, about, _) = menu();
        let mut dom = DomModel::from_tree(&tree);
        let mut ctl = Controller::new(&tree, config);
        ctl.bind_all(&tree, viewport, &mut dom);
        let rec = Reconciler::new(&ctl);
        (tree, about, ctl, rec, dom)
    }

    #[test]
    fn widening_tears_down() {
        let vp = Viewport::new(500, false);
        let (tree, about, mut ctl, mut rec, mut dom) = setup(SubmenuConfig::DEFAULT_THEME, vp);
        ctl.on_activate(&tree, Activation::Affordance(about), vp, &mut dom);
        assert!(ctl.is_open(about));

        let outcome = rec.on_resize(&mut ctl, &tree, vp.resized(900), &mut dom);
        assert_eq!(outcome, ResizeOutcome::TornDown { removed: 2 });
        assert_eq!(dom.affordance_count(), 0);
        assert!(!ctl.is_open(about));
        assert!(!dom.has_class(Element::Item(about), "submenu-open"));
        verify(&tree, &ctl, &dom).unwrap();
    }

    #[test]
    fn narrowing_rebinds_closed() {
        let vp = Viewport::new(900, false);
        let (tree, about, mut ctl, mut rec, mut dom) = setup(SubmenuConfig::DEFAULT_THEME, vp);
        assert_eq!(dom.affordance_count(), 0);

        let outcome = rec.on_resize(&mut ctl, &tree, vp.resized(500), &mut dom);
        assert_eq!(outcome, ResizeOutcome::Rebound { created: 2 });
        assert_eq!(dom.text(Element::Affordance(about)), Some("+"));
        assert_eq!(
            dom.attribute(Element::Affordance(about), "aria-expanded"),
            Some("false")
        );
        verify(&tree, &ctl, &dom).unwrap();
    }

    #[test]
    fn resize_within_a_mode_changes_nothing() {
        let vp = Viewport::new(500, false);
        let (tree, about, mut ctl, mut rec, mut dom) = setup(SubmenuConfig::DEFAULT_THEME, vp);
        ctl.on_activate(&tree, Activation::Affordance(about), vp, &mut dom);

        assert_eq!(rec.on_resize(&mut ctl, &tree, vp.resized(700), &mut dom), ResizeOutcome::Unchanged);
        assert_eq!(rec.on_resize(&mut ctl, &tree, vp.resized(768), &mut dom), ResizeOutcome::Unchanged);
        assert!(ctl.is_open(about));
        assert_eq!(dom.affordance_count(), 2);
    }

    #[test]
    fn touch_devices_stay_mobile_when_wide() {
        let vp = Viewport::new(500, true);
        let (tree, _, mut ctl, mut rec, mut dom) = setup(SubmenuConfig::DEFAULT_THEME, vp);
        let outcome = rec.on_resize(&mut ctl, &tree, vp.resized(1400), &mut dom);
        assert_eq!(outcome, ResizeOutcome::Unchanged);
        assert_eq!(dom.affordance_count(), 2);
    }

    #[test]
    fn outside_click_collapses_on_mobile() {
        let vp = Viewport::new(500, false);
        let (tree, about, mut ctl, mut rec, mut dom) = setup(SubmenuConfig::DEFAULT_THEME, vp);
        ctl.on_activate(&tree, Activation::Affordance(about), vp, &mut dom);

        assert!(!rec.on_global_click(&mut ctl, &tree, ClickTarget::Nav, vp, &mut dom));
        assert!(!rec.on_global_click(&mut ctl, &tree, ClickTarget::Link(about), vp, &mut dom));
        assert!(ctl.is_open(about));

        assert!(rec.on_global_click(&mut ctl, &tree, ClickTarget::Outside, vp, &mut dom));
        assert!(!ctl.is_open(about));
        assert_eq!(dom.text(Element::Affordance(about)), Some("+"));
        verify(&tree, &ctl, &dom).unwrap();

        // Nothing left to close.
        assert!(!rec.on_global_click(&mut ctl, &tree, ClickTarget::MenuToggle, vp, &mut dom));
    }

    #[test]
    fn outside_click_ignored_on_desktop() {
        let (tree, about, mut ctl, mut rec, mut dom) =
            setup(SubmenuConfig::PURE_THEME.with_reconcile(true), Viewport::new(1024, false));
        let vp = Viewport::new(1024, false);
        ctl.on_activate(&tree, Activation::ParentLink(about), vp, &mut dom);
        assert!(ctl.is_open(about));

        assert!(!rec.on_global_click(&mut ctl, &tree, ClickTarget::Outside, vp, &mut dom));
        assert!(ctl.is_open(about));
    }

    #[test]
    fn disabled_reconciler_does_nothing() {
        let vp = Viewport::new(500, false);
        let (tree, about, mut ctl, mut rec, mut dom) = setup(SubmenuConfig::PURE_THEME, vp);
        ctl.on_activate(&tree, Activation::ParentLink(about), vp, &mut dom);

        assert!(!rec.on_global_click(&mut ctl, &tree, ClickTarget::Outside, vp, &mut dom));
        assert_eq!(rec.on_resize(&mut ctl, &tree, vp.resized(1200), &mut dom), ResizeOutcome::Unchanged);
        assert!(ctl.is_open(about));
        assert!(dom.has_class(Element::Item(about), "open"));
    }

    #[test]
    fn resize_follows_controller_state() {
        let vp = Viewport::new(500, false);
        let (tree, about, mut ctl, mut rec, mut dom) = setup(SubmenuConfig::DEFAULT_THEME, vp);

        // Buttons removed behind the reconciler's back are rebuilt on the next resize.
        ctl.teardown_for_desktop(&tree, &mut dom);
        let outcome = rec.on_resize(&mut ctl, &tree, vp.resized(600), &mut dom);
        assert_eq!(outcome, ResizeOutcome::Rebound { created: 2 });

        ctl.on_activate(&tree, Activation::Affordance(about), vp, &mut dom);
        let wide = vp.resized(1000);
        assert_eq!(
            rec.on_resize(&mut ctl, &tree, wide, &mut dom),
            ResizeOutcome::TornDown { removed: 2 }
        );
        // Repeating the teardown finds nothing left to do.
        assert_eq!(rec.on_resize(&mut ctl, &tree, wide.resized(1100), &mut dom), ResizeOutcome::Unchanged);
        verify(&tree, &ctl, &dom).unwrap();
    }
}
