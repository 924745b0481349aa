// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One page's navigation session.

use alloc::string::String;

use navmenu_dom::{DomHost, Element};
use navmenu_submenu::{Activation, ClickTarget, Controller, Reconciler, Response};
use navmenu_theme::{PreferenceStore, StoreError, ThemeSwitch};
use navmenu_tree::{MenuTree, NodeId};
use navmenu_viewport::Viewport;

use crate::config::{Highlight, MainMenuStyle, PageConfig};
use crate::main_menu::MainMenu;

/// Class given to highlighted links.
pub const ACTIVE_CLASS: &str = "active";

/// What the host knows about the page at load time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Env {
    /// Window size and touch capability.
    pub viewport: Viewport,
    /// Path of the current location, e.g. `/blog/post`.
    pub path: String,
}

impl Env {
    /// Create an environment snapshot.
    pub fn new(viewport: Viewport, path: impl Into<String>) -> Self {
        Self {
            viewport,
            path: path.into(),
        }
    }
}

/// Keys the page reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// The Escape key.
    Escape,
    /// Any other key.
    Other,
}

/// Document events delivered to [`Page::handle`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PageEvent {
    /// A click, identified by what it landed on.
    Click(ClickTarget),
    /// The window was resized.
    Resize(Viewport),
    /// A key was pressed.
    KeyDown(Key),
    /// The dark-mode switch changed to the given checked state.
    ThemeSwitchChanged(bool),
}

/// Navigation behaviour of one loaded page.
///
/// Created once the document is ready; then every document event goes
/// through [`Page::handle`].
#[derive(Debug)]
pub struct Page<S> {
    tree: MenuTree,
    config: PageConfig,
    viewport: Viewport,
    controller: Controller,
    reconciler: Reconciler,
    main_menu: MainMenu,
    theme: Option<ThemeSwitch>,
    store: S,
    store_error: Option<StoreError>,
    active: Option<NodeId>,
}

impl<S: PreferenceStore> Page<S> {
    /// Set up the page: parent links, active link, main menu, theme, submenus.
    pub fn ready(
        tree: MenuTree,
        config: PageConfig,
        env: &Env,
        store: S,
        host: &mut impl DomHost,
    ) -> Self {
        if config.normalize_parent_links {
            normalize_parent_links(&tree, host);
        }
        if config.highlight == Highlight::PathPrefix {
            highlight_path(&tree, &env.path, host);
        }
        let main_menu = MainMenu::setup(config.main_menu, env.viewport, host);
        let theme = if config.theme_switch {
            Some(ThemeSwitch::startup(&store, host))
        } else {
            None
        };

        let mut controller = Controller::new(&tree, config.submenu);
        controller.bind_all(&tree, env.viewport, host);
        let reconciler = Reconciler::new(&controller);
        tracing::debug!(
            items = tree.len(),
            mode = ?env.viewport.mode(),
            path = %env.path,
            "page ready"
        );

        Self {
            tree,
            config,
            viewport: env.viewport,
            controller,
            reconciler,
            main_menu,
            theme,
            store,
            store_error: None,
            active: None,
        }
    }

    /// Route a document event.
    pub fn handle(&mut self, event: PageEvent, host: &mut impl DomHost) -> Response {
        match event {
            PageEvent::Click(target) => self.on_click(target, host),
            PageEvent::Resize(viewport) => {
                self.viewport = viewport;
                self.main_menu.on_resize(viewport, host);
                let outcome = self
                    .reconciler
                    .on_resize(&mut self.controller, &self.tree, viewport, host);
                tracing::trace!(?outcome, width = viewport.width, "resize handled");
                Response::default()
            }
            PageEvent::KeyDown(Key::Escape) => Response {
                handled: self.main_menu.on_escape(host),
                ..Response::default()
            },
            PageEvent::KeyDown(Key::Other) => Response::default(),
            PageEvent::ThemeSwitchChanged(checked) => {
                let Some(theme) = self.theme.as_mut() else {
                    tracing::trace!("page has no theme switch");
                    return Response::default();
                };
                // The body class changes even when the write fails.
                self.store_error = theme.on_change(checked, &mut self.store, host).err();
                Response {
                    handled: true,
                    ..Response::default()
                }
            }
        }
    }

    fn on_click(&mut self, target: ClickTarget, host: &mut impl DomHost) -> Response {
        let mut response = match target {
            ClickTarget::Affordance(item) => self.controller.on_activate(
                &self.tree,
                Activation::Affordance(item),
                self.viewport,
                host,
            ),
            ClickTarget::Link(item) if self.tree.is_parent(item) => self.controller.on_activate(
                &self.tree,
                Activation::ParentLink(item),
                self.viewport,
                host,
            ),
            ClickTarget::Link(item) => {
                self.follow_leaf(item, host);
                Response::default()
            }
            ClickTarget::MenuToggle => {
                self.main_menu.toggle(host);
                Response {
                    handled: true,
                    default_prevented: self.config.main_menu == MainMenuStyle::ActiveClass,
                    ..Response::default()
                }
            }
            ClickTarget::Nav | ClickTarget::ThemeSwitch | ClickTarget::Outside => {
                Response::default()
            }
        };
        if !response.propagation_stopped {
            let collapsed = self.reconciler.on_global_click(
                &mut self.controller,
                &self.tree,
                target,
                self.viewport,
                host,
            );
            response.handled |= collapsed;
        }
        response
    }

    fn follow_leaf(&mut self, item: NodeId, host: &mut impl DomHost) {
        if self.tree.depth(item) == Some(0) {
            self.main_menu.on_top_level_navigation(self.viewport, host);
        }
        if self.config.highlight == Highlight::LastClicked {
            if let Some(previous) = self.active.replace(item) {
                host.remove_class(Element::Link(previous), ACTIVE_CLASS);
            }
            host.add_class(Element::Link(item), ACTIVE_CLASS);
        }
    }

    /// The menu structure.
    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    /// The submenu controller.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Latest viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Returns true if the main menu is shown.
    pub fn is_menu_open(&self) -> bool {
        self.main_menu.is_open()
    }

    /// Link highlighted by the last leaf click, with [`Highlight::LastClicked`].
    pub fn active_link(&self) -> Option<NodeId> {
        self.active
    }

    /// Returns true if dark mode is on.
    pub fn is_dark(&self) -> bool {
        self.theme.is_some_and(|t| t.is_dark())
    }

    /// Why the last theme switch change could not be saved, if it failed.
    ///
    /// Cleared by the next successful save.
    pub fn store_error(&self) -> Option<&StoreError> {
        self.store_error.as_ref()
    }

    /// End the session, returning the preference store.
    pub fn into_store(self) -> S {
        self.store
    }
}

/// Mark non-navigating parent anchors as buttons that open a popup.
fn normalize_parent_links(tree: &MenuTree, host: &mut impl DomHost) {
    for item in tree.parents() {
        let Some(entry) = tree.get(item) else {
            continue;
        };
        if !entry.is_parent_link() {
            continue;
        }
        let link = Element::Link(item);
        host.set_attribute(link, "data-parent", "true");
        if entry.link.is_none() {
            host.remove_attribute(link, "href");
        }
        host.add_class(link, "parent-link");
        host.set_attribute(link, "role", "button");
        host.set_flag(link, "aria-haspopup", true);
        host.set_flag(link, "aria-expanded", false);
    }
}

/// Highlight every link the current path falls under.
fn highlight_path(tree: &MenuTree, path: &str, host: &mut impl DomHost) {
    for (id, item) in tree.iter() {
        if item.is_parent_link() {
            continue;
        }
        let Some(link) = item.link.as_deref().filter(|l| !l.is_empty()) else {
            continue;
        };
        let matches = if link == "/" {
            path == "/"
        } else {
            path.starts_with(link)
        };
        if matches {
            host.add_class(Element::Link(id), ACTIVE_CLASS);
        }
    }
}
