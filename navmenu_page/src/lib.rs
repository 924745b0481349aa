// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navmenu Page: the navigation behaviour of one loaded page.
//!
//! [`Page::ready`] runs once the document is ready. It decorates
//! non-navigating parent links, highlights the current link, sets up the main
//! menu toggle, restores the dark-mode preference and binds every submenu.
//! From then on the host forwards document events as [`PageEvent`]s to
//! [`Page::handle`], which routes them to the submenu
//! [`Controller`](navmenu_submenu::Controller), the
//! [`Reconciler`](navmenu_submenu::Reconciler), the main menu and the theme
//! switch.
//!
//! Behaviour differences between themes are captured by [`ThemeVariant`]
//! presets of [`PageConfig`].
//!
//! ```rust
//! use navmenu_dom::{DomModel, Element};
//! use navmenu_page::{Env, Page, PageEvent, ThemeVariant};
//! use navmenu_submenu::ClickTarget;
//! use navmenu_theme::MemoryStore;
//! use navmenu_tree::{MenuItem, MenuTree};
//! use navmenu_viewport::Viewport;
//!
//! let mut tree = MenuTree::new();
//! tree.insert(None, MenuItem::leaf("Home", "/"));
//! let about = tree.insert(None, MenuItem::parent("About", Some("#")));
//! let team = tree.insert(Some(about), MenuItem::leaf("Team", "/about/team"));
//!
//! let mut dom = DomModel::from_tree(&tree);
//! let env = Env::new(Viewport::new(400, false), "/about/team");
//! let mut page = Page::ready(
//!     tree,
//!     ThemeVariant::Default.config(),
//!     &env,
//!     MemoryStore::new(),
//!     &mut dom,
//! );
//!
//! assert!(dom.has_class(Element::Link(team), "active"));
//! assert!(dom.has_class(Element::Link(about), "parent-link"));
//!
//! page.handle(PageEvent::Click(ClickTarget::Link(about)), &mut dom);
//! assert!(page.controller().is_open(about));
//!
//! page.handle(PageEvent::Click(ClickTarget::Outside), &mut dom);
//! assert!(!page.controller().is_open(about));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod main_menu;
mod page;

pub use config::{Highlight, MainMenuStyle, PageConfig, ThemeVariant};
pub use page::{ACTIVE_CLASS, Env, Key, Page, PageEvent};
