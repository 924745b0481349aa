// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navmenu Submenu: expand/collapse state for hierarchical navigation menus.
//!
//! This crate owns the open/closed state of every parent item in a
//! [`MenuTree`](navmenu_tree::MenuTree) and mirrors it into a document through
//! a [`DomHost`](navmenu_dom::DomHost). It is made of:
//! - A [`Controller`] that binds parent items, handles [`Activation`]s, applies
//!   an [`Exclusivity`] policy and tears controls down or rebuilds them when
//!   the viewport changes mode.
//! - A [`Reconciler`] that collapses submenus on clicks outside the navigation
//!   container and drives the controller across desktop/mobile transitions.
//! - [`verify`], which checks that the classes and ARIA attributes in a
//!   [`DomModel`](navmenu_dom::DomModel) agree with the controller.
//!
//! Behaviour is selected with a [`SubmenuConfig`]: [`SubmenuConfig::DEFAULT_THEME`]
//! synthesizes `+`/`-` toggle buttons on mobile and lets levels toggle
//! independently, while [`SubmenuConfig::PURE_THEME`] uses parent anchors as
//! controls at every width and keeps a single submenu open.
//!
//! ## Minimal example
//!
//! ```rust
//! use navmenu_dom::{DomModel, Element};
//! use navmenu_submenu::{
//!     Activation, ClickTarget, Controller, Reconciler, ResizeOutcome, SubmenuConfig, verify,
//! };
//! use navmenu_tree::{MenuItem, MenuTree};
//! use navmenu_viewport::Viewport;
//!
//! let mut tree = MenuTree::new();
//! let about = tree.insert(None, MenuItem::parent("About", None));
//! tree.insert(Some(about), MenuItem::leaf("Team", "/team"));
//!
//! let mut dom = DomModel::from_tree(&tree);
//! let phone = Viewport::new(390, false);
//! let mut controller = Controller::new(&tree, SubmenuConfig::DEFAULT_THEME);
//! let mut reconciler = Reconciler::new(&controller);
//!
//! // One toggle button per parent item on mobile.
//! assert_eq!(controller.bind_all(&tree, phone, &mut dom), 1);
//!
//! let response = controller.on_activate(&tree, Activation::Affordance(about), phone, &mut dom);
//! assert!(response.propagation_stopped);
//! assert!(dom.has_class(Element::Item(about), "submenu-open"));
//!
//! // Tapping elsewhere closes it again.
//! assert!(reconciler.on_global_click(&mut controller, &tree, ClickTarget::Outside, phone, &mut dom));
//! verify(&tree, &controller, &dom).unwrap();
//!
//! // Rotating to a wide screen removes the buttons.
//! let outcome = reconciler.on_resize(&mut controller, &tree, phone.resized(1024), &mut dom);
//! assert_eq!(outcome, ResizeOutcome::TornDown { removed: 1 });
//! assert_eq!(dom.affordance_count(), 0);
//! ```
//!
//! ## Logging
//!
//! State transitions are reported through `tracing` at `debug`; skipped
//! items at `warn`; ignored events at `trace`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod a11y;
mod config;
mod controller;
mod error;
mod reconciler;

pub use a11y::verify;
pub use config::{
    ControlStyle, Exclusivity, GLYPH_CLOSED, GLYPH_OPEN, MarkerClasses, SubmenuConfig,
};
pub use controller::{Activation, Controller, MenuEvent, Response};
pub use error::{Marker, MenuError, Result};
pub use reconciler::{ClickTarget, ResizeOutcome, Reconciler};
