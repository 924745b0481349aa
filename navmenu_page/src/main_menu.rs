// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The main ("hamburger") menu.

use navmenu_dom::{DomHost, Element};
use navmenu_viewport::{Breakpoint, Viewport};

use crate::config::MainMenuStyle;

/// Shown/hidden state of the main menu and its toggle.
///
/// With [`MainMenuStyle::ActiveClass`] the menu and the toggle carry their
/// own `active` class; resizing clears only the toggle's, so the two can
/// drift apart. Each toggle flips both.
#[derive(Copy, Clone, Debug)]
pub(crate) struct MainMenu {
    style: MainMenuStyle,
    menu_active: bool,
    toggle_active: bool,
}

impl MainMenu {
    pub(crate) fn setup(style: MainMenuStyle, viewport: Viewport, host: &mut impl DomHost) -> Self {
        let mut menu = Self {
            style,
            menu_active: false,
            toggle_active: false,
        };
        match style {
            MainMenuStyle::ToggleButton => {
                host.insert_menu_toggle();
                host.add_class(Element::MenuToggle, "menu-toggle");
                host.set_flag(Element::MenuToggle, "aria-expanded", false);
                host.set_text(Element::MenuToggle, "Menu");
            }
            MainMenuStyle::ActiveClass => {
                if Breakpoint::EXCLUSIVE.is_wide(viewport.width) {
                    menu.menu_active = true;
                    host.add_class(Element::Nav, "active");
                }
            }
        }
        menu
    }

    pub(crate) fn is_open(&self) -> bool {
        self.menu_active
    }

    pub(crate) fn toggle(&mut self, host: &mut impl DomHost) {
        self.menu_active = !self.menu_active;
        match self.style {
            MainMenuStyle::ToggleButton => {
                host.set_flag(Element::MenuToggle, "aria-expanded", self.menu_active);
                host.set_class(Element::Nav, "toggled", self.menu_active);
            }
            MainMenuStyle::ActiveClass => {
                self.toggle_active = !self.toggle_active;
                host.set_class(Element::Nav, "active", self.menu_active);
                host.set_class(Element::MenuToggle, "active", self.toggle_active);
            }
        }
        tracing::debug!(open = self.menu_active, "main menu toggled");
    }

    /// Escape hides a shown menu.
    pub(crate) fn on_escape(&mut self, host: &mut impl DomHost) -> bool {
        if self.style != MainMenuStyle::ActiveClass || !self.menu_active {
            return false;
        }
        self.toggle(host);
        true
    }

    pub(crate) fn on_resize(&mut self, viewport: Viewport, host: &mut impl DomHost) {
        if self.style == MainMenuStyle::ActiveClass && Breakpoint::EXCLUSIVE.is_wide(viewport.width) {
            self.toggle_active = false;
            host.remove_class(Element::MenuToggle, "active");
        }
    }

    /// A leaf link outside any submenu was followed on a narrow screen.
    pub(crate) fn on_top_level_navigation(&mut self, viewport: Viewport, host: &mut impl DomHost) {
        if self.style == MainMenuStyle::ActiveClass && Breakpoint::EXCLUSIVE.is_narrow(viewport.width) {
            self.toggle(host);
        }
    }
}
