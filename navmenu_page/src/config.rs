// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme variants and page configuration.

use navmenu_submenu::SubmenuConfig;
use navmenu_tree::MarkupConventions;

/// How the main ("hamburger") menu is shown and hidden.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MainMenuStyle {
    /// A `menu-toggle` button is inserted before the navigation container.
    /// It flips its `aria-expanded` and the container's `toggled` class.
    ToggleButton,
    /// An existing toggle and the navigation container both carry `active`
    /// while the menu is shown. The menu starts shown on wide screens and
    /// Escape hides it.
    ActiveClass,
}

/// How the current page's link is highlighted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Highlight {
    /// At startup, links whose href prefixes the current path get `active`.
    /// `/` only matches the home page.
    PathPrefix,
    /// The last leaf link clicked is the single `active` link.
    LastClicked,
}

/// Everything that differs between theme variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PageConfig {
    /// Submenu behaviour.
    pub submenu: SubmenuConfig,
    /// Main-menu behaviour.
    pub main_menu: MainMenuStyle,
    /// Active-link behaviour.
    pub highlight: Highlight,
    /// Decorate non-navigating parent links as buttons at startup.
    pub normalize_parent_links: bool,
    /// The page has a dark-mode switch.
    pub theme_switch: bool,
}

/// The supported theme variants.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeVariant {
    /// Toggle buttons on mobile, independent submenus, path-based highlighting.
    #[default]
    Default,
    /// Parent links as controls, one open submenu, click-based highlighting
    /// and a dark-mode switch.
    Pure,
}

impl ThemeVariant {
    /// Page configuration of this variant.
    pub const fn config(self) -> PageConfig {
        match self {
            Self::Default => PageConfig {
                submenu: SubmenuConfig::DEFAULT_THEME,
                main_menu: MainMenuStyle::ToggleButton,
                highlight: Highlight::PathPrefix,
                normalize_parent_links: true,
                theme_switch: false,
            },
            Self::Pure => PageConfig {
                submenu: SubmenuConfig::PURE_THEME,
                main_menu: MainMenuStyle::ActiveClass,
                highlight: Highlight::LastClicked,
                normalize_parent_links: false,
                theme_switch: true,
            },
        }
    }

    /// Markup conventions of this variant, for [`MenuTree::from_html`](navmenu_tree::MenuTree).
    pub const fn markup(self) -> MarkupConventions {
        match self {
            Self::Default => MarkupConventions::DEFAULT_THEME,
            Self::Pure => MarkupConventions::PURE_THEME,
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        ThemeVariant::Default.config()
    }
}
