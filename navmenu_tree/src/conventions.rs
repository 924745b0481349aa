// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme markup conventions.

/// Class and selector names a theme uses for its navigation markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkupConventions {
    /// CSS selector of the navigation root.
    pub nav_root: &'static str,
    /// Class carried by items that have children.
    pub parent_class: &'static str,
    /// Class carried by submenu containers.
    pub submenu_class: &'static str,
}

impl MarkupConventions {
    /// Conventions of the default theme (`.site-navigation`, `.menu-item-has-children`, `.sub-menu`).
    pub const DEFAULT_THEME: Self = Self {
        nav_root: ".site-navigation",
        parent_class: "menu-item-has-children",
        submenu_class: "sub-menu",
    };

    /// Conventions of the pure theme (`#menu`, `.has-submenu`, `.submenu`).
    pub const PURE_THEME: Self = Self {
        nav_root: "#menu",
        parent_class: "has-submenu",
        submenu_class: "submenu",
    };
}

impl Default for MarkupConventions {
    fn default() -> Self {
        Self::DEFAULT_THEME
    }
}
