// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Behaviour knobs for the submenu controller.

/// Which other submenus close when one opens.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Exclusivity {
    /// Nothing else closes; every level toggles on its own.
    #[default]
    Independent,
    /// Every other open submenu in the whole menu closes, at any depth.
    ///
    /// Opening a nested submenu therefore closes its own ancestors: only the
    /// most recently activated parent stays open.
    Global,
    /// Open submenus sharing the activated item's parent close, along with
    /// any open submenus nested inside them.
    Siblings,
}

/// What the user activates to toggle a submenu.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ControlStyle {
    /// A toggle button synthesized next to the parent's anchor in mobile mode.
    ///
    /// In desktop mode no button exists and submenus follow hover styling.
    /// Non-navigating parent links forward to the button.
    #[default]
    Affordance,
    /// The parent's anchor itself, at every viewport width.
    ParentLink,
}

/// Class names used to show open state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MarkerClasses {
    /// Added to the parent item while its submenu is open.
    pub item_open: &'static str,
    /// Added to the submenu container while it is open, if the theme uses one.
    pub submenu_active: Option<&'static str>,
}

impl MarkerClasses {
    /// `submenu-open` on items, `submenu-active` on containers.
    pub const DEFAULT_THEME: Self = Self {
        item_open: "submenu-open",
        submenu_active: Some("submenu-active"),
    };

    /// `open` on items, no container class.
    pub const PURE_THEME: Self = Self {
        item_open: "open",
        submenu_active: None,
    };
}

impl Default for MarkerClasses {
    fn default() -> Self {
        Self::DEFAULT_THEME
    }
}

/// Glyph shown on a closed toggle button.
pub const GLYPH_CLOSED: &str = "+";
/// Glyph shown on an open toggle button.
pub const GLYPH_OPEN: &str = "-";

/// Configuration of a [`Controller`](crate::Controller) and [`Reconciler`](crate::Reconciler).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubmenuConfig {
    /// Mutual exclusion policy applied when a submenu opens.
    pub exclusivity: Exclusivity,
    /// How submenus are toggled.
    pub control: ControlStyle,
    /// Whether outside clicks and resizes collapse state.
    pub reconcile: bool,
    /// Class names for open state.
    pub classes: MarkerClasses,
}

impl SubmenuConfig {
    /// Toggle buttons on mobile, independent levels, reconciliation on.
    pub const DEFAULT_THEME: Self = Self {
        exclusivity: Exclusivity::Independent,
        control: ControlStyle::Affordance,
        reconcile: true,
        classes: MarkerClasses::DEFAULT_THEME,
    };

    /// Parent links as controls, global exclusivity, no reconciliation.
    pub const PURE_THEME: Self = Self {
        exclusivity: Exclusivity::Global,
        control: ControlStyle::ParentLink,
        reconcile: false,
        classes: MarkerClasses::PURE_THEME,
    };

    /// Same configuration with a different exclusivity policy.
    #[must_use]
    pub const fn with_exclusivity(mut self, exclusivity: Exclusivity) -> Self {
        self.exclusivity = exclusivity;
        self
    }

    /// Same configuration with reconciliation switched on or off.
    #[must_use]
    pub const fn with_reconcile(mut self, reconcile: bool) -> Self {
        self.reconcile = reconcile;
        self
    }
}

impl Default for SubmenuConfig {
    fn default() -> Self {
        Self::DEFAULT_THEME
    }
}
