// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navmenu Viewport: desktop vs. mobile classification.
//!
//! Navigation menus behave differently depending on the device: with a fine
//! pointer on a wide screen, submenus open on hover and are handled entirely
//! by styling; on narrow screens or touch devices they are toggled by taps.
//! [`classify`] makes that decision from a width and a touch-capability bit.
//! It holds no state, so callers recompute it whenever the viewport changes.
//!
//! ```rust
//! use navmenu_viewport::{Viewport, ViewportMode, classify};
//!
//! assert_eq!(classify(768, false), ViewportMode::Mobile);
//! assert_eq!(classify(769, false), ViewportMode::Desktop);
//! assert_eq!(classify(1920, true), ViewportMode::Mobile);
//! assert!(Viewport::new(500, false).mode().is_mobile());
//! ```
//!
//! This crate is `no_std` and has no dependencies.

#![no_std]

/// Widest viewport, in CSS pixels, still treated as mobile.
pub const MOBILE_BREAKPOINT: u32 = 768;

/// Interaction style a viewport calls for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ViewportMode {
    /// Wide screen with a fine pointer; submenus follow hover styling.
    Desktop,
    /// Narrow screen or touch device; submenus are toggled explicitly.
    Mobile,
}

impl ViewportMode {
    /// Returns true for [`ViewportMode::Mobile`].
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

/// Classify a viewport: mobile if `width <= 768` or the device is touch-capable.
pub const fn classify(width: u32, touch: bool) -> ViewportMode {
    if touch || Breakpoint::INCLUSIVE.is_narrow(width) {
        ViewportMode::Mobile
    } else {
        ViewportMode::Desktop
    }
}

/// Snapshot of the window as seen by a host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Viewport {
    /// Inner width in CSS pixels.
    pub width: u32,
    /// Whether the device reports touch support.
    pub touch: bool,
}

impl Viewport {
    /// Create a snapshot.
    pub const fn new(width: u32, touch: bool) -> Self {
        Self { width, touch }
    }

    /// The mode this snapshot classifies as.
    pub const fn mode(self) -> ViewportMode {
        classify(self.width, self.touch)
    }

    /// Same device, new width.
    #[must_use]
    pub const fn resized(self, width: u32) -> Self {
        Self { width, ..self }
    }
}

/// A width comparison against [`MOBILE_BREAKPOINT`].
///
/// Themes disagree on whether the breakpoint itself is narrow: submenu
/// handling treats 768 as narrow, while main-menu handling in some themes
/// treats 768 as wide.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    /// `width <= breakpoint` is narrow.
    Inclusive(u32),
    /// `width < breakpoint` is narrow.
    Exclusive(u32),
}

impl Breakpoint {
    /// `width <= 768` is narrow.
    pub const INCLUSIVE: Self = Self::Inclusive(MOBILE_BREAKPOINT);
    /// `width < 768` is narrow.
    pub const EXCLUSIVE: Self = Self::Exclusive(MOBILE_BREAKPOINT);

    /// Returns true if `width` falls on the narrow side.
    pub const fn is_narrow(self, width: u32) -> bool {
        match self {
            Self::Inclusive(b) => width <= b,
            Self::Exclusive(b) => width < b,
        }
    }

    /// Returns true if `width` falls on the wide side.
    pub const fn is_wide(self, width: u32) -> bool {
        !self.is_narrow(width)
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self::INCLUSIVE
    }
}
