// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navmenu Theme: the persisted dark-mode preference.
//!
//! A page offers a switch that puts the body in dark mode. The choice is
//! written to a [`PreferenceStore`] on every change and read back once at
//! startup, so the body class is in place before the user interacts with the
//! page.
//!
//! ```rust
//! use navmenu_dom::{DomModel, Element};
//! use navmenu_theme::{MemoryStore, ThemeSwitch};
//!
//! let mut store = MemoryStore::new();
//! let mut dom = DomModel::new();
//! dom.create(Element::ThemeSwitch);
//!
//! let mut switch = ThemeSwitch::startup(&store, &mut dom);
//! switch.on_change(true, &mut store, &mut dom).unwrap();
//!
//! // Next page load.
//! let mut reloaded = DomModel::new();
//! reloaded.create(Element::ThemeSwitch);
//! let switch = ThemeSwitch::startup(&store, &mut reloaded);
//! assert!(switch.is_dark());
//! assert!(reloaded.has_class(Element::Body, "dark-mode"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod store;

pub use store::{MemoryStore, PreferenceStore, StoreError};

use navmenu_dom::{DomHost, Element};

/// Body class applied in dark mode.
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// The stored dark-mode choice.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ThemePreference {
    /// Dark mode is on.
    pub dark: bool,
}

impl ThemePreference {
    /// Store key.
    pub const KEY: &str = "darkMode";

    /// Read the preference; anything but the exact string `"true"` is light.
    pub fn load(store: &impl PreferenceStore) -> Self {
        Self {
            dark: store.get(Self::KEY).as_deref() == Some("true"),
        }
    }

    /// Persist the preference as `"true"` or `"false"`.
    pub fn store(self, store: &mut impl PreferenceStore) -> Result<(), StoreError> {
        store.set(Self::KEY, if self.dark { "true" } else { "false" })
    }
}

/// The dark-mode switch and the body class it controls.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeSwitch {
    dark: bool,
}

impl ThemeSwitch {
    /// Apply the stored preference before any interaction.
    ///
    /// A dark preference checks the switch and adds [`DARK_MODE_CLASS`] to the
    /// body; a light one leaves the document untouched.
    pub fn startup(store: &impl PreferenceStore, host: &mut impl DomHost) -> Self {
        let preference = ThemePreference::load(store);
        if preference.dark {
            host.set_flag(Element::ThemeSwitch, "checked", true);
            host.add_class(Element::Body, DARK_MODE_CLASS);
            tracing::debug!("dark mode restored");
        }
        Self {
            dark: preference.dark,
        }
    }

    /// Returns true if dark mode is on.
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Handle the switch changing to `checked`.
    ///
    /// The body class follows the switch even if the store rejects the write;
    /// the store error is logged and returned.
    pub fn on_change(
        &mut self,
        checked: bool,
        store: &mut impl PreferenceStore,
        host: &mut impl DomHost,
    ) -> Result<(), StoreError> {
        self.dark = checked;
        host.set_class(Element::Body, DARK_MODE_CLASS, checked);
        tracing::debug!(dark = checked, "theme switched");
        ThemePreference { dark: checked }
            .store(store)
            .inspect_err(|err| tracing::warn!(%err, "theme preference not saved"))
    }
}
