// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navmenu Tree: the navigation menu as an explicit, arena-backed tree.
//!
//! Theme markup describes a navigation hierarchy through nested list items,
//! "has children" classes and submenu containers. Querying the live document
//! for that structure on every interaction makes state hard to reason about,
//! so this crate reads it once into a [`MenuTree`] and hands out stable
//! [`NodeId`]s that the rest of the workspace uses to address items.
//!
//! - [`MenuTree`]: arena of items, built in document order and read-only afterwards.
//! - [`MenuItem`]: label, optional link, and [`ItemFlags`].
//! - [`NodeId`]: dense index of an item; usable as a key into parallel per-node storage.
//!
//! Key queries:
//! - [`MenuTree::parent_of`], [`MenuTree::children_of`], [`MenuTree::siblings_of`], [`MenuTree::depth`]
//! - [`MenuTree::is_parent`] and [`MenuTree::has_submenu`]
//! - [`MenuTree::iter`], [`MenuTree::parents`], [`MenuTree::next_depth_first`]
//!
//! ## Features
//!
//! - `markup`: enables `MenuTree::from_html`, which builds a tree from theme
//!   HTML following a set of [`MarkupConventions`]. Requires `std`.
//!
//! This crate is `no_std` and uses `alloc` unless `markup` is enabled.

#![no_std]

extern crate alloc;

#[cfg(feature = "markup")]
extern crate std;

mod conventions;
#[cfg(feature = "markup")]
mod markup;
mod tree;
mod types;

pub use conventions::MarkupConventions;
#[cfg(feature = "markup")]
pub use markup::MarkupError;
pub use tree::MenuTree;
pub use types::{ItemFlags, MenuItem, NodeId};
