// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory [`DomHost`] implementation.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use navmenu_tree::{MenuTree, NodeId};
use smallvec::SmallVec;

use crate::{DomHost, Element};

/// Recorded state of one element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementState {
    /// Class list, in insertion order, without duplicates.
    pub classes: SmallVec<[&'static str; 4]>,
    /// Attributes, in insertion order.
    pub attributes: SmallVec<[(&'static str, String); 4]>,
    /// Text content, if it was ever set.
    pub text: Option<String>,
}

impl ElementState {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// A document reduced to what navigation menus touch.
///
/// Elements must exist before they can be mutated; [`DomModel::from_tree`]
/// creates the body, the navigation container and the item / anchor /
/// submenu elements the markup would contain. Affordances come and go through
/// [`DomHost::insert_affordance`] and [`DomHost::remove_affordance`].
#[derive(Clone, Debug, Default)]
pub struct DomModel {
    elements: HashMap<Element, ElementState>,
}

impl DomModel {
    /// Create an empty document with only a body and a navigation container.
    pub fn new() -> Self {
        let mut model = Self::default();
        model.create(Element::Body);
        model.create(Element::Nav);
        model
    }

    /// Create the elements the markup for `tree` would contain.
    ///
    /// Anchors get an `href` for items with a link.
    pub fn from_tree(tree: &MenuTree) -> Self {
        let mut model = Self::new();
        for (id, item) in tree.iter() {
            model.create(Element::Item(id));
            model.create(Element::Link(id));
            if let Some(link) = &item.link {
                model.set_attribute(Element::Link(id), "href", link);
            }
            if tree.has_submenu(id) {
                model.create(Element::Submenu(id));
            }
        }
        model
    }

    /// Add an element with no classes or attributes, if absent.
    pub fn create(&mut self, element: Element) {
        self.elements.entry(element).or_default();
    }

    /// Returns true if the element exists.
    pub fn exists(&self, element: Element) -> bool {
        self.elements.contains_key(&element)
    }

    /// Recorded state of an element.
    pub fn element(&self, element: Element) -> Option<&ElementState> {
        self.elements.get(&element)
    }

    /// Returns true if the element exists and carries `class`.
    pub fn has_class(&self, element: Element, class: &str) -> bool {
        self.elements
            .get(&element)
            .is_some_and(|e| e.classes.iter().any(|c| *c == class))
    }

    /// Value of attribute `name`, if set.
    pub fn attribute(&self, element: Element, name: &str) -> Option<&str> {
        self.elements.get(&element)?.attribute(name)
    }

    /// Text content, if set.
    pub fn text(&self, element: Element) -> Option<&str> {
        self.elements.get(&element)?.text.as_deref()
    }

    /// Number of synthesized toggle buttons currently in the document.
    pub fn affordance_count(&self) -> usize {
        self.elements
            .keys()
            .filter(|e| matches!(e, Element::Affordance(_)))
            .count()
    }

    /// Items that currently own a toggle button, sorted by id.
    pub fn affordances(&self) -> Vec<NodeId> {
        let mut items: Vec<NodeId> = self
            .elements
            .keys()
            .filter_map(|e| match e {
                Element::Affordance(id) => Some(*id),
                _ => None,
            })
            .collect();
        items.sort_unstable();
        items
    }

    /// Elements carrying `class`, in no particular order.
    pub fn with_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = Element> + 'a {
        self.elements
            .iter()
            .filter(move |(_, state)| state.classes.iter().any(|c| *c == class))
            .map(|(element, _)| *element)
    }

    fn state_mut(&mut self, element: Element) -> Option<&mut ElementState> {
        let state = self.elements.get_mut(&element);
        if state.is_none() {
            tracing::trace!(?element, "mutation of unknown element ignored");
        }
        state
    }
}

impl DomHost for DomModel {
    fn add_class(&mut self, element: Element, class: &'static str) {
        if let Some(state) = self.state_mut(element)
            && !state.classes.contains(&class)
        {
            state.classes.push(class);
        }
    }

    fn remove_class(&mut self, element: Element, class: &'static str) {
        if let Some(state) = self.state_mut(element) {
            state.classes.retain(|c| *c != class);
        }
    }

    fn set_attribute(&mut self, element: Element, name: &'static str, value: &str) {
        let Some(state) = self.state_mut(element) else {
            return;
        };
        match state.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => {
                v.clear();
                v.push_str(value);
            }
            None => state.attributes.push((name, String::from(value))),
        }
    }

    fn remove_attribute(&mut self, element: Element, name: &'static str) {
        if let Some(state) = self.state_mut(element) {
            state.attributes.retain(|(n, _)| *n != name);
        }
    }

    fn set_text(&mut self, element: Element, text: &str) {
        if let Some(state) = self.state_mut(element) {
            state.text = Some(String::from(text));
        }
    }

    fn insert_affordance(&mut self, item: NodeId) {
        if !self.exists(Element::Link(item)) {
            tracing::trace!(?item, "affordance for an item without anchor ignored");
            return;
        }
        self.create(Element::Affordance(item));
    }

    fn remove_affordance(&mut self, item: NodeId) {
        self.elements.remove(&Element::Affordance(item));
    }

    fn insert_menu_toggle(&mut self) {
        self.create(Element::MenuToggle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navmenu_tree::MenuItem;

    fn tree() -> (MenuTree, NodeId, NodeId) {
        let mut tree = MenuTree::new();
        let about = tree.insert(None, MenuItem::parent("About", None));
        let team = tree.insert(Some(about), MenuItem::leaf("Team", "/team"));
        (tree, about, team)
    }

    #[test]
    fn from_tree_creates_markup_elements() {
        let (tree, about, team) = tree();
        let dom = DomModel::from_tree(&tree);
        assert!(dom.exists(Element::Body));
        assert!(dom.exists(Element::Nav));
        assert!(dom.exists(Element::Submenu(about)));
        assert!(!dom.exists(Element::Submenu(team)));
        assert_eq!(dom.attribute(Element::Link(team), "href"), Some("/team"));
        assert_eq!(dom.attribute(Element::Link(about), "href"), None);
        assert_eq!(dom.affordance_count(), 0);
    }

    #[test]
    fn classes_are_a_set() {
        let (tree, about, _) = tree();
        let mut dom = DomModel::from_tree(&tree);
        dom.add_class(Element::Item(about), "open");
        dom.add_class(Element::Item(about), "open");
        assert_eq!(dom.element(Element::Item(about)).unwrap().classes.len(), 1);
        dom.set_class(Element::Item(about), "open", false);
        assert!(!dom.has_class(Element::Item(about), "open"));
        assert_eq!(dom.with_class("open").count(), 0);
    }

    #[test]
    fn attributes_overwrite_and_remove() {
        let (tree, about, _) = tree();
        let mut dom = DomModel::from_tree(&tree);
        dom.set_flag(Element::Link(about), "aria-expanded", false);
        dom.set_flag(Element::Link(about), "aria-expanded", true);
        assert_eq!(dom.attribute(Element::Link(about), "aria-expanded"), Some("true"));
        dom.remove_attribute(Element::Link(about), "aria-expanded");
        assert_eq!(dom.attribute(Element::Link(about), "aria-expanded"), None);
    }

    #[test]
    fn affordances_come_and_go() {
        let (tree, about, team) = tree();
        let mut dom = DomModel::from_tree(&tree);
        dom.insert_affordance(about);
        dom.set_text(Element::Affordance(about), "+");
        assert_eq!(dom.affordances(), [about]);
        assert_eq!(dom.text(Element::Affordance(about)), Some("+"));
        dom.remove_affordance(about);
        dom.remove_affordance(team);
        assert_eq!(dom.affordance_count(), 0);
        // Mutations of removed elements are ignored.
        dom.set_text(Element::Affordance(about), "-");
        assert!(!dom.exists(Element::Affordance(about)));
    }
}
