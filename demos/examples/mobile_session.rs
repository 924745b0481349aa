// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A phone session on the default theme, driven through `navmenu_page`.
//!
//! The menu is read from markup, then a short sequence of taps, an outside
//! click and a rotation to landscape is replayed against an in-memory
//! document. State is printed after each step.
//!
//! Run:
//! - `cargo run -p navmenu_demos --example mobile_session`
//! - `RUST_LOG=debug cargo run -p navmenu_demos --example mobile_session` to see transitions

use navmenu_dom::{DomModel, Element};
use navmenu_page::{Env, Page, PageEvent, ThemeVariant};
use navmenu_submenu::{ClickTarget, verify};
use navmenu_theme::MemoryStore;
use navmenu_tree::MenuTree;
use navmenu_viewport::Viewport;
use tracing_subscriber::EnvFilter;

const NAV: &str = r##"
<header class="site-header">
  <nav class="site-navigation">
    <ul class="menu">
      <li class="menu-item"><a href="/">Home</a></li>
      <li class="menu-item menu-item-has-children">
        <a href="#">Services</a>
        <ul class="sub-menu">
          <li class="menu-item"><a href="/services/design">Design</a></li>
          <li class="menu-item menu-item-has-children">
            <a href="/services/build" data-parent="true">Build</a>
            <ul class="sub-menu">
              <li class="menu-item"><a href="/services/build/web">Web</a></li>
              <li class="menu-item"><a href="/services/build/mobile">Mobile</a></li>
            </ul>
          </li>
        </ul>
      </li>
      <li class="menu-item"><a href="/contact">Contact</a></li>
    </ul>
  </nav>
</header>"##;

fn report(step: &str, page: &Page<MemoryStore>, dom: &DomModel) {
    let open: Vec<&str> = page
        .controller()
        .open_items(page.tree())
        .filter_map(|id| page.tree().get(id).map(|item| item.label.as_str()))
        .collect();
    println!(
        "{step:<28} open={open:?} buttons={} menu_toggled={}",
        dom.affordance_count(),
        dom.has_class(Element::Nav, "toggled"),
    );
    if let Err(err) = verify(page.tree(), page.controller(), dom) {
        println!("  inconsistent: {err}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let variant = ThemeVariant::Default;
    let tree = match MenuTree::from_html(NAV, &variant.markup()) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    let services = tree.roots()[1];
    let Some(build) = tree.find_by_link("/services/build") else {
        eprintln!("markup has no Build item");
        return;
    };

    let mut dom = DomModel::from_tree(&tree);
    let phone = Viewport::new(390, true);
    let env = Env::new(phone, "/services/design");
    let mut page = Page::ready(tree, variant.config(), &env, MemoryStore::new(), &mut dom);
    report("ready", &page, &dom);

    page.handle(PageEvent::Click(ClickTarget::MenuToggle), &mut dom);
    report("open main menu", &page, &dom);

    page.handle(PageEvent::Click(ClickTarget::Affordance(services)), &mut dom);
    report("tap Services +", &page, &dom);

    let response = page.handle(PageEvent::Click(ClickTarget::Link(build)), &mut dom);
    report("tap Build link", &page, &dom);
    println!("  navigation suppressed: {}", response.default_prevented);

    page.handle(PageEvent::Click(ClickTarget::Outside), &mut dom);
    report("tap outside", &page, &dom);

    // A touch device stays in mobile mode however wide it gets.
    page.handle(PageEvent::Resize(phone.resized(844)), &mut dom);
    report("rotate (touch)", &page, &dom);

    let laptop = Viewport::new(1280, false);
    page.handle(PageEvent::Resize(laptop.resized(600)), &mut dom);
    report("narrow window", &page, &dom);
    page.handle(PageEvent::Resize(laptop), &mut dom);
    report("wide window", &page, &dom);
}
