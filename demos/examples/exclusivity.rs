// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The same tap sequence under each exclusivity policy.
//!
//! Uses the submenu controller directly, without a page session.
//!
//! Run:
//! - `cargo run -p navmenu_demos --example exclusivity`

use navmenu_dom::DomModel;
use navmenu_submenu::{Activation, Controller, Exclusivity, MenuEvent, SubmenuConfig};
use navmenu_tree::{MenuItem, MenuTree, NodeId};
use navmenu_viewport::Viewport;

fn labels(tree: &MenuTree, ids: impl IntoIterator<Item = NodeId>) -> Vec<String> {
    ids.into_iter()
        .filter_map(|id| tree.get(id).map(|item| item.label.clone()))
        .collect()
}

fn main() {
    tracing_subscriber::fmt().init();

    let mut tree = MenuTree::new();
    let products = tree.insert(None, MenuItem::parent("Products", None));
    let hardware = tree.insert(Some(products), MenuItem::parent("Hardware", None));
    tree.insert(Some(hardware), MenuItem::leaf("Boards", "/products/hardware/boards"));
    tree.insert(Some(products), MenuItem::leaf("Software", "/products/software"));
    let company = tree.insert(None, MenuItem::parent("Company", None));
    tree.insert(Some(company), MenuItem::leaf("Jobs", "/company/jobs"));

    let taps = [products, hardware, company];
    let phone = Viewport::new(360, false);

    for policy in [Exclusivity::Independent, Exclusivity::Siblings, Exclusivity::Global] {
        let mut dom = DomModel::from_tree(&tree);
        let config = SubmenuConfig::DEFAULT_THEME.with_exclusivity(policy);
        let mut controller = Controller::new(&tree, config);
        controller.bind_all(&tree, phone, &mut dom);

        println!("{policy:?}");
        for item in taps {
            let event = MenuEvent::Activate(Activation::Affordance(item));
            let response = controller.dispatch(&tree, event, phone, &mut dom);
            println!(
                "  tap {:<10} closed={:?} open={:?}",
                labels(&tree, [item]).join(""),
                labels(&tree, response.closed),
                labels(&tree, controller.open_items(&tree)),
            );
        }
    }
}
