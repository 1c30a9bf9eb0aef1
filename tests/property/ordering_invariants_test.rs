//! Property-based tests for collection invariants.
//!
//! Across arbitrary operation sequences, every link's category must keep
//! resolving to an existing category, the reserved default category must
//! stay present and first, pinned state and pinned order must agree, and a
//! reorder must permute exactly its scope.

use std::collections::{HashMap, HashSet};

use linkdock::app::App;
use linkdock::managers::link_manager::{LinkManager, ReorderScope};
use linkdock::managers::selection_manager::SelectionManager;
use linkdock::types::category::{Category, RESERVED_CATEGORY_ID};
use linkdock::types::link::NewLink;
use proptest::prelude::*;

const CATEGORY_POOL: &[&str] = &["common", "work", "play", "reading", "ghost"];

fn draft(category_id: &str, pinned: bool) -> NewLink {
    NewLink {
        title: "Link".to_string(),
        url: "link.example.com".to_string(),
        description: None,
        icon: None,
        category_id: category_id.to_string(),
        pinned,
    }
}

fn cat(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: "Folder".to_string(),
    }
}

#[derive(Debug, Clone)]
enum Op {
    Add { category: usize, pinned: bool },
    Delete { pick: usize },
    TogglePin { pick: usize },
    MoveTo { pick: usize, category: usize },
    DeleteCategory { category: usize },
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..CATEGORY_POOL.len(), any::<bool>())
            .prop_map(|(category, pinned)| Op::Add { category, pinned }),
        (0..16usize).prop_map(|pick| Op::Delete { pick }),
        (0..16usize).prop_map(|pick| Op::TogglePin { pick }),
        (0..16usize, 0..CATEGORY_POOL.len())
            .prop_map(|(pick, category)| Op::MoveTo { pick, category }),
        // Index 0 is the reserved default; deleting it is its own test.
        (1..CATEGORY_POOL.len()).prop_map(|category| Op::DeleteCategory { category }),
    ]
}

/// Picks an existing link id deterministically from the canonical snapshot.
fn pick_id(app: &App, pick: usize) -> Option<String> {
    let links = app.export_backup().links;
    if links.is_empty() {
        return None;
    }
    Some(links[pick % links.len()].id.clone())
}

fn apply(app: &mut App, op: &Op) {
    match op {
        Op::Add { category, pinned } => {
            app.add_link(draft(CATEGORY_POOL[*category], *pinned));
        }
        Op::Delete { pick } => {
            if let Some(id) = pick_id(app, *pick) {
                let _ = app.delete_link(&id, true);
            }
        }
        Op::TogglePin { pick } => {
            if let Some(id) = pick_id(app, *pick) {
                let _ = app.toggle_pin(&id);
            }
        }
        Op::MoveTo { pick, category } => {
            if let Some(id) = pick_id(app, *pick) {
                let ids: HashSet<String> = [id].into_iter().collect();
                // Moves to the bogus pool entry are rejected; that is fine.
                let _ = app.move_links(&ids, CATEGORY_POOL[*category]);
            }
        }
        Op::DeleteCategory { category } => {
            // Repeat deletions hit NotFound; that is fine.
            let _ = app.delete_category(CATEGORY_POOL[*category], true);
        }
    }
}

// **Property: collection invariants survive arbitrary operation sequences.**
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn invariants_hold_after_every_operation(ops in prop::collection::vec(arb_op(), 1..32)) {
        let mut app = App::open_in_memory().expect("in-memory app");
        app.update_categories(vec![
            cat("work", "Work"),
            cat("play", "Play"),
            cat("reading", "Reading"),
        ]);

        for op in &ops {
            apply(&mut app, op);

            let category_ids: HashSet<String> =
                app.categories().iter().map(|c| c.id.clone()).collect();
            for link in app.export_backup().links {
                prop_assert!(
                    category_ids.contains(&link.category_id),
                    "link {} points at missing category {} after {:?}",
                    link.id,
                    link.category_id,
                    op
                );
                prop_assert_eq!(
                    link.pinned,
                    link.pinned_order.is_some(),
                    "pinned flag and pinned order disagree for {}",
                    link.id
                );
            }

            prop_assert_eq!(app.categories()[0].id.as_str(), RESERVED_CATEGORY_ID);
            let reserved_count = app
                .categories()
                .iter()
                .filter(|c| c.id == RESERVED_CATEGORY_ID)
                .count();
            prop_assert_eq!(reserved_count, 1);
        }
    }
}

// **Property: a reorder permutes exactly its scope.**
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn reorder_permutes_exactly_the_scope(
        scoped_count in 1..6usize,
        other_count in 0..4usize,
        pinned_count in 0..4usize,
        from_seed in any::<usize>(),
        to_seed in any::<usize>(),
    ) {
        let mut mgr = LinkManager::new();
        for _ in 0..scoped_count {
            mgr.add(draft("common", false));
        }
        for _ in 0..other_count {
            mgr.add(draft("work", false));
        }
        for _ in 0..pinned_count {
            mgr.add(draft("common", true));
        }

        let scope = ReorderScope::Category("common".to_string());
        let before = mgr.scope_ids(&scope);
        let outside: HashMap<String, (Option<i64>, Option<i64>)> = mgr
            .iter()
            .filter(|l| !before.contains(&l.id))
            .map(|l| (l.id.clone(), (l.order, l.pinned_order)))
            .collect();

        let from = from_seed % before.len();
        let to = to_seed % before.len();
        mgr.reorder(&scope, &before[from], &before[to]).expect("ids are in scope");

        // Standard array-move semantics: remove, then insert at the target.
        let mut expected = before.clone();
        let moved = expected.remove(from);
        expected.insert(to, moved);
        let after = mgr.scope_ids(&scope);
        prop_assert_eq!(&after, &expected);

        // The scope is renumbered 0-based contiguous.
        for (index, id) in after.iter().enumerate() {
            prop_assert_eq!(mgr.get(id).expect("scope member").order, Some(index as i64));
        }

        // Links outside the scope keep their previous values.
        for (id, (order, pinned_order)) in outside {
            let link = mgr.get(&id).expect("outside link");
            prop_assert_eq!(link.order, order);
            prop_assert_eq!(link.pinned_order, pinned_order);
        }
    }
}

// **Property: select-all is a pure toggle with period two.**
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn select_all_toggles_with_period_two(
        displayed in prop::collection::vec("[a-z]{1,8}", 0..10),
    ) {
        let mut sel = SelectionManager::new();
        sel.toggle_batch_mode();

        let full: HashSet<String> = displayed.iter().cloned().collect();

        sel.select_all(&displayed);
        let after_one: HashSet<String> = sel.selected().clone();
        sel.select_all(&displayed);
        prop_assert!(sel.is_empty(), "double select-all must restore the empty selection");
        sel.select_all(&displayed);
        prop_assert_eq!(sel.selected(), &after_one);

        // The first call selected exactly the displayed set (or cleared an
        // already-matching empty selection).
        if full.is_empty() {
            prop_assert!(after_one.is_empty());
        } else {
            prop_assert_eq!(&after_one, &full);
        }
    }
}
