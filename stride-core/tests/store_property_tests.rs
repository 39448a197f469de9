use proptest::prelude::*;
use std::collections::HashSet;
use stride_core::{GoalCategory, GoalDraft, GoalId, GoalPriority, GoalStore, SortCriterion};

fn arb_category() -> impl Strategy<Value = GoalCategory> {
    prop::sample::select(GoalCategory::ALL.to_vec())
}

fn arb_priority() -> impl Strategy<Value = GoalPriority> {
    prop::sample::select(GoalPriority::ALL.to_vec())
}

fn arb_deadline() -> impl Strategy<Value = Option<chrono::NaiveDate>> {
    prop::option::of((2024i32..2030, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
        chrono::NaiveDate::from_ymd_opt(y, m, d).expect("day <= 28 is always valid")
    }))
}

/// Titles including whitespace-only ones, so add_goal's no-op path is hit.
fn arb_title() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z][a-zA-Z0-9 ]{0,20}",
        Just("   ".to_string()),
        Just(String::new()),
    ]
}

fn arb_draft() -> impl Strategy<Value = GoalDraft> {
    (arb_title(), arb_category(), arb_priority(), arb_deadline()).prop_map(
        |(title, category, priority, deadline)| GoalDraft {
            title,
            description: None,
            category,
            priority,
            deadline,
        },
    )
}

fn arb_criterion() -> impl Strategy<Value = SortCriterion> {
    prop::sample::select(SortCriterion::ALL.to_vec())
}

proptest! {
    // Collection size equals the number of non-empty-title adds.
    #[test]
    fn add_goal_counts_non_empty_titles(drafts in prop::collection::vec(arb_draft(), 0..32)) {
        let mut store = GoalStore::new();
        let expected = drafts.iter().filter(|d| !d.title.trim().is_empty()).count();
        for draft in drafts {
            store.add_goal(draft);
        }
        prop_assert_eq!(store.len(), expected);
    }

    // toggle_complete is its own inverse.
    #[test]
    fn toggle_twice_restores_state(
        drafts in prop::collection::vec(arb_draft(), 1..16),
        index in 0usize..16,
    ) {
        let mut store = GoalStore::new();
        for draft in drafts {
            store.add_goal(draft);
        }
        prop_assume!(!store.is_empty());
        let id = store.goals()[index % store.len()].id;
        let before = store.get(id).map(|g| g.completed);
        store.toggle_complete(id);
        store.toggle_complete(id);
        prop_assert_eq!(store.get(id).map(|g| g.completed), before);
    }

    // Deleting removes exactly one goal when present, none when absent,
    // and repeating the call changes nothing.
    #[test]
    fn delete_removes_at_most_one(
        drafts in prop::collection::vec(arb_draft(), 1..16),
        index in 0usize..16,
        delete_known in any::<bool>(),
    ) {
        let mut store = GoalStore::new();
        for draft in drafts {
            store.add_goal(draft);
        }
        let before = store.len();
        let id = if delete_known && !store.is_empty() {
            store.goals()[index % store.len()].id
        } else {
            GoalId::new()
        };
        let removed = store.delete_goal(id);
        prop_assert_eq!(store.len(), before - usize::from(removed));
        prop_assert!(!store.delete_goal(id));
        prop_assert_eq!(store.len(), before - usize::from(removed));
    }

    // Every sort projection is a permutation of the collection and keeps
    // completed goals as a contiguous suffix.
    #[test]
    fn sorted_view_is_permutation_with_completed_suffix(
        drafts in prop::collection::vec(arb_draft(), 0..24),
        toggles in prop::collection::vec(0usize..24, 0..24),
        criterion in arb_criterion(),
    ) {
        let mut store = GoalStore::new();
        for draft in drafts {
            store.add_goal(draft);
        }
        for index in toggles {
            if !store.is_empty() {
                let id = store.goals()[index % store.len()].id;
                store.toggle_complete(id);
            }
        }

        let view = store.sorted_view(criterion);
        let view_ids: HashSet<GoalId> = view.iter().map(|g| g.id).collect();
        let store_ids: HashSet<GoalId> = store.goals().iter().map(|g| g.id).collect();
        prop_assert_eq!(view.len(), store.len());
        prop_assert_eq!(view_ids, store_ids);

        let first_completed = view.iter().position(|g| g.completed);
        if let Some(start) = first_completed {
            prop_assert!(view[start..].iter().all(|g| g.completed));
        }
    }

    // Stats are always consistent with the collection.
    #[test]
    fn stats_add_up(
        drafts in prop::collection::vec(arb_draft(), 0..24),
        toggles in prop::collection::vec(0usize..24, 0..24),
    ) {
        let mut store = GoalStore::new();
        for draft in drafts {
            store.add_goal(draft);
        }
        for index in toggles {
            if !store.is_empty() {
                let id = store.goals()[index % store.len()].id;
                store.toggle_complete(id);
            }
        }
        let stats = store.stats();
        prop_assert_eq!(stats.total, store.len());
        prop_assert_eq!(stats.completed + stats.active, stats.total);
        prop_assert_eq!(stats.completed, store.goals().iter().filter(|g| g.completed).count());
    }
}
