//! Property-based task store invariants.
//!
//! Drives `TaskStore` with arbitrary operation sequences and checks:
//! 1. The persisted snapshot always matches the in-memory collection.
//! 2. A reloaded store restores exactly the in-memory state.
//! 3. Completion is monotonic: a completed task never reverts to open.
//! 4. Ids stay unique across any operation sequence.
//! 5. Filtering yields an order-preserving partition of the collection.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::collections::HashSet;

use proptest::prelude::*;
use termtodo_core::snapshot;
use termtodo_core::{MemoryStorage, Storage, TASKS_KEY, TaskStore, ViewFilter};

// --- Scripted operations ---

/// One scripted store operation. Indices are taken modulo the current
/// collection length when applied, so every script is valid.
#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Complete(usize),
    Delete(usize),
    Reorder(usize, Option<usize>),
    ClearCompleted,
    EditCommit(usize, String),
    EditCancel(usize, String),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[^\x00]{0,32}".prop_map(Op::Add),
        any::<usize>().prop_map(Op::Complete),
        any::<usize>().prop_map(Op::Delete),
        (any::<usize>(), proptest::option::of(any::<usize>()))
            .prop_map(|(from, to)| Op::Reorder(from, to)),
        Just(Op::ClearCompleted),
        (any::<usize>(), "[^\x00]{0,32}").prop_map(|(i, draft)| Op::EditCommit(i, draft)),
        (any::<usize>(), "[^\x00]{0,32}").prop_map(|(i, draft)| Op::EditCancel(i, draft)),
    ]
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(arb_op(), 0..40)
}

/// Id and current text of the task at `index % len`, if the collection
/// is non-empty.
fn nth_task(
    store: &TaskStore<MemoryStorage>,
    index: usize,
) -> Option<(termtodo_core::TaskId, String)> {
    let len = store.len();
    if len == 0 {
        return None;
    }
    let task = &store.tasks()[index % len];
    Some((task.id.clone(), task.text.clone()))
}

fn apply(store: &mut TaskStore<MemoryStorage>, op: &Op) {
    match op {
        Op::Add(text) => {
            store.add_task(text);
        }
        Op::Complete(i) => {
            if let Some((id, _)) = nth_task(store, *i) {
                store.complete_task(&id);
            }
        }
        Op::Delete(i) => {
            if let Some((id, _)) = nth_task(store, *i) {
                store.delete_task(&id);
            }
        }
        Op::Reorder(from, to) => {
            let len = store.len();
            if len > 0 {
                store.reorder(from % len, to.map(|t| t % len));
            }
        }
        Op::ClearCompleted => {
            store.clear_completed();
        }
        Op::EditCommit(i, draft) => {
            if let Some((id, text)) = nth_task(store, *i) {
                store.start_edit(&id, &text);
                store.set_edit_draft(draft);
                store.commit_edit(&id);
            }
        }
        Op::EditCancel(i, draft) => {
            if let Some((id, text)) = nth_task(store, *i) {
                store.start_edit(&id, &text);
                store.set_edit_draft(draft);
                store.cancel_edit();
            }
        }
    }
}

// --- Property tests ---

proptest! {
    /// After any operation sequence, the persisted snapshot decodes to
    /// exactly the in-memory collection. A store that never persisted
    /// anything must still be empty.
    #[test]
    fn storage_always_mirrors_memory(ops in arb_ops()) {
        let mut store = TaskStore::load(MemoryStorage::new());
        for op in &ops {
            apply(&mut store, op);
        }
        let expected = store.tasks().to_vec();
        match store.storage().get(TASKS_KEY).expect("memory storage never fails") {
            Some(raw) => {
                let persisted = snapshot::decode(&raw).expect("persisted snapshot parses");
                prop_assert_eq!(persisted, expected);
            }
            None => prop_assert!(expected.is_empty()),
        }
    }

    /// A store reloaded from the same backend sees the same collection.
    #[test]
    fn reload_restores_in_memory_state(ops in arb_ops()) {
        let mut store = TaskStore::load(MemoryStorage::new());
        for op in &ops {
            apply(&mut store, op);
        }
        let expected = store.tasks().to_vec();
        let reloaded = TaskStore::load(store.into_storage());
        prop_assert_eq!(reloaded.tasks(), expected.as_slice());
    }

    /// Once a task is completed it never reverts to open, whatever
    /// operations follow.
    #[test]
    fn completion_never_reverts(ops in arb_ops()) {
        let mut store = TaskStore::load(MemoryStorage::new());
        let mut done: HashSet<String> = HashSet::new();
        for op in &ops {
            apply(&mut store, op);
            for task in store.tasks() {
                if task.completed {
                    done.insert(task.id.as_str().to_string());
                }
            }
            for task in store.tasks() {
                if done.contains(task.id.as_str()) {
                    prop_assert!(task.completed, "completed task reverted to open");
                }
            }
        }
    }

    /// No operation sequence can introduce duplicate ids.
    #[test]
    fn ids_stay_unique(ops in arb_ops()) {
        let mut store = TaskStore::load(MemoryStorage::new());
        for op in &ops {
            apply(&mut store, op);
        }
        let mut seen = HashSet::new();
        for task in store.tasks() {
            prop_assert!(seen.insert(task.id.as_str().to_string()), "duplicate id in collection");
        }
    }

    /// The filter splits the collection cleanly: every visible task
    /// matches the term, every hidden one does not, and visible order
    /// follows collection order.
    #[test]
    fn filter_is_an_order_preserving_partition(
        texts in prop::collection::vec("[a-z ]{0,16}", 0..16),
        term in "[a-z]{0,4}",
    ) {
        let mut store = TaskStore::load(MemoryStorage::new());
        for text in &texts {
            store.add_task(text);
        }
        let mut filter = ViewFilter::new();
        filter.set_search_term(term.clone());
        let visible = filter.apply(store.tasks());
        let needle = term.to_lowercase();

        for task in &visible {
            prop_assert!(task.text.to_lowercase().contains(&needle));
        }

        let mut next_allowed = 0;
        for task in &visible {
            let index = store
                .tasks()
                .iter()
                .position(|t| t.id == task.id)
                .expect("visible task is in the collection");
            prop_assert!(index >= next_allowed, "filter reordered the collection");
            next_allowed = index + 1;
        }

        for task in store.tasks() {
            if !visible.iter().any(|v| v.id == task.id) {
                prop_assert!(!task.text.to_lowercase().contains(&needle));
            }
        }
    }
}
