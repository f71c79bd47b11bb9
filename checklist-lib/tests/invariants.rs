//! Consistency of items, selection and edit state across long event runs.

use std::collections::HashSet;

use checklist_lib::{Event, ItemId, Key, ListController, Outcome, SequentialIds};
use proptest::prelude::*;

fn assert_consistent(list: &ListController) {
    let ids: HashSet<ItemId> = list.store().ids().into_iter().collect();
    assert_eq!(ids.len(), list.items().len(), "duplicate ids");

    for id in list.selection().ids() {
        assert!(ids.contains(&id), "selection references removed {}", id);
    }
    if let Some(editing) = list.edit_states().editing() {
        assert!(ids.contains(editing), "edit state references removed {}", editing);
    }
    assert!(list.edit_states().len() <= 1);
    assert_eq!(list.view().selected_count, list.selected_count());
}

/// Which item an event targets: a current row (modulo length) or an id that
/// may not exist.
#[derive(Debug, Clone)]
enum Target {
    Row(usize),
    Ghost(u8),
}

/// Events with targets resolved against the list at the time they are applied.
#[derive(Debug, Clone)]
enum Op {
    Add,
    DeleteSelected,
    Toggle(Target),
    Focus(Target),
    Blur(Target),
    Backspace(Target),
    Type(Target, char),
    Text(Target, bool),
}

fn target_strategy() -> impl Strategy<Value = Target> {
    prop_oneof![
        9 => (0usize..64).prop_map(Target::Row),
        1 => any::<u8>().prop_map(Target::Ghost),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => Just(Op::Add),
        1 => Just(Op::DeleteSelected),
        1 => target_strategy().prop_map(Op::Toggle),
        1 => target_strategy().prop_map(Op::Focus),
        1 => target_strategy().prop_map(Op::Blur),
        1 => target_strategy().prop_map(Op::Backspace),
        1 => (target_strategy(), any::<char>()).prop_map(|(t, c)| Op::Type(t, c)),
        1 => (target_strategy(), any::<bool>()).prop_map(|(t, empty)| Op::Text(t, empty)),
    ]
}

fn resolve(list: &ListController, target: &Target) -> ItemId {
    let ids = list.store().ids();
    match target {
        Target::Row(row) if !ids.is_empty() => ids[row % ids.len()].clone(),
        Target::Row(row) => ItemId::new(format!("item-{}", row)),
        Target::Ghost(n) => ItemId::new(format!("ghost-{}", n)),
    }
}

fn to_event(list: &ListController, op: &Op) -> Event {
    match op {
        Op::Add => Event::PressAdd,
        Op::DeleteSelected => Event::PressDeleteSelected,
        Op::Toggle(t) => Event::PressToggleSelect { id: resolve(list, t) },
        Op::Focus(t) => Event::FocusStart { id: resolve(list, t) },
        Op::Blur(t) => Event::FocusEnd { id: resolve(list, t) },
        Op::Backspace(t) => Event::KeyPressed {
            id: resolve(list, t),
            key: Key::Backspace,
        },
        Op::Type(t, c) => Event::KeyPressed {
            id: resolve(list, t),
            key: Key::Char(*c),
        },
        Op::Text(t, empty) => Event::TextChanged {
            id: resolve(list, t),
            text: if *empty { String::new() } else { "text".to_string() },
        },
    }
}

proptest! {
    #[test]
    fn event_runs_stay_consistent(ops in proptest::collection::vec(op_strategy(), 0..300)) {
        let mut list = ListController::with_id_generator(SequentialIds::new());
        for op in &ops {
            let event = to_event(&list, op);
            list.handle(event);
            assert_consistent(&list);
        }
    }

    #[test]
    fn typed_keys_never_remove_items(
        texts in proptest::collection::vec(any::<bool>(), 1..20),
        c in any::<char>(),
    ) {
        let mut list = ListController::with_id_generator(SequentialIds::new());
        for empty in &texts {
            let id = list.add_item();
            if !*empty {
                list.edit_item(&id, "x");
            }
        }
        for id in list.store().ids() {
            prop_assert_eq!(list.key_pressed(&id, Key::Char(c)), Outcome::Ignored);
        }
        prop_assert_eq!(list.items().len(), texts.len());
    }
}

#[test]
fn test_add_count_and_distinct_ids() {
    let mut list = ListController::new();
    let mut seen = HashSet::new();
    for n in 1..=200 {
        let id = list.add_item();
        assert!(seen.insert(id.clone()), "id {} reused", id);
        assert_eq!(list.items().len(), n);
        assert_eq!(list.get(&id).map(|item| item.text.as_str()), Some(""));
    }
}

#[test]
fn test_ids_never_reused_after_removal() {
    let mut list = ListController::with_id_generator(SequentialIds::new());
    let mut seen = HashSet::new();
    for _ in 0..50 {
        let id = list.add_item();
        assert!(seen.insert(id.clone()));
        list.remove_item(&id);
    }
    assert!(list.items().is_empty());
}

#[test]
fn test_toggle_twice_restores_selection() {
    let mut list = ListController::with_id_generator(SequentialIds::new());
    let id = list.add_item();
    list.edit_item(&id, "x");

    for _ in 0..3 {
        let before = list.is_selected(&id);
        list.handle(Event::PressToggleSelect { id: id.clone() });
        list.handle(Event::PressToggleSelect { id: id.clone() });
        assert_eq!(list.is_selected(&id), before);
    }
}

#[test]
fn test_remove_selected_leaves_unselected_in_order() {
    let mut list = ListController::with_id_generator(SequentialIds::new());
    let ids: Vec<ItemId> = (0..6).map(|_| list.add_item()).collect();
    for (i, id) in ids.iter().enumerate() {
        list.edit_item(id, format!("entry {}", i));
        if i % 2 == 0 {
            list.toggle_select(id);
        }
    }

    let outcome = list.handle(Event::PressDeleteSelected);
    assert_eq!(
        outcome,
        Outcome::Removed(vec![ids[0].clone(), ids[2].clone(), ids[4].clone()])
    );
    assert_eq!(
        list.store().ids(),
        vec![ids[1].clone(), ids[3].clone(), ids[5].clone()]
    );
    assert_eq!(list.handle(Event::PressDeleteSelected), Outcome::Ignored);
}
