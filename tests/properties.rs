// =====================================================================
// File: properties.rs
//
// Description:
//   Property-based tests over random operation sequences. Ids and
//   values are drawn from small pools so operations collide often.
// =====================================================================
use std::collections::HashMap;

use proptest::prelude::*;
use txkv::{Database, Set};

const IDS: i64 = 8;

#[derive(Debug, Clone)]
enum Op {
    Set(i64, String),
    DeleteById(i64),
    DeleteByValue(String),
}

fn value_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["", "foo", "bar", "baz"]).prop_map(str::to_string)
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..IDS, value_strategy()).prop_map(|(id, v)| Op::Set(id, v)),
        1 => (0..IDS).prop_map(Op::DeleteById),
        1 => value_strategy().prop_map(Op::DeleteByValue),
    ]
}

fn apply(db: &mut Database, op: &Op) {
    match op {
        Op::Set(id, value) => db.set(*id, value.as_str()),
        Op::DeleteById(id) => db.delete_by_id(*id),
        Op::DeleteByValue(value) => db.delete_by_value(value),
    }
}

fn snapshot(db: &Database) -> HashMap<i64, Option<String>> {
    (0..IDS).map(|id| (id, db.get(id).map(str::to_string))).collect()
}

proptest! {
    #[test]
    fn rollback_restores_pre_begin_state(
        setup in prop::collection::vec(op_strategy(), 0..20),
        ops in prop::collection::vec(op_strategy(), 0..20),
    ) {
        let mut db = Database::default();
        for op in &setup {
            apply(&mut db, op);
        }
        let before = snapshot(&db);

        db.begin().unwrap();
        for op in &ops {
            apply(&mut db, op);
        }
        db.rollback().unwrap();

        prop_assert_eq!(snapshot(&db), before);
    }

    #[test]
    fn commit_preserves_visible_state(
        setup in prop::collection::vec(op_strategy(), 0..20),
        ops in prop::collection::vec(op_strategy(), 0..20),
    ) {
        let mut db = Database::default();
        for op in &setup {
            apply(&mut db, op);
        }

        db.begin().unwrap();
        for op in &ops {
            apply(&mut db, op);
        }
        let visible = snapshot(&db);
        db.commit().unwrap();

        prop_assert!(!db.in_transaction());
        prop_assert_eq!(snapshot(&db), visible);
    }

    #[test]
    fn pending_sets_never_overlap(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut db = Database::default();
        db.set(0, "foo");
        db.set(1, "bar");
        db.begin().unwrap();

        for op in &ops {
            apply(&mut db, op);
            let tx = db.transaction().unwrap();
            for id in tx.pending_deletes() {
                prop_assert!(!tx.pending_updates().contains_key(id));
            }
        }
    }

    #[test]
    fn set_then_get_round_trips(id in any::<i64>(), value in ".*", in_tx in any::<bool>()) {
        let mut db = Database::default();
        if in_tx {
            db.begin().unwrap();
        }
        db.set(id, value.clone());
        prop_assert_eq!(db.get(id), Some(value.as_str()));
    }

    #[test]
    fn repeated_add_is_idempotent(items in prop::collection::vec(0..50i64, 0..30)) {
        let mut set: Set<i64> = items.iter().copied().collect();
        let len = set.len();

        set.add(items.iter().copied());

        prop_assert_eq!(set.len(), len);
        for item in &items {
            prop_assert!(set.contains(item));
        }
    }
}
