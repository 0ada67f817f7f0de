use composable_indexes::{btree, Collection};

#[test]
fn empty_collection_answers_zero_and_absent() {
    let col: Collection<i32, _> = Collection::new(btree());

    assert_eq!(col.query(|ix| ix.count()), 0);
    assert!(col.query(|ix| ix.is_empty()));
    assert!(col.query(|ix| ix.min()).is_none());
    assert!(col.query(|ix| ix.max()).is_none());
}

#[test]
fn min_max_count_with_duplicate_keys() {
    let mut col: Collection<i32, _> = Collection::new(btree());
    let _a = col.insert(5);
    let b = col.insert(2);
    let c = col.insert(9);
    let _d = col.insert(2);

    assert_eq!(col.query(|ix| ix.min().map(|(id, value)| (id, *value))), Some((b, 2)));
    assert_eq!(col.query(|ix| ix.max().map(|(id, value)| (id, *value))), Some((c, 9)));
    assert_eq!(col.query(|ix| ix.count()), 4);
}

#[test]
fn duplicate_keys_enumerate_id_ascending() {
    let mut col: Collection<i32, _> = Collection::new(btree());
    let _a = col.insert(5);
    let b = col.insert(2);
    let _c = col.insert(9);
    let d = col.insert(2);

    let twos = col.query(|ix| ix.get_ids(&2).collect::<Vec<_>>());
    assert_eq!(twos, vec![b, d]);

    // The envelope accessor resolves the same ids to their values.
    let twos = col.query(|ix| ix.get(&2).collect::<Vec<_>>());
    assert_eq!(twos, vec![(b, &2), (d, &2)]);
}

#[test]
fn range_scan_respects_bounds() {
    let mut col: Collection<i32, _> = Collection::new(btree());
    for value in [1, 3, 5, 7] {
        col.insert(value);
    }

    let keys = col.query(|ix| ix.range(2..=5).map(|(_, key)| *key).collect::<Vec<_>>());
    assert_eq!(keys, vec![3, 5]);

    let keys = col.query(|ix| ix.range(3..7).map(|(_, key)| *key).collect::<Vec<_>>());
    assert_eq!(keys, vec![3, 5]);

    let keys = col.query(|ix| ix.range(..).map(|(_, key)| *key).collect::<Vec<_>>());
    assert_eq!(keys, vec![1, 3, 5, 7]);
}

#[test]
fn update_moves_id_between_keys() {
    let mut col: Collection<i32, _> = Collection::new(btree());
    let a = col.insert(1);
    let b = col.insert(2);

    col.update(a, 10);

    assert_eq!(col.query(|ix| ix.get(&1).count()), 0);
    assert_eq!(col.query(|ix| ix.get_ids(&10).collect::<Vec<_>>()), vec![a]);
    assert_eq!(col.query(|ix| ix.min().map(|(id, value)| (id, *value))), Some((b, 2)));
    assert_eq!(col.query(|ix| ix.max().map(|(id, value)| (id, *value))), Some((a, 10)));
    assert_eq!(col.query(|ix| ix.count()), 2);
}

#[test]
fn update_keeping_the_key_changes_nothing() {
    let mut col: Collection<i32, _> = Collection::new(btree());
    let a = col.insert(4);
    col.insert(6);

    col.update(a, 4);

    assert_eq!(col.query(|ix| ix.count()), 2);
    assert_eq!(col.query(|ix| ix.get_ids(&4).collect::<Vec<_>>()), vec![a]);
}

#[test]
fn remove_drops_key_once_last_id_leaves() {
    let mut col: Collection<i32, _> = Collection::new(btree());
    let a = col.insert(2);
    let b = col.insert(2);

    col.remove(a);
    assert!(col.query(|ix| ix.contains_key(&2)));
    assert_eq!(col.query(|ix| ix.get_ids(&2).collect::<Vec<_>>()), vec![b]);

    col.remove(b);
    assert!(!col.query(|ix| ix.contains_key(&2)));
    assert!(col.query(|ix| ix.is_empty()));
}

#[test]
fn iter_is_ordered_by_key_then_id() {
    let mut col: Collection<i32, _> = Collection::new(btree());
    let a = col.insert(3);
    let b = col.insert(1);
    let c = col.insert(3);

    let all = col.query(|ix| ix.iter().map(|(id, key)| (id, *key)).collect::<Vec<_>>());
    assert_eq!(all, vec![(b, 1), (a, 3), (c, 3)]);
}
