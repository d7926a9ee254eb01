use crate::StateSet;

#[test]
fn insert_deduplicates() {
    let mut set = StateSet::new();

    assert!(set.insert(3));
    assert!(set.insert(1));
    assert!(!set.insert(3));

    assert_eq!(set.len(), 2);
    assert!(set.contains(1));
    assert!(!set.contains(2));
}

#[test]
fn iteration_follows_insertion_order() {
    let set: StateSet = [4, 0, 2].into_iter().collect();

    assert_eq!(set.iter().collect::<Vec<_>>(), vec![4, 0, 2]);
    assert_eq!(set.to_string(), "{S4 S0 S2}");
}

#[test]
fn equality_ignores_order() {
    let a: StateSet = [1, 2].into_iter().collect();
    let b: StateSet = [2, 1].into_iter().collect();

    assert_eq!(a, b);
}

#[test]
fn clear_empties() {
    let mut set: StateSet = [1, 2].into_iter().collect();
    set.clear();

    assert!(set.is_empty());
    assert_eq!(set.to_string(), "{}");
}
