//! End-to-end scenarios through the public API.

use skipseq::{ByKey, Config, Error, Natural, Reversed, SkipList};

fn seeded() -> SkipList<i32> {
    SkipList::with_config(Config::default().with_seed(1234), Natural)
}

fn values<C, R>(list: &SkipList<i32, C, R>) -> Vec<i32> {
    list.iter().copied().collect()
}

// =============================================================================
// Basic scenarios
// =============================================================================

#[test]
fn insert_in_order_reads_back_in_order() {
    let mut list = seeded();
    list.insert(10);
    list.insert(20);
    list.insert(30);
    assert_eq!(values(&list), vec![10, 20, 30]);
    assert_eq!(list.size(), 3);
    list.check_invariants();
}

#[test]
fn find_first_hits_the_exact_value() {
    let mut list = seeded();
    let five = list.insert(5);
    assert_eq!(list.find_first(&5), five);
    assert_eq!(list.value(list.find_first(&5)), Some(&5));
}

#[test]
fn duplicates_are_both_kept() {
    let mut list = seeded();
    list.insert(5);
    list.insert(5);
    assert_eq!(list.size(), 2);
    assert_eq!(values(&list), vec![5, 5]);
    list.check_invariants();
}

#[test]
fn removing_evens_leaves_odds() {
    let mut list = seeded();
    for i in 1..=100 {
        list.insert(i);
    }
    for even in (2..=100).step_by(2) {
        let node = list.find_first(&even);
        assert_eq!(list.value(node), Some(&even));
        list.remove(node);
    }
    assert_eq!(values(&list), (1..=99).step_by(2).collect::<Vec<_>>());
    assert_eq!(list.len(), 50);
    list.check_invariants();
}

#[test]
fn empty_list_sentinels() {
    let list = seeded();
    assert_eq!(list.front(), list.tail());
    assert_eq!(list.back(), list.head());
    assert!(list.head().is_sentinel());
    assert!(list.tail().is_sentinel());
    assert_eq!(list.value(list.head()), None);
    assert_eq!(list.value(list.tail()), None);
}

// =============================================================================
// Structural properties
// =============================================================================

#[test]
fn size_matches_level_zero_walk() {
    let mut list = seeded();
    list.extend([9, 3, 7, 3, 1, 8]);
    let mut cursor = list.cursor_front();
    let mut walked = 0;
    while !cursor.is_tail() {
        walked += 1;
        cursor.move_next();
    }
    assert_eq!(walked, list.len());
}

#[test]
fn remove_drops_len_by_one_and_skips_node() {
    let mut list = seeded();
    list.extend(0..30);
    let target = list.find_first(&17);
    let before = list.len();
    assert_eq!(list.remove(target), 17);
    assert_eq!(list.len(), before - 1);
    assert!(!list.contains(&17));
    assert!(list.iter().all(|&v| v != 17));
    list.check_invariants();
}

#[test]
fn remove_all_twice_is_a_no_op() {
    let mut list = seeded();
    list.remove_all();
    assert_eq!(list.size(), 0);
    assert_eq!(list.front(), list.tail());
    assert_eq!(list.back(), list.head());

    list.extend([1, 2, 3]);
    list.remove_all();
    list.remove_all();
    assert_eq!(list.size(), 0);
    assert_eq!(list.front(), list.tail());
    assert_eq!(list.back(), list.head());
    list.check_invariants();
}

#[test]
fn find_reports_insertion_point() {
    let mut list = seeded();
    list.extend([10, 20, 30]);
    assert_eq!(list.find(&5), list.head());
    let at = list.find(&25);
    assert_eq!(list.value(at), Some(&20));
    let mut cursor = list.cursor(at);
    cursor.move_next();
    assert_eq!(cursor.get(), Some(&30));
}

// =============================================================================
// Ordering policies
// =============================================================================

#[test]
fn reversed_order() {
    let mut list = SkipList::with_config(Config::default().with_seed(3), Reversed(Natural));
    list.extend([1, 5, 3]);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![5, 3, 1]);
    assert_eq!(list.find_first(&4), list.find_first(&3));
    list.check_invariants();
}

#[test]
fn order_by_key_keeps_insertion_order_among_equals() {
    #[derive(Debug, Clone, PartialEq)]
    struct Job {
        priority: u8,
        name: &'static str,
    }

    let mut queue = SkipList::with_config(
        Config::default().with_seed(8),
        ByKey::new(|job: &Job| job.priority),
    );
    queue.insert(Job { priority: 2, name: "b" });
    queue.insert(Job { priority: 1, name: "a" });
    queue.insert(Job { priority: 2, name: "c" });
    queue.insert(Job { priority: 1, name: "d" });

    let names: Vec<_> = std::iter::from_fn(|| queue.pop_front()).map(|job| job.name).collect();
    assert_eq!(names, vec!["a", "d", "b", "c"]);
}

#[test]
fn closure_comparator_for_floats() {
    let mut list = SkipList::with_config(Config::default().with_seed(5), |a: &f64, b: &f64| a < b);
    list.extend([2.5, -1.0, 0.0, 2.5]);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![-1.0, 0.0, 2.5, 2.5]);
    assert!(list.contains(&0.0));
    assert!(!list.contains(&1.0));
}

// =============================================================================
// Configuration and errors
// =============================================================================

#[test]
fn invalid_configs_are_rejected() {
    let bad = [
        Config::default().with_max_level(0),
        Config::default().with_max_level(33),
        Config::default().with_probability(0.0),
        Config::default().with_probability(1.0),
        Config::default().with_probability(f64::NAN),
    ];
    for config in bad {
        let result = SkipList::<i32>::try_with_config(config, Natural);
        assert!(matches!(result, Err(Error::InvalidConfig(_))), "{:?} accepted", config);
    }
}

#[test]
#[should_panic(expected = "invalid configuration")]
fn infallible_constructor_panics_on_bad_config() {
    let _ = SkipList::<i32>::with_config(Config::default().with_max_level(0), Natural);
}

#[test]
fn unseeded_list_works() {
    let mut list = SkipList::new();
    list.extend([3, 1, 2]);
    assert_eq!(values(&list), vec![1, 2, 3]);
    list.check_invariants();
}

#[test]
fn explicit_rng() {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    let mut list = SkipList::with_rng(Config::default(), Natural, StdRng::seed_from_u64(77));
    list.extend(0..64);
    assert_eq!(values(&list), (0..64).collect::<Vec<_>>());
    list.check_invariants();
}

#[test]
fn adaptive_levels_track_size() {
    let config = Config::default().with_max_level(1).with_adaptive(true).with_seed(6);
    let mut list = SkipList::with_config(config, Natural);
    list.extend(0..1000);
    assert_eq!(list.max_level(), 10);
    list.check_invariants();

    // Shrinking does not lower the cap.
    list.remove_all();
    assert_eq!(list.max_level(), 10);
    list.check_invariants();
}

#[test]
fn try_reserve_then_insert() {
    let mut list = seeded();
    list.try_reserve(100).unwrap();
    for i in 0..100 {
        list.try_insert(i).unwrap();
    }
    assert_eq!(list.len(), 100);
}

// =============================================================================
// Diagnostics
// =============================================================================

#[test]
fn dump_shows_every_level() {
    let mut list = SkipList::with_config(Config::default().with_max_level(2).with_seed(1), Natural);
    list.extend([10, 20]);
    let dump = list.dump().to_string();
    assert_eq!(dump.lines().count(), 3);
    assert_eq!(dump.lines().last(), Some("L0: HEAD -> 10(HEAD) -> 20(10) -> TAIL(20)"));
}

#[test]
fn profiling_counts_descents() {
    let before = skipseq::profiling::DESCENTS.load(std::sync::atomic::Ordering::Relaxed);
    let mut list = seeded();
    list.insert(1);
    list.find(&1);
    let after = skipseq::profiling::DESCENTS.load(std::sync::atomic::Ordering::Relaxed);
    assert!(after >= before + 2);
    assert!(skipseq::profiling::report().contains("Descent: "));
}
