use crate::index::{CircularIndex, ModuloIndex, PowerOfTwoIndex};

#[test]
fn increment_wraps_at_capacity() {
    let mut idx = 0;
    for _ in 0..3 {
        for expected in [1, 2, 3, 4, 0] {
            idx = ModuloIndex::increment(idx, 5);
            assert_eq!(idx, expected);
        }
    }
}

#[test]
fn decrement_wraps_below_zero() {
    let mut idx = 0;
    for _ in 0..3 {
        for expected in [4, 3, 2, 1, 0] {
            idx = ModuloIndex::decrement(idx, 5);
            assert_eq!(idx, expected);
        }
    }
}

#[test]
fn add_reduces_large_deltas() {
    let mut idx = 0;
    for (delta, expected) in [(0, 0), (1, 1), (2, 3), (3, 1), (4, 0), (5, 0), (6, 1), (7, 3), (8, 1), (9, 0)] {
        idx = ModuloIndex::add(idx, delta, 5);
        assert_eq!(idx, expected, "after adding {delta}");
    }

    assert_eq!(ModuloIndex::add(0, 4, 5), 4);
    assert_eq!(ModuloIndex::add(0, 5, 5), 0);
    assert_eq!(ModuloIndex::add(0, 6, 5), 1);
    assert_eq!(ModuloIndex::add(0, 7, 5), 2);
    // usize::MAX is 2^k - 1, a multiple of 5 for both 32- and 64-bit targets.
    assert_eq!(ModuloIndex::add(4, usize::MAX, 5), 4);
}

#[test]
fn subtract_never_underflows() {
    let mut idx = 0;
    for (delta, expected) in [(0, 0), (1, 4), (2, 2), (3, 4), (4, 0), (5, 0), (6, 4)] {
        idx = ModuloIndex::subtract(idx, delta, 5);
        assert_eq!(idx, expected, "after subtracting {delta}");
    }

    assert_eq!(ModuloIndex::subtract(0, 4, 5), 1);
    assert_eq!(ModuloIndex::subtract(0, 5, 5), 0);
    assert_eq!(ModuloIndex::subtract(0, 6, 5), 4);
    assert_eq!(ModuloIndex::subtract(0, 7, 5), 3);
    assert_eq!(ModuloIndex::subtract(2, usize::MAX, 5), 2);
    assert_eq!(ModuloIndex::subtract(2, usize::MAX - 1, 5), 3);
}

#[test]
fn capacity_one_always_yields_zero() {
    assert_eq!(ModuloIndex::increment(0, 1), 0);
    assert_eq!(ModuloIndex::decrement(0, 1), 0);
    assert_eq!(ModuloIndex::add(0, 17, 1), 0);
    assert_eq!(ModuloIndex::subtract(0, 17, 1), 0);
    assert_eq!(PowerOfTwoIndex::increment(0, 1), 0);
    assert_eq!(PowerOfTwoIndex::subtract(0, 17, 1), 0);
}

#[test]
fn power_of_two_supports_only_powers_of_two() {
    assert!(PowerOfTwoIndex::supports(0));
    for shift in 0..20 {
        assert!(PowerOfTwoIndex::supports(1 << shift));
    }
    for capacity in [3, 5, 6, 7, 12, 100, 1000] {
        assert!(!PowerOfTwoIndex::supports(capacity));
    }
    assert!(ModuloIndex::supports(0));
    assert!(ModuloIndex::supports(7));
}

#[test]
fn power_of_two_agrees_with_modulo() {
    for shift in 0..7 {
        let capacity = 1usize << shift;
        for index in 0..capacity {
            assert_eq!(
                PowerOfTwoIndex::increment(index, capacity),
                ModuloIndex::increment(index, capacity)
            );
            assert_eq!(
                PowerOfTwoIndex::decrement(index, capacity),
                ModuloIndex::decrement(index, capacity)
            );
            for delta in (0..4 * capacity).chain([usize::MAX - 1, usize::MAX]) {
                assert_eq!(
                    PowerOfTwoIndex::add(index, delta, capacity),
                    ModuloIndex::add(index, delta, capacity),
                    "add({index}, {delta}, {capacity})"
                );
                assert_eq!(
                    PowerOfTwoIndex::subtract(index, delta, capacity),
                    ModuloIndex::subtract(index, delta, capacity),
                    "subtract({index}, {delta}, {capacity})"
                );
            }
        }
    }
}

#[test]
fn results_stay_in_range() {
    for capacity in 1..40 {
        for index in 0..capacity {
            for delta in 0..3 * capacity {
                assert!(ModuloIndex::add(index, delta, capacity) < capacity);
                assert!(ModuloIndex::subtract(index, delta, capacity) < capacity);
            }
            assert!(ModuloIndex::increment(index, capacity) < capacity);
            assert!(ModuloIndex::decrement(index, capacity) < capacity);
        }
    }
}
