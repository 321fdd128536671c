use crate::SaturatingCounter;

#[test]
fn increments_below_upper() {
    assert_eq!(SaturatingCounter::increment(0, 10), 1);
    assert_eq!(SaturatingCounter::increment(1, 10), 2);
    assert_eq!(SaturatingCounter::increment(9, 10), 10);

    let mut count = 0;
    for expected in 1..=3 {
        count = SaturatingCounter::increment(count, 10);
        assert_eq!(count, expected);
    }
}

#[test]
fn increment_saturates_at_upper() {
    assert_eq!(SaturatingCounter::increment(10, 10), 10);
    assert_eq!(SaturatingCounter::increment(0, 0), 0);

    for upper in 1..99 {
        for count in 0..upper {
            assert!(SaturatingCounter::increment(count, upper) <= upper);
        }
    }
}

#[test]
fn decrement_saturates_at_lower() {
    assert_eq!(SaturatingCounter::decrement(3, 0), 2);
    assert_eq!(SaturatingCounter::decrement(1, 0), 0);
    assert_eq!(SaturatingCounter::decrement(0, 0), 0);
    assert_eq!(SaturatingCounter::decrement(4, 4), 4);
}
