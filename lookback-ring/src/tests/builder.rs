extern crate std;

use crate::{CapacityError, ModuloIndex, PowerOfTwoIndex, RingBuffer};

#[test]
fn default_builder_is_zero_capacity_modulo() {
    let ring: RingBuffer<u64, ModuloIndex> = RingBuffer::builder().build().unwrap();
    assert_eq!(ring.capacity(), 0);
}

#[test]
fn builder_sets_capacity() {
    let mut ring = RingBuffer::<u64>::builder().capacity(12).build().unwrap();
    ring.extend(0..20);
    assert_eq!(ring.capacity(), 12);
    assert_eq!(ring.front(), Some(&8));
}

#[test]
fn power_of_two_builder_validates_capacity() {
    let err = RingBuffer::<u64>::builder()
        .capacity(12)
        .power_of_two()
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        CapacityError::Unsupported {
            capacity: 12,
            policy: "power-of-two",
        }
    );
    assert_eq!(
        std::format!("{err}"),
        "capacity 12 is not supported by the power-of-two index policy"
    );

    let ring = RingBuffer::<u64>::builder()
        .capacity(16)
        .power_of_two()
        .build()
        .unwrap();
    assert_eq!(ring.capacity(), 16);
}

#[test]
fn arithmetic_switch_is_last_wins() {
    let ring = RingBuffer::<u64>::builder()
        .power_of_two()
        .arithmetic::<ModuloIndex>()
        .capacity(12)
        .build();
    assert!(ring.is_ok());

    let ring = RingBuffer::<u64>::builder()
        .capacity(12)
        .arithmetic::<PowerOfTwoIndex>()
        .build();
    assert!(ring.is_err());
}

#[test]
fn try_with_capacity_matches_builder() {
    assert!(RingBuffer::<u8, PowerOfTwoIndex>::try_with_capacity(0).is_ok());
    assert!(RingBuffer::<u8, PowerOfTwoIndex>::try_with_capacity(1).is_ok());
    assert!(RingBuffer::<u8, PowerOfTwoIndex>::try_with_capacity(3).is_err());
    assert!(RingBuffer::<u8, ModuloIndex>::try_with_capacity(3).is_ok());
}
