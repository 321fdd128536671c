use crate::{RingBuffer, RingStats};

#[test]
fn fresh_ring_has_zero_stats() {
    let ring: RingBuffer<u8> = RingBuffer::new(4);
    assert_eq!(ring.stats(), RingStats::default());
    assert_eq!(ring.stats().retired(), 0);
}

#[test]
fn clear_keeps_stats() {
    let mut ring = RingBuffer::new(2);
    ring.extend([1, 2, 3]);
    ring.clear();

    let stats = ring.stats();
    assert_eq!(stats.pushed, 3);
    assert_eq!(stats.overwritten, 1);
    assert_eq!(stats.popped, 0);
}

#[cfg(feature = "serde")]
mod serde_tests {
    use crate::RingStats;

    #[test]
    fn stats_serialize_as_named_fields() {
        let stats = RingStats {
            pushed: 12,
            popped: 4,
            overwritten: 3,
        };
        let json: serde_json::Value = serde_json::to_value(stats).unwrap();
        assert_eq!(json["pushed"], 12);
        assert_eq!(json["popped"], 4);
        assert_eq!(json["overwritten"], 3);

        let decoded: RingStats = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, stats);
    }
}
