//! RingBuffer: a moving-average window over a sample stream.
//!
//! The window keeps the last `WINDOW` samples. Older samples are
//! overwritten as new ones arrive, so memory stays fixed.
//!
//! Run with: cargo run --example lookback

use lookback_ring::RingBuffer;

const WINDOW: usize = 4;

fn main() {
    let mut window: RingBuffer<f64> = RingBuffer::new(WINDOW);

    for (tick, sample) in [3.0, 5.0, 4.0, 8.0, 10.0, 2.0, 6.0].into_iter().enumerate() {
        window.push_back(sample);
        let mean = window.iter().sum::<f64>() / window.len() as f64;
        let change = if window.len() > 1 {
            sample - window.back_nth(1)
        } else {
            0.0
        };
        println!("tick {tick}: sample {sample:>5.1}  mean {mean:>5.2}  change {change:>+5.1}");
    }

    println!("Window contents (oldest first): {window:?}");

    // Undo the latest sample, then drain the rest oldest-first.
    let retracted = window.pop_back();
    println!("Retracted: {retracted:?}");
    let drained: Vec<f64> = window.drain().collect();
    println!("Drained: {drained:?}");

    let stats = window.stats();
    println!(
        "pushed {}, popped {}, overwritten {}",
        stats.pushed, stats.popped, stats.overwritten
    );
}
