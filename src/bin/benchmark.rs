use std::time::{Duration, Instant};

use min_priority_queue::MinPriorityQueue;
use rand::Rng;

// Function to generate random (priority, element) entries
fn generate_random_entries(count: usize) -> Vec<(i32, u64)> {
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|i| (rng.gen_range(0..1_000_000), i as u64))
        .collect()
}

// Function to benchmark sequential insertion of a batch of entries
fn benchmark_insert(entries: &[(i32, u64)]) -> (MinPriorityQueue<u64>, Duration) {
    let mut queue = MinPriorityQueue::with_capacity(entries.len());

    let start = Instant::now();
    for &(priority, element) in entries {
        queue.insert(priority, element);
    }
    let duration = start.elapsed();

    (queue, duration)
}

// Function to benchmark draining the queue in priority order
fn benchmark_drain(queue: &mut MinPriorityQueue<u64>) -> Duration {
    let start = Instant::now();

    let mut last_priority = i32::MIN;
    while let Some((priority, _)) = queue.peek_with_priority().map(|(p, e)| (p, *e)) {
        queue.remove_front();
        // Extraction must be monotone in priority
        assert!(priority >= last_priority, "out-of-order extraction");
        last_priority = priority;
    }

    start.elapsed()
}

fn main() {
    env_logger::init();

    // Define queue sizes to test
    let queue_sizes = vec![
        // Small queues
        1_000,
        10_000,
        // Medium queues
        100_000,
        // Large queues
        500_000,
        1_000_000,
    ];

    println!("=====================================================");
    println!("Benchmark: binary min-heap insert / remove_front");
    println!("=====================================================");

    for &size in &queue_sizes {
        println!("\nQueue size: {}", size);

        let entries = generate_random_entries(size);

        let (mut queue, insert_time) = benchmark_insert(&entries);
        println!("  - Inserted {} entries in {:?}", queue.len(), insert_time);

        let drain_time = benchmark_drain(&mut queue);
        println!("  - Drained in priority order in {:?}", drain_time);
    }
}
