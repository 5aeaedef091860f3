use colored::*;
use min_priority_queue::MinPriorityQueue;
use rand::Rng;

// Builds a random alphanumeric string of the given length
fn random_string(length: usize) -> String {
    const SOURCE: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| SOURCE[rng.gen_range(0..SOURCE.len())] as char)
        .collect()
}

// Prints the queue as [(priority, element), ...] in internal heap order
fn print_priority_queue<E: Clone + std::fmt::Display>(queue: &MinPriorityQueue<E>) {
    let elements = queue.get_all_elements();
    let priorities = queue.get_all_priorities();

    let rendered: Vec<String> = priorities
        .iter()
        .zip(elements.iter())
        .map(|(priority, element)| format!("({}, {})", priority, element))
        .collect();

    println!("[{}]", rendered.join(", "));
}

fn main() {
    env_logger::init();

    let mut rng = rand::thread_rng();

    // Build a small batch of random (priority, string) pairs
    let count = rng.gen_range(1..=10);
    let pairs: Vec<(i32, String)> = (0..count)
        .map(|_| (rng.gen_range(0..100), random_string(rng.gen_range(1..=10))))
        .collect();

    let mut queue = MinPriorityQueue::new();
    queue.insert_all(pairs);

    println!("{}", "Queue contents in internal heap order:".bright_white());
    print_priority_queue(&queue);

    println!("\n{}", "Draining in priority order:".bright_white());
    while let Some((priority, element)) = queue.peek_with_priority().map(|(p, e)| (p, e.clone())) {
        queue.remove_front();
        println!("  {} {}", format!("[{:2}]", priority).green(), element);
    }
}
