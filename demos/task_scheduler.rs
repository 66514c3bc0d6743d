use pqueue::{BinaryHeapPriorityQueue, FloatPriority, OrderedFloat};

fn main() {
    env_logger::init();

    // Integer priorities: higher runs first
    let mut tasks = BinaryHeapPriorityQueue::new();
    tasks.push("write report", 3);
    tasks.push("reply to email", 1);
    tasks.push("fix production bug", 4);
    tasks.push("review pull request", 3);

    println!("--- Scheduling {} tasks ---", tasks.len());
    if let Some((task, priority)) = tasks.peek() {
        println!("Next up: {} (priority {})", task, priority);
    }

    while let Some((task, priority)) = tasks.pop() {
        println!("  Running {:<22} priority = {}", task, priority);
    }

    // Popping an empty queue is not an error
    let (task, priority, found) = tasks.pop_or_default();
    println!("Empty pop: task = {:?}, priority = {}, found = {}", task, priority, found);

    // Float priorities need a total order
    let mut jobs: BinaryHeapPriorityQueue<u32, FloatPriority> = vec![
        (1, OrderedFloat(1.5)),
        (2, OrderedFloat(2.5)),
        (3, OrderedFloat(0.5)),
    ]
    .into_iter()
    .collect();
    jobs.push(4, OrderedFloat(2.0));

    println!("\n--- Jobs by weight ---");
    for (job, weight) in jobs.into_sorted_vec() {
        println!("  Job {}: weight = {:.1}", job, weight.into_inner());
    }
}
