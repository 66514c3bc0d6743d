use std::env;
use std::time::{Duration, Instant};

use log::{debug, info};
use pqueue::{BinaryHeapPriorityQueue, BinaryHeapWrapper, PriorityQueue};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Benchmark settings, overridable as `benchmark [ops_factor] [seed] [sizes...]`
#[derive(Debug, Clone)]
struct BenchmarkConfig {
    /// Queue sizes to measure
    sizes: Vec<usize>,
    /// Extra push/pop pairs per queued entry once the queue is full
    ops_factor: usize,
    /// RNG seed so both implementations see the same workload
    seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            sizes: vec![1_000, 10_000, 100_000, 1_000_000],
            ops_factor: 2,
            seed: 42,
        }
    }
}

impl BenchmarkConfig {
    fn from_args(args: &[String]) -> Self {
        let mut config = BenchmarkConfig::default();
        if let Some(factor) = args.get(1).and_then(|a| a.parse().ok()) {
            config.ops_factor = factor;
        }
        if let Some(seed) = args.get(2).and_then(|a| a.parse().ok()) {
            config.seed = seed;
        }
        let sizes: Vec<usize> = args.iter().skip(3).filter_map(|a| a.parse().ok()).collect();
        if !sizes.is_empty() {
            config.sizes = sizes;
        }
        config
    }
}

// Priorities for the fill phase followed by the mixed phase
fn generate_workload(size: usize, ops_factor: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size + size * ops_factor)
        .map(|_| rng.gen_range(0..u64::MAX / 2))
        .collect()
}

// Fill to `size`, run push/pop pairs, then drain, checking order on the way out
fn benchmark_queue<Q>(queue: &mut Q, size: usize, workload: &[u64]) -> Duration
where
    Q: PriorityQueue<usize, u64>,
{
    println!("Running {} with {} entries...", queue.name(), size);

    let start = Instant::now();
    let (fill, mixed) = workload.split_at(size);
    for (value, &priority) in fill.iter().enumerate() {
        queue.push(value, priority);
    }
    for (offset, &priority) in mixed.iter().enumerate() {
        queue.push(size + offset, priority);
        queue.pop();
    }

    let mut popped = 0;
    let mut last = u64::MAX;
    while let Some((_, priority)) = queue.pop() {
        assert!(priority <= last, "{} popped out of order", queue.name());
        last = priority;
        popped += 1;
    }
    let duration = start.elapsed();

    debug!("{} drained {} entries", queue.name(), popped);
    println!("  - Completed {} operations in {:?}", workload.len() * 2, duration);

    duration
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = BenchmarkConfig::from_args(&args);
    info!("Benchmark configuration: {:?}", config);

    println!("=====================================================");
    println!("Benchmark: BinaryHeapPriorityQueue vs std BinaryHeap");
    println!("Mixed operations per entry: {}", config.ops_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &config.sizes {
        let workload = generate_workload(size, config.ops_factor, config.seed);

        let mut ours = BinaryHeapPriorityQueue::with_capacity(size + 1);
        let ours_time = benchmark_queue(&mut ours, size, &workload);

        let mut reference = BinaryHeapWrapper::with_capacity(size + 1);
        let reference_time = benchmark_queue(&mut reference, size, &workload);

        let ratio = reference_time.as_secs_f64() / ours_time.as_secs_f64();
        println!("Relative speed vs std BinaryHeap: {:.2}x", ratio);

        results.push((size, ours_time, reference_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<10}",
        "Entries", "Ours (ms)", "Std (ms)", "Ratio"
    );
    println!("-----------------------------------------------------");

    for (size, ours_time, reference_time) in &results {
        let ratio = reference_time.as_secs_f64() / ours_time.as_secs_f64();
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.2}",
            size,
            ours_time.as_millis(),
            reference_time.as_millis(),
            ratio
        );
    }
}
