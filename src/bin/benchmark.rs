//! Throughput comparison of serial and parallel row evolution

use elementary::domain::{Row, RuleTable, SeedPosition};
use std::time::Instant;

fn benchmark_serial(width: usize, iterations: u32) -> f64 {
    let table = RuleTable::new(30);
    let mut row = Row::seed(width, SeedPosition::Middle).unwrap();

    let start = Instant::now();
    for _ in 0..iterations {
        row = row.next(&table);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_parallel(width: usize, iterations: u32) -> f64 {
    let table = RuleTable::new(30);
    let mut row = Row::seed(width, SeedPosition::Middle).unwrap();

    let start = Instant::now();
    for _ in 0..iterations {
        row = row.next_parallel(&table);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Elementary Automaton Row Throughput ===\n");

    let widths = [100, 10_000, 100_000, 1_000_000, 10_000_000];
    let iterations = 50;

    println!("{:>12} {:>12} {:>12} {:>10}", "Width", "Serial", "Parallel", "Speedup");
    println!("{:-<50}", "");

    for width in widths {
        let serial_ms = benchmark_serial(width, iterations);
        let parallel_ms = benchmark_parallel(width, iterations);

        println!(
            "{:>12} {:>12.3} {:>12.3} {:>9.1}x",
            width,
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\nTimes are ms per generation over {iterations} iterations.");
}
