//! Print the operation counts of every algorithm on every array shape.
//!
//! ```text
//! cargo run -p sortviz-bench --example algorithm_table
//! ```

use sortviz_algos::generate;
use sortviz_bench::profile_arrays;
use sortviz_core::AlgorithmKind;

fn main() {
    println!(
        "{:<14} {:<10} {:>8} {:>12} {:>8} {:>8}",
        "shape", "algorithm", "actions", "comparisons", "swaps", "writes"
    );
    for (shape, values) in profile_arrays(100, 7) {
        for kind in AlgorithmKind::ALL {
            let log = generate(kind, &values);
            let totals = log.totals();
            println!(
                "{:<14} {:<10} {:>8} {:>12} {:>8} {:>8}",
                shape.name(),
                kind.name(),
                log.len(),
                totals.comparisons,
                totals.swaps,
                totals.writes
            );
        }
    }
}
