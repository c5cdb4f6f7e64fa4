//! Basic Usage Example
//!
//! Merges sorted streams, computes sliding extrema and searches the result.
//!
//! Run with: `cargo run --example basic_usage`
//!
//! Set `RUST_LOG=fast_seq=debug` to see the kernels' tracing events.

use fast_seq::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== K-Way Merge ===");
    let shards = vec![
        vec![1_700_000_001_u64, 1_700_000_004, 1_700_000_009],
        vec![1_700_000_002, 1_700_000_003],
        vec![],
        vec![1_700_000_000, 1_700_000_007, 1_700_000_008],
    ];
    let timeline = merge_k_sorted(&shards)?;
    println!("merged {} timestamps from {} shards", timeline.len(), shards.len());
    for ts in &timeline {
        println!("  {ts}");
    }
    println!();

    println!("=== Streaming Merge ===");
    let words = [vec!["apple", "melon"], vec!["banana", "cherry", "plum"]];
    for word in KMergeIter::new(&words) {
        print!("{} ", word?);
    }
    println!();
    println!();

    println!("=== Sliding Window ===");
    let readings = [1, 3, -1, -3, 5, 3, 6, 7];
    let both = sliding_window_extrema(&readings, 3)?;
    println!("readings: {readings:?}");
    println!("max (w=3): {:?}", both.max);
    println!("min (w=3): {:?}", both.min);

    let temps = [21.5_f64, 22.0, 19.75, 23.25, 18.0];
    let highs = SlidingWindow::new().width(2).compute_partial(&temps)?;
    println!("temperature highs (w=2): {highs:?}");
    println!();

    println!("=== Search ===");
    let key = 1_700_000_007;
    match binary_search(&timeline, &key) {
        Some(idx) => println!("{key} found at index {idx}"),
        None => println!("{key} not found"),
    }
    println!(
        "insertion point for 1_700_000_005: {}",
        lower_bound(&timeline, &1_700_000_005)
    );
    println!();

    println!("=== Word Ladder ===");
    let dictionary = ["hot", "dot", "dog", "lot", "log", "cog"];
    match word_ladder("hit", "cog", &dictionary) {
        Some(ladder) => println!("{} steps: {}", ladder.steps(), ladder.path().join(" -> ")),
        None => println!("no ladder"),
    }

    Ok(())
}
