//! Error Handling Examples
//!
//! This example demonstrates the error cases of the fast-seq kernels and how
//! to react to each.
//!
//! Run with: `cargo run --example error_handling`

use fast_seq::kernels::kway_merge::{merge_k_sorted, merge_k_sorted_partial, KWayMerge};
use fast_seq::kernels::sliding_window::{
    sliding_max, sliding_window_extremum_into, sliding_window_extremum_partial, sliding_window_len,
};
use fast_seq::{Error, Extremum};

fn main() {
    println!("=== Error Handling Examples ===");
    println!();

    // Example 1: Invalid width
    println!("1. Invalid Width (zero):");
    match sliding_max(&[1, 2, 3], 0) {
        Ok(_) => println!("   Unexpected success"),
        Err(Error::InvalidWidth { width, reason }) => {
            println!("   Caught InvalidWidth error (expected)");
            println!("   Details: width={width}, reason: {reason}");
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    // Example 2: Window wider than the data is not an error
    println!("2. Window Wider Than Input:");
    match sliding_max(&[1, 2, 3], 10) {
        Ok(out) => println!("   Ok with {} outputs (expected)", out.len()),
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    // Example 3: Unsorted merge source
    println!("3. Unsorted Merge Source:");
    let sources = vec![vec![1, 5, 9], vec![2, 8, 4]];
    match merge_k_sorted(&sources) {
        Ok(_) => println!("   Unexpected success"),
        Err(Error::UnsortedSource {
            source_index,
            position,
        }) => {
            println!("   Caught UnsortedSource error (expected)");
            println!("   Details: source {source_index} descends at position {position}");
            println!("   Fix: sort each source, or enable KWayMerge::verify_sources to fail before merging");
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }
    let verified = KWayMerge::new().verify_sources(true).compute(&sources);
    println!("   With verify_sources: {verified:?}");
    println!();

    // Example 4: NaN values
    println!("4. Incomparable Values (NaN):");
    let prices = [101.0, f64::NAN, 99.5];
    match sliding_window_extremum_partial(&prices, 2, Extremum::Max) {
        Ok(_) => println!("   Unexpected success"),
        Err(Error::Incomparable { context }) => {
            println!("   Caught Incomparable error (expected)");
            println!("   Details: {context}");
            println!("   Fix: filter or replace NaN values before calling");
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }
    match merge_k_sorted_partial(&[vec![0.5, f64::NAN]]) {
        Ok(_) => println!("   Unexpected success"),
        Err(e) => println!("   Merge rejected NaN too: {e}"),
    }
    println!();

    // Example 5: Output buffer too small
    println!("5. Buffer Too Small:");
    let data = [4, 8, 15, 16, 23, 42];
    let mut buffer = [0; 2];
    match sliding_window_extremum_into(&data, 3, Extremum::Min, &mut buffer) {
        Ok(_) => println!("   Unexpected success"),
        Err(Error::BufferTooSmall { required, actual }) => {
            println!("   Caught BufferTooSmall error (expected)");
            println!("   Details: required={required}, actual={actual}");
            println!(
                "   Fix: size the buffer with sliding_window_len(), here {}",
                sliding_window_len(data.len(), 3)
            );
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    // Example 6: Using ? in a function returning Result
    println!("6. Propagating Errors with ?:");
    match widest_range(&[3, 9, 1, 7, 2], 2) {
        Ok(range) => println!("   Widest window range: {range}"),
        Err(e) => println!("   Error: {e}"),
    }
    match widest_range(&[3, 9, 1], 0) {
        Ok(range) => println!("   Widest window range: {range}"),
        Err(e) => println!("   Error propagated (expected): {e}"),
    }
}

fn widest_range(data: &[i32], width: usize) -> fast_seq::Result<i32> {
    let out = fast_seq::kernels::sliding_window_extrema(data, width)?;
    Ok(out
        .max
        .iter()
        .zip(&out.min)
        .map(|(max, min)| max - min)
        .max()
        .unwrap_or(0))
}
