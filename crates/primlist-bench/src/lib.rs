//! Benchmark fixtures for the primlist workspace.
//!
//! Provides deterministic inputs shared by the criterion benches:
//!
//! - [`int_fixture`], [`float_fixture`], [`bool_fixture`], [`pair_fixture`]:
//!   lists of a given length filled from a seed
//! - [`removal_indices`]: in-range indices for a shrinking list

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use primlist_core::{List, Pair};

/// Deterministic 32-bit value for position `i` under `seed`.
fn mix(seed: u64, i: u64) -> u32 {
    (seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(i.wrapping_mul(1442695040888963407))
        >> 32) as u32
}

/// An `i32` list of `len` seeded values.
pub fn int_fixture(len: usize, seed: u64) -> List<i32> {
    (0..len as u64).map(|i| mix(seed, i) as i32).collect()
}

/// An `f32` list of `len` seeded values in `[-1, 1)`.
pub fn float_fixture(len: usize, seed: u64) -> List<f32> {
    (0..len as u64)
        .map(|i| (mix(seed, i) as f32 / u32::MAX as f32) * 2.0 - 1.0)
        .collect()
}

/// A `bool` list of `len` seeded values.
pub fn bool_fixture(len: usize, seed: u64) -> List<bool> {
    (0..len as u64).map(|i| mix(seed, i) & 1 == 1).collect()
}

/// A `Pair<i32>` list of `len` seeded grid coordinates in `[0, 1024)`.
pub fn pair_fixture(len: usize, seed: u64) -> List<Pair<i32>> {
    (0..len as u64)
        .map(|i| {
            let v = mix(seed, i);
            Pair::new((v & 0x3ff) as i32, ((v >> 10) & 0x3ff) as i32)
        })
        .collect()
}

/// `count` indices such that the k-th is valid for a list of
/// `start_len - k` elements.
pub fn removal_indices(start_len: usize, count: usize, seed: u64) -> Vec<usize> {
    (0..count)
        .map(|k| {
            let len = start_len - k;
            mix(seed, k as u64) as usize % len
        })
        .collect()
}
