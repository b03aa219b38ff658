// distance.rs - Pairwise Hamming dissimilarity engine

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::data::Msa;

/// Condensed upper-triangular collection of pairwise Hamming distances.
///
/// Pair (i, j) with i < j is stored at the conventional condensed offset
/// (increasing i, then increasing j within i), giving `N*(N-1)/2` entries
/// for N sequences. Entries count differing positions over all columns,
/// gap positions included. Empty for N < 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceCollection {
    distances: Vec<u32>,
    sequence_count: usize,
    columns: usize,
}

/// Count positions where two equal-length rows differ.
///
/// Every column contributes, including gap-vs-gap and gap-vs-residue
/// mismatches.
pub fn hamming_distance(a: &[u8], b: &[u8]) -> u32 {
    a.iter().zip(b.iter()).filter(|(x, y)| x != y).count() as u32
}

impl DistanceCollection {
    /// Compute all pairwise distances for a normalized alignment.
    ///
    /// The O(N²·L) pair loop is parallelized across rows; the parallel
    /// collect preserves condensed ordering regardless of completion order.
    /// N < 2 yields an empty collection.
    pub fn from_msa(msa: &Msa) -> Self {
        let n = msa.len();
        let columns = msa.columns();

        if n < 2 {
            return Self {
                distances: Vec::new(),
                sequence_count: n,
                columns,
            };
        }

        let rows: Vec<&[u8]> = msa.iter().map(|s| s.residues()).collect();
        let rows = &rows;

        let total_pairs = n * (n - 1) / 2;
        let pb = ProgressBar::new(total_pairs as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {per_sec}")
                .unwrap()
                .progress_chars("#>-"),
        );

        // Update every 1% to keep contention low
        let update_interval = std::cmp::max(1, total_pairs / 100);
        let progress_counter = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));

        let distances: Vec<u32> = (0..n)
            .into_par_iter()
            .flat_map(|i| {
                let progress_clone = progress_counter.clone();
                let pb_clone = pb.clone();
                (i + 1..n).into_par_iter().map(move |j| {
                    let d = hamming_distance(rows[i], rows[j]);
                    let count =
                        progress_clone.fetch_add(1, std::sync::atomic::Ordering::Relaxed) + 1;
                    if count % update_interval == 0 {
                        pb_clone.set_position(count as u64);
                    }
                    d
                })
            })
            .collect();

        pb.finish_and_clear();

        Self {
            distances,
            sequence_count: n,
            columns,
        }
    }

    /// Build a collection from pre-computed parts. The clustering stage
    /// re-validates the flat length against the stated sequence count.
    pub fn from_parts(distances: Vec<u32>, sequence_count: usize, columns: usize) -> Self {
        Self {
            distances,
            sequence_count,
            columns,
        }
    }

    /// Number of condensed entries
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Number of sequences this collection was computed over
    pub fn sequence_count(&self) -> usize {
        self.sequence_count
    }

    /// Alignment column count the distances were counted over
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.distances
    }

    /// Condensed offset of pair (i, j), i < j
    pub fn condensed_index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < j && j < self.sequence_count);
        let n = self.sequence_count;
        i * n - i * (i + 1) / 2 + (j - i - 1)
    }

    /// Distance between sequences i and j, i < j
    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.distances[self.condensed_index(i, j)]
    }
}
