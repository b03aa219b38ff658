// cluster.rs - Identity-threshold clustering over condensed distances

use std::collections::HashMap;

use crate::core::distance::DistanceCollection;

/// Disjoint-set over sequence indices, path compression + union by size
struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let mut ra = self.find(a);
        let mut rb = self.find(b);
        if ra == rb {
            return;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
    }
}

/// Partition sequences into identity clusters.
///
/// Sequences i and j share a cluster when their fractional identity
/// `1 - d(i,j)/L` reaches `cutoff/100`, directly or through a chain of such
/// pairwise links. Labels are opaque; they are numbered by each component's
/// first-encountered row so repeated runs produce identical assignments.
///
/// A collection over fewer than two sequences yields an empty assignment:
/// with no pairwise comparisons at all there is no meaningful
/// pairwise-derived grouping to report.
pub fn cluster_sequences(
    distances: &DistanceCollection,
    cutoff: f64,
) -> Result<Vec<usize>, String> {
    let n = distances.sequence_count();
    let expected = n * n.saturating_sub(1) / 2;
    if distances.len() != expected {
        return Err(format!(
            "Invalid distance collection shape: {} entries for {} sequences (expected {})",
            distances.len(),
            n,
            expected
        ));
    }

    if n < 2 {
        return Ok(Vec::new());
    }

    let columns = distances.columns();
    let threshold = cutoff / 100.0;
    let mut uf = UnionFind::new(n);

    // One scan of the condensed triangle, unioning every passing pair
    let flat = distances.as_slice();
    let mut k = 0;
    for i in 0..n - 1 {
        for j in i + 1..n {
            let d = flat[k];
            k += 1;
            // Zero-column alignments only ever compare empty rows
            let dissimilarity = if columns == 0 {
                0.0
            } else {
                d as f64 / columns as f64
            };
            if 1.0 - dissimilarity >= threshold {
                uf.union(i, j);
            }
        }
    }

    let mut labels = vec![0usize; n];
    let mut label_of_root: HashMap<usize, usize> = HashMap::new();
    for (i, label) in labels.iter_mut().enumerate() {
        let root = uf.find(i);
        let next = label_of_root.len();
        *label = *label_of_root.entry(root).or_insert(next);
    }

    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Msa;

    fn distances_from(rows: &[&[u8]]) -> DistanceCollection {
        let msa = Msa::from_records(
            rows.iter()
                .enumerate()
                .map(|(i, r)| (format!("seq_{}", i), r.to_vec())),
        )
        .unwrap();
        DistanceCollection::from_msa(&msa)
    }

    #[test]
    fn test_direct_clustering() {
        // 10 columns; rows 0/1 identical, row 2 far away
        let dc = distances_from(&[b"AAAAAAAAAA", b"AAAAAAAAAA", b"TTTTTTTTTT"]);
        let labels = cluster_sequences(&dc, 80.0).unwrap();
        assert_eq!(labels.len(), 3);
        assert_eq!(labels[0], labels[1]);
        assert_ne!(labels[0], labels[2]);
    }

    #[test]
    fn test_transitive_chain_merges_endpoints() {
        // 10 columns at cutoff 80: adjacent rows differ by 2 (identity 0.8,
        // passes), endpoints differ by 4 (identity 0.6, fails directly).
        let dc = distances_from(&[b"AAAAAAAAAA", b"TTAAAAAAAA", b"TTTTAAAAAA"]);
        assert_eq!(dc.get(0, 2), 4);
        let labels = cluster_sequences(&dc, 80.0).unwrap();
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[1], labels[2]);
    }

    #[test]
    fn test_labels_follow_first_encountered_row() {
        let dc = distances_from(&[b"AAAAAAAAAA", b"TTTTTTTTTT", b"AAAAAAAAAA", b"TTTTTTTTTT"]);
        let labels = cluster_sequences(&dc, 80.0).unwrap();
        assert_eq!(labels, vec![0, 1, 0, 1]);
    }

    #[test]
    fn test_single_sequence_yields_empty_assignment() {
        let dc = distances_from(&[b"ACDE"]);
        assert_eq!(cluster_sequences(&dc, 80.0).unwrap(), Vec::<usize>::new());

        let empty = distances_from(&[]);
        assert_eq!(cluster_sequences(&empty, 80.0).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn test_invalid_shape_is_rejected() {
        // 5 entries cannot be a condensed triangle over 4 sequences
        let dc = DistanceCollection::from_parts(vec![0, 1, 2, 3, 4], 4, 10);
        let err = cluster_sequences(&dc, 80.0).unwrap_err();
        assert!(err.contains("Invalid distance collection shape"));
    }

    #[test]
    fn test_cutoff_monotonicity() {
        let rows: Vec<&[u8]> = vec![
            b"AAAAAAAAAA",
            b"TAAAAAAAAA",
            b"TTTAAAAAAA",
            b"TTTTTAAAAA",
            b"TTTTTTTTTT",
        ];
        let dc = distances_from(&rows);
        let mut previous = 0usize;
        for cutoff in [10.0, 30.0, 50.0, 70.0, 80.0, 90.0, 100.0] {
            let labels = cluster_sequences(&dc, cutoff).unwrap();
            let count = labels.iter().collect::<std::collections::HashSet<_>>().len();
            assert!(
                count >= previous,
                "cluster count dropped from {} to {} at cutoff {}",
                previous,
                count,
                cutoff
            );
            previous = count;
        }
    }

    #[test]
    fn test_cutoff_100_requires_identity() {
        let dc = distances_from(&[b"AAAAAAAAAA", b"AAAAAAAAAT", b"AAAAAAAAAA"]);
        let labels = cluster_sequences(&dc, 100.0).unwrap();
        assert_eq!(labels[0], labels[2]);
        assert_ne!(labels[0], labels[1]);
    }
}
