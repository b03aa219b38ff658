// lib.rs - msaneff library root

//! # msaneff - Effective family size calculator for multiple sequence alignments
//!
//! This library computes the effective family size (Neff) of a multiple
//! sequence alignment: a normalized measure of how many effectively
//! independent sequences an alignment contains, correcting for redundancy
//! among near-identical rows. It is used to judge whether an alignment
//! carries enough diversity to support covariation or profile methods.
//!
//! ## Pipeline
//!
//! - **Normalization**: raw a3m/FASTA or plain alignment rows are reduced
//!   to match/delete columns (insertion states stripped)
//! - **Dissimilarity**: pairwise Hamming distances in condensed
//!   upper-triangular form, computed in parallel
//! - **Clustering**: union-find connectivity over a percent-identity cutoff
//! - **Neff**: cluster count, raw or normalized by sqrt of the alignment
//!   length
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use msaneff::prelude::*;
//! use std::path::Path;
//!
//! let msa = parse_msa_file(Path::new("family.a3m"))?;
//! let distances = DistanceCollection::from_msa(&msa);
//! let clusters = cluster_sequences(&distances, 80.0)?;
//! let neff = effective_family_size(&clusters, msa.columns(), NeffMode::Normalized)?;
//! # Ok::<(), String>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::core::{cluster_count, cluster_sequences, effective_family_size};
    pub use crate::core::{hamming_distance, DistanceCollection, NeffMode};
    pub use crate::data::{extract_sequences, parse_msa_file, write_sequences};
    pub use crate::data::{AlignedSequence, FastaRecord, Msa};
    pub use crate::output::{format_summary, write_cluster_assignments, write_neff_value};
}

// Re-export main types at the root level for convenience
pub use cli::{Args, Config, ValidationResult};
pub use core::{DistanceCollection, NeffMode};
pub use data::{FastaRecord, Msa};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "msaneff v{} - Effective family size calculator for multiple sequence alignments",
        VERSION
    )
}
