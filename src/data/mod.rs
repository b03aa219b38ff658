// mod.rs - Data structures module

pub mod fasta;
pub mod msa;

// Re-export main types for convenience
pub use fasta::{extract_sequences, write_sequences, FastaRecord};
pub use msa::{parse_msa_file, AlignedSequence, Msa};
