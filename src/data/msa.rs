// msa.rs - Multiple sequence alignment model and normalizer

use std::path::Path;

use crate::data::fasta;

/// A single aligned sequence row with its identifier.
///
/// Identifiers are not required to be unique: two rows carrying the same
/// identifier are kept as distinct sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedSequence {
    id: String,
    residues: Vec<u8>,
}

impl AlignedSequence {
    pub fn new(id: String, residues: Vec<u8>) -> Self {
        Self { id, residues }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn residues(&self) -> &[u8] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

/// A rectangular multiple sequence alignment.
///
/// All rows share the same column count and keep their input encounter
/// order, which defines the index space used by the distance and
/// clustering stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Msa {
    sequences: Vec<AlignedSequence>,
    columns: usize,
}

/// Strip insertion-state symbols from a raw alignment row.
///
/// Lowercase residues and `.` placeholders mark insertions relative to the
/// match columns (a3m/a2m convention) and are removed; `-` deletion gaps
/// are kept. Any other symbol is passed through unchanged: clustering only
/// needs positional equality, so non-standard alphabets are tolerated
/// rather than rejected.
pub fn normalize_residues(raw: &[u8]) -> Vec<u8> {
    raw.iter()
        .copied()
        .filter(|&b| !b.is_ascii_lowercase() && b != b'.')
        .collect()
}

impl Msa {
    /// Build a normalized alignment from raw (identifier, residues) records.
    ///
    /// Every row is run through [`normalize_residues`]; rows that do not end
    /// up with identical lengths make the alignment malformed.
    pub fn from_records<I>(records: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = (String, Vec<u8>)>,
    {
        let mut sequences = Vec::new();
        let mut columns = 0usize;

        for (id, raw) in records {
            let residues = normalize_residues(&raw);
            if sequences.is_empty() {
                columns = residues.len();
            } else if residues.len() != columns {
                return Err(format!(
                    "Malformed alignment: row '{}' has {} columns after normalization (expected {})",
                    id,
                    residues.len(),
                    columns
                ));
            }
            sequences.push(AlignedSequence::new(id, residues));
        }

        Ok(Self { sequences, columns })
    }

    /// Number of sequences (rows)
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Number of alignment columns shared by every row
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn sequences(&self) -> &[AlignedSequence] {
        &self.sequences
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AlignedSequence> {
        self.sequences.iter()
    }
}

/// Parse an alignment file into a normalized [`Msa`].
///
/// Accepts either FASTA-family input (a3m included; first non-blank line
/// starts with `>`) or already-normalized plain alignment text with one
/// sequence per line. Plain rows get synthetic `seq_{index}` identifiers.
/// Both paths run through the normalizer, which is a no-op on clean input.
pub fn parse_msa_file(path: &Path) -> Result<Msa, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read alignment file '{}': {}", path.display(), e))?;

    let is_fasta = content
        .lines()
        .find(|line| !line.trim().is_empty())
        .map(|line| line.starts_with('>'))
        .unwrap_or(false);

    if is_fasta {
        let records = fasta::read_sequences(content.as_bytes())
            .map_err(|e| format!("Failed to parse alignment file '{}': {}", path.display(), e))?;
        Msa::from_records(records.into_iter().map(|r| (r.id, r.sequence)))
    } else {
        Msa::from_records(
            content
                .lines()
                .filter(|line| !line.trim().is_empty())
                .enumerate()
                .map(|(i, line)| (format!("seq_{}", i), line.trim_end().as_bytes().to_vec())),
        )
    }
}
