// fasta.rs - FASTA collaborator services shared by the boundary tools

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use bio::io::fasta;

/// One FASTA record: identifier, optional description, raw sequence bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub desc: Option<String>,
    pub sequence: Vec<u8>,
}

impl FastaRecord {
    /// Sequence length in residues
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Read all records from a FASTA-family reader, in encounter order.
///
/// No alphabet validation is performed; sequences are taken as-is.
pub fn read_sequences<R: io::Read>(reader: R) -> Result<Vec<FastaRecord>, String> {
    let reader = fasta::Reader::new(BufReader::new(reader));
    let mut records = Vec::new();

    for record_result in reader.records() {
        let record = record_result.map_err(|e| format!("Invalid FASTA record: {}", e))?;
        records.push(FastaRecord {
            id: record.id().to_string(),
            desc: record.desc().map(|d| d.to_string()),
            sequence: record.seq().to_vec(),
        });
    }

    Ok(records)
}

/// Extract all sequences from a FASTA-family file
pub fn extract_sequences(path: &Path) -> Result<Vec<FastaRecord>, String> {
    let file = File::open(path)
        .map_err(|e| format!("Failed to open FASTA file '{}': {}", path.display(), e))?;
    read_sequences(file)
}

/// Write records to a FASTA writer in the given order
pub fn write_sequences_to<W: Write>(records: &[FastaRecord], writer: W) -> Result<(), String> {
    let mut writer = fasta::Writer::new(writer);
    for record in records {
        writer
            .write(&record.id, record.desc.as_deref(), &record.sequence)
            .map_err(|e| format!("Failed to write FASTA record '{}': {}", record.id, e))?;
    }
    Ok(())
}

/// Write records to a FASTA-family file
pub fn write_sequences(records: &[FastaRecord], path: &Path) -> Result<(), String> {
    let file = File::create(path)
        .map_err(|e| format!("Failed to create FASTA file '{}': {}", path.display(), e))?;
    let mut buffered = BufWriter::new(file);
    write_sequences_to(records, &mut buffered)?;
    buffered
        .flush()
        .map_err(|e| format!("Failed to flush FASTA file '{}': {}", path.display(), e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_sequences_order_and_desc() {
        let input = b">s1 first record\nACDE\n>s2\nFGHI\nKLMN\n";
        let records = read_sequences(&input[..]).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "s1");
        assert_eq!(records[0].desc.as_deref(), Some("first record"));
        assert_eq!(records[0].sequence, b"ACDE");
        // Multi-line sequences are concatenated
        assert_eq!(records[1].sequence, b"FGHIKLMN");
        assert_eq!(records[1].desc, None);
    }

    #[test]
    fn test_duplicate_ids_not_collapsed() {
        let input = b">dup\nAAAA\n>dup\nCCCC\n";
        let records = read_sequences(&input[..]).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "dup");
        assert_eq!(records[1].id, "dup");
    }

    #[test]
    fn test_write_read_round_trip() {
        let records = vec![
            FastaRecord {
                id: "a".to_string(),
                desc: Some("cluster #3".to_string()),
                sequence: b"ACDEFG".to_vec(),
            },
            FastaRecord {
                id: "b".to_string(),
                desc: None,
                sequence: b"HIKLMN".to_vec(),
            },
        ];
        let mut buf = Vec::new();
        write_sequences_to(&records, &mut buf).unwrap();
        let back = read_sequences(&buf[..]).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn test_extract_missing_file() {
        let err = extract_sequences(Path::new("/nonexistent/input.fasta")).unwrap_err();
        assert!(err.contains("Failed to open FASTA file"));
    }
}
