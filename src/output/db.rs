// db.rs - Append-only sequence database records

use std::io::Write;
use std::path::Path;

/// Width used when wrapping sequence text in database entries
pub const WRAP_WIDTH: usize = 70;

/// Number of aligned homologs in an a3m file: header count minus the query.
///
/// The extension of the given path is replaced with `.a3m` before reading,
/// so the helper can be handed the processed FASTA and still find the
/// alignment it was derived from.
pub fn msa_size(path: &Path) -> Result<usize, String> {
    let msa_path = path.with_extension("a3m");
    let content = std::fs::read_to_string(&msa_path)
        .map_err(|e| format!("Failed to read MSA file '{}': {}", msa_path.display(), e))?;

    let headers = content.lines().filter(|line| line.starts_with('>')).count();
    Ok(headers.saturating_sub(1))
}

/// Wrap sequence bytes into lines of at most `width` characters
pub fn wrap_sequence(sequence: &[u8], width: usize) -> String {
    sequence
        .chunks(width.max(1))
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Append one `>name # step # msa_size # version # timestamp` index line.
///
/// The writer is injected so the record layout stays independent of where
/// the index lives; callers own file opening and append mode.
pub fn append_index<W: Write>(
    writer: &mut W,
    name: &str,
    step: &str,
    msa_size: usize,
    version: &str,
    timestamp: &str,
) -> Result<(), String> {
    writeln!(
        writer,
        ">{} # {} # {} # {} # {}",
        name, step, msa_size, version, timestamp
    )
    .map_err(|e| format!("Failed to append index record for '{}': {}", name, e))
}

/// Append one wrapped FASTA entry to the sequence database
pub fn append_sequence<W: Write>(writer: &mut W, name: &str, sequence: &[u8]) -> Result<(), String> {
    writeln!(writer, ">{}\n{}", name, wrap_sequence(sequence, WRAP_WIDTH))
        .map_err(|e| format!("Failed to append sequence record for '{}': {}", name, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_wrap_sequence() {
        assert_eq!(wrap_sequence(b"ACDEFG", 70), "ACDEFG");
        assert_eq!(wrap_sequence(b"ACDEFG", 4), "ACDE\nFG");
        assert_eq!(wrap_sequence(b"", 70), "");
    }

    #[test]
    fn test_append_index_layout() {
        let mut buf = Vec::new();
        append_index(&mut buf, "P12345", "Pfam", 524, "1", "2017-03-01 12:00:00").unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            ">P12345 # Pfam # 524 # 1 # 2017-03-01 12:00:00\n"
        );
    }

    #[test]
    fn test_append_sequence_wraps_at_seventy() {
        let mut buf = Vec::new();
        let sequence = vec![b'A'; 75];
        append_sequence(&mut buf, "P12345", &sequence).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(">P12345"));
        assert_eq!(lines.next().unwrap().len(), 70);
        assert_eq!(lines.next().unwrap().len(), 5);
    }

    #[test]
    fn test_msa_size_counts_homologs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("family.a3m");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, ">query\nACDE\n>hit1\nACDE\n>hit2\nAC-E").unwrap();

        // Handing over the sibling .fasta resolves to the .a3m
        let fasta_path = dir.path().join("family.fasta");
        assert_eq!(msa_size(&fasta_path).unwrap(), 2);
        assert_eq!(msa_size(&path).unwrap(), 2);
    }

    #[test]
    fn test_msa_size_missing_file() {
        let err = msa_size(Path::new("/nonexistent/family.fasta")).unwrap_err();
        assert!(err.contains("Failed to read MSA file"));
    }
}
