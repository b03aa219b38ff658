// seqfilter.rs - FASTA filter/sort tool

use std::path::{Path, PathBuf};

use argh::FromArgs;
use regex::Regex;

use msaneff::data::{extract_sequences, write_sequences, FastaRecord};

const DEFAULT_MIN_LEN: usize = 1;
const DEFAULT_MAX_LEN: usize = 100_000;

#[derive(FromArgs)]
/// seqfilter - filter and sort sequences in a FASTA-family file
struct Args {
    /// input protein sequence file in FASTA format
    #[argh(option, short = 'i')]
    infile: String,

    /// output protein sequence file (default: derived from input name)
    #[argh(option, short = 'o')]
    outfile: Option<String>,

    /// seq: sort sequences by sequence length, clu: sort sequences by
    /// cluster size (taken from the description after the last # sign)
    #[argh(option, short = 's')]
    sort_type: Option<String>,

    /// sort sequences in reversed order
    #[argh(switch, short = 'r')]
    sort_reversed: bool,

    /// minimum sequence length to be included in output (default: 1)
    #[argh(option, short = 'm', default = "DEFAULT_MIN_LEN")]
    min_len: usize,

    /// maximum sequence length to be included in output (default: 100000)
    #[argh(option, short = 'x', default = "DEFAULT_MAX_LEN")]
    max_len: usize,

    /// include only records whose id matches regex pattern
    #[argh(option)]
    include_ids: Option<String>,

    /// exclude records whose id matches regex pattern
    #[argh(option)]
    exclude_ids: Option<String>,
}

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

/// Cluster size carried in the record description after the last `#`
fn cluster_size(record: &FastaRecord) -> Result<i64, String> {
    let desc = record.desc.as_deref().ok_or_else(|| {
        format!(
            "Record '{}' has no description to take a cluster size from",
            record.id
        )
    })?;
    let field = desc.rsplit('#').next().unwrap_or("").trim();
    field.parse::<i64>().map_err(|_| {
        format!(
            "Record '{}': cluster size '{}' is not an integer",
            record.id, field
        )
    })
}

/// Output name derived from the input stem plus suffixes recording every
/// non-default setting
fn derived_outfile(infile: &Path, sort_type: Option<&str>, min_len: usize, max_len: usize) -> PathBuf {
    let stem = infile.with_extension("");
    let mut suffix = String::new();
    if let Some(sort) = sort_type {
        suffix.push_str("_sorted_");
        suffix.push_str(sort);
    }
    if min_len > DEFAULT_MIN_LEN {
        suffix.push_str(&format!("_min{}", min_len));
    }
    if max_len != DEFAULT_MAX_LEN {
        suffix.push_str(&format!("_max{}", max_len));
    }
    PathBuf::from(format!("{}{}.fasta", stem.display(), suffix))
}

fn run_main() -> Result<(), String> {
    let args: Args = argh::from_env();

    let infile = PathBuf::from(&args.infile);
    if !infile.is_file() {
        return Err(format!(
            "Input file '{}' does not exist or is not readable",
            infile.display()
        ));
    }

    let sort_type = match args.sort_type.as_deref() {
        None => None,
        Some(s @ ("seq" | "clu")) => Some(s),
        Some(other) => {
            return Err(format!(
                "Invalid sort type: {}. Use: seq, clu",
                other
            ))
        }
    };

    let include_re = args
        .include_ids
        .as_deref()
        .map(Regex::new)
        .transpose()
        .map_err(|e| format!("Invalid include_ids regex: {}", e))?;
    let exclude_re = args
        .exclude_ids
        .as_deref()
        .map(Regex::new)
        .transpose()
        .map_err(|e| format!("Invalid exclude_ids regex: {}", e))?;

    let records = extract_sequences(&infile)?;
    let total = records.len();

    let mut output: Vec<FastaRecord> = records
        .into_iter()
        .filter(|r| args.min_len <= r.len() && r.len() <= args.max_len)
        .filter(|r| include_re.as_ref().map_or(true, |re| re.is_match(&r.id)))
        .filter(|r| exclude_re.as_ref().map_or(true, |re| !re.is_match(&r.id)))
        .collect();

    if let Some(sort) = sort_type {
        if output.len() > 1 {
            let mut keys: Vec<i64> = Vec::with_capacity(output.len());
            for record in &output {
                let key = match sort {
                    "seq" => record.len() as i64,
                    _ => cluster_size(record)?,
                };
                keys.push(key);
            }
            // Stable in both directions: equal keys keep encounter order
            let mut order: Vec<usize> = (0..output.len()).collect();
            if args.sort_reversed {
                order.sort_by_key(|&i| std::cmp::Reverse(keys[i]));
            } else {
                order.sort_by_key(|&i| keys[i]);
            }
            let mut sorted = Vec::with_capacity(output.len());
            for i in order {
                sorted.push(output[i].clone());
            }
            output = sorted;
        }
    }

    let outfile = match &args.outfile {
        Some(path) => PathBuf::from(path),
        None => derived_outfile(&infile, sort_type, args.min_len, args.max_len),
    };

    write_sequences(&output, &outfile)?;
    println!(
        "✅ Wrote {} of {} sequences to: {}",
        output.len(),
        total,
        outfile.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, desc: Option<&str>, len: usize) -> FastaRecord {
        FastaRecord {
            id: id.to_string(),
            desc: desc.map(|d| d.to_string()),
            sequence: vec![b'A'; len],
        }
    }

    #[test]
    fn test_cluster_size_after_last_hash() {
        let r = record("a", Some("family X # c80 # 42"), 4);
        assert_eq!(cluster_size(&r).unwrap(), 42);
    }

    #[test]
    fn test_cluster_size_requires_description() {
        assert!(cluster_size(&record("a", None, 4)).is_err());
        assert!(cluster_size(&record("a", Some("no number here"), 4)).is_err());
    }

    #[test]
    fn test_derived_outfile_suffixes() {
        let infile = Path::new("/data/family.fasta");
        assert_eq!(
            derived_outfile(infile, None, 1, 100_000),
            PathBuf::from("/data/family.fasta")
        );
        assert_eq!(
            derived_outfile(infile, Some("seq"), 1, 100_000),
            PathBuf::from("/data/family_sorted_seq.fasta")
        );
        assert_eq!(
            derived_outfile(infile, Some("clu"), 30, 500),
            PathBuf::from("/data/family_sorted_clu_min30_max500.fasta")
        );
    }
}
