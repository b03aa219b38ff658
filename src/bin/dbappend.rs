// dbappend.rs - Append sequences to the protein database file pair

use std::fs::OpenOptions;
use std::io::BufWriter;
use std::path::PathBuf;

use argh::FromArgs;

use msaneff::data::extract_sequences;
use msaneff::output::db;

#[derive(FromArgs)]
/// dbappend - append protein records and processing information to a
/// sequence database
struct Args {
    /// file path to a multi-sequence FASTA file
    #[argh(option, short = 'f')]
    fname: String,

    /// processing step information (e.g. CM, Pfam)
    #[argh(option, short = 's')]
    step: String,

    /// processing version (default: 1)
    #[argh(option, short = 'v', default = "String::from(\"1\")")]
    version: String,

    /// database file path; sequences are appended to it and headers with
    /// processing information to `<db_fp>.index`
    #[argh(option, short = 'o')]
    db_fp: String,
}

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn open_append(path: &str) -> Result<BufWriter<std::fs::File>, String> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("Failed to open '{}' for append: {}", path, e))?;
    Ok(BufWriter::new(file))
}

fn run_main() -> Result<(), String> {
    let args: Args = argh::from_env();

    let fname = PathBuf::from(&args.fname);
    if !fname.is_file() {
        return Err(format!(
            "Input file '{}' does not exist or is not readable",
            fname.display()
        ));
    }

    let records = extract_sequences(&fname)?;
    // The alignment size comes from the sibling .a3m of the input file
    let msa_size = db::msa_size(&fname)?;

    let index_path = format!("{}.index", args.db_fp);
    let mut index = open_append(&index_path)?;
    let mut database = open_append(&args.db_fp)?;

    for record in &records {
        let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        db::append_index(
            &mut index,
            &record.id,
            &args.step,
            msa_size,
            &args.version,
            &timestamp,
        )?;
        db::append_sequence(&mut database, &record.id, &record.sequence)?;
    }

    use std::io::Write;
    index
        .flush()
        .map_err(|e| format!("Failed to flush '{}': {}", index_path, e))?;
    database
        .flush()
        .map_err(|e| format!("Failed to flush '{}': {}", args.db_fp, e))?;

    println!(
        "✅ Appended {} records to: {} (+ {})",
        records.len(),
        args.db_fp,
        index_path
    );
    Ok(())
}
