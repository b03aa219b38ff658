// validation.rs - Input validation utilities

use std::path::PathBuf;
use std::str::FromStr;

use crate::cli::args::Args;
use crate::core::NeffMode;

#[derive(Debug)]
pub struct ValidationResult {
    pub infile: PathBuf,
    pub neff_mode: NeffMode,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    let infile = args
        .infile
        .as_ref()
        .ok_or("--infile is required")?;

    let infile = PathBuf::from(infile);
    if !infile.is_file() {
        return Err(format!(
            "Input file '{}' does not exist or is not readable",
            infile.display()
        ));
    }

    // Identity below or at 0% would merge everything; above 100% is meaningless
    if !(args.cutoff > 0.0 && args.cutoff <= 100.0) {
        return Err(format!(
            "Cutoff must be in (0, 100], got {}",
            args.cutoff
        ));
    }

    let neff_mode = NeffMode::from_str(&args.mode)?;

    if let Some(threads) = args.threads {
        if threads == 0 {
            return Err("Thread count must be at least 1".to_string());
        }
    }

    Ok(ValidationResult { infile, neff_mode })
}
