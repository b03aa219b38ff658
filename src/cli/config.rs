// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub infile: Option<String>,
    pub outfile: Option<String>,
    pub clusters_out: Option<String>,

    // Core settings
    pub cutoff: Option<f64>,
    pub mode: Option<String>,

    // Performance
    pub threads: Option<usize>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# msaneff.toml - Configuration file for msaneff
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Input alignment file (a3m/FASTA or plain one-sequence-per-line text)
infile = "/path/to/family.a3m"

# Output file for the normalized Neff value
outfile = "neff.txt"

# Output file for per-sequence cluster labels (TSV)
# clusters_out = "clusters.tsv"

# =============================================================================
# CORE SETTINGS
# =============================================================================

# Percent identity cutoff for clustering, in (0, 100]
cutoff = 80.0

# Reporting mode: neff (clusters / sqrt(columns)) or clusters (raw count)
mode = "neff"

# =============================================================================
# PERFORMANCE
# =============================================================================

# Number of threads (omit for auto-detection)
# threads = 8
"#
        .to_string()
    }
}
