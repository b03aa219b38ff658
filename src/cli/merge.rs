// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.infile.is_none() {
            self.infile = config.infile;
        }
        if self.outfile.is_none() {
            self.outfile = config.outfile;
        }
        if self.clusters_out.is_none() {
            self.clusters_out = config.clusters_out;
        }

        // Core settings (only override defaults, not explicit CLI values)
        if self.cutoff == 80.0 && config.cutoff.is_some() {
            self.cutoff = config.cutoff.unwrap();
        }
        if self.mode == "neff" && config.mode.is_some() {
            self.mode = config.mode.unwrap();
        }

        // Performance
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
