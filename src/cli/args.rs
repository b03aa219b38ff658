// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// msaneff - effective family size calculator for multiple sequence alignments
pub struct Args {
    /// input alignment file (a3m/FASTA or plain one-sequence-per-line text)
    #[argh(option, short = 'i')]
    pub infile: Option<String>,

    /// output file for the normalized Neff value
    #[argh(option, short = 'o')]
    pub outfile: Option<String>,

    /// percent identity cutoff for clustering, in (0, 100] (default: 80)
    #[argh(option, short = 'c', default = "80.0")]
    pub cutoff: f64,

    /// reporting mode: neff, clusters (default: neff)
    #[argh(option, default = "String::from(\"neff\")")]
    pub mode: String,

    /// output file for per-sequence cluster labels (TSV)
    #[argh(option)]
    pub clusters_out: Option<String>,

    /// number of threads (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
