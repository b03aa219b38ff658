// main.rs - CLI entry point

use std::time::Instant;

use msaneff::cli::Config;
use msaneff::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    // Validate all arguments
    let validation = validate_args(&args)?;

    println!("🚀 msaneff v{}", msaneff::VERSION);
    println!(
        "🎯 Cutoff: {}% identity, reporting: {}",
        args.cutoff,
        validation.neff_mode.description()
    );

    // Configure thread pool
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("🧵 Threads: {}", n);
    }

    let total_start = Instant::now();

    // Normalize the alignment
    println!("🧬 Loading alignment from: {}", validation.infile.display());
    let msa = parse_msa_file(&validation.infile)?;
    println!(
        "📊 Alignment: {} sequences × {} columns",
        msa.len(),
        msa.columns()
    );

    // Pairwise distances over the condensed upper triangle
    let distances = DistanceCollection::from_msa(&msa);

    // Identity-threshold clustering
    let clusters = cluster_sequences(&distances, args.cutoff)?;

    // Effective family size in the requested reporting mode
    let value = if msa.is_empty() {
        // No sequences at all: nothing to report but also no columns to
        // normalize by, so short-circuit the estimator
        0.0
    } else {
        effective_family_size(&clusters, msa.columns(), validation.neff_mode)?
    };

    println!("{}", format_summary(args.cutoff, value, validation.neff_mode));

    if let Some(outfile) = &args.outfile {
        let normalized = if msa.is_empty() {
            0.0
        } else {
            effective_family_size(&clusters, msa.columns(), NeffMode::Normalized)?
        };
        write_neff_value(outfile, normalized)?;
        println!("💾 Neff value written to: {}", outfile);
    }

    if let Some(clusters_out) = &args.clusters_out {
        write_cluster_assignments(clusters_out, &msa, &clusters)?;
    }

    println!("⏱️  Completed in {:.2}s", total_start.elapsed().as_secs_f64());
    println!("Task completed.");
    Ok(())
}
