// Tue Jan 13 2026 - Alex

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use species_name_updater::{
    config::Config,
    input::InputReader,
    orchestration::{BatchStats, ResolutionPipeline},
    output::{ArtifactWriter, RunReport},
    resolver::OfflineResolver,
    ui::{self, Banner, ProgressManager},
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version)]
#[command(about = "Update species names using the NCBI taxonomy database", long_about = None)]
struct Args {
    /// Text file with one species name per line
    input: PathBuf,

    #[arg(short, long)]
    threads: Option<usize>,

    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    endpoint: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Maximum lookups per second across all workers
    #[arg(long)]
    rate_limit: Option<u32>,

    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Write a JSON run report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Skip the network and use fallback names only
    #[arg(long)]
    offline: bool,

    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[arg(short, long)]
    quiet: bool,

    #[arg(long)]
    no_progress: bool,

    #[arg(long)]
    no_banner: bool,

    #[arg(long)]
    no_color: bool,
}

fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    setup_logging(&args.log_level);

    if !args.no_banner && !args.quiet {
        Banner::default().with_color(!args.no_color).print();
    }

    let config = match build_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Invalid configuration: {:#}", e));
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&args, config) {
        ui::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn setup_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn build_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(threads) = args.threads {
        config.workers = threads;
    }
    if let Some(endpoint) = &args.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(timeout) = args.timeout {
        config.request_timeout_secs = timeout;
    }
    if args.rate_limit.is_some() {
        config.rate_limit_per_second = args.rate_limit;
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = Some(dir.clone());
    }

    config.validate()?;
    Ok(config)
}

fn run(args: &Args, config: Config) -> anyhow::Result<()> {
    let start_time = Instant::now();

    if !args.quiet {
        ui::print_info(&format!("Reading species list: {}", args.input.display()));
    }

    let reader = InputReader::new(&config.accepted_extensions);
    let names = reader.read(&args.input)?;

    let progress = if args.quiet || args.no_progress {
        ProgressManager::hidden()
    } else {
        ProgressManager::new()
    };

    let pipeline = if args.offline {
        ResolutionPipeline::new(&config, Arc::new(OfflineResolver))
    } else {
        ResolutionPipeline::from_config(&config)
    }
    .with_progress(progress.create_lookup_progress());

    let batch = pipeline.run(&names)?;

    let writer = ArtifactWriter::new(&config);
    let paths = writer.paths_for(&args.input);
    writer.write(&batch, &paths)?;

    if let Some(report_path) = &args.report {
        RunReport::new(
            &args.input,
            &paths,
            pipeline.resolver_name(),
            config.workers,
            start_time.elapsed().as_secs_f64(),
            &batch,
        )
        .save(report_path)?;
        if !args.quiet {
            ui::print_success(&format!("Report saved to: {}", report_path.display()));
        }
    }

    if !args.quiet {
        print_summary(batch.stats());
    }

    println!("{} Species names updated successfully!", "[+]".green());
    println!("Merged file: {}", paths.mapping.display());
    println!("New names file: {}", paths.resolved.display());

    if !args.quiet {
        println!(
            "{} Finished in {:.2}s",
            "[+]".green(),
            start_time.elapsed().as_secs_f64()
        );
    }

    Ok(())
}

fn print_summary(stats: &BatchStats) {
    println!();
    println!("{}", "Results Summary".cyan().bold());
    println!("{}", "-".repeat(40).cyan());
    println!("  Input lines:     {}", stats.input_lines);
    println!("  Distinct names:  {}", stats.distinct_names.to_string().green());
    println!("  Duplicate lines: {}", stats.duplicate_lines);
    println!("  Resolved:        {}", stats.resolved.to_string().green());

    let fallback = stats.fallback.to_string();
    if stats.fallback > 0 {
        println!("  Fallback:        {}", fallback.yellow());
        for (kind, count) in &stats.fallback_by_kind {
            println!("    {}: {}", kind, count);
        }
    } else {
        println!("  Fallback:        {}", fallback);
    }
    println!();
}
